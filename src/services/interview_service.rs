use std::sync::Arc;

use uuid::Uuid;

use crate::dto::interview_dto::{ScheduleInterviewPayload, UpdateInterviewPayload};
use crate::error::{Error, Result};
use crate::models::activity::{Activity, ActivityType};
use crate::models::interview::{Interview, InterviewStatus};
use crate::store::TalentStore;
use crate::utils::time;

#[derive(Clone)]
pub struct InterviewService {
    store: Arc<dyn TalentStore>,
}

impl InterviewService {
    pub fn new(store: Arc<dyn TalentStore>) -> Self {
        Self { store }
    }

    /// Books a slot against a stored candidate; candidate and role names
    /// are denormalized onto the interview at scheduling time.
    pub fn schedule(&self, payload: ScheduleInterviewPayload) -> Result<Interview> {
        let candidate = self
            .store
            .get_candidate(payload.candidate_id)?
            .ok_or_else(|| {
                Error::NotFound(format!("candidate {} not found", payload.candidate_id))
            })?;

        let interview = Interview {
            id: Uuid::new_v4(),
            candidate_id: candidate.id,
            candidate_name: candidate.name.clone(),
            role_id: candidate.role_id,
            role_name: candidate.role_name.clone(),
            interview_type: payload.interview_type,
            date: payload.date,
            time: payload.time,
            duration_minutes: payload.duration_minutes,
            location: payload.location,
            status: InterviewStatus::Scheduled,
            feedback: None,
            notes: payload.notes,
        };

        self.store.save_interview(interview.clone())?;
        self.store.append_activity(
            Activity::new(
                ActivityType::InterviewScheduled,
                format!(
                    "{} was scheduled for a {} interview",
                    interview.candidate_name, interview.interview_type
                ),
                time::now(),
            )
            .for_candidate(interview.candidate_id)
            .for_role(interview.role_id)
            .for_interview(interview.id),
        )?;
        self.store.recompute_dashboard_aggregates(time::today())?;

        Ok(interview)
    }

    /// Partial merge for reschedules, status moves and feedback.
    pub fn update(&self, id: Uuid, payload: UpdateInterviewPayload) -> Result<Interview> {
        let mut interview = self
            .store
            .get_interview(id)?
            .ok_or_else(|| Error::NotFound(format!("interview {} not found", id)))?;

        if let Some(interview_type) = payload.interview_type {
            interview.interview_type = interview_type;
        }
        if let Some(date) = payload.date {
            interview.date = date;
        }
        if let Some(slot) = payload.time {
            interview.time = slot;
        }
        if let Some(duration_minutes) = payload.duration_minutes {
            interview.duration_minutes = duration_minutes;
        }
        if let Some(location) = payload.location {
            interview.location = Some(location);
        }
        if let Some(status) = payload.status {
            interview.status = status;
        }
        if let Some(feedback) = payload.feedback {
            interview.feedback = Some(feedback);
        }
        if let Some(notes) = payload.notes {
            interview.notes = Some(notes);
        }

        self.store.save_interview(interview.clone())?;
        self.store.recompute_dashboard_aggregates(time::today())?;

        Ok(interview)
    }

    pub fn list(&self, candidate_id: Option<Uuid>) -> Result<Vec<Interview>> {
        let interviews = self.store.list_interviews()?;
        Ok(match candidate_id {
            Some(candidate_id) => interviews
                .into_iter()
                .filter(|i| i.candidate_id == candidate_id)
                .collect(),
            None => interviews,
        })
    }

    pub fn get(&self, id: Uuid) -> Result<Interview> {
        self.store
            .get_interview(id)?
            .ok_or_else(|| Error::NotFound(format!("interview {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::append_only::AppendOnly;
    use crate::models::candidate::{Candidate, Stage};
    use crate::models::interview::InterviewType;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn candidate() -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            location: None,
            role_id: Uuid::new_v4(),
            role_name: "Product Designer".to_string(),
            stage: Stage::Screening,
            applied_date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
            last_contact_date: None,
            resume: None,
            cover_letter: None,
            notes: AppendOnly::new(),
            skills: vec![],
            experience: vec![],
            education: vec![],
            match_score: Some(0.7),
            application_history: AppendOnly::new(),
        }
    }

    fn slot(candidate_id: Uuid) -> ScheduleInterviewPayload {
        ScheduleInterviewPayload {
            candidate_id,
            interview_type: InterviewType::Video,
            date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
            time: "10:00".to_string(),
            duration_minutes: 45,
            location: None,
            notes: None,
        }
    }

    #[test]
    fn scheduling_denormalizes_names_and_logs() {
        let store = Arc::new(InMemoryStore::new());
        let c = candidate();
        store.save_candidate(c.clone()).unwrap();
        let service = InterviewService::new(store.clone());

        let interview = service.schedule(slot(c.id)).unwrap();
        assert_eq!(interview.candidate_name, "Sam Lee");
        assert_eq!(interview.role_name, "Product Designer");
        assert_eq!(interview.status, InterviewStatus::Scheduled);

        let activities = store.list_activities().unwrap();
        assert_eq!(
            activities[0].description,
            "Sam Lee was scheduled for a video interview"
        );
        assert_eq!(activities[0].interview_id, Some(interview.id));
    }

    #[test]
    fn scheduling_for_a_missing_candidate_fails() {
        let store = Arc::new(InMemoryStore::new());
        let service = InterviewService::new(store);
        let err = service.schedule(slot(Uuid::new_v4())).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn update_merges_status_and_feedback() {
        let store = Arc::new(InMemoryStore::new());
        let c = candidate();
        store.save_candidate(c.clone()).unwrap();
        let service = InterviewService::new(store);

        let interview = service.schedule(slot(c.id)).unwrap();
        let updated = service
            .update(
                interview.id,
                UpdateInterviewPayload {
                    status: Some(InterviewStatus::Completed),
                    feedback: Some("strong portfolio".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, InterviewStatus::Completed);
        assert_eq!(updated.feedback.as_deref(), Some("strong portfolio"));
        assert_eq!(updated.time, "10:00");
    }

    #[test]
    fn list_filters_by_candidate() {
        let store = Arc::new(InMemoryStore::new());
        let first = candidate();
        let mut second = candidate();
        second.id = Uuid::new_v4();
        second.email = "kim@example.com".to_string();
        store.save_candidate(first.clone()).unwrap();
        store.save_candidate(second.clone()).unwrap();
        let service = InterviewService::new(store);

        service.schedule(slot(first.id)).unwrap();
        service.schedule(slot(second.id)).unwrap();

        assert_eq!(service.list(None).unwrap().len(), 2);
        assert_eq!(service.list(Some(first.id)).unwrap().len(), 1);
    }
}
