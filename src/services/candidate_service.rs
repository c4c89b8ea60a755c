use std::sync::Arc;

use uuid::Uuid;

use crate::dto::candidate_dto::{
    AddNotePayload, CreateCandidatePayload, UpdateCandidatePayload,
};
use crate::error::{Error, Result};
use crate::models::activity::{Activity, ActivityType};
use crate::models::append_only::AppendOnly;
use crate::models::candidate::{ApplicationHistory, Candidate, Note, Stage};
use crate::store::TalentStore;
use crate::utils::time;

/// Hiring-side candidate administration: manual intake, corrections,
/// stage moves, notes. The application pipeline itself lives in
/// `ApplicationService`.
#[derive(Clone)]
pub struct CandidateService {
    store: Arc<dyn TalentStore>,
}

impl CandidateService {
    pub fn new(store: Arc<dyn TalentStore>) -> Self {
        Self { store }
    }

    /// Manual intake. Same shape the application create path produces:
    /// fresh id, stamped applied date, single seed history entry.
    pub fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        let role = self
            .store
            .get_role(payload.role_id)?
            .ok_or(Error::RoleNotFound(payload.role_id))?;

        let today = time::today();
        let stage = payload.stage.unwrap_or(Stage::Applied);

        let mut history = AppendOnly::new();
        history.append(ApplicationHistory {
            id: Uuid::new_v4(),
            role_id: role.id,
            role_name: role.title.clone(),
            date: today,
            stage,
            match_score: payload.match_score,
        });

        let candidate = Candidate {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            phone: non_empty(payload.phone),
            location: non_empty(payload.location),
            role_id: role.id,
            role_name: role.title.clone(),
            stage,
            applied_date: today,
            last_contact_date: None,
            resume: non_empty(payload.resume),
            cover_letter: non_empty(payload.cover_letter),
            notes: AppendOnly::new(),
            skills: payload.skills,
            experience: payload.experience,
            education: payload.education,
            match_score: payload.match_score,
            application_history: history,
        };

        self.store.save_candidate(candidate.clone())?;
        self.store.append_activity(
            Activity::new(
                ActivityType::CandidateApplied,
                format!("{} applied for {} position", candidate.name, role.title),
                time::now(),
            )
            .for_candidate(candidate.id)
            .for_role(role.id),
        )?;
        self.store.recompute_dashboard_aggregates(today)?;

        Ok(candidate)
    }

    /// Partial merge. Always refreshes `last_contact_date`; records a
    /// stage-change activity when the stage actually moved. Notes and
    /// history are untouchable from here, and provided-but-empty contact
    /// fields never blank stored values.
    pub fn update(&self, id: Uuid, payload: UpdateCandidatePayload) -> Result<Candidate> {
        let mut candidate = self.require(id)?;
        let old_stage = candidate.stage;
        let today = time::today();

        if let Some(name) = payload.name {
            candidate.name = name;
        }
        if let Some(email) = payload.email {
            candidate.email = email;
        }
        if let Some(phone) = non_empty(payload.phone) {
            candidate.phone = Some(phone);
        }
        if let Some(location) = non_empty(payload.location) {
            candidate.location = Some(location);
        }
        if let Some(role_id) = payload.role_id {
            let role = self
                .store
                .get_role(role_id)?
                .ok_or(Error::RoleNotFound(role_id))?;
            candidate.role_id = role.id;
            candidate.role_name = role.title;
        }
        if let Some(stage) = payload.stage {
            candidate.stage = stage;
        }
        if let Some(skills) = payload.skills {
            candidate.skills = skills;
        }
        if let Some(experience) = payload.experience {
            candidate.experience = experience;
        }
        if let Some(education) = payload.education {
            candidate.education = education;
        }
        if let Some(match_score) = payload.match_score {
            candidate.match_score = Some(match_score);
        }
        if let Some(resume) = non_empty(payload.resume) {
            candidate.resume = Some(resume);
        }
        if let Some(cover_letter) = non_empty(payload.cover_letter) {
            candidate.cover_letter = Some(cover_letter);
        }
        candidate.last_contact_date = Some(today);

        self.store.save_candidate(candidate.clone())?;

        if candidate.stage != old_stage {
            self.store.append_activity(
                Activity::new(
                    ActivityType::CandidateStageChanged,
                    format!("{} was moved to {} stage", candidate.name, candidate.stage),
                    time::now(),
                )
                .for_candidate(candidate.id)
                .for_role(candidate.role_id),
            )?;
        }
        self.store.recompute_dashboard_aggregates(today)?;

        Ok(candidate)
    }

    pub fn set_stage(&self, id: Uuid, stage: Stage) -> Result<Candidate> {
        self.update(
            id,
            UpdateCandidatePayload {
                stage: Some(stage),
                ..Default::default()
            },
        )
    }

    pub fn add_note(&self, candidate_id: Uuid, payload: AddNotePayload) -> Result<Note> {
        let mut candidate = self.require(candidate_id)?;

        let note = Note {
            id: Uuid::new_v4(),
            content: payload.content,
            created_by: payload.created_by,
            created_at: time::now(),
            candidate_id,
        };
        candidate.notes.append(note.clone());

        self.store.save_candidate(candidate.clone())?;
        self.store.append_activity(
            Activity::new(
                ActivityType::NoteAdded,
                format!("Note added for {}", candidate.name),
                time::now(),
            )
            .for_candidate(candidate.id)
            .for_role(candidate.role_id),
        )?;

        Ok(note)
    }

    /// Administrative removal; the pipeline never deletes on its own.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete_candidate(id)? {
            return Err(Error::NotFound(format!("candidate {} not found", id)));
        }
        self.store.recompute_dashboard_aggregates(time::today())?;
        Ok(())
    }

    pub fn list(&self, role_id: Option<Uuid>) -> Result<Vec<Candidate>> {
        let candidates = self.store.list_candidates()?;
        Ok(match role_id {
            Some(role_id) => candidates
                .into_iter()
                .filter(|c| c.role_id == role_id)
                .collect(),
            None => candidates,
        })
    }

    pub fn get(&self, id: Uuid) -> Result<Candidate> {
        self.require(id)
    }

    pub fn history(&self, id: Uuid) -> Result<Vec<ApplicationHistory>> {
        let candidate = self.require(id)?;
        Ok(candidate.application_history.iter().cloned().collect())
    }

    fn require(&self, id: Uuid) -> Result<Candidate> {
        self.store
            .get_candidate(id)?
            .ok_or_else(|| Error::NotFound(format!("candidate {} not found", id)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
