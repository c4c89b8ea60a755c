use std::sync::RwLock;

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::activity::{Activity, ActivityFeed};
use crate::models::candidate::Candidate;
use crate::models::dashboard::DashboardStats;
use crate::models::interview::{Interview, InterviewStatus};
use crate::models::role::{Role, RoleStatus};
use crate::store::TalentStore;

/// Placeholder average until enough hires exist to derive a real figure.
const SEED_TIME_TO_HIRE_DAYS: u32 = 18;

const RECENT_ACTIVITY_WINDOW: usize = 5;

#[derive(Debug, Default)]
struct Tables {
    roles: Vec<Role>,
    candidates: Vec<Candidate>,
    interviews: Vec<Interview>,
    activities: ActivityFeed,
    dashboard: DashboardStats,
}

/// Process-local backend. Insertion order doubles as the resolution order
/// for duplicate lookups.
#[derive(Debug)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let mut tables = Tables::default();
        tables.dashboard.time_to_hire_days = SEED_TIME_TO_HIRE_DAYS;
        Self {
            tables: RwLock::new(tables),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| Error::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| Error::Internal("store lock poisoned".to_string()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn upsert_by_id<T>(rows: &mut Vec<T>, row: T, id_of: impl Fn(&T) -> Uuid) {
    let id = id_of(&row);
    match rows.iter_mut().find(|existing| id_of(existing) == id) {
        Some(slot) => *slot = row,
        None => rows.push(row),
    }
}

impl TalentStore for InMemoryStore {
    fn list_roles(&self) -> Result<Vec<Role>> {
        Ok(self.read()?.roles.clone())
    }

    fn get_role(&self, id: Uuid) -> Result<Option<Role>> {
        Ok(self.read()?.roles.iter().find(|r| r.id == id).cloned())
    }

    fn save_role(&self, role: Role) -> Result<()> {
        upsert_by_id(&mut self.write()?.roles, role, |r| r.id);
        Ok(())
    }

    fn list_candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.read()?.candidates.clone())
    }

    fn get_candidate(&self, id: Uuid) -> Result<Option<Candidate>> {
        Ok(self.read()?.candidates.iter().find(|c| c.id == id).cloned())
    }

    fn save_candidate(&self, candidate: Candidate) -> Result<()> {
        upsert_by_id(&mut self.write()?.candidates, candidate, |c| c.id);
        Ok(())
    }

    fn delete_candidate(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.write()?;
        let before = tables.candidates.len();
        tables.candidates.retain(|c| c.id != id);
        Ok(tables.candidates.len() < before)
    }

    fn list_interviews(&self) -> Result<Vec<Interview>> {
        Ok(self.read()?.interviews.clone())
    }

    fn get_interview(&self, id: Uuid) -> Result<Option<Interview>> {
        Ok(self.read()?.interviews.iter().find(|i| i.id == id).cloned())
    }

    fn save_interview(&self, interview: Interview) -> Result<()> {
        upsert_by_id(&mut self.write()?.interviews, interview, |i| i.id);
        Ok(())
    }

    fn append_activity(&self, activity: Activity) -> Result<()> {
        let mut tables = self.write()?;
        tables.activities.push(activity);
        tables.dashboard.recent_activity =
            tables.activities.recent(RECENT_ACTIVITY_WINDOW).to_vec();
        Ok(())
    }

    fn list_activities(&self) -> Result<Vec<Activity>> {
        Ok(self.read()?.activities.as_slice().to_vec())
    }

    fn dashboard(&self) -> Result<DashboardStats> {
        Ok(self.read()?.dashboard.clone())
    }

    fn recompute_dashboard_aggregates(&self, today: NaiveDate) -> Result<()> {
        let mut tables = self.write()?;
        let week_end = today
            .checked_add_days(Days::new(7))
            .unwrap_or(NaiveDate::MAX);

        tables.dashboard.total_roles = tables.roles.len();
        tables.dashboard.active_roles = tables
            .roles
            .iter()
            .filter(|r| r.status == RoleStatus::Active)
            .count();
        tables.dashboard.total_candidates = tables.candidates.len();
        tables.dashboard.active_candidates = tables
            .candidates
            .iter()
            .filter(|c| c.stage.is_active())
            .count();
        tables.dashboard.interviews_this_week = tables
            .interviews
            .iter()
            .filter(|i| {
                i.status != InterviewStatus::Cancelled && i.date >= today && i.date <= week_end
            })
            .count();
        tables.dashboard.recent_activity =
            tables.activities.recent(RECENT_ACTIVITY_WINDOW).to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityType;
    use crate::models::candidate::Stage;
    use chrono::Utc;

    fn role(status: RoleStatus) -> Role {
        Role {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            department: "engineering".to_string(),
            location: "Berlin".to_string(),
            location_type: crate::models::role::LocationType::Hybrid,
            description: "Own the services".to_string(),
            requirements: "- Rust".to_string(),
            responsibilities: "- Ship".to_string(),
            employment_type: crate::models::role::EmploymentType::FullTime,
            status,
            posted_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            updated_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            key_skills: vec![],
        }
    }

    fn candidate(stage: Stage) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: "Dana Fox".to_string(),
            email: "dana@example.com".to_string(),
            phone: None,
            location: None,
            role_id: Uuid::new_v4(),
            role_name: "Backend Engineer".to_string(),
            stage,
            applied_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            last_contact_date: None,
            resume: None,
            cover_letter: None,
            notes: Default::default(),
            skills: vec![],
            experience: vec![],
            education: vec![],
            match_score: None,
            application_history: Default::default(),
        }
    }

    fn interview(date: NaiveDate, status: InterviewStatus) -> Interview {
        Interview {
            id: Uuid::new_v4(),
            candidate_id: Uuid::new_v4(),
            candidate_name: "Dana Fox".to_string(),
            role_id: Uuid::new_v4(),
            role_name: "Backend Engineer".to_string(),
            interview_type: crate::models::interview::InterviewType::Video,
            date,
            time: "10:00".to_string(),
            duration_minutes: 45,
            location: None,
            status,
            feedback: None,
            notes: None,
        }
    }

    fn activity(description: &str) -> Activity {
        Activity::new(
            ActivityType::CandidateApplied,
            description.to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn save_role_replaces_in_place_without_reordering() {
        let store = InMemoryStore::new();
        let first = role(RoleStatus::Active);
        let second = role(RoleStatus::Active);
        store.save_role(first.clone()).unwrap();
        store.save_role(second.clone()).unwrap();

        let mut updated = first.clone();
        updated.title = "Staff Engineer".to_string();
        store.save_role(updated).unwrap();

        let roles = store.list_roles().unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].id, first.id);
        assert_eq!(roles[0].title, "Staff Engineer");
        assert_eq!(roles[1].id, second.id);
    }

    #[test]
    fn delete_candidate_reports_whether_anything_was_removed() {
        let store = InMemoryStore::new();
        let c = candidate(Stage::Applied);
        store.save_candidate(c.clone()).unwrap();

        assert!(store.delete_candidate(c.id).unwrap());
        assert!(!store.delete_candidate(c.id).unwrap());
        assert!(store.list_candidates().unwrap().is_empty());
    }

    #[test]
    fn dashboard_starts_with_seeded_time_to_hire() {
        let store = InMemoryStore::new();
        let stats = store.dashboard().unwrap();
        assert_eq!(stats.time_to_hire_days, SEED_TIME_TO_HIRE_DAYS);
        assert_eq!(stats.active_candidates, 0);
    }

    #[test]
    fn recompute_counts_pipeline_roles_and_totals() {
        let store = InMemoryStore::new();
        store.save_role(role(RoleStatus::Active)).unwrap();
        store.save_role(role(RoleStatus::Draft)).unwrap();
        store.save_candidate(candidate(Stage::Applied)).unwrap();
        store.save_candidate(candidate(Stage::Screening)).unwrap();
        store.save_candidate(candidate(Stage::Hired)).unwrap();
        store.save_candidate(candidate(Stage::Rejected)).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        store.recompute_dashboard_aggregates(today).unwrap();

        let stats = store.dashboard().unwrap();
        assert_eq!(stats.total_roles, 2);
        assert_eq!(stats.active_roles, 1);
        assert_eq!(stats.total_candidates, 4);
        assert_eq!(stats.active_candidates, 2);
        assert_eq!(stats.time_to_hire_days, SEED_TIME_TO_HIRE_DAYS);
    }

    #[test]
    fn interviews_this_week_is_a_seven_day_window_excluding_cancelled() {
        let store = InMemoryStore::new();
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

        store
            .save_interview(interview(today, InterviewStatus::Scheduled))
            .unwrap();
        store
            .save_interview(interview(
                today.checked_add_days(Days::new(7)).unwrap(),
                InterviewStatus::Scheduled,
            ))
            .unwrap();
        store
            .save_interview(interview(
                today.checked_add_days(Days::new(8)).unwrap(),
                InterviewStatus::Scheduled,
            ))
            .unwrap();
        store
            .save_interview(interview(
                today.checked_sub_days(Days::new(1)).unwrap(),
                InterviewStatus::Scheduled,
            ))
            .unwrap();
        store
            .save_interview(interview(today, InterviewStatus::Cancelled))
            .unwrap();

        store.recompute_dashboard_aggregates(today).unwrap();
        assert_eq!(store.dashboard().unwrap().interviews_this_week, 2);
    }

    #[test]
    fn appending_activity_refreshes_the_recent_window() {
        let store = InMemoryStore::new();
        for n in 0..7 {
            store
                .append_activity(activity(&format!("event {n}")))
                .unwrap();
        }

        let stats = store.dashboard().unwrap();
        assert_eq!(stats.recent_activity.len(), RECENT_ACTIVITY_WINDOW);
        assert_eq!(stats.recent_activity[0].description, "event 6");

        let all = store.list_activities().unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].description, "event 6");
        assert_eq!(all[6].description, "event 0");
    }
}
