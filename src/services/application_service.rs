use std::sync::Arc;

use uuid::Uuid;

use crate::dto::application_dto::{
    ApplicationOutcome, DuplicateProbePayload, SubmitApplicationPayload,
};
use crate::error::{Error, Result};
use crate::models::activity::{Activity, ActivityType};
use crate::models::append_only::AppendOnly;
use crate::models::candidate::{ApplicationHistory, Candidate, Stage};
use crate::models::role::Role;
use crate::services::identity_service;
use crate::store::TalentStore;
use crate::utils::time;

/// Minimum score at which a submission lands in the `applied` stage
/// instead of `no_match`.
pub const MATCH_THRESHOLD: f64 = 0.6;

/// Reconciles incoming applications with the candidate store: one person,
/// one record, however many times they apply.
#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<dyn TalentStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn TalentStore>) -> Self {
        Self { store }
    }

    /// Runs one submission end to end: role lookup, identity resolution,
    /// stage decision, then the create or update path. A missing role
    /// aborts before anything is written.
    pub fn submit(&self, payload: SubmitApplicationPayload) -> Result<ApplicationOutcome> {
        let role = self
            .store
            .get_role(payload.role_id)?
            .ok_or(Error::RoleNotFound(payload.role_id))?;

        let phone = non_empty(payload.phone.clone());
        let candidates = self.store.list_candidates()?;
        let existing =
            identity_service::resolve(&candidates, &payload.email, phone.as_deref()).cloned();

        // An absent score counts as zero, not as neutral.
        let is_match = payload.match_score.unwrap_or(0.0) >= MATCH_THRESHOLD;
        let stage = if is_match {
            Stage::Applied
        } else {
            Stage::NoMatch
        };

        let (candidate, is_new_candidate) = match existing {
            Some(stored) => (self.reapply(stored, &role, stage, payload)?, false),
            None => (self.first_application(&role, stage, payload)?, true),
        };

        self.store.recompute_dashboard_aggregates(time::today())?;

        tracing::info!(
            "Application for {}: {} candidate, match={}",
            role.title,
            if is_new_candidate { "new" } else { "returning" },
            is_match
        );

        Ok(ApplicationOutcome {
            candidate,
            is_new_candidate,
            is_match,
        })
    }

    /// Administrative sweep over the whole store; returns every record
    /// sharing an email, phone or exact name with the draft.
    pub fn find_potential_duplicates(
        &self,
        probe: DuplicateProbePayload,
    ) -> Result<Vec<Candidate>> {
        let candidates = self.store.list_candidates()?;
        let phone = non_empty(probe.phone);
        Ok(identity_service::potential_duplicates(
            &candidates,
            &probe.email,
            phone.as_deref(),
            &probe.name,
        )
        .into_iter()
        .cloned()
        .collect())
    }

    /// Update path: the stored record keeps its id, name, notes and
    /// history; role, stage and extracted signals are overwritten with
    /// this submission's values. Contact fields merge only when the
    /// submission actually provided one.
    fn reapply(
        &self,
        stored: Candidate,
        role: &Role,
        stage: Stage,
        payload: SubmitApplicationPayload,
    ) -> Result<Candidate> {
        let today = time::today();
        let old_stage = stored.stage;

        let mut candidate = stored;
        candidate.role_id = role.id;
        candidate.role_name = role.title.clone();
        candidate.stage = stage;
        candidate.skills = payload.skills;
        candidate.experience = payload.experience;
        candidate.education = payload.education;
        candidate.match_score = payload.match_score;
        candidate.last_contact_date = Some(today);
        if let Some(phone) = non_empty(payload.phone) {
            candidate.phone = Some(phone);
        }
        if let Some(location) = non_empty(payload.location) {
            candidate.location = Some(location);
        }
        if let Some(cover_letter) = non_empty(payload.cover_letter) {
            candidate.cover_letter = Some(cover_letter);
        }
        candidate.application_history.append(ApplicationHistory {
            id: Uuid::new_v4(),
            role_id: role.id,
            role_name: role.title.clone(),
            date: today,
            stage,
            match_score: payload.match_score,
        });

        self.store.save_candidate(candidate.clone())?;

        if stage != old_stage {
            self.store.append_activity(
                Activity::new(
                    ActivityType::CandidateStageChanged,
                    format!("{} was moved to {} stage", candidate.name, stage),
                    time::now(),
                )
                .for_candidate(candidate.id)
                .for_role(role.id),
            )?;
        }
        self.store.append_activity(
            Activity::new(
                ActivityType::CandidateReapplied,
                format!("{} reapplied for {} position", candidate.name, role.title),
                time::now(),
            )
            .for_candidate(candidate.id)
            .for_role(role.id),
        )?;

        Ok(candidate)
    }

    /// Create path: mints the one id this person will keep across every
    /// future application, with a single seed history entry.
    fn first_application(
        &self,
        role: &Role,
        stage: Stage,
        payload: SubmitApplicationPayload,
    ) -> Result<Candidate> {
        let today = time::today();

        let mut history = AppendOnly::new();
        let match_score = payload.match_score;
        history.append(ApplicationHistory {
            id: Uuid::new_v4(),
            role_id: role.id,
            role_name: role.title.clone(),
            date: today,
            stage,
            match_score,
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
            resume: None,
            cover_letter: non_empty(payload.cover_letter),
            notes: AppendOnly::new(),
            skills: payload.skills,
            experience: payload.experience,
            education: payload.education,
            match_score,
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

        Ok(candidate)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
