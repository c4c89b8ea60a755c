use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Newest-first retention window for the activity feed.
pub const ACTIVITY_FEED_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_id: Option<Uuid>,
}

impl Activity {
    /// Bare record with no linked entity; attach ids via the builder-ish setters.
    pub fn new(activity_type: ActivityType, description: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity_type,
            description,
            timestamp,
            role_id: None,
            candidate_id: None,
            interview_id: None,
        }
    }

    pub fn for_role(mut self, role_id: Uuid) -> Self {
        self.role_id = Some(role_id);
        self
    }

    pub fn for_candidate(mut self, candidate_id: Uuid) -> Self {
        self.candidate_id = Some(candidate_id);
        self
    }

    pub fn for_interview(mut self, interview_id: Uuid) -> Self {
        self.interview_id = Some(interview_id);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    RoleCreated,
    CandidateApplied,
    InterviewScheduled,
    CandidateStageChanged,
    NoteAdded,
    OfferSent,
    CandidateReapplied,
}

/// Bounded, newest-first log of recent events. Pushing beyond capacity
/// silently drops the oldest entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityFeed(Vec<Activity>);

impl ActivityFeed {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, activity: Activity) {
        self.0.insert(0, activity);
        self.0.truncate(ACTIVITY_FEED_CAPACITY);
    }

    /// Newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn recent(&self, n: usize) -> &[Activity] {
        &self.0[..self.0.len().min(n)]
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
