use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::Candidate;
use crate::models::resume::{Education, Experience};

/// One application submission, already parsed/scored by the caller
/// (the careers flow runs the resume endpoint first and forwards the
/// extracted values here).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitApplicationPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role_id: Uuid,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub match_score: Option<f64>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationOutcome {
    pub candidate: Candidate,
    pub is_new_candidate: bool,
    pub is_match: bool,
}

/// Draft fields for the administrative duplicate sweep.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DuplicateProbePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
}
