use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::Stage;
use crate::models::resume::{Education, Experience};

/// Manual intake from the hiring side; follows the same create path an
/// application submission takes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role_id: Uuid,
    pub stage: Option<Stage>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub match_score: Option<f64>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

/// Partial merge; absent fields stay as stored. Notes and history are
/// not reachable from here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role_id: Option<Uuid>,
    pub stage: Option<Stage>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub match_score: Option<f64>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStagePayload {
    pub stage: Stage,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddNotePayload {
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub created_by: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateListQuery {
    pub role_id: Option<Uuid>,
}
