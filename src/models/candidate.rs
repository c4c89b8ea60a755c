use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::append_only::AppendOnly;
use crate::models::resume::{Education, Experience};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable across reapplications; identity is resolved by email/phone, not id.
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role_id: Uuid,
    pub role_name: String,
    pub stage: Stage,
    pub applied_date: NaiveDate,
    pub last_contact_date: Option<NaiveDate>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub notes: AppendOnly<Note>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub match_score: Option<f64>,
    #[serde(default)]
    pub application_history: AppendOnly<ApplicationHistory>,
}

/// One point-in-time submission outcome. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationHistory {
    pub id: Uuid,
    pub role_id: Uuid,
    pub role_name: String,
    pub date: NaiveDate,
    pub stage: Stage,
    pub match_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub candidate_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Applied,
    NoMatch,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl Stage {
    /// True while the candidate still counts toward the active pipeline.
    pub fn is_active(&self) -> bool {
        !matches!(self, Stage::Hired | Stage::Rejected)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Applied => "applied",
            Stage::NoMatch => "no_match",
            Stage::Screening => "screening",
            Stage::Interview => "interview",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
            Stage::Rejected => "rejected",
        };
        f.write_str(s)
    }
}
