use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::interview::{InterviewStatus, InterviewType};

/// Role and names are denormalized from the candidate record at
/// scheduling time; the caller only picks the candidate and the slot.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleInterviewPayload {
    pub candidate_id: Uuid,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub time: String,
    #[validate(range(min = 1))]
    pub duration_minutes: u32,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateInterviewPayload {
    #[serde(rename = "type")]
    pub interview_type: Option<InterviewType>,
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1))]
    pub time: Option<String>,
    #[validate(range(min = 1))]
    pub duration_minutes: Option<u32>,
    pub location: Option<String>,
    pub status: Option<InterviewStatus>,
    pub feedback: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewListQuery {
    pub candidate_id: Option<Uuid>,
}
