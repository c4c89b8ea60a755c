use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub role_id: Uuid,
    pub role_name: String,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub date: NaiveDate,
    /// Wall-clock slot like "10:00"; kept free-form, the calendar owns parsing.
    pub time: String,
    pub duration_minutes: u32,
    pub location: Option<String>,
    pub status: InterviewStatus,
    pub feedback: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Phone,
    Video,
    Onsite,
    Technical,
}

impl std::fmt::Display for InterviewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InterviewType::Phone => "phone",
            InterviewType::Video => "video",
            InterviewType::Onsite => "onsite",
            InterviewType::Technical => "technical",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}
