use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub location: String,
    pub location_type: LocationType,
    pub description: String,
    pub requirements: String,
    pub responsibilities: String,
    pub employment_type: EmploymentType,
    pub status: RoleStatus,
    pub posted_date: NaiveDate,
    pub updated_date: NaiveDate,
    /// Required skills the scorer matches extracted resume skills against.
    #[serde(default)]
    pub key_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Remote,
    Onsite,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    Active,
    Draft,
    Paused,
    Filled,
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RoleStatus::Active).unwrap(),
            r#""active""#
        );
        let parsed: RoleStatus = serde_json::from_str(r#""paused""#).unwrap();
        assert_eq!(parsed, RoleStatus::Paused);
    }

    #[test]
    fn employment_type_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&EmploymentType::FullTime).unwrap(),
            r#""full-time""#
        );
    }
}
