use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::role::{EmploymentType, LocationType, RoleStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRolePayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub location_type: LocationType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub responsibilities: String,
    pub employment_type: EmploymentType,
    /// Defaults to `active` when absent.
    pub status: Option<RoleStatus>,
    #[serde(default)]
    pub key_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRolePayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub department: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub location_type: Option<LocationType>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub status: Option<RoleStatus>,
    pub key_skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleListQuery {
    pub status: Option<RoleStatus>,
}
