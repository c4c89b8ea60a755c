use serde::{Deserialize, Serialize};

use crate::models::activity::Activity;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_roles: usize,
    pub active_roles: usize,
    pub total_candidates: usize,
    pub active_candidates: usize,
    pub interviews_this_week: usize,
    pub time_to_hire_days: u32,
    #[serde(default)]
    pub recent_activity: Vec<Activity>,
}
