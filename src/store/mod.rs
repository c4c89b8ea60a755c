pub mod memory;
pub mod seed;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::Result;
use crate::models::activity::Activity;
use crate::models::candidate::Candidate;
use crate::models::dashboard::DashboardStats;
use crate::models::interview::Interview;
use crate::models::role::Role;

/// Persistence boundary for the hiring data. Implementations must keep
/// insertion order for roles, candidates and interviews, since identity
/// resolution picks the first match. No cross-call isolation is promised:
/// racing submissions for the same identity are last-write-wins, and
/// callers wanting more must serialize per identity.
#[cfg_attr(test, mockall::automock)]
pub trait TalentStore: Send + Sync {
    fn list_roles(&self) -> Result<Vec<Role>>;
    fn get_role(&self, id: Uuid) -> Result<Option<Role>>;
    /// Inserts on a new id, replaces in place on an existing one.
    fn save_role(&self, role: Role) -> Result<()>;

    fn list_candidates(&self) -> Result<Vec<Candidate>>;
    fn get_candidate(&self, id: Uuid) -> Result<Option<Candidate>>;
    fn save_candidate(&self, candidate: Candidate) -> Result<()>;
    /// Returns false when no candidate with that id exists.
    fn delete_candidate(&self, id: Uuid) -> Result<bool>;

    fn list_interviews(&self) -> Result<Vec<Interview>>;
    fn get_interview(&self, id: Uuid) -> Result<Option<Interview>>;
    fn save_interview(&self, interview: Interview) -> Result<()>;

    /// Prepends to the bounded feed and refreshes the dashboard's
    /// recent-activity window.
    fn append_activity(&self, activity: Activity) -> Result<()>;
    /// Newest first.
    fn list_activities(&self) -> Result<Vec<Activity>>;

    fn dashboard(&self) -> Result<DashboardStats>;
    /// Recounts the aggregate figures from current data. `time_to_hire_days`
    /// is a seeded placeholder and is left untouched.
    fn recompute_dashboard_aggregates(&self, today: NaiveDate) -> Result<()>;
}
