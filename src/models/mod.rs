pub mod activity;
pub mod append_only;
pub mod candidate;
pub mod dashboard;
pub mod interview;
pub mod resume;
pub mod role;
