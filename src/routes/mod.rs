pub mod application_routes;
pub mod candidate_routes;
pub mod dashboard_routes;
pub mod health;
pub mod interview_routes;
pub mod role_routes;
