pub mod application_service;
pub mod candidate_service;
pub mod identity_service;
pub mod interview_service;
pub mod resume_service;
pub mod role_service;
pub mod scoring_service;
