pub mod application_dto;
pub mod candidate_dto;
pub mod interview_dto;
pub mod resume_dto;
pub mod role_dto;
