pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, candidate_service::CandidateService,
    interview_service::InterviewService, resume_service::ResumeService,
    role_service::RoleService,
};
use crate::store::TalentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TalentStore>,
    pub resume_service: ResumeService,
    pub application_service: ApplicationService,
    pub candidate_service: CandidateService,
    pub role_service: RoleService,
    pub interview_service: InterviewService,
}

impl AppState {
    pub fn new(store: Arc<dyn TalentStore>) -> Self {
        let resume_service = ResumeService::new();
        let application_service = ApplicationService::new(store.clone());
        let candidate_service = CandidateService::new(store.clone());
        let role_service = RoleService::new(store.clone());
        let interview_service = InterviewService::new(store.clone());

        Self {
            store,
            resume_service,
            application_service,
            candidate_service,
            role_service,
            interview_service,
        }
    }
}
