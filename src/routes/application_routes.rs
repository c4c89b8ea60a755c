use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::application_dto::SubmitApplicationPayload, dto::resume_dto::ParseResumePayload,
    error::Result, AppState,
};

/// The careers flow runs this first, then forwards the parsed values to
/// the submission endpoint.
#[axum::debug_handler]
pub async fn parse_resume(
    State(state): State<AppState>,
    Json(payload): Json<ParseResumePayload>,
) -> Result<impl IntoResponse> {
    let parsed = state
        .resume_service
        .parse(&payload.resume_text, &payload.required_skills);
    Ok(Json(parsed))
}

#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    Json(payload): Json<SubmitApplicationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let outcome = state.application_service.submit(payload)?;
    let status = if outcome.is_new_candidate {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome)))
}
