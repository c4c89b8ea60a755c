use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::interview_dto::{InterviewListQuery, ScheduleInterviewPayload, UpdateInterviewPayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_interviews(
    State(state): State<AppState>,
    Query(query): Query<InterviewListQuery>,
) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list(query.candidate_id)?;
    Ok(Json(interviews))
}

#[axum::debug_handler]
pub async fn schedule_interview(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.schedule(payload)?;
    Ok((StatusCode::CREATED, Json(interview)))
}

#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get(id)?;
    Ok(Json(interview))
}

#[axum::debug_handler]
pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.update(id, payload)?;
    Ok(Json(interview))
}
