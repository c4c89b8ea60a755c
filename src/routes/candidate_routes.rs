use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::application_dto::DuplicateProbePayload,
    dto::candidate_dto::{
        AddNotePayload, CandidateListQuery, CreateCandidatePayload, SetStagePayload,
        UpdateCandidatePayload,
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.list(query.role_id)?;
    Ok(Json(candidates))
}

#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.create(payload)?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(id)?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.update(id, payload)?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn set_candidate_stage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetStagePayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.set_stage(id, payload.stage)?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn add_candidate_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddNotePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let note = state.candidate_service.add_note(id, payload)?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[axum::debug_handler]
pub async fn get_candidate_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let history = state.candidate_service.history(id)?;
    Ok(Json(history))
}

/// Broader than the submission-time identity check on purpose; the
/// result is reviewed by a human, never auto-merged.
#[axum::debug_handler]
pub async fn find_duplicate_candidates(
    State(state): State<AppState>,
    Json(payload): Json<DuplicateProbePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let duplicates = state.application_service.find_potential_duplicates(payload)?;
    Ok(Json(duplicates))
}
