use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::role_dto::{CreateRolePayload, RoleListQuery, UpdateRolePayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_roles(
    State(state): State<AppState>,
    Query(query): Query<RoleListQuery>,
) -> Result<impl IntoResponse> {
    let roles = state.role_service.list(query.status)?;
    Ok(Json(roles))
}

#[axum::debug_handler]
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let role = state.role_service.get(id)?;
    Ok(Json(role))
}

#[axum::debug_handler]
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<CreateRolePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let role = state.role_service.create(payload)?;
    Ok((StatusCode::CREATED, Json(role)))
}

#[axum::debug_handler]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRolePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let role = state.role_service.update(id, payload)?;
    Ok(Json(role))
}
