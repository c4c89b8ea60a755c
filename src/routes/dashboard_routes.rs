use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.store.dashboard()?;
    Ok(Json(stats))
}

/// Full retained feed, newest first; the dashboard body carries only the
/// five most recent.
#[axum::debug_handler]
pub async fn list_activities(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let activities = state.store.list_activities()?;
    Ok(Json(activities))
}
