//! Recording routes
//!
//! ## Endpoints
//! - GET /api/recordings - List the recording index
//! - DELETE /api/recordings - Clear the recording index

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;

use crate::models::ApiResponse;
use crate::state::AppState;

/// Create recording routes
pub fn recordings_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recordings))
        .route("/", delete(clear_recordings))
}

/// GET /api/recordings
#[utoipa::path(
    get,
    path = "/api/recordings",
    tag = "Recordings",
    responses((status = 200, description = "Recording index"))
)]
pub(crate) async fn list_recordings(State(state): State<AppState>) -> impl IntoResponse {
    let recordings = state.recordings.read().await;
    Json(ApiResponse::success(recordings.clone()))
}

/// DELETE /api/recordings
pub(crate) async fn clear_recordings(State(state): State<AppState>) -> impl IntoResponse {
    let mut recordings = state.recordings.write().await;
    let removed = recordings.len();
    recordings.clear();
    Json(ApiResponse::success(json!({ "removed": removed })))
}
