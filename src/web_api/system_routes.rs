//! System routes
//!
//! ## Endpoints
//! - GET /api/system/status - Process status (uptime, version, debug flag)

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

use crate::models::SystemStatus;
use crate::state::AppState;

/// Create system routes
pub fn system_routes() -> Router<AppState> {
    Router::new().route("/status", get(system_status))
}

/// GET /api/system/status
#[utoipa::path(
    get,
    path = "/api/system/status",
    tag = "System",
    responses((status = 200, description = "Process status", body = SystemStatus))
)]
pub(crate) async fn system_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(SystemStatus {
        status: "running".to_string(),
        version: state.config.version.clone(),
        uptime_sec: state.started_at.elapsed().as_secs(),
        debug: state.config.debug,
    })
}
