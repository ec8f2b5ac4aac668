//! Config routes
//!
//! ## Endpoints
//! - GET /api/config - Sanitized runtime configuration

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::models::ApiResponse;
use crate::state::AppState;

/// Create config routes
pub fn config_routes() -> Router<AppState> {
    Router::new().route("/", get(get_config))
}

/// GET /api/config
///
/// Filesystem paths stay out of the payload on purpose.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "Config",
    responses((status = 200, description = "Runtime configuration"))
)]
pub(crate) async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "version": state.config.version,
        "debug": state.config.debug,
        "host": state.config.host,
        "port": state.config.port,
    })))
}
