//! WebAPI - REST API Endpoints
//!
//! ## Responsibilities
//!
//! - Mount each feature route table under its /api namespace
//! - Terminal version route
//!
//! Sub-routers are mounted in a fixed order. The restore upload intake is
//! built before the backup mount and handed to it; everything else carries
//! no mount-time extras. Two routers claiming the same namespace is a
//! programmer error and panics at startup.

pub(crate) mod auth_routes;
pub(crate) mod backup_routes;
pub(crate) mod cameras_routes;
pub(crate) mod config_routes;
pub(crate) mod files_routes;
pub(crate) mod notifications_routes;
pub(crate) mod recordings_routes;
pub(crate) mod settings_routes;
pub(crate) mod subscribe_routes;
pub(crate) mod system_routes;
pub(crate) mod users_routes;

use axum::{extract::State, routing::get, Json, Router};

use crate::models::VersionResponse;
use crate::state::AppState;
use crate::upload::RestoreUpload;

/// Create the API router with every feature mounted.
pub fn create_router() -> Router<AppState> {
    // Built before the backup mount - the restore flow depends on it.
    let restore_upload = RestoreUpload::new();

    Router::new()
        .nest("/api/auth", auth_routes::auth_routes())
        .nest("/api/backup", backup_routes::backup_routes(restore_upload))
        .nest("/api/cameras", cameras_routes::cameras_routes())
        .nest("/api/config", config_routes::config_routes())
        .nest("/api/files", files_routes::files_routes())
        .nest(
            "/api/notifications",
            notifications_routes::notifications_routes(),
        )
        .nest("/api/recordings", recordings_routes::recordings_routes())
        .nest("/api/settings", settings_routes::settings_routes())
        .nest("/api/subscribe", subscribe_routes::subscribe_routes())
        .nest("/api/system", system_routes::system_routes())
        .nest("/api/users", users_routes::users_routes())
        .route("/version", get(version))
}

/// GET /version - report the configured application version
#[utoipa::path(
    get,
    path = "/version",
    tag = "Info",
    responses((status = 200, description = "Configured version", body = VersionResponse))
)]
pub(crate) async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: state.config.version.clone(),
    })
}
