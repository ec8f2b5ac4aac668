//! Camera routes
//!
//! ## Endpoints
//! - GET /api/cameras - List registered cameras
//! - POST /api/cameras - Register a camera
//! - GET /api/cameras/:name - Get one camera
//! - DELETE /api/cameras/:name - Remove a camera

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::{ApiResponse, Camera};
use crate::state::AppState;

/// Create camera routes
pub fn cameras_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cameras))
        .route("/", post(create_camera))
        .route("/:name", get(get_camera))
        .route("/:name", delete(delete_camera))
}

/// GET /api/cameras
#[utoipa::path(
    get,
    path = "/api/cameras",
    tag = "Cameras",
    responses((status = 200, description = "All registered cameras"))
)]
pub(crate) async fn list_cameras(State(state): State<AppState>) -> impl IntoResponse {
    let cameras = state.cameras.read().await;
    let mut all: Vec<Camera> = cameras.values().cloned().collect();
    all.sort_by(|a, b| a.name.cmp(&b.name));
    Json(ApiResponse::success(all))
}

/// POST /api/cameras
#[utoipa::path(
    post,
    path = "/api/cameras",
    tag = "Cameras",
    request_body = Camera,
    responses(
        (status = 201, description = "Camera registered", body = Camera),
        (status = 409, description = "Camera name already taken")
    )
)]
pub(crate) async fn create_camera(
    State(state): State<AppState>,
    Json(camera): Json<Camera>,
) -> Result<impl IntoResponse> {
    if camera.name.trim().is_empty() {
        return Err(Error::Validation("camera name must not be empty".to_string()));
    }

    let mut cameras = state.cameras.write().await;
    if cameras.contains_key(&camera.name) {
        return Err(Error::Conflict(format!(
            "camera {} already exists",
            camera.name
        )));
    }
    cameras.insert(camera.name.clone(), camera.clone());

    Ok((StatusCode::CREATED, Json(ApiResponse::success(camera))))
}

/// GET /api/cameras/:name
#[utoipa::path(
    get,
    path = "/api/cameras/{name}",
    tag = "Cameras",
    params(("name" = String, Path, description = "Camera name")),
    responses(
        (status = 200, description = "Camera details", body = Camera),
        (status = 404, description = "Unknown camera")
    )
)]
pub(crate) async fn get_camera(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse> {
    let cameras = state.cameras.read().await;
    let camera = cameras
        .get(&name)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("camera {} not found", name)))?;
    Ok(Json(ApiResponse::success(camera)))
}

/// DELETE /api/cameras/:name
pub(crate) async fn delete_camera(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse> {
    let removed = state.cameras.write().await.remove(&name);
    if removed.is_none() {
        return Err(Error::NotFound(format!("camera {} not found", name)));
    }
    Ok(Json(ApiResponse::success(json!({ "removed": name }))))
}
