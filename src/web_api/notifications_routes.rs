//! Notification routes
//!
//! ## Endpoints
//! - GET /api/notifications - List the notification feed
//! - POST /api/notifications - Append a notification
//! - DELETE /api/notifications - Clear the feed
//! - DELETE /api/notifications/:id - Remove one notification

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::{ApiResponse, CreateNotificationRequest, Notification};
use crate::state::AppState;

/// Create notification routes
pub fn notifications_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/", post(create_notification))
        .route("/", delete(clear_notifications))
        .route("/:id", delete(delete_notification))
}

/// GET /api/notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notifications",
    responses((status = 200, description = "Notification feed, newest last"))
)]
pub(crate) async fn list_notifications(State(state): State<AppState>) -> impl IntoResponse {
    let notifications = state.notifications.read().await;
    Json(ApiResponse::success(notifications.clone()))
}

/// POST /api/notifications
pub(crate) async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> impl IntoResponse {
    let notification = Notification {
        id: uuid::Uuid::new_v4().to_string(),
        title: req.title,
        message: req.message,
        camera: req.camera,
        timestamp: chrono::Utc::now(),
    };

    state.notifications.write().await.push(notification.clone());

    (StatusCode::CREATED, Json(ApiResponse::success(notification)))
}

/// DELETE /api/notifications
pub(crate) async fn clear_notifications(State(state): State<AppState>) -> impl IntoResponse {
    let mut notifications = state.notifications.write().await;
    let removed = notifications.len();
    notifications.clear();
    Json(ApiResponse::success(json!({ "removed": removed })))
}

/// DELETE /api/notifications/:id
pub(crate) async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let mut notifications = state.notifications.write().await;
    let before = notifications.len();
    notifications.retain(|n| n.id != id);
    if notifications.len() == before {
        return Err(Error::NotFound(format!("notification {} not found", id)));
    }
    Ok(Json(ApiResponse::success(json!({ "removed": id }))))
}
