//! User routes
//!
//! ## Endpoints
//! - GET /api/users - List user accounts
//! - POST /api/users - Create a user account
//! - GET /api/users/:username - Get one account
//! - DELETE /api/users/:username - Remove an account

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::{ApiResponse, User};
use crate::state::AppState;

/// Create user routes
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/:username", get(get_user))
        .route("/:username", delete(delete_user))
}

/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses((status = 200, description = "All accounts, passwords omitted"))
)]
pub(crate) async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.users.read().await;
    let mut all: Vec<User> = users.values().cloned().collect();
    all.sort_by(|a, b| a.username.cmp(&b.username));
    Json(ApiResponse::success(all))
}

/// POST /api/users
pub(crate) async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse> {
    if user.username.trim().is_empty() {
        return Err(Error::Validation("username must not be empty".to_string()));
    }

    let mut users = state.users.write().await;
    if users.contains_key(&user.username) {
        return Err(Error::Conflict(format!(
            "user {} already exists",
            user.username
        )));
    }
    users.insert(user.username.clone(), user.clone());

    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

/// GET /api/users/:username
pub(crate) async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let users = state.users.read().await;
    let user = users
        .get(&username)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("user {} not found", username)))?;
    Ok(Json(ApiResponse::success(user)))
}

/// DELETE /api/users/:username
pub(crate) async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    if state.users.write().await.remove(&username).is_none() {
        return Err(Error::NotFound(format!("user {} not found", username)));
    }
    Ok(Json(ApiResponse::success(json!({ "removed": username }))))
}
