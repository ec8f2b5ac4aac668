//! Authentication routes
//!
//! ## Endpoints
//! - POST /api/auth/login - Exchange credentials for a session token
//! - GET /api/auth/check - Validate the presented token
//! - POST /api/auth/logout - Revoke the presented token

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::{ApiResponse, LoginRequest, LoginResponse};
use crate::state::AppState;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/check", get(check))
        .route("/logout", post(logout))
}

/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let users = state.users.read().await;
    let valid = users
        .get(&req.username)
        .map(|user| user.password == req.password)
        .unwrap_or(false);
    drop(users);

    if !valid {
        return Err(Error::Unauthorized("invalid credentials".to_string()));
    }

    let token = uuid::Uuid::new_v4().to_string();
    state.sessions.write().await.insert(token.clone());

    Ok(Json(ApiResponse::success(LoginResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
    })))
}

/// GET /api/auth/check
pub(crate) async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let token = bearer_token(&headers)
        .ok_or_else(|| Error::Unauthorized("missing bearer token".to_string()))?;

    if !state.sessions.read().await.contains(token) {
        return Err(Error::Unauthorized("session expired".to_string()));
    }

    Ok(Json(ApiResponse::success(json!({ "status": "valid" }))))
}

/// POST /api/auth/logout
pub(crate) async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.write().await.remove(token);
    }
    Json(ApiResponse::success(json!({ "status": "logged out" })))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
