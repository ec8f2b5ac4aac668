//! Subscription routes
//!
//! ## Endpoints
//! - GET /api/subscribe/:target - Get a registered push subscription
//! - POST /api/subscribe/:target - Register a push subscription
//! - DELETE /api/subscribe/:target - Remove a push subscription

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::{ApiResponse, Subscription};
use crate::state::AppState;

/// Create subscription routes
pub fn subscribe_routes() -> Router<AppState> {
    Router::new()
        .route("/:target", get(get_subscription))
        .route("/:target", post(register_subscription))
        .route("/:target", delete(remove_subscription))
}

/// GET /api/subscribe/:target
pub(crate) async fn get_subscription(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> Result<impl IntoResponse> {
    let subscriptions = state.subscriptions.read().await;
    let subscription = subscriptions
        .get(&target)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("no subscription for {}", target)))?;
    Ok(Json(ApiResponse::success(subscription)))
}

/// POST /api/subscribe/:target
pub(crate) async fn register_subscription(
    State(state): State<AppState>,
    Path(target): Path<String>,
    Json(subscription): Json<Subscription>,
) -> impl IntoResponse {
    state
        .subscriptions
        .write()
        .await
        .insert(target.clone(), subscription);
    Json(ApiResponse::success(json!({ "subscribed": target })))
}

/// DELETE /api/subscribe/:target
pub(crate) async fn remove_subscription(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> Result<impl IntoResponse> {
    if state.subscriptions.write().await.remove(&target).is_none() {
        return Err(Error::NotFound(format!("no subscription for {}", target)));
    }
    Ok(Json(ApiResponse::success(json!({ "unsubscribed": target }))))
}
