//! Settings routes
//!
//! ## Endpoints
//! - GET /api/settings - The whole settings document
//! - GET /api/settings/:target - One settings section
//! - PATCH /api/settings/:target - Merge changes into one section

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::ApiResponse;
use crate::state::AppState;

/// Create settings routes
pub fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings))
        .route("/:target", get(get_settings_target))
        .route("/:target", patch(patch_settings_target))
}

/// GET /api/settings
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses((status = 200, description = "Settings document"))
)]
pub(crate) async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    let settings = state.settings.read().await;
    Json(ApiResponse::success(settings.clone()))
}

/// GET /api/settings/:target
pub(crate) async fn get_settings_target(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> Result<impl IntoResponse> {
    let settings = state.settings.read().await;
    let section = settings
        .get(&target)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("settings target {} not found", target)))?;
    Ok(Json(ApiResponse::success(section)))
}

/// PATCH /api/settings/:target
///
/// Object payloads merge key-by-key into the section; anything else replaces
/// the section value.
pub(crate) async fn patch_settings_target(
    State(state): State<AppState>,
    Path(target): Path<String>,
    Json(patch): Json<Value>,
) -> Result<impl IntoResponse> {
    let mut settings = state.settings.write().await;
    let section = settings
        .get_mut(&target)
        .ok_or_else(|| Error::NotFound(format!("settings target {} not found", target)))?;

    *section = merge(section.take(), patch);

    Ok(Json(ApiResponse::success(section.clone())))
}

fn merge(current: Value, patch: Value) -> Value {
    match (current, patch) {
        (Value::Object(mut section), Value::Object(patch)) => {
            for (key, value) in patch {
                section.insert(key, value);
            }
            Value::Object(section)
        }
        (_, patch) => patch,
    }
}

#[cfg(test)]
mod tests {
    use super::merge;
    use serde_json::json;

    #[test]
    fn object_patches_merge_key_by_key() {
        let merged = merge(
            json!({"active": true, "remove_after_hours": 3}),
            json!({"active": false}),
        );
        assert_eq!(merged, json!({"active": false, "remove_after_hours": 3}));
    }

    #[test]
    fn non_object_patches_replace_the_section() {
        assert_eq!(merge(json!({"active": true}), json!(42)), json!(42));
        assert_eq!(merge(json!(null), json!({"a": 1})), json!({"a": 1}));
    }
}
