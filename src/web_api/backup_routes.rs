//! Backup routes
//!
//! ## Endpoints
//! - POST /api/backup/restore - Upload a backup archive for restoration
//!
//! The route table receives the [`RestoreUpload`] intake at mount time; the
//! intake materializes the archive, the restore consumer owns it afterwards.

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};

use crate::error::{Error, Result};
use crate::models::{ApiResponse, RestoreSummary};
use crate::state::AppState;
use crate::upload::RestoreUpload;

/// Create backup routes around the given upload intake
pub fn backup_routes(restore_upload: RestoreUpload) -> Router<AppState> {
    Router::new()
        .route("/restore", post(restore))
        // Archive size limits are the restore consumer's call, not ours
        .layer(DefaultBodyLimit::disable())
        .layer(Extension(restore_upload))
}

/// POST /api/backup/restore
#[utoipa::path(
    post,
    path = "/api/backup/restore",
    tag = "Backup",
    responses(
        (status = 200, description = "Archive received", body = RestoreSummary),
        (status = 400, description = "No files in the multipart payload"),
        (status = 500, description = "Upload could not be materialized")
    )
)]
pub(crate) async fn restore(
    Extension(intake): Extension<RestoreUpload>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let session = intake
        .receive(multipart)
        .await?
        .ok_or_else(|| Error::Validation("multipart payload contained no files".to_string()))?;

    tracing::info!(files = session.files.len(), "Backup archive received");

    // The session (directory included) now belongs to the restore consumer.
    Ok(Json(ApiResponse::success(RestoreSummary {
        restored: session.files.len(),
        files: session
            .files
            .into_iter()
            .map(|f| f.original_name)
            .collect(),
    })))
}
