//! File routes
//!
//! ## Endpoints
//! - GET /api/files/:filename - Serve one file from the storage directory

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::error::{Error, Result};
use crate::state::AppState;

/// Create file routes
pub fn files_routes() -> Router<AppState> {
    Router::new().route("/:filename", get(get_file))
}

/// GET /api/files/:filename
pub(crate) async fn get_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    // The route only captures one segment; still refuse relative escapes.
    if filename.contains("..") {
        return Err(Error::Validation("invalid filename".to_string()));
    }

    let path = state.config.storage_dir.join(&filename);
    let data = tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(format!("file {} not found", filename))
        } else {
            Error::Io(e)
        }
    })?;

    Ok(data.into_response())
}
