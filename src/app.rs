//! Application assembly
//!
//! Builds the complete request pipeline around the API router: transport
//! gate, CORS, security headers, logging tap, documentation and the SPA
//! fallback.

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::docs;
use crate::pipeline;
use crate::spa;
use crate::state::AppState;
use crate::web_api;

/// Build the application router.
///
/// Layer order matters: the transport gate runs first and may answer with a
/// redirect before any other stage sees the request; the logging tap runs
/// innermost so it observes the final status of every dispatched request.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(web_api::create_router())
        .merge(docs::swagger_ui())
        .fallback(spa::spa_fallback)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            pipeline::logging::request_logger,
        ))
        .layer(middleware::from_fn(pipeline::headers::security_headers))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn(pipeline::transport::redirect_insecure))
        .with_state(state)
}
