//! Per-request diagnostic logging
//!
//! One trimmed line per completed request (method, path, status, timing),
//! emitted through the tracing dispatcher so the destination stays a
//! subscriber concern. With debug off the stage is a single boolean check.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Log target so request lines can be filtered independently
const TARGET: &str = "camui_server::request";

pub async fn request_logger(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    if !state.config.debug {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let res = next.run(req).await;

    tracing::debug!(
        target: TARGET,
        "{} {} {} {:.1} ms",
        method,
        path,
        res.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    res
}
