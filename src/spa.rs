//! SPA fallback and static asset serving
//!
//! Requests no route claimed resolve against the pre-built interface
//! bundle. Unmatched page navigations are rewritten to the entry document so
//! client-side routing takes over; missing assets stay missing.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method, Uri},
    response::Response,
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Entry document of the interface bundle
const INDEX: &str = "/index.html";

/// Fallback handler mounted after every route table.
pub async fn spa_fallback(State(state): State<AppState>, mut req: Request) -> Response {
    if wants_entry_document(&req) {
        if state.config.debug {
            tracing::debug!(
                target: "camui_server::request",
                path = %req.uri().path(),
                "Rewriting navigation request to the entry document"
            );
        }
        *req.uri_mut() = Uri::from_static(INDEX);
    }

    match ServeDir::new(&state.config.static_dir).oneshot(req).await {
        Ok(res) => res.map(Body::new),
        Err(infallible) => match infallible {},
    }
}

/// A request looks like a page navigation when it is a GET/HEAD for an
/// extension-less path outside the API and documentation namespaces, from a
/// client that accepts HTML.
fn wants_entry_document(req: &Request) -> bool {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return false;
    }

    let path = req.uri().path();
    if path.starts_with("/api") || path.starts_with("/swagger") || path == "/version" {
        return false;
    }
    if path
        .rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
    {
        return false;
    }

    req.headers()
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::Request;

    fn navigation(path: &str) -> Request<Body> {
        Request::get(path)
            .header(header::ACCEPT, "text/html,application/xhtml+xml")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn page_navigations_are_rewritten() {
        assert!(wants_entry_document(&navigation("/")));
        assert!(wants_entry_document(&navigation("/cameras")));
        assert!(wants_entry_document(&navigation("/settings/profile")));
    }

    #[test]
    fn assets_and_api_paths_are_not_rewritten() {
        assert!(!wants_entry_document(&navigation("/main.js")));
        assert!(!wants_entry_document(&navigation("/assets/logo.svg")));
        assert!(!wants_entry_document(&navigation("/api/cameras")));
        assert!(!wants_entry_document(&navigation("/swagger")));
        assert!(!wants_entry_document(&navigation("/version")));
    }

    #[test]
    fn non_navigation_requests_are_not_rewritten() {
        let post = Request::post("/cameras")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();
        assert!(!wants_entry_document(&post));

        let json_client = Request::get("/cameras")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();
        assert!(!wants_entry_document(&json_client));
    }
}
