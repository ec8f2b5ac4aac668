//! Transport enforcement
//!
//! Insecure requests are answered with a redirect to the https equivalent
//! and never reach a downstream handler.

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Set by a trusted reverse proxy for traffic that arrived over TLS
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Redirect any request that did not arrive over a secure transport.
///
/// Runs before every other stage; the body is never read. Secure requests
/// pass through untouched.
pub async fn redirect_insecure(req: Request, next: Next) -> Response {
    if is_secure(req.headers()) {
        return next.run(req).await;
    }

    let Some(host) = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
    else {
        // No host to rebuild the URL from
        return StatusCode::BAD_REQUEST.into_response();
    };

    Redirect::temporary(&format!("https://{}{}", host, req.uri())).into_response()
}

fn is_secure(headers: &HeaderMap) -> bool {
    headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use http::Request;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn gated_router(hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/probe",
                get(move || {
                    hits.fetch_add(1, Ordering::SeqCst);
                    async { "ok" }
                }),
            )
            .layer(middleware::from_fn(redirect_insecure))
    }

    #[tokio::test]
    async fn insecure_request_is_redirected_without_reaching_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gated_router(hits.clone());

        let resp = app
            .oneshot(
                Request::get("/probe")
                    .header("host", "cam.local")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://cam.local/probe"
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0, "handler must not run");
    }

    #[tokio::test]
    async fn redirect_preserves_path_and_query() {
        let app = gated_router(Arc::new(AtomicUsize::new(0)));

        let resp = app
            .oneshot(
                Request::get("/probe?camera=door&limit=5")
                    .header("host", "cam.local:8081")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://cam.local:8081/probe?camera=door&limit=5"
        );
    }

    #[tokio::test]
    async fn proxied_secure_request_passes_through() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gated_router(hits.clone());

        let resp = app
            .oneshot(
                Request::get("/probe")
                    .header("host", "cam.local")
                    .header("x-forwarded-proto", "https")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn insecure_request_without_host_is_rejected() {
        let app = gated_router(Arc::new(AtomicUsize::new(0)));

        let resp = app
            .oneshot(Request::get("/probe").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
