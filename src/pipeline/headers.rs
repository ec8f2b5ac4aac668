//! Security response headers
//!
//! Attaches the baseline protective headers and the content security policy
//! to every response that passes the transport gate, static and
//! documentation responses included.

use std::sync::OnceLock;

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Baseline protective headers applied to every response
const BASELINE: &[(&str, &str)] = &[
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-xss-protection", "0"),
    ("x-download-options", "noopen"),
    ("x-dns-prefetch-control", "off"),
    ("x-permitted-cross-domain-policies", "none"),
    ("referrer-policy", "no-referrer"),
];

/// Content security policy: directive name to allowed source tokens.
///
/// Iteration order is declaration order, so the serialized header is stable.
#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    directives: Vec<(&'static str, Vec<&'static str>)>,
}

impl Default for SecurityPolicy {
    /// The shipped policy. Deliberately permissive ('unsafe-eval',
    /// 'unsafe-inline', broad connect targets): the interface evaluates
    /// plugin and config snippets at runtime. Tightening any directive is a
    /// behavior change for the interface, not a cleanup.
    fn default() -> Self {
        Self {
            directives: vec![
                ("default-src", vec!["'unsafe-eval'", "'unsafe-inline'", "'self'"]),
                (
                    "script-src",
                    vec![
                        "'unsafe-eval'",
                        "'unsafe-inline'",
                        "'self'",
                        "https://*.googleapis.com",
                        "blob:",
                        "data:",
                    ],
                ),
                (
                    "child-src",
                    vec!["'unsafe-eval'", "'unsafe-inline'", "'self'", "blob:", "https:"],
                ),
                (
                    "font-src",
                    vec!["'unsafe-eval'", "'unsafe-inline'", "'self'", "data:"],
                ),
                (
                    "connect-src",
                    vec![
                        "ws:",
                        "wss:",
                        "https:",
                        "blob:",
                        "data:",
                        "file:",
                        "filesystem:",
                        "mediastream:",
                        "https://registry.npmjs.org",
                        "https://unpkg.com",
                        "'unsafe-eval'",
                        "'unsafe-inline'",
                        "'self'",
                    ],
                ),
                (
                    "img-src",
                    vec!["'unsafe-eval'", "'unsafe-inline'", "'self'", "data:", "blob:"],
                ),
                (
                    "media-src",
                    vec!["'unsafe-eval'", "'unsafe-inline'", "'self'", "data:", "blob:"],
                ),
            ],
        }
    }
}

impl SecurityPolicy {
    /// Serialize as `directive token token; directive token ...`
    pub fn serialize(&self) -> String {
        self.directives
            .iter()
            .map(|(directive, tokens)| format!("{} {}", directive, tokens.join(" ")))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Directive names in declaration order
    pub fn directive_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.directives.iter().map(|(directive, _)| *directive)
    }
}

/// Attach the baseline headers and the content security policy.
pub async fn security_headers(req: Request, next: Next) -> Response {
    static CSP: OnceLock<HeaderValue> = OnceLock::new();
    let csp = CSP.get_or_init(|| {
        HeaderValue::from_str(&SecurityPolicy::default().serialize())
            .expect("policy tokens are valid header characters")
    });

    let mut res = next.run(req).await;
    let headers = res.headers_mut();
    for (name, value) in BASELINE {
        headers.insert(*name, HeaderValue::from_static(value));
    }
    headers.insert(header::CONTENT_SECURITY_POLICY, csp.clone());
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use http::Request;
    use tower::ServiceExt;

    #[test]
    fn policy_serialization_is_stable_and_complete() {
        let policy = SecurityPolicy::default();
        let serialized = policy.serialize();

        // Each directive appears exactly once, in declaration order
        let mut last_index = 0;
        for directive in policy.directive_names() {
            let needle = format!("{} ", directive);
            let index = serialized.find(&needle).expect("directive missing");
            assert_eq!(serialized.rfind(&needle), Some(index), "{directive} repeated");
            assert!(index >= last_index, "{directive} out of order");
            last_index = index;
        }

        assert_eq!(serialized, SecurityPolicy::default().serialize());
    }

    #[test]
    fn every_directive_allows_self() {
        let policy = SecurityPolicy::default();
        for (directive, tokens) in &policy.directives {
            assert!(tokens.contains(&"'self'"), "{directive} does not allow 'self'");
        }
    }

    #[tokio::test]
    async fn headers_are_attached_to_success_and_error_responses() {
        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .layer(middleware::from_fn(security_headers));

        for (path, expected) in [("/ok", StatusCode::OK), ("/missing", StatusCode::NOT_FOUND)] {
            let resp = app
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(resp.status(), expected);
            assert_eq!(
                resp.headers().get("x-content-type-options").unwrap(),
                "nosniff"
            );
            assert_eq!(resp.headers().get("x-frame-options").unwrap(), "SAMEORIGIN");
            let csp = resp
                .headers()
                .get(header::CONTENT_SECURITY_POLICY)
                .expect("csp header missing")
                .to_str()
                .unwrap();
            assert!(csp.starts_with("default-src 'unsafe-eval' 'unsafe-inline' 'self'"));
        }
    }
}
