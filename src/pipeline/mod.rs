//! Request pipeline stages
//!
//! ## Responsibilities
//!
//! - Transport enforcement (https redirect)
//! - Security response headers + content security policy
//! - Per-request diagnostic logging
//!
//! Every stage is a plain `axum::middleware` function so the order is fixed
//! where the layers are stacked (see [`crate::app::create_app`]) and each
//! stage can be tested against a throwaway router. Within one request the
//! order is: transport gate, CORS, security headers, logging tap, routes.
//! The gate may short-circuit with a redirect; no later stage runs for that
//! request.

pub mod headers;
pub mod logging;
pub mod transport;
