//! CamUI Server Library
//!
//! HTTP entry point for the camera management UI.
//!
//! ## Architecture (9 Components)
//!
//! 1. Transport gate - redirects insecure requests to https
//! 2. Security headers - baseline protections + content security policy
//! 3. CORS - permissive cross-origin policy for the web interface
//! 4. Body decoding - JSON/form extraction at the handler boundary
//! 5. Request logging - one line per request when debug is on
//! 6. RestoreUpload - multipart intake for backup restoration
//! 7. WebAPI - feature route tables mounted under /api
//! 8. Docs - swagger UI over the generated API description
//! 9. SPA fallback - static interface bundle with history fallback
//!
//! ## Design Principles
//!
//! - Every request traverses the pipeline stages in a fixed order
//! - Upload state is request-scoped, never shared across requests
//! - Feature routers own their namespace and are mounted exactly once

pub mod app;
pub mod docs;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod spa;
pub mod state;
pub mod upload;
pub mod web_api;

pub use error::{Error, Result};
pub use state::AppState;
