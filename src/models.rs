//! Shared data models
//!
//! Types shared across route modules, plus the standard response envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Version response for /version
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    pub version: String,
}

/// Registered camera
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Camera {
    /// Unique camera name
    pub name: String,
    /// Stream source (rtsp/http URL)
    pub source: String,
    /// Room the camera is assigned to in the interface
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Notification feed entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Request body for creating a notification
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNotificationRequest {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub camera: Option<String>,
}

/// Recording index entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recording {
    pub id: String,
    pub camera: String,
    /// "Snapshot" or "Video"
    pub kind: String,
    pub filename: String,
    pub timestamp: DateTime<Utc>,
}

/// Web push subscription registered by the interface
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Subscription {
    pub endpoint: String,
    /// Encryption keys as sent by the browser
    pub keys: serde_json::Value,
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub username: String,
    /// Never serialized back to clients
    #[serde(skip_serializing)]
    #[schema(write_only)]
    pub password: String,
    pub permission_level: Vec<String>,
}

impl User {
    /// Default administrator seeded on first boot
    pub fn default_admin() -> Self {
        Self {
            username: "master".to_string(),
            password: "master".to_string(),
            permission_level: vec!["admin".to_string()],
        }
    }
}

/// Login request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response with the issued session token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Summary returned after a backup archive was received
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RestoreSummary {
    /// Number of files materialized for the restore consumer
    pub restored: usize,
    /// Original filenames as uploaded
    pub files: Vec<String>,
}

/// System status response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SystemStatus {
    pub status: String,
    pub version: String,
    pub uptime_sec: u64,
    pub debug: bool,
}
