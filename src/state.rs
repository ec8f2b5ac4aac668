//! Application state
//!
//! Holds the runtime configuration and the in-memory registries shared
//! across handlers.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use serde_json::json;
use tokio::sync::RwLock;

use crate::models::{Camera, Notification, Recording, Subscription, User};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable per-request diagnostic logging
    pub debug: bool,
    /// Version string reported by /version
    pub version: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory with the pre-built web interface bundle
    pub static_dir: PathBuf,
    /// Directory served by the files API (recordings, snapshots)
    pub storage_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: std::env::var("DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            version: env!("CARGO_PKG_VERSION").to_string(),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/opt/camui/interface")),
            storage_dir: std::env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/var/lib/camui/storage")),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Process start time, for uptime reporting
    pub started_at: Instant,
    /// Camera registry
    pub cameras: Arc<RwLock<HashMap<String, Camera>>>,
    /// Notification feed (newest last)
    pub notifications: Arc<RwLock<Vec<Notification>>>,
    /// Recording index
    pub recordings: Arc<RwLock<Vec<Recording>>>,
    /// Settings document, keyed by target section
    pub settings: Arc<RwLock<serde_json::Value>>,
    /// Push subscriptions, keyed by target
    pub subscriptions: Arc<RwLock<HashMap<String, Subscription>>>,
    /// User accounts, keyed by username
    pub users: Arc<RwLock<HashMap<String, User>>>,
    /// Active session tokens
    pub sessions: Arc<RwLock<HashSet<String>>>,
}

impl AppState {
    /// Create fresh state around the given config.
    ///
    /// Seeds the default administrator account and an initial settings
    /// document so the interface is usable on first boot.
    pub fn new(config: AppConfig) -> Self {
        let mut users = HashMap::new();
        let admin = User::default_admin();
        users.insert(admin.username.clone(), admin);

        Self {
            config,
            started_at: Instant::now(),
            cameras: Arc::new(RwLock::new(HashMap::new())),
            notifications: Arc::new(RwLock::new(Vec::new())),
            recordings: Arc::new(RwLock::new(Vec::new())),
            settings: Arc::new(RwLock::new(default_settings())),
            subscriptions: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(users)),
            sessions: Arc::new(RwLock::new(HashSet::new())),
        }
    }
}

/// Initial settings document
fn default_settings() -> serde_json::Value {
    json!({
        "general": {
            "theme": "auto",
            "language": "en"
        },
        "cameras": {},
        "notifications": {
            "active": true,
            "remove_after_hours": 3
        },
        "recordings": {
            "active": true,
            "type": "Snapshot",
            "time_span_seconds": 10
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_seeds_admin_account() {
        let state = AppState::new(AppConfig::default());
        let users = state.users.blocking_read();
        assert!(users.contains_key("master"));
    }

    #[test]
    fn default_settings_has_expected_sections() {
        let settings = default_settings();
        for section in ["general", "cameras", "notifications", "recordings"] {
            assert!(settings.get(section).is_some(), "missing section {section}");
        }
    }
}
