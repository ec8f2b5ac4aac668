//! Interactive API documentation
//!
//! Swagger UI bound to the OpenAPI description generated from the route
//! annotations. The description is built once at mount time and shared
//! read-only; the UI toggles are fixed here.

use utoipa::OpenApi;
use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::models;
use crate::web_api;

/// Generated API description
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CamUI API",
        description = "Camera management UI REST API"
    ),
    paths(
        web_api::version,
        web_api::auth_routes::login,
        web_api::backup_routes::restore,
        web_api::cameras_routes::list_cameras,
        web_api::cameras_routes::create_camera,
        web_api::cameras_routes::get_camera,
        web_api::config_routes::get_config,
        web_api::notifications_routes::list_notifications,
        web_api::recordings_routes::list_recordings,
        web_api::settings_routes::get_settings,
        web_api::system_routes::system_status,
        web_api::users_routes::list_users,
    ),
    components(schemas(
        models::VersionResponse,
        models::Camera,
        models::Notification,
        models::CreateNotificationRequest,
        models::Recording,
        models::Subscription,
        models::User,
        models::LoginRequest,
        models::LoginResponse,
        models::RestoreSummary,
        models::SystemStatus,
    )),
    tags(
        (name = "Info", description = "Version information"),
        (name = "Authentication", description = "Session management"),
        (name = "Backup", description = "Backup and restore"),
        (name = "Cameras", description = "Camera registry"),
        (name = "Config", description = "Runtime configuration"),
        (name = "Notifications", description = "Notification feed"),
        (name = "Recordings", description = "Recording index"),
        (name = "Settings", description = "Interface settings"),
        (name = "System", description = "Process status"),
        (name = "Users", description = "User accounts"),
    )
)]
pub struct ApiDoc;

/// Swagger UI mount for /swagger
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger")
        .url("/swagger/openapi.json", ApiDoc::openapi())
        .config(
            Config::default()
                .display_request_duration(true)
                .doc_expansion("none")
                .filter(false)
                .show_extensions(true)
                .show_common_extensions(true)
                .display_operation_id(false),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_description_covers_the_mounted_namespaces() {
        let doc = ApiDoc::openapi();
        for path in [
            "/version",
            "/api/auth/login",
            "/api/backup/restore",
            "/api/cameras",
            "/api/system/status",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
