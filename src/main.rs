//! CamUI Server
//!
//! Main entry point for the camera management UI server.

use camui_server::app::create_app;
use camui_server::state::{AppConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "camui_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();
    tracing::info!(
        host = %config.host,
        port = config.port,
        debug = config.debug,
        static_dir = %config.static_dir.display(),
        storage_dir = %config.storage_dir.display(),
        "Configuration loaded"
    );
    tracing::info!("Starting CamUI Server v{}", config.version);

    let state = AppState::new(config);
    let app = create_app(state.clone());

    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
