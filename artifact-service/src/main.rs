use artifact_service::config::ArtifactConfig;
use artifact_service::handlers::health::SERVICE_NAME;
use artifact_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Pick up RUST_LOG from .env before the subscriber is installed
    dotenvy::dotenv().ok();
    init_tracing(SERVICE_NAME, "info");

    let config = ArtifactConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!(port = app.port(), "port is running on {}", app.port());

    app.check_store().await;

    app.run_until_stopped().await
}
