//! Application startup and lifecycle management.

use crate::config::ArtifactConfig;
use crate::handlers;
use crate::services::DbHandle;
use axum::{
    middleware::from_fn,
    routing::{get, patch},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{request_id_middleware, trace_layer};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;

/// Shared application state. The store handle is created once at startup and
/// cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DbHandle,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/artifacts",
            get(handlers::artifacts_by_email).post(handlers::create_artifact),
        )
        .route("/artifacts/all", get(handlers::list_artifacts))
        .route("/artifacts/mostLiked", get(handlers::most_liked_artifacts))
        .route(
            "/artifacts/all/:id",
            get(handlers::get_artifact)
                .patch(handlers::update_artifact)
                .delete(handlers::delete_artifact),
        )
        .route("/artifacts/all/:id/like", patch(handlers::like_artifact))
        .layer(trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Binds the listener (port 0 picks a free port), then tries to create
    /// the store client. A client that cannot be created yet is logged and
    /// retried on the first request that needs it.
    pub async fn build(config: ArtifactConfig) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let db = DbHandle::new(config.mongodb.uri, config.mongodb.database);
        if let Err(e) = db.get().await {
            tracing::error!("MongoDB client unavailable at startup: {}", e);
        }

        Ok(Self {
            port,
            listener,
            state: AppState { db },
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn db(&self) -> &DbHandle {
        &self.state.db
    }

    /// One-time connectivity check. The outcome is logged only; a failure
    /// leaves the listener running.
    pub async fn check_store(&self) -> bool {
        match self.state.db.ping().await {
            Ok(()) => {
                tracing::info!("Pinged deployment, MongoDB connection is healthy");
                true
            }
            Err(e) => {
                tracing::error!("MongoDB connectivity check failed: {}", e);
                false
            }
        }
    }

    /// Serves until SIGINT/SIGTERM, then closes the store client.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let db = self.state.db.clone();
        let router = build_router(self.state);

        let served = axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        db.shutdown().await;
        served
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
