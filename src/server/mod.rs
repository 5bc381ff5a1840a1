//! HTTP surface for the clustering core.
//!
//! API endpoints:
//! - GET  /health               - liveness probe
//! - GET  /api/test             - endpoint listing
//! - POST /api/cluster/location - `{users, max_distance}` -> cluster envelope
//! - POST /api/cluster/interest - `{users, n_clusters}` -> cluster envelope
//! - POST /api/similar          - `{interests, users, top_n}` -> ranked ids

mod handlers;


use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use handlers::{InterestRequest, LocationRequest, SimilarRequest, SimilarResponse};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Where the service listens
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Build the application router with CORS and request tracing
pub fn router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/test", get(handlers::describe))
        .route("/api/cluster/location", post(handlers::cluster_location))
        .route("/api/cluster/interest", post(handlers::cluster_interest))
        .route("/api/similar", post(handlers::similar_users))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve until Ctrl-C
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    let addr = listener.local_addr().context("Failed to read bound address")?;
    info!(%addr, "clustering service listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("clustering service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
