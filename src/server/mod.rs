//! Sync service HTTP server
//!
//! Exposes a single health route under the configured API prefix.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Settings;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub fn health_router() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Build the application router with routes mounted under `api_prefix`
pub fn create_app(settings: &Settings) -> Router {
    let prefix = settings.api_prefix.trim_end_matches('/');

    if prefix.is_empty() {
        return health_router();
    }

    let prefix = if prefix.starts_with('/') {
        prefix.to_string()
    } else {
        format!("/{prefix}")
    };
    Router::new().nest(&prefix, health_router())
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(settings: Settings) -> Result<()> {
    let app = create_app(&settings);
    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;

    info!(app = %settings.app_name, address = %address, prefix = %settings.api_prefix, "startup");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(app = %settings.app_name, "shutdown");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_shape() {
        let body = serde_json::to_value(HealthResponse { status: "ok" }).unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }
}
