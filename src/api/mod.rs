pub mod handlers;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::sync::Arc;

use crate::config::Config;
use crate::yahoo::rest::YahooRestClient;

/// Shared read-only request state.
pub struct AppState {
    pub provider: YahooRestClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/analyze", get(handlers::analyze))
        .route("/predict", get(handlers::predict))
        .route("/search", get(handlers::search))
        .with_state(state)
}

pub async fn serve(config: &Config) -> Result<()> {
    let provider =
        YahooRestClient::from_config(&config.provider).context("failed to build provider client")?;
    let app = router(Arc::new(AppState { provider }));

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
