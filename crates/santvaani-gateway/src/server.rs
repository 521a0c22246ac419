//! HTTP server implementation using Axum.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use santvaani_core::config::GatewayConfig;
use santvaani_core::error::{Result, SantvaaniError};
use santvaani_push::Dispatcher;
use santvaani_scheduler::SchedulerEngine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub scheduler: Arc<tokio::sync::Mutex<SchedulerEngine>>,
    pub start_time: std::time::Instant,
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(super::routes::health_check))
        .route("/register-token", post(super::routes::register_token))
        .route("/test-notification", post(super::routes::test_notification))
        .route("/notification-stats", get(super::routes::notification_stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Bind and serve the gateway.
pub async fn serve(config: &GatewayConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SantvaaniError::Config(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Gateway listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| SantvaaniError::Config(format!("Server error: {e}")))?;
    Ok(())
}
