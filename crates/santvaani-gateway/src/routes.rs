//! API route handlers for the gateway.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::server::AppState;

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "santvaani-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Body of `POST /register-token`.
#[derive(Debug, Deserialize)]
pub struct RegisterTokenRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Client-side registration time; accepted but informational only.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Register a device push token.
pub async fn register_token(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterTokenRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state
        .dispatcher
        .register_token(&body.token, body.user_id.as_deref())
        .await
    {
        Ok(total_tokens) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "total_tokens": total_tokens,
            })),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "success": false,
                "error": e.to_string(),
            })),
        ),
    }
}

/// Body of `POST /test-notification`.
#[derive(Debug, Deserialize)]
pub struct TestNotificationRequest {
    #[serde(default = "default_test_title")]
    pub title: String,
    #[serde(default = "default_test_body")]
    pub body: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn default_test_title() -> String {
    "🙏 SantVaani Test".into()
}
fn default_test_body() -> String {
    "This is a test notification.".into()
}

/// Send a test notification to all registered tokens.
pub async fn test_notification(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TestNotificationRequest>,
) -> Json<serde_json::Value> {
    let mut data = HashMap::from([("type".to_string(), "test".to_string())]);
    if let Some(url) = body.url {
        data.insert("url".into(), url);
    }

    let report = state
        .dispatcher
        .send_to_all(&body.title, &body.body, data)
        .await;
    Json(serde_json::to_value(&report).unwrap_or_default())
}

/// Registry size plus per-job schedule bookkeeping.
pub async fn notification_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let total_tokens = state.dispatcher.token_count().await;
    let jobs = {
        let engine = state.scheduler.lock().await;
        engine.stats()
    };
    Json(serde_json::json!({
        "total_tokens": total_tokens,
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "jobs": jobs,
    }))
}
