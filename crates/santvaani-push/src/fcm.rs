//! FCM multicast client.
//!
//! Posts `{notification: {title, body}, data, registration_ids}` to the
//! FCM send endpoint and maps the per-token result array. No retry — a
//! failed call is surfaced to the dispatcher as-is.

use async_trait::async_trait;
use santvaani_core::config::FirebaseConfig;
use santvaani_core::error::{Result, SantvaaniError};
use santvaani_core::types::NotificationMessage;
use serde::Deserialize;

use crate::provider::{MulticastOutcome, PushProvider, TokenResult};

/// Per-token entry in the FCM response.
#[derive(Debug, Deserialize)]
struct FcmResult {
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Multicast response body.
#[derive(Debug, Deserialize)]
struct FcmResponse {
    #[serde(default)]
    success: u32,
    #[serde(default)]
    failure: u32,
    #[serde(default)]
    results: Vec<FcmResult>,
}

/// FCM-backed push provider.
pub struct FcmProvider {
    client: reqwest::Client,
    endpoint: String,
    server_key: String,
    project_id: String,
}

impl FcmProvider {
    pub fn new(config: &FirebaseConfig) -> Result<Self> {
        if !config.has_send_credentials() {
            return Err(SantvaaniError::Config(
                "FCM server key not configured (set FIREBASE_SERVER_KEY)".into(),
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            server_key: config.server_key.clone(),
            project_id: config.project_id.clone(),
        })
    }
}

#[async_trait]
impl PushProvider for FcmProvider {
    async fn send_multicast(
        &self,
        message: &NotificationMessage,
        tokens: &[String],
    ) -> Result<MulticastOutcome> {
        let payload = serde_json::json!({
            "notification": {
                "title": message.title,
                "body": message.body,
            },
            "data": message.data,
            "registration_ids": tokens,
        });

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("key={}", self.server_key))
            .json(&payload)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| SantvaaniError::Push(format!("FCM send failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SantvaaniError::Push(format!(
                "FCM API error {status}: {body}"
            )));
        }

        let parsed: FcmResponse = resp
            .json()
            .await
            .map_err(|e| SantvaaniError::Push(format!("FCM response parse: {e}")))?;

        let results = tokens
            .iter()
            .zip(parsed.results.into_iter())
            .map(|(token, r)| TokenResult {
                token: token.clone(),
                error: if r.message_id.is_some() { None } else { r.error },
            })
            .collect();

        tracing::info!(
            project = %self.project_id,
            success = parsed.success,
            failure = parsed.failure,
            "FCM multicast delivered"
        );

        Ok(MulticastOutcome {
            success_count: parsed.success,
            failure_count: parsed.failure,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_server_key() {
        let config = FirebaseConfig::default();
        assert!(FcmProvider::new(&config).is_err());
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "success": 1,
            "failure": 1,
            "results": [
                {"message_id": "0:abc"},
                {"error": "NotRegistered"}
            ]
        }"#;
        let parsed: FcmResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.success, 1);
        assert_eq!(parsed.failure, 1);
        assert_eq!(parsed.results[1].error.as_deref(), Some("NotRegistered"));
    }
}
