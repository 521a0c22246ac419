//! Brevo transactional email client.

use async_trait::async_trait;
use santvaani_core::config::BrevoConfig;
use santvaani_core::error::{Result, SantvaaniError};
use serde::Deserialize;

/// A transactional email backend: one send, one message id.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, to_email: &str, to_name: &str, subject: &str, html: &str)
        -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct BrevoResponse {
    #[serde(rename = "messageId", default)]
    message_id: Option<String>,
}

/// Brevo HTTP API client.
pub struct BrevoProvider {
    client: reqwest::Client,
    api_key: String,
    sender_name: String,
    sender_email: String,
    endpoint: String,
}

impl BrevoProvider {
    pub fn new(config: &BrevoConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(SantvaaniError::Config(
                "Brevo API key not configured (set BREVO_API_KEY)".into(),
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            sender_name: config.sender_name.clone(),
            sender_email: config.sender_email.clone(),
            endpoint: "https://api.brevo.com/v3/smtp/email".into(),
        })
    }
}

#[async_trait]
impl EmailProvider for BrevoProvider {
    async fn send(
        &self,
        to_email: &str,
        to_name: &str,
        subject: &str,
        html: &str,
    ) -> Result<String> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&serde_json::json!({
                "sender": { "name": self.sender_name, "email": self.sender_email },
                "to": [{ "email": to_email, "name": to_name }],
                "subject": subject,
                "htmlContent": html,
            }))
            .timeout(std::time::Duration::from_secs(15))
            .send()
            .await
            .map_err(|e| SantvaaniError::Email(format!("Brevo send failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SantvaaniError::Email(format!(
                "Brevo API error {status}: {body}"
            )));
        }

        let parsed: BrevoResponse = resp
            .json()
            .await
            .map_err(|e| SantvaaniError::Email(format!("Brevo response parse: {e}")))?;

        Ok(parsed.message_id.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        let config = BrevoConfig::default();
        assert!(BrevoProvider::new(&config).is_err());
    }

    #[test]
    fn test_response_parsing() {
        let parsed: BrevoResponse =
            serde_json::from_str(r#"{"messageId": "<202510.123@smtp-relay>"}"#).unwrap();
        assert_eq!(parsed.message_id.as_deref(), Some("<202510.123@smtp-relay>"));
    }
}
