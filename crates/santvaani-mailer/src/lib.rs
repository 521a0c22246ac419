//! # Santvaani Mailer
//!
//! Transactional email: three fixed milestone templates (welcome, 7-day,
//! 30-day), a Brevo HTTP client behind an `EmailProvider` trait, and a
//! broadcast sender with bounded concurrency and per-recipient error
//! isolation.

pub mod brevo;
pub mod broadcast;
pub mod templates;

use std::sync::Arc;

use serde::Serialize;

pub use brevo::{BrevoProvider, EmailProvider};
pub use broadcast::{BroadcastReport, Recipient, RecipientResult};
pub use templates::{render_template, EmailTemplate, RenderedEmail, TemplateKind};

/// Result of one transactional send.
#[derive(Debug, Clone, Serialize)]
pub struct EmailReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Mailer facade used by application code.
pub struct Mailer {
    provider: Arc<dyn EmailProvider>,
    /// Broadcast worker-pool width.
    pub broadcast_workers: usize,
    /// Pause between sends per worker, milliseconds.
    pub broadcast_pace_ms: u64,
}

impl Mailer {
    pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
        Self {
            provider,
            broadcast_workers: 4,
            broadcast_pace_ms: 100,
        }
    }

    pub fn with_broadcast_settings(mut self, workers: usize, pace_ms: u64) -> Self {
        self.broadcast_workers = workers.max(1);
        self.broadcast_pace_ms = pace_ms;
        self
    }

    /// Send the signup welcome email.
    pub async fn send_welcome_email(&self, to_email: &str, to_name: &str) -> EmailReport {
        self.send_template(TemplateKind::Welcome, to_email, to_name)
            .await
    }

    /// Send the 7-day milestone email.
    pub async fn send_day7_email(&self, to_email: &str, to_name: &str) -> EmailReport {
        self.send_template(TemplateKind::Day7, to_email, to_name)
            .await
    }

    /// Send the 30-day milestone email.
    pub async fn send_day30_email(&self, to_email: &str, to_name: &str) -> EmailReport {
        self.send_template(TemplateKind::Day30, to_email, to_name)
            .await
    }

    async fn send_template(&self, kind: TemplateKind, to_email: &str, to_name: &str) -> EmailReport {
        let rendered = render_template(kind, to_name);
        match self
            .provider
            .send(to_email, to_name, &rendered.subject, &rendered.html)
            .await
        {
            Ok(message_id) => {
                tracing::info!("{kind:?} email sent to {to_email} (id: {message_id})");
                EmailReport {
                    success: true,
                    message_id: Some(message_id),
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!("{kind:?} email to {to_email} failed: {e}");
                EmailReport {
                    success: false,
                    message_id: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Broadcast one subject/body to many recipients. See [`broadcast`].
    pub async fn send_broadcast(
        &self,
        recipients: Vec<Recipient>,
        subject: &str,
        html: &str,
    ) -> BroadcastReport {
        broadcast::send_broadcast(
            self.provider.clone(),
            recipients,
            subject,
            html,
            self.broadcast_workers,
            self.broadcast_pace_ms,
        )
        .await
    }
}
