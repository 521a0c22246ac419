//! Broadcast sender — one template to many recipients.
//!
//! Each send runs in its own error scope so a single rejected address
//! never aborts the batch. Concurrency is bounded by a semaphore and
//! each send is followed by a short pace delay to stay under provider
//! rate limits.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;

use crate::brevo::EmailProvider;

/// A broadcast recipient.
#[derive(Debug, Clone)]
pub struct Recipient {
    pub email: String,
    pub name: String,
}

/// Outcome for one recipient.
#[derive(Debug, Clone, Serialize)]
pub struct RecipientResult {
    pub email: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a whole broadcast.
#[derive(Debug, Serialize)]
pub struct BroadcastReport {
    pub total: usize,
    pub sent: usize,
    pub failed: usize,
    pub results: Vec<RecipientResult>,
}

/// Send `subject`/`html` to every recipient, substituting each
/// recipient's name into both before sending.
pub async fn send_broadcast(
    provider: Arc<dyn EmailProvider>,
    recipients: Vec<Recipient>,
    subject: &str,
    html: &str,
    workers: usize,
    pace_ms: u64,
) -> BroadcastReport {
    let total = recipients.len();
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let mut handles = Vec::with_capacity(total);

    for recipient in recipients {
        let provider = provider.clone();
        let semaphore = semaphore.clone();
        let subject = subject.replace("{{name}}", &recipient.name);
        let html = html.replace("{{name}}", &recipient.name);

        handles.push(tokio::spawn(async move {
            // Closed only if the report future is dropped; treat as skip.
            let Ok(_permit) = semaphore.acquire().await else {
                return RecipientResult {
                    email: recipient.email,
                    success: false,
                    message_id: None,
                    error: Some("broadcast cancelled".into()),
                };
            };

            let result = match provider
                .send(&recipient.email, &recipient.name, &subject, &html)
                .await
            {
                Ok(message_id) => RecipientResult {
                    email: recipient.email.clone(),
                    success: true,
                    message_id: Some(message_id),
                    error: None,
                },
                Err(e) => {
                    tracing::warn!("Broadcast to {} failed: {e}", recipient.email);
                    RecipientResult {
                        email: recipient.email.clone(),
                        success: false,
                        message_id: None,
                        error: Some(e.to_string()),
                    }
                }
            };

            if pace_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(pace_ms)).await;
            }
            result
        }));
    }

    let mut results = Vec::with_capacity(total);
    for joined in futures::future::join_all(handles).await {
        match joined {
            Ok(result) => results.push(result),
            Err(e) => tracing::error!("Broadcast worker panicked: {e}"),
        }
    }

    let sent = results.iter().filter(|r| r.success).count();
    let report = BroadcastReport {
        total,
        sent,
        failed: results.len() - sent,
        results,
    };
    tracing::info!(
        "Broadcast complete: {}/{} delivered",
        report.sent,
        report.total
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use santvaani_core::error::{Result, SantvaaniError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails for one specific address, succeeds for the rest.
    struct FlakyProvider {
        poison: &'static str,
        sends: AtomicUsize,
    }

    #[async_trait]
    impl EmailProvider for FlakyProvider {
        async fn send(
            &self,
            to_email: &str,
            _to_name: &str,
            subject: &str,
            _html: &str,
        ) -> Result<String> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            assert!(!subject.contains("{{name}}"));
            if to_email == self.poison {
                Err(SantvaaniError::Email("address rejected".into()))
            } else {
                Ok(format!("<msg-{to_email}>"))
            }
        }
    }

    fn recipients() -> Vec<Recipient> {
        vec![
            Recipient {
                email: "a@b.com".into(),
                name: "Asha".into(),
            },
            Recipient {
                email: "bad@b.com".into(),
                name: "Bhola".into(),
            },
            Recipient {
                email: "c@b.com".into(),
                name: "Chitra".into(),
            },
        ]
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_batch() {
        let provider = Arc::new(FlakyProvider {
            poison: "bad@b.com",
            sends: AtomicUsize::new(0),
        });
        let report = send_broadcast(
            provider.clone(),
            recipients(),
            "Namaste {{name}}",
            "<p>Hello {{name}}</p>",
            2,
            0,
        )
        .await;

        assert_eq!(report.total, 3);
        assert_eq!(report.sent, 2);
        assert_eq!(report.failed, 1);
        // Every recipient was attempted despite the failure
        assert_eq!(provider.sends.load(Ordering::SeqCst), 3);

        let failed = report.results.iter().find(|r| !r.success).unwrap();
        assert_eq!(failed.email, "bad@b.com");
        assert!(failed.error.as_deref().unwrap().contains("rejected"));
    }

    #[tokio::test]
    async fn test_empty_broadcast() {
        let provider = Arc::new(FlakyProvider {
            poison: "",
            sends: AtomicUsize::new(0),
        });
        let report = send_broadcast(provider, vec![], "s", "b", 4, 0).await;
        assert_eq!(report.total, 0);
        assert_eq!(report.sent, 0);
    }
}
