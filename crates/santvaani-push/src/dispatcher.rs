//! Broadcast dispatcher — sends one message to every registered token.

use std::collections::HashMap;
use std::sync::Arc;

use santvaani_core::error::{Result, SantvaaniError};
use santvaani_core::types::NotificationMessage;
use santvaani_registry::TokenStore;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::provider::PushProvider;

/// Token store handle shared between the gateway and the scheduler.
pub type SharedTokenStore = Arc<Mutex<Box<dyn TokenStore>>>;

/// Result of a broadcast attempt.
#[derive(Debug, Clone, Serialize)]
pub struct SendReport {
    pub success: bool,
    pub success_count: u32,
    pub failure_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendReport {
    pub fn ok(success_count: u32, failure_count: u32) -> Self {
        Self {
            success: true,
            success_count,
            failure_count,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            success_count: 0,
            failure_count: 0,
            error: Some(error.into()),
        }
    }
}

/// Broadcasts notifications to all registered tokens and prunes the
/// ones the provider reports as no longer registered.
pub struct Dispatcher {
    store: SharedTokenStore,
    provider: Arc<dyn PushProvider>,
}

impl Dispatcher {
    pub fn new(store: SharedTokenStore, provider: Arc<dyn PushProvider>) -> Self {
        Self { store, provider }
    }

    /// Handle to the underlying token store.
    pub fn store(&self) -> SharedTokenStore {
        self.store.clone()
    }

    /// Register a device token. Idempotent; rejects empty tokens.
    pub async fn register_token(&self, token: &str, user_id: Option<&str>) -> Result<usize> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SantvaaniError::InvalidInput("token is required".into()));
        }
        let mut store = self.store.lock().await;
        store.add(token, user_id);
        Ok(store.len())
    }

    /// Number of registered tokens.
    pub async fn token_count(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Send a notification to every registered token.
    ///
    /// Fails fast when the registry is empty. On a provider-level error
    /// the registry is left untouched — pruning only happens off a real
    /// per-token response.
    pub async fn send_to_all(
        &self,
        title: &str,
        body: &str,
        data: HashMap<String, String>,
    ) -> SendReport {
        let tokens = {
            let store = self.store.lock().await;
            if store.is_empty() {
                tracing::warn!("Broadcast skipped: no registered tokens");
                return SendReport::failure("No tokens registered");
            }
            store.list()
        };

        let mut message = NotificationMessage::new(title, body);
        message.data = data;

        let outcome = match self.provider.send_multicast(&message, &tokens).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Broadcast failed: {e}");
                return SendReport::failure(e.to_string());
            }
        };

        // Self-healing: drop tokens the provider says are gone.
        let stale: Vec<&str> = outcome
            .results
            .iter()
            .filter(|r| r.is_stale())
            .map(|r| r.token.as_str())
            .collect();
        if !stale.is_empty() {
            let mut store = self.store.lock().await;
            for token in &stale {
                store.remove(token);
            }
            tracing::info!("Pruned {} stale token(s)", stale.len());
        }

        tracing::info!(
            success = outcome.success_count,
            failure = outcome.failure_count,
            "Broadcast '{title}' sent"
        );
        SendReport::ok(outcome.success_count, outcome.failure_count)
    }

    /// Convenience: broadcast a prebuilt message.
    pub async fn dispatch(&self, message: &NotificationMessage) -> SendReport {
        self.send_to_all(&message.title, &message.body, message.data.clone())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MulticastOutcome, TokenResult, TOKEN_NOT_REGISTERED};
    use async_trait::async_trait;
    use santvaani_registry::MemoryTokenStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider double: scripted outcome + call counter.
    struct MockProvider {
        calls: AtomicUsize,
        outcome: fn(&[String]) -> Result<MulticastOutcome>,
    }

    #[async_trait]
    impl PushProvider for MockProvider {
        async fn send_multicast(
            &self,
            _message: &NotificationMessage,
            tokens: &[String],
        ) -> Result<MulticastOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)(tokens)
        }
    }

    fn new_store() -> SharedTokenStore {
        Arc::new(Mutex::new(Box::new(MemoryTokenStore::new()) as Box<dyn TokenStore>))
    }

    fn all_ok(tokens: &[String]) -> Result<MulticastOutcome> {
        Ok(MulticastOutcome {
            success_count: tokens.len() as u32,
            failure_count: 0,
            results: tokens
                .iter()
                .map(|t| TokenResult {
                    token: t.clone(),
                    error: None,
                })
                .collect(),
        })
    }

    #[tokio::test]
    async fn test_register_rejects_empty_token() {
        let dispatcher = Dispatcher::new(
            new_store(),
            Arc::new(MockProvider {
                calls: AtomicUsize::new(0),
                outcome: all_ok,
            }),
        );
        assert!(dispatcher.register_token("  ", None).await.is_err());
        assert!(dispatcher.register_token("", None).await.is_err());
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let dispatcher = Dispatcher::new(
            new_store(),
            Arc::new(MockProvider {
                calls: AtomicUsize::new(0),
                outcome: all_ok,
            }),
        );
        assert_eq!(dispatcher.register_token("tok-1", None).await.unwrap(), 1);
        assert_eq!(dispatcher.register_token("tok-1", None).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_registry_skips_provider() {
        let provider = Arc::new(MockProvider {
            calls: AtomicUsize::new(0),
            outcome: all_ok,
        });
        let dispatcher = Dispatcher::new(new_store(), provider.clone());

        let report = dispatcher.send_to_all("t", "b", HashMap::new()).await;
        assert!(!report.success);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stale_tokens_are_pruned() {
        fn first_is_dead(tokens: &[String]) -> Result<MulticastOutcome> {
            let mut sorted = tokens.to_vec();
            sorted.sort();
            Ok(MulticastOutcome {
                success_count: 1,
                failure_count: 1,
                results: vec![
                    TokenResult {
                        token: sorted[0].clone(),
                        error: Some(TOKEN_NOT_REGISTERED.into()),
                    },
                    TokenResult {
                        token: sorted[1].clone(),
                        error: None,
                    },
                ],
            })
        }

        let dispatcher = Dispatcher::new(
            new_store(),
            Arc::new(MockProvider {
                calls: AtomicUsize::new(0),
                outcome: first_is_dead,
            }),
        );
        dispatcher.register_token("tok-a", None).await.unwrap();
        dispatcher.register_token("tok-b", None).await.unwrap();

        let report = dispatcher.send_to_all("t", "b", HashMap::new()).await;
        assert!(report.success);
        assert_eq!(dispatcher.token_count().await, 1);
    }

    #[tokio::test]
    async fn test_provider_error_leaves_registry_intact() {
        fn total_failure(_tokens: &[String]) -> Result<MulticastOutcome> {
            Err(SantvaaniError::Push("auth expired".into()))
        }

        let dispatcher = Dispatcher::new(
            new_store(),
            Arc::new(MockProvider {
                calls: AtomicUsize::new(0),
                outcome: total_failure,
            }),
        );
        dispatcher.register_token("tok-a", None).await.unwrap();
        dispatcher.register_token("tok-b", None).await.unwrap();

        let report = dispatcher.send_to_all("t", "b", HashMap::new()).await;
        assert!(!report.success);
        assert!(report.error.as_deref().unwrap().contains("auth expired"));
        // No partial pruning on total failure
        assert_eq!(dispatcher.token_count().await, 2);
    }
}
