//! # Santvaani Token Registry
//!
//! Tracks device push tokens for broadcast delivery. The store is an
//! explicit trait so the dispatcher takes it as an injected dependency
//! rather than reaching for a module-level singleton.
//!
//! The default implementation is in-memory and volatile: a process
//! restart loses all tokens, and clients re-register on next launch.
//! There is deliberately no persistence layer.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Metadata kept alongside each registered token.
#[derive(Debug, Clone)]
pub struct TokenEntry {
    pub registered_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// Optional app user id supplied at registration.
    pub user_id: Option<String>,
}

/// Storage abstraction for device push tokens.
///
/// Membership is a set: adding an existing token is a no-op for size
/// (it only refreshes `last_seen`).
pub trait TokenStore: Send + Sync {
    /// Insert a token. Returns true if the token was newly added.
    fn add(&mut self, token: &str, user_id: Option<&str>) -> bool;
    /// Remove a token. Returns true if it was present.
    fn remove(&mut self, token: &str) -> bool;
    /// Check membership.
    fn contains(&self, token: &str) -> bool;
    /// Snapshot of all registered tokens.
    fn list(&self) -> Vec<String>;
    /// Number of registered tokens.
    fn len(&self) -> usize;
    /// True when no tokens are registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory token store — the production default.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: HashMap<String, TokenEntry>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the metadata for a token.
    pub fn entry(&self, token: &str) -> Option<&TokenEntry> {
        self.tokens.get(token)
    }
}

impl TokenStore for MemoryTokenStore {
    fn add(&mut self, token: &str, user_id: Option<&str>) -> bool {
        let now = Utc::now();
        match self.tokens.get_mut(token) {
            Some(entry) => {
                entry.last_seen = now;
                if let Some(uid) = user_id {
                    entry.user_id = Some(uid.to_string());
                }
                false
            }
            None => {
                self.tokens.insert(
                    token.to_string(),
                    TokenEntry {
                        registered_at: now,
                        last_seen: now,
                        user_id: user_id.map(String::from),
                    },
                );
                tracing::info!("Token registered (total: {})", self.tokens.len());
                true
            }
        }
    }

    fn remove(&mut self, token: &str) -> bool {
        let removed = self.tokens.remove(token).is_some();
        if removed {
            tracing::info!("Stale token pruned (total: {})", self.tokens.len());
        }
        removed
    }

    fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    fn list(&self) -> Vec<String> {
        self.tokens.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut store = MemoryTokenStore::new();
        assert!(store.add("tok-1", None));
        assert!(!store.add("tok-1", None));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_re_add_refreshes_user_id() {
        let mut store = MemoryTokenStore::new();
        store.add("tok-1", None);
        store.add("tok-1", Some("user-42"));
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.entry("tok-1").unwrap().user_id.as_deref(),
            Some("user-42")
        );
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryTokenStore::new();
        store.add("tok-1", None);
        assert!(store.remove("tok-1"));
        assert!(!store.remove("tok-1"));
        assert!(store.is_empty());
    }
}
