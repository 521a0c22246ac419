//! Push provider abstraction — one multicast call, per-token results.

use async_trait::async_trait;
use santvaani_core::error::Result;
use santvaani_core::types::NotificationMessage;

/// Error code the provider returns for a token that is no longer valid.
/// Tokens flagged with this are removed from the registry (self-healing).
pub const TOKEN_NOT_REGISTERED: &str = "messaging/registration-token-not-registered";

/// Per-token delivery result from a multicast call.
#[derive(Debug, Clone)]
pub struct TokenResult {
    pub token: String,
    /// Provider error code, None on success.
    pub error: Option<String>,
}

impl TokenResult {
    /// True when the provider says this token is dead and should be pruned.
    pub fn is_stale(&self) -> bool {
        matches!(
            self.error.as_deref(),
            Some(TOKEN_NOT_REGISTERED) | Some("NotRegistered") | Some("InvalidRegistration")
        )
    }
}

/// Outcome of one multicast send.
#[derive(Debug, Clone, Default)]
pub struct MulticastOutcome {
    pub success_count: u32,
    pub failure_count: u32,
    pub results: Vec<TokenResult>,
}

/// A push messaging backend capable of one-call multicast delivery.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Send `message` to every token in one provider call.
    ///
    /// Returns Err only on a provider-level failure (network, auth) —
    /// individual token failures are reported inside the outcome.
    async fn send_multicast(
        &self,
        message: &NotificationMessage,
        tokens: &[String],
    ) -> Result<MulticastOutcome>;
}
