//! # Santvaani Panchang
//!
//! Panchang (Hindu almanac) data for a given calendar date: tithi,
//! nakshatra, yoga, karana, muhurat windows, and upcoming festivals.
//!
//! Two providers implement the same trait:
//! - [`StaticPanchangProvider`] — deterministic generator over fixed
//!   lookup tables. Not astronomically accurate; a repeatable placeholder
//!   that always answers and needs no credentials.
//! - [`RemotePanchangProvider`] — calls a third-party Panchang API and
//!   falls back to the static generator on any failure.
//!
//! The implementation is chosen once at construction from configuration,
//! never by ad hoc env-var branching at call sites.

pub mod festivals;
pub mod remote;
pub mod static_provider;
pub mod tables;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use santvaani_core::config::PanchangConfig;
use santvaani_core::error::Result;

pub use festivals::upcoming_festivals;
pub use remote::RemotePanchangProvider;
pub use static_provider::StaticPanchangProvider;
pub use types::{Festival, MuhuratWindow, PanchangSnapshot};

/// A source of Panchang data for a calendar date.
#[async_trait]
pub trait PanchangProvider: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Panchang snapshot for the given date.
    async fn snapshot(&self, date: NaiveDate) -> Result<PanchangSnapshot>;
}

/// Build the configured provider: remote when an API key is present,
/// static generator otherwise.
pub fn provider_from_config(config: &PanchangConfig) -> Arc<dyn PanchangProvider> {
    if config.api_key.is_empty() {
        tracing::info!("Panchang: using static generator (no API key configured)");
        Arc::new(StaticPanchangProvider::new())
    } else {
        tracing::info!("Panchang: using remote API with static fallback");
        Arc::new(RemotePanchangProvider::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_selection_follows_api_key() {
        let no_key = PanchangConfig::default();
        assert_eq!(provider_from_config(&no_key).name(), "static");

        let with_key = PanchangConfig {
            api_key: "secret".into(),
            ..PanchangConfig::default()
        };
        assert_eq!(provider_from_config(&with_key).name(), "remote");
    }
}
