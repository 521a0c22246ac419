//! Remote Panchang API client with static fallback.
//!
//! Posts the date to a third-party Panchang endpoint and maps the
//! response onto [`PanchangSnapshot`]. Any failure (network, status,
//! parse) degrades to the static generator so callers always get data.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use santvaani_core::config::PanchangConfig;
use santvaani_core::error::{Result, SantvaaniError};
use serde::Deserialize;

use crate::static_provider::StaticPanchangProvider;
use crate::types::PanchangSnapshot;
use crate::PanchangProvider;

/// Subset of the remote API response we care about.
#[derive(Debug, Deserialize)]
struct RemotePanchang {
    #[serde(default)]
    tithi: Option<String>,
    #[serde(default)]
    nakshatra: Option<String>,
    #[serde(default)]
    yoga: Option<String>,
    #[serde(default)]
    karana: Option<String>,
    #[serde(default)]
    paksha: Option<String>,
}

/// Remote-first Panchang provider.
pub struct RemotePanchangProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    fallback: StaticPanchangProvider,
}

impl RemotePanchangProvider {
    pub fn new(config: &PanchangConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            fallback: StaticPanchangProvider::new(),
        }
    }

    async fn fetch_remote(&self, date: NaiveDate) -> Result<RemotePanchang> {
        let resp = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .json(&serde_json::json!({
                "year": date.year(),
                "month": date.month(),
                "date": date.day(),
                "timezone": 5.5,
            }))
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| SantvaaniError::Panchang(format!("Panchang API: {e}")))?;

        if !resp.status().is_success() {
            return Err(SantvaaniError::Panchang(format!(
                "Panchang API error {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| SantvaaniError::Panchang(format!("Panchang response parse: {e}")))
    }
}

#[async_trait]
impl PanchangProvider for RemotePanchangProvider {
    fn name(&self) -> &str {
        "remote"
    }

    async fn snapshot(&self, date: NaiveDate) -> Result<PanchangSnapshot> {
        // Static snapshot first: it carries the festival list, muhurat,
        // and rahukaal regardless of what the API answers.
        let mut snapshot = self.fallback.snapshot(date).await?;

        match self.fetch_remote(date).await {
            Ok(remote) => {
                if let Some(tithi) = remote.tithi {
                    snapshot.tithi = tithi;
                }
                if let Some(nakshatra) = remote.nakshatra {
                    snapshot.nakshatra = nakshatra;
                }
                if let Some(yoga) = remote.yoga {
                    snapshot.yoga = yoga;
                }
                if let Some(karana) = remote.karana {
                    snapshot.karana = karana;
                }
                if let Some(paksha) = remote.paksha {
                    snapshot.paksha = paksha;
                }
            }
            Err(e) => {
                tracing::warn!("Panchang API unavailable, using static data: {e}");
            }
        }

        Ok(snapshot)
    }
}
