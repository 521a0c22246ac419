//! Santvaani configuration system.
//!
//! Loaded from a TOML file (~/.santvaani/config.toml by default), with
//! credential fields overridable via environment variables so deployments
//! never have to write secrets to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SantvaaniError};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub firebase: FirebaseConfig,
    #[serde(default)]
    pub brevo: BrevoConfig,
    #[serde(default)]
    pub panchang: PanchangConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl AppConfig {
    /// Load config from the default path, falling back to defaults when
    /// no file exists. Environment overrides are applied in both cases.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SantvaaniError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| SantvaaniError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Get the default config path (~/.santvaani/config.toml).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".santvaani")
            .join("config.toml")
    }

    /// Overlay credentials from environment variables.
    pub fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("FIREBASE_PROJECT_ID") {
            self.firebase.project_id = v;
        }
        if let Ok(v) = std::env::var("FIREBASE_PRIVATE_KEY") {
            // Keys arrive with literal "\n" sequences from most env stores.
            self.firebase.private_key = v.replace("\\n", "\n");
        }
        if let Ok(v) = std::env::var("FIREBASE_CLIENT_EMAIL") {
            self.firebase.client_email = v;
        }
        if let Ok(v) = std::env::var("FIREBASE_SERVER_KEY") {
            self.firebase.server_key = v;
        }
        if let Ok(v) = std::env::var("BREVO_API_KEY") {
            self.brevo.api_key = v;
        }
        if let Ok(v) = std::env::var("PANCHANG_API_KEY") {
            self.panchang.api_key = v;
        }
    }
}

/// Firebase Cloud Messaging service-account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub client_email: String,
    /// Legacy server key used for the multicast send endpoint.
    #[serde(default)]
    pub server_key: String,
    #[serde(default = "default_fcm_endpoint")]
    pub endpoint: String,
}

fn default_fcm_endpoint() -> String {
    "https://fcm.googleapis.com/fcm/send".into()
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            private_key: String::new(),
            client_email: String::new(),
            server_key: String::new(),
            endpoint: default_fcm_endpoint(),
        }
    }
}

impl FirebaseConfig {
    /// True when all service-account fields are present.
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && !self.private_key.is_empty() && !self.client_email.is_empty()
    }

    /// True when the multicast send endpoint can be called.
    pub fn has_send_credentials(&self) -> bool {
        !self.server_key.is_empty()
    }
}

/// Brevo transactional email configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrevoConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    #[serde(default = "default_sender_email")]
    pub sender_email: String,
    /// Max in-flight sends during a broadcast.
    #[serde(default = "default_broadcast_workers")]
    pub broadcast_workers: usize,
    /// Pause between sends per worker, in milliseconds.
    #[serde(default = "default_broadcast_pace_ms")]
    pub broadcast_pace_ms: u64,
}

fn default_sender_name() -> String {
    "SantVaani".into()
}
fn default_sender_email() -> String {
    "noreply@santvaani.com".into()
}
fn default_broadcast_workers() -> usize {
    4
}
fn default_broadcast_pace_ms() -> u64 {
    100
}

impl Default for BrevoConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            sender_name: default_sender_name(),
            sender_email: default_sender_email(),
            broadcast_workers: default_broadcast_workers(),
            broadcast_pace_ms: default_broadcast_pace_ms(),
        }
    }
}

/// Panchang data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanchangConfig {
    /// When set, the remote API provider is constructed; otherwise the
    /// static generator is used.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_panchang_url")]
    pub api_url: String,
}

fn default_panchang_url() -> String {
    "https://json.freeastrologyapi.com/complete-panchang".into()
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_panchang_url(),
        }
    }
}

/// Gateway HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3001
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// How often the engine checks for due jobs, in seconds.
    #[serde(default = "default_check_interval")]
    pub check_interval_secs: u64,
}

fn default_check_interval() -> u64 {
    30
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: default_check_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.gateway.port, 3001);
        assert_eq!(config.brevo.broadcast_workers, 4);
        assert!(!config.firebase.is_configured());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [gateway]
            port = 8080

            [firebase]
            project_id = "santvaani-prod"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.firebase.project_id, "santvaani-prod");
        // Untouched sections keep their defaults
        assert_eq!(config.brevo.sender_email, "noreply@santvaani.com");
        assert_eq!(config.scheduler.check_interval_secs, 30);
    }
}
