//! Santvaani backend binary — wires the token registry, push dispatcher,
//! Panchang provider, scheduler, and HTTP gateway together.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use santvaani_core::error::{Result as SResult, SantvaaniError};
use santvaani_core::types::NotificationMessage;
use santvaani_core::AppConfig;
use santvaani_gateway::AppState;
use santvaani_mailer::{BrevoProvider, Mailer};
use santvaani_panchang::{provider_from_config, PanchangProvider};
use santvaani_push::{Dispatcher, FcmProvider, MulticastOutcome, PushProvider};
use santvaani_registry::{MemoryTokenStore, TokenStore};
use santvaani_scheduler::{spawn_scheduler, SchedulerEngine};
use tokio::sync::Mutex;

#[derive(Parser)]
#[command(name = "santvaani", about = "Santvaani devotional notification backend")]
struct Cli {
    /// Config file path (default: ~/.santvaani/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the scheduler and HTTP gateway (default).
    Serve,
    /// Print today's Panchang snapshot as JSON.
    Panchang {
        /// Date in YYYY-MM-DD (default: today in IST).
        #[arg(long)]
        date: Option<String>,
    },
    /// Send a one-off test notification through a running gateway.
    SendTest {
        #[arg(long, default_value = "🙏 SantVaani Test")]
        title: String,
        #[arg(long, default_value = "This is a test notification.")]
        body: String,
        /// Deep-link URL forwarded in the data payload.
        #[arg(long)]
        url: Option<String>,
        /// Base URL of the running gateway.
        #[arg(long, default_value = "http://127.0.0.1:3001")]
        gateway: String,
    },
    /// Send one milestone email.
    SendEmail {
        /// welcome, day7, or day30
        #[arg(long)]
        kind: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        name: String,
    },
}

/// Stand-in push provider used when no FCM credentials are configured.
/// Every send fails with a clear message; the server still runs so the
/// gateway and Panchang endpoints stay usable in development.
struct UnconfiguredPush;

#[async_trait]
impl PushProvider for UnconfiguredPush {
    async fn send_multicast(
        &self,
        _message: &NotificationMessage,
        _tokens: &[String],
    ) -> SResult<MulticastOutcome> {
        Err(SantvaaniError::Config(
            "FCM not configured (set FIREBASE_SERVER_KEY)".into(),
        ))
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::load().context("loading config")?,
    };
    if cli.config.is_some() {
        config.apply_env();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "santvaani=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Panchang { date } => print_panchang(&config, date).await,
        Command::SendTest {
            title,
            body,
            url,
            gateway,
        } => send_test(&gateway, &title, &body, url).await,
        Command::SendEmail { kind, to, name } => send_email(&config, &kind, &to, &name).await,
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let store = Arc::new(Mutex::new(
        Box::new(MemoryTokenStore::new()) as Box<dyn TokenStore>
    ));

    let push: Arc<dyn PushProvider> = match FcmProvider::new(&config.firebase) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            tracing::warn!("Push disabled: {e}");
            Arc::new(UnconfiguredPush)
        }
    };
    let dispatcher = Arc::new(Dispatcher::new(store, push));

    let panchang = provider_from_config(&config.panchang);
    let scheduler = Arc::new(Mutex::new(SchedulerEngine::new(panchang)));

    tokio::spawn(spawn_scheduler(
        scheduler.clone(),
        dispatcher.clone(),
        config.scheduler.check_interval_secs,
    ));

    let state = AppState {
        dispatcher,
        scheduler,
        start_time: std::time::Instant::now(),
    };
    santvaani_gateway::serve(&config.gateway, state).await?;
    Ok(())
}

async fn print_panchang(config: &AppConfig, date: Option<String>) -> anyhow::Result<()> {
    let date = match date {
        Some(s) => chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .context("date must be YYYY-MM-DD")?,
        None => chrono::Utc::now()
            .with_timezone(&santvaani_scheduler::ist_offset())
            .date_naive(),
    };
    let provider = provider_from_config(&config.panchang);
    let snapshot = provider.snapshot(date).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Body for the gateway's `/test-notification` endpoint.
fn test_notification_payload(title: &str, body: &str, url: Option<String>) -> serde_json::Value {
    let mut payload = serde_json::json!({ "title": title, "body": body });
    if let Some(url) = url {
        payload["url"] = serde_json::Value::String(url);
    }
    payload
}

async fn send_test(
    gateway: &str,
    title: &str,
    body: &str,
    url: Option<String>,
) -> anyhow::Result<()> {
    let endpoint = format!("{}/test-notification", gateway.trim_end_matches('/'));
    let resp = reqwest::Client::new()
        .post(&endpoint)
        .json(&test_notification_payload(title, body, url))
        .timeout(std::time::Duration::from_secs(10))
        .send()
        .await
        .with_context(|| format!("calling {endpoint}"))?;

    let status = resp.status();
    let report: serde_json::Value = resp.json().await.context("reading gateway response")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    anyhow::ensure!(status.is_success(), "gateway returned {status}");
    Ok(())
}

async fn send_email(config: &AppConfig, kind: &str, to: &str, name: &str) -> anyhow::Result<()> {
    let provider = Arc::new(BrevoProvider::new(&config.brevo)?);
    let mailer = Mailer::new(provider)
        .with_broadcast_settings(config.brevo.broadcast_workers, config.brevo.broadcast_pace_ms);

    let report = match kind {
        "welcome" => mailer.send_welcome_email(to, name).await,
        "day7" => mailer.send_day7_email(to, name).await,
        "day30" => mailer.send_day30_email(to, name).await,
        other => anyhow::bail!("unknown email kind '{other}' (welcome, day7, day30)"),
    };

    if report.success {
        println!("Sent (id: {})", report.message_id.unwrap_or_default());
        Ok(())
    } else {
        anyhow::bail!("send failed: {}", report.error.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_carries_title_and_body() {
        let payload = test_notification_payload("🙏 Namaste", "Good morning", None);
        assert_eq!(payload["title"], "🙏 Namaste");
        assert_eq!(payload["body"], "Good morning");
        assert!(payload.get("url").is_none());
    }

    #[test]
    fn test_payload_includes_url_only_when_given() {
        let payload =
            test_notification_payload("t", "b", Some("https://santvaani.com/daily".into()));
        assert_eq!(payload["url"], "https://santvaani.com/daily");
    }
}
