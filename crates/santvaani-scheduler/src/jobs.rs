//! Message builders for the scheduled jobs.
//!
//! Each builder is a function of the injected current time and the
//! Panchang provider, and always returns a message: any provider error
//! is logged and replaced by the job's static fallback.

use chrono::{DateTime, FixedOffset};
use santvaani_core::types::NotificationMessage;
use santvaani_panchang::PanchangProvider;

/// The three fixed jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Morning,
    Evening,
    Weekly,
}

impl JobKind {
    pub fn name(&self) -> &'static str {
        match self {
            JobKind::Morning => "morning",
            JobKind::Evening => "evening",
            JobKind::Weekly => "weekly",
        }
    }

    /// IST cron schedule for this job.
    pub fn cron(&self) -> &'static str {
        match self {
            JobKind::Morning => "0 6 * * *",
            JobKind::Evening => "0 18 * * *",
            JobKind::Weekly => "0 9 * * 1",
        }
    }

    /// Build this job's message for the given (IST) time.
    pub async fn build(
        &self,
        now: DateTime<FixedOffset>,
        panchang: &dyn PanchangProvider,
    ) -> NotificationMessage {
        match self {
            JobKind::Morning => morning_message(now, panchang).await,
            JobKind::Evening => evening_message(),
            JobKind::Weekly => weekly_message(now, panchang).await,
        }
    }
}

/// Morning blessing (06:00 IST) — references the day's tithi when the
/// Panchang source answers, otherwise a generic greeting.
pub async fn morning_message(
    now: DateTime<FixedOffset>,
    panchang: &dyn PanchangProvider,
) -> NotificationMessage {
    let body = match panchang.snapshot(now.date_naive()).await {
        Ok(snapshot) => {
            let auspicious = if snapshot.is_auspicious_day {
                "Today is an auspicious day — a good time for new beginnings. 🙏"
            } else {
                "May your day be filled with peace and devotion. 🙏"
            };
            format!(
                "Aaj ki tithi: {} ({} Paksha). {}",
                snapshot.tithi, snapshot.paksha, auspicious
            )
        }
        Err(e) => {
            tracing::warn!("Morning job: Panchang unavailable, using fallback: {e}");
            "Jai Shri Ram! Wishing you a blessed morning filled with devotion. 🙏".to_string()
        }
    };

    NotificationMessage::new("🌅 Good Morning from SantVaani", body)
        .with_data("type", "morning_blessing")
        .with_data("url", "/daily-guide")
}

/// Evening reflection (18:00 IST) — fixed message, no branching.
pub fn evening_message() -> NotificationMessage {
    NotificationMessage::new(
        "🪔 Evening Aarti Reminder",
        "Light a diya, offer your gratitude, and end the day with a calm heart.",
    )
    .with_data("type", "evening_reminder")
    .with_data("url", "/bhajans")
}

/// Weekly festival alert (Monday 09:00 IST) — announces the nearest
/// festival 1-3 days away, else a generic weekly wisdom message.
pub async fn weekly_message(
    now: DateTime<FixedOffset>,
    panchang: &dyn PanchangProvider,
) -> NotificationMessage {
    match panchang.snapshot(now.date_naive()).await {
        Ok(snapshot) => {
            // Festival list is sorted ascending by proximity.
            let imminent = snapshot
                .festivals
                .iter()
                .find(|f| (1..=3).contains(&f.days_until));
            match imminent {
                Some(festival) => {
                    let when = if festival.days_until == 1 {
                        "tomorrow".to_string()
                    } else {
                        format!("in {} days", festival.days_until)
                    };
                    NotificationMessage::new(
                        format!("🎉 {} is {when}!", festival.name),
                        format!("{} Prepare for the celebrations. 🪔", festival.description),
                    )
                    .with_data("type", "festival_alert")
                    .with_data("url", "/festivals")
                }
                None => weekly_wisdom(),
            }
        }
        Err(e) => {
            tracing::warn!("Weekly job: Panchang unavailable, using fallback: {e}");
            weekly_wisdom()
        }
    }
}

fn weekly_wisdom() -> NotificationMessage {
    NotificationMessage::new(
        "✨ Weekly Wisdom from the Saints",
        "\"Kabira khada bazaar mein, mange sabki khair\" — wish well for all, \
         and the week will treat you well.",
    )
    .with_data("type", "weekly_wisdom")
    .with_data("url", "/saints")
}
