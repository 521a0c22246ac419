//! Panchang data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named auspicious time window within the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuhuratWindow {
    pub name: String,
    /// "HH:MM - HH:MM" local (IST) window.
    pub window: String,
}

/// An upcoming festival, annotated relative to "today".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Festival {
    pub name: String,
    pub date: NaiveDate,
    /// Festival kind: "major", "vrat", "jayanti", "seasonal".
    pub kind: String,
    /// Whole days from today to the festival date.
    pub days_until: i64,
    pub description: String,
    pub significance: String,
    pub is_today: bool,
    pub is_tomorrow: bool,
    pub is_this_week: bool,
}

/// Almanac data for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanchangSnapshot {
    pub date: NaiveDate,
    pub tithi: String,
    /// Waxing ("Shukla") or waning ("Krishna") fortnight.
    pub paksha: String,
    pub nakshatra: String,
    pub yoga: String,
    pub karana: String,
    pub muhurat: Vec<MuhuratWindow>,
    /// Inauspicious window for the weekday, "HH:MM - HH:MM".
    pub rahukaal: String,
    pub festivals: Vec<Festival>,
    pub special_message: String,
    pub is_auspicious_day: bool,
    pub moon_phase: String,
    /// Decorative 0-100 score shown in the app. The one field that is
    /// intentionally random rather than derived from the date.
    pub auspicious_percent: u8,
}
