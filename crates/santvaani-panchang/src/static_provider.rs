//! Deterministic Panchang generator.
//!
//! Selects tithi/nakshatra/yoga/karana by modular arithmetic over the
//! calendar date, so the same date always produces the same almanac.
//! This is a repeatable placeholder feed, not an astronomical computation.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use santvaani_core::error::Result;

use crate::festivals::upcoming_festivals;
use crate::tables::{KARANAS, NAKSHATRAS, RAHUKAAL_BY_WEEKDAY, TITHIS, YOGAS};
use crate::types::{MuhuratWindow, PanchangSnapshot};
use crate::PanchangProvider;

const SPECIAL_MESSAGES: [&str; 5] = [
    "Begin the day with gratitude and a calm mind.",
    "A good day for japa, charity, and new resolutions.",
    "Serve others today; seva is the highest dharma.",
    "Read a few verses of the Gita before sunset.",
    "Light a diya this evening and sit in silence for a while.",
];

/// Static Panchang provider with a per-day snapshot cache.
///
/// The cache holds exactly one snapshot and is recomputed only when the
/// requested date changes, so the random percentage field is stable
/// within a calendar day.
pub struct StaticPanchangProvider {
    cache: Mutex<Option<PanchangSnapshot>>,
}

impl StaticPanchangProvider {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    /// Compute the snapshot for a date, bypassing the cache.
    pub fn compute(date: NaiveDate) -> PanchangSnapshot {
        let day = date.day();
        let month = date.month();
        let year = date.year() as u32;

        let tithi_index = ((day + month) % 15) as usize;
        let nakshatra_index = ((day + month * 2 + year % 100) % 27) as usize;
        let yoga_index = ((day * month) % 27) as usize;
        let karana_index = ((day * 2 + month) % 11) as usize;

        let paksha = if day <= 15 { "Shukla" } else { "Krishna" };
        let moon_phase = match (paksha, tithi_index) {
            ("Shukla", 14) => "Full Moon",
            ("Krishna", 14) => "New Moon",
            ("Shukla", _) => "Waxing Moon",
            _ => "Waning Moon",
        };
        // Index 14 is Purnima in the waxing half, Amavasya in the waning half.
        let tithi = if paksha == "Krishna" && tithi_index == 14 {
            "Amavasya"
        } else {
            TITHIS[tithi_index]
        };

        let weekday = date.weekday().num_days_from_monday() as usize;

        PanchangSnapshot {
            date,
            tithi: tithi.to_string(),
            paksha: paksha.to_string(),
            nakshatra: NAKSHATRAS[nakshatra_index].to_string(),
            yoga: YOGAS[yoga_index].to_string(),
            karana: KARANAS[karana_index].to_string(),
            muhurat: vec![
                MuhuratWindow {
                    name: "Brahma Muhurat".into(),
                    window: "04:24 - 05:12".into(),
                },
                MuhuratWindow {
                    name: "Abhijit Muhurat".into(),
                    window: "11:48 - 12:36".into(),
                },
            ],
            rahukaal: RAHUKAAL_BY_WEEKDAY[weekday].to_string(),
            festivals: upcoming_festivals(date),
            special_message: SPECIAL_MESSAGES[((day + month) % 5) as usize].to_string(),
            is_auspicious_day: (day + month) % 3 == 0,
            moon_phase: moon_phase.to_string(),
            auspicious_percent: rand::thread_rng().gen_range(55..=95),
        }
    }
}

impl Default for StaticPanchangProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PanchangProvider for StaticPanchangProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn snapshot(&self, date: NaiveDate) -> Result<PanchangSnapshot> {
        let mut cache = self.cache.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(cached) = cache.as_ref()
            && cached.date == date
        {
            return Ok(cached.clone());
        }
        let snapshot = Self::compute(date);
        *cache = Some(snapshot.clone());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deterministic_fields() {
        let d = date(2025, 10, 18);
        let a = StaticPanchangProvider::compute(d);
        let b = StaticPanchangProvider::compute(d);
        assert_eq!(a.tithi, b.tithi);
        assert_eq!(a.nakshatra, b.nakshatra);
        assert_eq!(a.yoga, b.yoga);
        assert_eq!(a.karana, b.karana);
        assert_eq!(a.paksha, b.paksha);
        assert_eq!(a.is_auspicious_day, b.is_auspicious_day);
        assert_eq!(a.rahukaal, b.rahukaal);
        // auspicious_percent is the one field allowed to differ
    }

    #[test]
    fn test_auspicious_rule() {
        // (day + month) % 3 == 0
        let a = StaticPanchangProvider::compute(date(2025, 1, 2));
        assert!(a.is_auspicious_day);
        let b = StaticPanchangProvider::compute(date(2025, 1, 3));
        assert!(!b.is_auspicious_day);
    }

    #[test]
    fn test_amavasya_in_waning_half() {
        // 2025-09-20: (20 + 9) % 15 == 14, day > 15 → Krishna paksha
        let s = StaticPanchangProvider::compute(date(2025, 9, 20));
        assert_eq!(s.paksha, "Krishna");
        assert_eq!(s.tithi, "Amavasya");
        assert_eq!(s.moon_phase, "New Moon");

        // 2025-03-11: (11 + 3) % 15 == 14, day <= 15 → Shukla paksha
        let s = StaticPanchangProvider::compute(date(2025, 3, 11));
        assert_eq!(s.paksha, "Shukla");
        assert_eq!(s.tithi, "Purnima");
        assert_eq!(s.moon_phase, "Full Moon");
    }

    #[test]
    fn test_paksha_split() {
        assert_eq!(StaticPanchangProvider::compute(date(2025, 6, 10)).paksha, "Shukla");
        assert_eq!(StaticPanchangProvider::compute(date(2025, 6, 20)).paksha, "Krishna");
    }

    #[tokio::test]
    async fn test_cache_is_stable_within_a_day() {
        let provider = StaticPanchangProvider::new();
        let d = date(2025, 10, 18);
        let a = provider.snapshot(d).await.unwrap();
        let b = provider.snapshot(d).await.unwrap();
        // Cached snapshot: even the random field is stable for one date
        assert_eq!(a.auspicious_percent, b.auspicious_percent);

        // A new date recomputes
        let c = provider.snapshot(date(2025, 10, 19)).await.unwrap();
        assert_eq!(c.date, date(2025, 10, 19));
    }
}
