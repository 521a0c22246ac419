//! Upcoming-festival computation over the static table.

use chrono::NaiveDate;

use crate::tables::{festival_info, FESTIVALS};
use crate::types::Festival;

/// Maximum entries returned by [`upcoming_festivals`].
pub const MAX_UPCOMING: usize = 8;

/// Festivals coming up after `today`.
///
/// Entries are annotated with whole days until the festival, kept when
/// `1 <= days_until <= 365`, sorted ascending by proximity, and capped
/// at [`MAX_UPCOMING`].
pub fn upcoming_festivals(today: NaiveDate) -> Vec<Festival> {
    let mut upcoming: Vec<Festival> = FESTIVALS
        .iter()
        .filter_map(|(name, date, kind)| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            let days_until = (date - today).num_days();
            if !(1..=365).contains(&days_until) {
                return None;
            }
            let (description, significance) = festival_info(name);
            Some(Festival {
                name: (*name).to_string(),
                date,
                kind: (*kind).to_string(),
                days_until,
                description: description.to_string(),
                significance: significance.to_string(),
                is_today: false,
                is_tomorrow: days_until == 1,
                is_this_week: days_until <= 7,
            })
        })
        .collect();

    upcoming.sort_by_key(|f| f.days_until);
    upcoming.truncate(MAX_UPCOMING);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_sort_and_cap() {
        let list = upcoming_festivals(date(2025, 9, 1));
        assert!(!list.is_empty());
        assert!(list.len() <= MAX_UPCOMING);
        for f in &list {
            assert!((1..=365).contains(&f.days_until));
        }
        for pair in list.windows(2) {
            assert!(pair[0].days_until <= pair[1].days_until);
        }
    }

    #[test]
    fn test_diwali_two_days_out() {
        // 2025-10-18 is two days before the 2025-10-20 Diwali entry.
        // Dhanteras falls on the 18th itself (days_until = 0) and must
        // be excluded, making Diwali the nearest entry.
        let list = upcoming_festivals(date(2025, 10, 18));
        let nearest = &list[0];
        assert_eq!(nearest.name, "Diwali");
        assert_eq!(nearest.days_until, 2);
        assert!(nearest.is_this_week);
        assert!(!nearest.is_tomorrow);
    }

    #[test]
    fn test_tomorrow_flag() {
        // One day before Diwali 2025.
        let list = upcoming_festivals(date(2025, 10, 19));
        let diwali = list.iter().find(|f| f.name == "Diwali").unwrap();
        assert_eq!(diwali.days_until, 1);
        assert!(diwali.is_tomorrow);
    }

    #[test]
    fn test_enrichment_defaults() {
        let list = upcoming_festivals(date(2025, 10, 1));
        let karwa = list.iter().find(|f| f.name == "Karwa Chauth").unwrap();
        // No dictionary entry — generic description applies.
        assert!(karwa.description.contains("sacred"));
        let diwali = list.iter().find(|f| f.name == "Diwali").unwrap();
        assert!(diwali.description.contains("lights"));
    }
}
