//! Lightweight cron expression parser, evaluated in a fixed timezone.
//! Supports: "MIN HOUR DOM MON DOW" (5-field, no seconds)
//! Wildcards: *, */N, N, comma lists for MIN/HOUR; * or a single value
//! for DOW (0 and 7 both mean Sunday). DOM/MON accept only *.
//!
//! All Santvaani schedules run in IST, so the walk happens in local
//! time and the result converts back to UTC.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Timelike, Utc};

/// Indian Standard Time: UTC+05:30, no DST.
pub fn ist_offset() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("IST offset is valid")
}

/// Parse a cron expression and compute the next run after `after`,
/// with MIN/HOUR/DOW interpreted in `tz`.
pub fn next_run_from_cron(
    expression: &str,
    after: DateTime<Utc>,
    tz: FixedOffset,
) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    if parts.len() != 5 {
        tracing::warn!(
            "Invalid cron expression: '{}' (need 5 fields: MIN HOUR DOM MON DOW)",
            expression
        );
        return None;
    }

    let minutes = parse_field(parts[0], 0, 59)?;
    let hours = parse_field(parts[1], 0, 23)?;
    let _dom = parts[2]; // simplified: only * supported
    let _mon = parts[3]; // simplified: only * supported
    let weekdays = parse_dow(parts[4])?;

    let mut candidate = after.with_timezone(&tz) + Duration::minutes(1);
    candidate = candidate.with_second(0).unwrap_or(candidate);

    // Try up to 8 days ahead — enough for any weekly schedule.
    for _ in 0..(8 * 24 * 60) {
        let m = candidate.minute();
        let h = candidate.hour();
        let dow = candidate.weekday().num_days_from_sunday();

        if minutes.contains(&m) && hours.contains(&h) && weekdays.contains(&dow) {
            return Some(candidate.with_timezone(&Utc));
        }
        candidate += Duration::minutes(1);
    }

    None
}

/// Parse a cron field into a list of matching values.
fn parse_field(field: &str, min: u32, max: u32) -> Option<Vec<u32>> {
    if field == "*" {
        return Some((min..=max).collect());
    }

    // */N — every N
    if let Some(step) = field.strip_prefix("*/") {
        let n: u32 = step.parse().ok()?;
        if n == 0 {
            return None;
        }
        return Some((min..=max).step_by(n as usize).collect());
    }

    // Comma-separated: "0,15,30,45"
    if field.contains(',') {
        let vals: Result<Vec<u32>, _> = field.split(',').map(|s| s.trim().parse()).collect();
        return vals
            .ok()
            .map(|v| v.into_iter().filter(|x| *x >= min && *x <= max).collect());
    }

    // Single number
    let n: u32 = field.parse().ok()?;
    if n >= min && n <= max { Some(vec![n]) } else { None }
}

/// Parse the day-of-week field: * or a single 0-7 value (0/7 = Sunday).
fn parse_dow(field: &str) -> Option<Vec<u32>> {
    if field == "*" {
        return Some((0..=6).collect());
    }
    let n: u32 = field.parse().ok()?;
    if n <= 7 { Some(vec![n % 7]) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_morning_six_ist() {
        // 6:00 IST == 00:30 UTC
        let after = Utc.with_ymd_and_hms(2025, 10, 17, 20, 0, 0).unwrap();
        let next = next_run_from_cron("0 6 * * *", after, ist_offset()).unwrap();
        assert_eq!(next.hour(), 0);
        assert_eq!(next.minute(), 30);
        let local = next.with_timezone(&ist_offset());
        assert_eq!(local.hour(), 6);
        assert_eq!(local.minute(), 0);
    }

    #[test]
    fn test_weekly_monday_nine_ist() {
        // 2025-10-18 is a Saturday; next Monday is the 20th.
        let after = Utc.with_ymd_and_hms(2025, 10, 18, 12, 0, 0).unwrap();
        let next = next_run_from_cron("0 9 * * 1", after, ist_offset()).unwrap();
        let local = next.with_timezone(&ist_offset());
        assert_eq!(local.weekday(), chrono::Weekday::Mon);
        assert_eq!(local.day(), 20);
        assert_eq!(local.hour(), 9);
        assert_eq!(local.minute(), 0);
    }

    #[test]
    fn test_same_day_later_hour() {
        // 5:00 IST — the 6:00 job should fire the same IST day.
        let after = Utc.with_ymd_and_hms(2025, 10, 18, 23, 30, 0).unwrap(); // 05:00 IST Oct 19
        let next = next_run_from_cron("0 6 * * *", after, ist_offset()).unwrap();
        let local = next.with_timezone(&ist_offset());
        assert_eq!(local.day(), 19);
        assert_eq!(local.hour(), 6);
    }

    #[test]
    fn test_every_15_minutes() {
        let after = Utc.with_ymd_and_hms(2026, 2, 22, 10, 2, 0).unwrap();
        let next = next_run_from_cron("*/15 * * * *", after, ist_offset()).unwrap();
        let local = next.with_timezone(&ist_offset());
        assert_eq!(local.minute() % 15, 0);
    }

    #[test]
    fn test_invalid_expression() {
        let after = Utc::now();
        assert!(next_run_from_cron("bad", after, ist_offset()).is_none());
        assert!(next_run_from_cron("0 6 * * 9", after, ist_offset()).is_none());
    }

    #[test]
    fn test_sunday_aliases() {
        let after = Utc.with_ymd_and_hms(2025, 10, 15, 0, 0, 0).unwrap();
        let a = next_run_from_cron("0 9 * * 0", after, ist_offset()).unwrap();
        let b = next_run_from_cron("0 9 * * 7", after, ist_offset()).unwrap();
        assert_eq!(a, b);
    }
}
