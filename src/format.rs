//! Display Formatting
//!
//! Server timestamps stay strings in the models; they are only parsed here
//! for display.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "Mar 5" (task cards)
pub fn short_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "Mar 5, 2025" (project cards)
pub fn long_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Value for a `datetime-local` input: `YYYY-MM-DDTHH:MM`
pub fn datetime_local_value(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%Y-%m-%dT%H:%M").to_string(),
        None => value.chars().take(16).collect(),
    }
}

/// Completion rate as shown on cards, e.g. "41.5%" or "40%"
pub fn percent(rate: f64) -> String {
    let rounded = (rate * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_dates() {
        assert_eq!(short_date("2025-03-05T10:00:00"), "Mar 5");
        assert_eq!(long_date("2025-03-05T10:00:00.123456"), "Mar 5, 2025");
        assert_eq!(long_date("2024-12-31"), "Dec 31, 2024");
        assert_eq!(short_date("2025-03-05T10:00:00Z"), "Mar 5");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        assert_eq!(short_date("soon"), "soon");
    }

    #[test]
    fn test_datetime_local_value() {
        assert_eq!(datetime_local_value("2025-03-05T10:30:45"), "2025-03-05T10:30");
        assert_eq!(datetime_local_value("2025-03-05T10:30"), "2025-03-05T10:30");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(40.0), "40%");
        assert_eq!(percent(41.46), "41.5%");
        assert_eq!(percent(0.0), "0%");
    }
}
