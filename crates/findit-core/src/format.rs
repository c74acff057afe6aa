//! Display Formatting
//!
//! Relative dates and labels. `now` is always passed in so the output is
//! deterministic.

use chrono::NaiveDateTime;

use crate::models::{parse_date_time, parse_iso_timestamp};

/// Card date: `Today`, `Yesterday`, `N days ago`, else the plain date
pub fn relative_day(date: &str, time: Option<&str>, now: NaiveDateTime) -> String {
    let Some(at) = parse_date_time(date, time) else {
        return date.to_string();
    };
    let days = (now.date() - at.date()).num_days().abs();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        _ => at.format("%Y-%m-%d").to_string(),
    }
}

/// Notification age: `Just now`, `Nm ago`, `Nh ago`, `Nd ago`
pub fn time_ago(created_at: &str, now: NaiveDateTime) -> String {
    let Some(at) = parse_iso_timestamp(created_at) else {
        return String::new();
    };
    let secs = (now - at).num_seconds().max(0);
    match secs {
        s if s < 60 => "Just now".to_string(),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s => format!("{}d ago", s / 86_400),
    }
}

/// Detail page date: `Friday, March 1, 2024 at 08:15 AM`
pub fn long_date_time(date: &str, time: Option<&str>) -> String {
    if date.trim().is_empty() {
        return "Date not available".to_string();
    }
    let Some(at) = parse_date_time(date, time) else {
        return date.to_string();
    };
    let mut out = at.format("%A, %B %-d, %Y").to_string();
    if time.map_or(false, |t| !t.trim().is_empty()) {
        out.push_str(&at.format(" at %I:%M %p").to_string());
    }
    out
}

/// Size in MB with two decimals, for the upload area
pub fn megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        parse_date_time("2024-03-10", Some("12:00")).unwrap()
    }

    #[test]
    fn test_relative_day() {
        assert_eq!(relative_day("2024-03-10", None, now()), "Today");
        assert_eq!(relative_day("2024-03-09", Some("23:00"), now()), "Yesterday");
        assert_eq!(relative_day("2024-03-05", None, now()), "5 days ago");
        assert_eq!(relative_day("2024-02-01", None, now()), "2024-02-01");
        assert_eq!(relative_day("2 hours ago", None, now()), "2 hours ago");
    }

    #[test]
    fn test_time_ago_buckets() {
        assert_eq!(time_ago("2024-03-10T11:59:30", now()), "Just now");
        assert_eq!(time_ago("2024-03-10T11:15:00", now()), "45m ago");
        assert_eq!(time_ago("2024-03-10T07:00:00+00:00", now()), "5h ago");
        assert_eq!(time_ago("2024-03-07T12:00:00", now()), "3d ago");
        assert_eq!(time_ago("garbage", now()), "");
    }

    #[test]
    fn test_long_date_time() {
        assert_eq!(long_date_time("2024-03-01", Some("08:15")), "Friday, March 1, 2024 at 08:15 AM");
        assert_eq!(long_date_time("2024-03-01", None), "Friday, March 1, 2024");
        assert_eq!(long_date_time("", None), "Date not available");
        assert_eq!(long_date_time("last week", None), "last week");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(megabytes(1024 * 1024 * 3 / 2), "1.50 MB");
    }
}
