// SPDX-License-Identifier: MPL-2.0
//! Relative age labels ("5 min ago", "2 hours ago").

use chrono::{DateTime, Utc};

/// Formats how long ago `timestamp` was, as seen at `now`.
///
/// Timestamps in the future read as "Just now".
#[must_use]
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }

    let days = hours / 24;
    format!("{days} day{} ago", plural(days))
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 2, 18, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        format_time_ago(now() - d, now())
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(ago(Duration::zero()), "Just now");
        assert_eq!(ago(Duration::seconds(59)), "Just now");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(ago(Duration::minutes(-5)), "Just now");
    }

    #[test]
    fn minutes_are_truncated() {
        assert_eq!(ago(Duration::seconds(61)), "1 min ago");
        assert_eq!(ago(Duration::minutes(5)), "5 min ago");
        assert_eq!(ago(Duration::minutes(59)), "59 min ago");
    }

    #[test]
    fn hours_pluralize() {
        assert_eq!(ago(Duration::minutes(60)), "1 hour ago");
        assert_eq!(ago(Duration::minutes(150)), "2 hours ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
    }

    #[test]
    fn days_pluralize() {
        assert_eq!(ago(Duration::hours(24)), "1 day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
    }
}
