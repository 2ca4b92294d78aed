use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const DAYS_PER_MONTH: f64 = 30.436_875;
const DAYS_PER_YEAR: f64 = 365.242_5;

/// Parse a Solr `lastModified` value.
///
/// Accepts RFC 3339 (`2023-01-01T00:00:00.123Z`) and, failing that, a
/// zone-less ISO-8601 timestamp which is taken to be UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

/// Whole seconds elapsed from `then` to `now`, negative if `then` is ahead.
pub fn age_seconds(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    now.signed_duration_since(then).num_seconds()
}

/// Describe an age in relative terms, e.g. "a few seconds", "3 hours", "a year".
///
/// Each bucket rounds to the nearest whole unit before comparing, so 89
/// seconds is still "a minute" and 36 hours becomes "2 days".
pub fn format_age(age_secs: i64) -> String {
    let secs = age_secs.unsigned_abs() as f64;
    let minutes = (secs / MINUTE).round();
    let hours = (secs / HOUR).round();
    let days = (secs / DAY).round();
    let months = (secs / DAY / DAYS_PER_MONTH).round();
    let years = (secs / DAY / DAYS_PER_YEAR).round();

    if secs < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}
