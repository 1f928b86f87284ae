//! Date parsing and formatting for front matter values.
//!
//! Front matter dates arrive as strings (`2024-01-15`, `2024-01-15T10:30:00Z`,
//! `2024-01-15 10:30:00`) or as millisecond timestamps. Everything is
//! normalized to a UTC [`NaiveDateTime`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Datetime layouts accepted besides RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string into a UTC datetime.
///
/// Returns `None` for empty or unparseable input.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Convert milliseconds since the Unix epoch into a UTC datetime.
pub fn from_timestamp_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Format as zero-padded `YYYY-MM-DD`.
///
/// Fixed width, so string comparison of two results orders them by date.
pub fn format_ymd(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `updated` when it is strictly later than `published`.
pub fn updated_date(published: &NaiveDateTime, updated: Option<&NaiveDateTime>) -> Option<NaiveDateTime> {
    updated.filter(|u| *u > published).copied()
}

/// The later of `published` and `updated`.
pub fn effective_date(published: &NaiveDateTime, updated: Option<&NaiveDateTime>) -> NaiveDateTime {
    updated_date(published, updated).unwrap_or(*published)
}

/// Returns true if `date` lies after `now`.
pub fn is_in_future(date: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    date > now
}

/// Current UTC time.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
