//! Long-form date rendering for card timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Locale the long date format follows.
pub const DATE_LOCALE: &str = "en-US";

const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Parse a collaborator-supplied timestamp.
///
/// Accepts RFC 3339 (`2024-03-05T10:00:00Z`), a naive date-time
/// (`2024-03-05T10:00:00`, `2024-03-05 10:00:00`) or a bare date
/// (`2024-03-05`). The calendar date is taken as written, offset included.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Render a timestamp as "Month Day, Year", or `None` when it cannot be
/// parsed. Callers pick the placeholder.
pub fn format_long_date(raw: &str) -> Option<String> {
    let date = parse_timestamp(raw);
    if date.is_none() {
        tracing::debug!(timestamp = raw, "unparseable timestamp");
    }
    date.map(|d| d.format(LONG_DATE_FORMAT).to_string())
}
