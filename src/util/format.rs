//! Timestamp rendering for announcement cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// Render a server timestamp like `Dec 15, 2024, 10:30 AM`.
///
/// Accepts RFC 3339 or the backend's bare ISO-8601 form (no offset); falls
/// back to the raw string when neither parses.
pub fn announcement_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_owned()
}
