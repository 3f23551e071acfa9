//! Database utility functions.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat};

/// Current local time as an ISO 8601 string, used for completion timestamps.
pub fn current_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Reformat a stored timestamp to `YYYY-MM-DD HH:MM:SS` for display.
///
/// Stored values are ISO 8601 text: either SQLite's `CURRENT_TIMESTAMP`
/// form (`YYYY-MM-DD HH:MM:SS`) or an RFC 3339 string with an offset or a
/// 'Z' UTC designator. The 'Z' is normalized to an explicit offset before
/// parsing. Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let normalized = match raw.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => raw.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    raw.to_string()
}
