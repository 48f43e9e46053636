//! Date/time utilities for formrelay.

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;

/// Format used for the submission timestamp in outgoing mail.
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Format a DateTime<Utc> in the specified timezone.
///
/// # Arguments
///
/// * `dt` - DateTime in UTC
/// * `timezone` - Timezone name (e.g., "Europe/Berlin", "UTC")
/// * `format` - Output format string (e.g., "%Y-%m-%d %H:%M")
///
/// # Returns
///
/// Formatted datetime string. Unknown timezones fall back to UTC.
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return dt.format(format).to_string(),
    };
    dt.with_timezone(&tz).format(format).to_string()
}

/// Render a timestamp the way browsers print `Date.toISOString()`.
///
/// RFC 3339, UTC, millisecond precision, `Z` suffix
/// (e.g., "2024-01-15T10:30:00.000Z").
pub fn to_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
