//! Application-wide constants and display conventions.

use chrono::{NaiveDate, NaiveDateTime};

/// Application identity
pub const APP_NAME: &str = "careboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How many alerts the overview shows, newest first.
pub const RECENT_ALERT_COUNT: usize = 3;

/// Date rendering, e.g. "Sep 5, 2025".
pub const DATE_DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Timestamp rendering, e.g. "Sep 9, 02:30 PM".
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%b %-d, %I:%M %p";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "careboard=info"
}

/// Renders a date for cards and detail views.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// Renders an alert timestamp for queue cards.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_DISPLAY_FORMAT).to_string()
}
