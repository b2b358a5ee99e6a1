use chrono::{DateTime, FixedOffset, Timelike};

/// Parse an ISO-8601 sample timestamp, offset included.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp).ok()
}

/// Minute-of-hour (0-59) of a sample timestamp, in the timestamp's own
/// offset. `None` when the string does not parse as a date-time.
pub fn minute_of_hour(timestamp: &str) -> Option<u32> {
    parse_timestamp(timestamp).map(|parsed| parsed.minute())
}

/// Human-readable rendering of a sample timestamp. Unparseable input renders
/// as `Invalid Date` rather than failing.
pub fn display_timestamp(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(parsed) => parsed.format("%a %b %d %Y %H:%M:%S %z").to_string(),
        None => "Invalid Date".to_string(),
    }
}
