//! Display formatting for severity, status, report type, and timestamps.
//!
//! DESIGN
//! ======
//! The backend owns the status and report-type enumerations; every mapping
//! here falls back to a neutral label or badge for values it does not
//! recognize instead of failing. Timestamps are parsed leniently and shown
//! raw when unparseable.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Human label for a severity score.
pub fn severity_label(severity: i32) -> &'static str {
    match severity {
        0 => "Low",
        1 => "Minor",
        2 => "Moderate",
        3 => "High",
        _ => "Unknown",
    }
}

/// Badge modifier class for a severity score.
pub fn severity_class(severity: i32) -> &'static str {
    match severity {
        0 => "badge--severity-low",
        1 => "badge--severity-minor",
        2 => "badge--severity-moderate",
        3 => "badge--severity-high",
        _ => "badge--neutral",
    }
}

/// Human label for a report status.
pub fn status_label(status: &str) -> &'static str {
    match status {
        "pending" => "Pending",
        "in_progress" => "In Progress",
        "resolved" => "Resolved",
        _ => "Unknown",
    }
}

/// Badge modifier class for a report status.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "pending" => "badge--status-pending",
        "in_progress" => "badge--status-in-progress",
        "resolved" => "badge--status-resolved",
        _ => "badge--neutral",
    }
}

/// Title-case a report type for display: `road_sink` becomes `Road Sink`.
/// Unrecognized types title-case the same way rather than erroring.
pub fn report_type_label(report_type: &str) -> String {
    report_type
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a backend timestamp. Accepts RFC 3339 and the offset-less form
/// some backends emit, which is taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Millisecond sort key for created-at ordering. Unparseable timestamps
/// sort before everything and keep their fetch order.
pub fn timestamp_sort_key(raw: &str) -> i64 {
    parse_timestamp(raw).map_or(i64::MIN, |dt| dt.timestamp_millis())
}

/// Short date for listing cards, e.g. `Mar 1, 2024`. Unparseable input is
/// shown as-is.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%b %-d, %Y").to_string())
}

/// Long date-time for the detail page, e.g. `March 1, 2024 09:30 AM`.
pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |dt| dt.format("%B %-d, %Y %I:%M %p").to_string(),
    )
}
