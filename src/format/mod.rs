//! # Response Formatting
//!
//! Turns a [`ResponseRecord`] into the strings the response panel renders:
//! status line, elapsed time in human units, size in human units, and the
//! body pretty-printed when it is a JSON object.

use crate::http::response::ResponseRecord;

const KIB: i64 = 1024;
const MIB: i64 = 1024 * 1024;

/// The formatted strings shown after a request completes or fails.
#[derive(Debug, Clone)]
pub struct DisplayRecord {
    pub status_text: String,
    pub time_text: String,
    pub size_text: String,
    pub body_text: String,
}

/// Derive the display strings for one completed (or failed) request.
pub fn display(record: &ResponseRecord) -> DisplayRecord {
    let outcome = if record.success { "Success" } else { "Error" };
    DisplayRecord {
        status_text: format!("Status: {} ({outcome})", record.status),
        time_text: format!("Time: {}", format_time(record.duration_ms)),
        size_text: format!("Size: {}", format_size(record.size_bytes)),
        body_text: pretty_body(&record.data),
    }
}

/// Sub-second durations render as whole milliseconds, anything longer as
/// seconds with exactly two decimals.
pub fn format_time(ms: u128) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

/// Byte counts render as B, KB, or MB with at most two decimals; trailing
/// insignificant digits are trimmed (2048 -> "2 KB", 1536 -> "1.5 KB").
pub fn format_size(bytes: i64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{} KB", two_decimals(bytes as f64 / KIB as f64))
    } else {
        format!("{} MB", two_decimals(bytes as f64 / MIB as f64))
    }
}

fn two_decimals(value: f64) -> String {
    let rendered = format!("{value:.2}");
    rendered.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Best-effort pretty-printer: only a top-level JSON object is re-serialized
/// with two-space indentation; arrays, scalars, and malformed text pass
/// through verbatim.
pub fn pretty_body(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value @ serde_json::Value::Object(_)) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string())
        }
        _ => raw.to_string(),
    }
}
