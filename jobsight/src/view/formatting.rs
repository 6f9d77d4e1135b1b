//! Shared formatting utilities for job and chart views.
//!
//! All output is fixed English/UTC; there is no locale handling.

use chrono::DateTime;

/// Zero-pad to two digits ("7" -> "07").
pub fn padded_int(n: u64) -> String {
    format!("{:02}", n)
}

/// Format an integer with `,` thousands separators ("1234567" -> "1,234,567").
pub fn num_format(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a Unix timestamp (milliseconds) as a UTC weekday and time,
/// e.g. "Thu 01:00:00".
///
/// Timestamps chrono cannot represent render as "-".
pub fn format_time(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%a %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn split_duration(ms: u64) -> (u64, u64, u64) {
    let secs = ms / 1000;
    (secs / 3600, secs % 3600 / 60, secs % 60)
}

/// Format a duration (milliseconds) as "H:MM:SS".
///
/// Hours are not wrapped into days and get thousands separators.
pub fn second_format(ms: u64) -> String {
    let (hour, minute, second) = split_duration(ms);
    format!(
        "{}:{}:{}",
        num_format(hour as i64),
        padded_int(minute),
        padded_int(second)
    )
}

/// Append "s" to `word` unless `n` is exactly one.
pub fn plural(n: u64, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Format a duration (milliseconds) in words at the coarsest useful unit.
///
/// Returns strings like "1 second", "42 minutes", "3 hours 1 minute".
pub fn human_format(ms: u64) -> String {
    let (hour, minute, second) = split_duration(ms);
    let secs = ms / 1000;

    if secs < 60 {
        format!("{} {}", second, plural(second, "second"))
    } else if secs < 3600 {
        format!("{} {}", minute, plural(minute, "minute"))
    } else {
        format!(
            "{} {} {} {}",
            num_format(hour as i64),
            plural(hour, "hour"),
            minute,
            plural(minute, "minute")
        )
    }
}

/// Format a numeric value for display with appropriate scale suffix.
///
/// - Values >= 1M display as "X.XM"
/// - Values >= 1K display as "X.XK"
/// - Integer values display without decimal places
/// - Other values display with 2 decimal places
pub fn format_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
