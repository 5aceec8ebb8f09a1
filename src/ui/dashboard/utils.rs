//! Dashboard formatting helpers
//!
//! Small pure functions shared by the card components.

use chrono::{DateTime, Local};

/// Duration label for the minutes a run spent. Anything that rounds to zero
/// whole minutes reads as "< 1 min".
pub fn format_duration(spent_minutes: Option<f64>) -> String {
    let minutes = spent_minutes.unwrap_or(0.0).round();
    if minutes >= 1.0 {
        format!("{} min", minutes as u64)
    } else {
        "< 1 min".to_string()
    }
}

/// Link label for an evidence path: its last path segment.
pub fn evidence_label(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}

/// Render an RFC 3339 timestamp in local time, or the raw text if it does not parse.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Human label for a Nexus item type (`budget_grant` → `budget grant`).
pub fn humanize_kind(kind: &str) -> String {
    kind.replace('_', " ")
}

/// Print a number without a trailing `.0` when it is whole.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Reduce a free-form value to something safe inside a CSS class name.
pub fn css_token(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
