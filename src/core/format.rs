//! Locale-fixed formatting helpers.
//!
//! Output strings match the analysis backend's Indonesian UI copy; no
//! localization framework is involved.

use chrono::{DateTime, Utc};

/// Default character budget for review excerpts.
pub const DEFAULT_TRUNCATE_CHARS: usize = 150;

/// `DD/MM/YYYY HH:MM` in the timestamp's own offset.
#[must_use]
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

/// Buckets elapsed time into coarse relative phrases, falling back to the
/// absolute date beyond one week. Future timestamps read as "baru saja".
#[must_use]
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "baru saja".to_owned();
    }
    if minutes < 60 {
        return format!("{minutes} menit yang lalu");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours} jam yang lalu");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days} hari yang lalu");
    }

    format_date(timestamp)
}

/// Truncates to `max_chars` characters, appending `...` when anything was cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Escapes text for safe interpolation into markup.
#[must_use]
pub fn sanitize_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Uppercases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Groups digits with `.` as the thousands separator (id-ID convention).
#[must_use]
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
