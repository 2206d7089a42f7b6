//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Format a price in rupees with thousands grouping, e.g. `₹1,250,000`.
/// Fractional paise are dropped — listing prices are whole amounts.
pub fn format_price(price: f64) -> String {
    let whole = price.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}

/// Human "time ago" for the Added column, e.g. `3 days ago`.
pub fn format_relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(at);
    let seconds = delta.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let (count, unit) = if seconds < 3600 {
        (delta.num_minutes(), "minute")
    } else if seconds < 86_400 {
        (delta.num_hours(), "hour")
    } else if delta.num_days() < 30 {
        (delta.num_days(), "day")
    } else if delta.num_days() < 365 {
        (delta.num_days() / 30, "month")
    } else {
        (delta.num_days() / 365, "year")
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
