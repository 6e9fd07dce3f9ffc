//! Display formatting. All functions are total: any input produces a string,
//! never a panic.

use num_format::{Locale, ToFormattedString};

/// Marker appended by [`truncate`] when text is cut.
pub const ELLIPSIS: &str = "...";

/// Thousands-grouped count for the statistics panel.
#[must_use]
pub fn number_text(value: u64) -> String {
    value.to_formatted_string(&Locale::ja)
}

/// Yen price for table and modal cells. Missing or non-finite values render
/// as `-`.
#[must_use]
pub fn price_text(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("¥{}", group_decimal(v)),
        _ => "-".to_string(),
    }
}

/// Fixed two-decimal score text, `-` when there is none.
#[must_use]
pub fn score_text(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "-".to_string(),
    }
}

/// Cut `text` to at most `limit` characters, appending `...` when cut. Text
/// at or under the limit comes back unchanged.
///
/// Truncation counts characters, not words, so a cut can land mid-word.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}{ELLIPSIS}")
}

/// Group the integer digits of a decimal, keeping up to three fraction
/// digits (what `Intl.NumberFormat("ja-JP")` does by default).
fn group_decimal(v: f64) -> String {
    let rendered = format!("{v:.3}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_digits, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    // Magnitudes beyond u128 stay ungrouped; the feed never gets there.
    let grouped = int_digits
        .parse::<u128>()
        .map_or_else(|_| int_digits.to_string(), |n| n.to_formatted_string(&Locale::ja));

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
