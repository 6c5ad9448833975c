//! Display formatting for normalized values
//!
//! Pure, deterministic rendering of (numeric, unit) pairs into canonical
//! display strings. Missing values (None, NaN, infinite) always come back
//! as the "\u{2014}" placeholder; an actual zero formats as "$0" / "0.00%",
//! never as the placeholder.

use crate::classify::UnitKind;
use crate::coerce::{NormalizedValue, PLACEHOLDER};

/// Magnitude buckets for abbreviated currency, largest threshold first
const MAGNITUDES: &[(f64, &str)] = &[(1e9, "B"), (1e6, "M"), (1e3, "K")];

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Strip trailing zero decimals ("1.50" -> "1.5", "383.0" -> "383")
fn trim_zero_decimals(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

/// Insert comma thousands separators into the integer part of a plain
/// decimal string, keeping any sign and fraction intact.
pub fn group_thousands(text: &str) -> String {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Abbreviated currency with a magnitude suffix.
///
/// The bucket is the largest threshold the absolute value meets or
/// exceeds; the scaled value gets 1 decimal at or above 10, otherwise 2,
/// with trailing zero decimals stripped.
///
/// `format_money(Some(383_300_000_000.0))` is "$383.3B",
/// `format_money(Some(1500.0))` is "$1.5K", `format_money(Some(0.0))` is
/// "$0".
pub fn format_money(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();

    let (scaled, suffix) = MAGNITUDES
        .iter()
        .find(|(threshold, _)| abs >= *threshold)
        .map_or((abs, ""), |(threshold, suffix)| (abs / threshold, *suffix));

    let decimals = if scaled >= 10.0 { 1 } else { 2 };
    let text = format!("{scaled:.decimals$}");
    format!("{sign}${}{suffix}", trim_zero_decimals(&text))
}

/// Exact currency for price-like labels: no magnitude bucketing, locale
/// thousands separators, 0 decimals at or above 100, 1 at or above 10,
/// otherwise 2.
pub fn format_money_exact(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();
    let decimals = if abs >= 100.0 {
        0
    } else if abs >= 10.0 {
        1
    } else {
        2
    };
    format!("{sign}${}", group_thousands(&format!("{abs:.decimals$}")))
}

/// Percentage from a fraction (0.178 -> "17.8%").
///
/// One decimal when the percentage is negative or at least 10 in
/// magnitude, two below that. The asymmetry around the sign matches the
/// observed behavior of every upstream call site and is preserved as-is.
pub fn format_percent(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    let pct = v * 100.0;
    let decimals = if pct < 0.0 || pct.abs() >= 10.0 { 1 } else { 2 };
    format!("{pct:.decimals$}%")
}

/// Valuation multiple with one decimal ("4.2\u{00d7}")
pub fn format_multiple(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    format!("{v:.1}\u{00d7}")
}

/// Whole count with thousands separators
pub fn format_integer(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    group_thousands(&format!("{v:.0}"))
}

/// Render a normalized value with the rule for its unit.
///
/// Text overrides pass through unchanged (blank text maps to the
/// placeholder); missing numerics map to the placeholder for every unit.
pub fn format_value(value: &NormalizedValue) -> String {
    if let Some(text) = &value.text_override {
        if text.trim().is_empty() {
            return PLACEHOLDER.to_string();
        }
        return text.clone();
    }

    match value.unit {
        UnitKind::Currency => format_money(value.numeric),
        UnitKind::Price => format_money_exact(value.numeric),
        UnitKind::Percent => format_percent(value.numeric),
        UnitKind::Multiple => format_multiple(value.numeric),
        UnitKind::Integer => format_integer(value.numeric),
        UnitKind::Plain => match finite(value.numeric) {
            Some(v) => trim_zero_decimals(&format!("{v:.2}")).to_string(),
            None => PLACEHOLDER.to_string(),
        },
    }
}
