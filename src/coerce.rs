//! Text coercion and value normalization
//!
//! Backend payloads deliver cell values as raw numbers, pre-formatted
//! display strings ("$1.2B", "17.8%", "4.2x"), placeholders ("n/a"), or
//! nothing at all. This module recovers a numeric value and a unit hint
//! from such inputs without ever failing: unparseable text always degrades
//! to opaque passthrough rather than aborting a render pass.

use crate::classify::{UnitKind, classify_label};

/// Placeholder shown for missing or unformattable values
pub const PLACEHOLDER: &str = "\u{2014}";

/// A raw cell value as it arrives from the backend
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Missing value (JSON null, absent key, or a non-scalar cell)
    Null,
    /// Numeric value with no inherent unit
    Number(f64),
    /// Text that may embed a number, a unit, or neither
    Text(String),
}

impl From<&serde_json::Value> for RawValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Bool(b) => Self::Text(b.to_string()),
            // Arrays and objects are not cell values; treat as missing so
            // one malformed cell degrades to a placeholder in isolation
            _ => Self::Null,
        }
    }
}

/// Result of coercing a display string back to a number
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coerced {
    /// Recovered numeric value, already scaled (B/M/K expanded, % divided)
    pub numeric: Option<f64>,
    /// Unit implied by the text itself ("%" suffix, "$" prefix, ...)
    pub unit_hint: Option<UnitKind>,
    /// Set when the text carries no recoverable number; shown verbatim
    pub text_override: Option<String>,
}

/// A value with its final unit resolved, ready for the formatter
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedValue {
    /// Numeric value, `None` for missing/unparseable input
    pub numeric: Option<f64>,
    /// Unit kind controlling the formatting rule
    pub unit: UnitKind,
    /// When set, the literal text is shown and `numeric` is ignored
    pub text_override: Option<String>,
}

/// Repair and canonicalize text that may have been re-encoded upstream.
///
/// Collapses non-breaking spaces, strips the stray `Â` artifacts left by
/// mis-decoded multi-byte characters, collapses internal whitespace runs
/// to a single space, and trims. Infallible: Rust strings are already
/// valid UTF-8, so the decode failure the original had to catch cannot
/// occur here.
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        let ch = if ch == '\u{00a0}' { ' ' } else { ch };
        if ch == '\u{00c2}' {
            continue;
        }
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    out
}

/// Tokens that stand for "no data" in upstream payloads
const NOT_AVAILABLE: &[&str] = &["n/a", "na", "not available", "-", "--", "\u{2014}"];

fn parse_number(body: &str) -> Option<f64> {
    let trimmed = body.trim().replace(',', "");
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn strip_suffix_ignore_case(text: &str, suffix: char) -> Option<&str> {
    let last = text.chars().next_back()?;
    if last.eq_ignore_ascii_case(&suffix) {
        Some(&text[..text.len() - last.len_utf8()])
    } else {
        None
    }
}

/// Coerce a display string back into a normalized numeric + unit pair.
///
/// Guaranteed never to panic; anything unrecognizable comes back as a
/// passthrough text override.
pub fn coerce_text(raw: &str) -> Coerced {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        return Coerced::default();
    }

    let lower = cleaned.to_lowercase();
    if NOT_AVAILABLE.contains(&lower.as_str()) {
        return Coerced {
            text_override: Some(PLACEHOLDER.to_string()),
            ..Coerced::default()
        };
    }

    // A "$" anywhere marks the value as currency; drop it before parsing
    let dollar = cleaned.contains('$');
    let body = cleaned.replace('$', "");
    let body = body.trim();

    // Magnitude suffixes: "383.3B" -> 383_300_000_000
    for (suffix, multiplier) in [('b', 1e9), ('m', 1e6), ('k', 1e3)] {
        if let Some(head) = strip_suffix_ignore_case(body, suffix)
            && let Some(n) = parse_number(head)
        {
            return Coerced {
                numeric: Some(n * multiplier),
                unit_hint: Some(UnitKind::Currency),
                text_override: None,
            };
        }
    }

    // Valuation multiples: "4.2x" / "4.2×"
    for suffix in ['x', '\u{00d7}'] {
        if let Some(head) = strip_suffix_ignore_case(body, suffix)
            && let Some(n) = parse_number(head)
        {
            return Coerced {
                numeric: Some(n),
                unit_hint: Some(UnitKind::Multiple),
                text_override: None,
            };
        }
    }

    // Percentages arrive as display values; normalize back to a fraction
    if let Some(head) = body.strip_suffix('%')
        && let Some(n) = parse_number(head)
    {
        return Coerced {
            numeric: Some(n / 100.0),
            unit_hint: Some(UnitKind::Percent),
            text_override: None,
        };
    }

    if let Some(n) = parse_number(body) {
        return Coerced {
            numeric: Some(n),
            unit_hint: dollar.then_some(UnitKind::Currency),
            text_override: None,
        };
    }

    // Opaque passthrough: keep the cleaned text, drop nothing
    Coerced {
        text_override: Some(cleaned),
        ..Coerced::default()
    }
}

/// Resolve a raw value against its label and an optional explicit hint.
///
/// Unit precedence: a unit embedded in the text itself (the numeric was
/// already scaled for it) beats an explicit hint, which beats label-based
/// classification.
pub fn normalize(label: &str, value: &RawValue, hint: Option<UnitKind>) -> NormalizedValue {
    let fallback_unit = || hint.unwrap_or_else(|| classify_label(label));
    match value {
        RawValue::Null => NormalizedValue {
            numeric: None,
            unit: fallback_unit(),
            text_override: None,
        },
        RawValue::Number(n) if !n.is_finite() => NormalizedValue {
            numeric: None,
            unit: fallback_unit(),
            text_override: None,
        },
        RawValue::Number(n) => NormalizedValue {
            numeric: Some(*n),
            unit: fallback_unit(),
            text_override: None,
        },
        RawValue::Text(s) => {
            let coerced = coerce_text(s);
            if let Some(text) = coerced.text_override {
                return NormalizedValue {
                    numeric: None,
                    unit: UnitKind::Plain,
                    text_override: Some(text),
                };
            }
            let unit = coerced
                .unit_hint
                .or(hint)
                .unwrap_or_else(|| classify_label(label));
            NormalizedValue {
                numeric: coerced.numeric,
                unit,
                text_override: None,
            }
        }
    }
}
