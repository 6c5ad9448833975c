//! Unit classification for labeled values
//!
//! Backend payloads rarely carry an explicit type for each value, so the
//! semantic unit (currency, percent, multiple, ...) is inferred from the
//! label text. The heuristics live in an ordered rule table evaluated in
//! priority order; the first rule whose needle matches wins.

use serde::{Deserialize, Serialize};

/// Semantic unit kind controlling how a value is formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Dollar amount abbreviated with a magnitude suffix ("$383.3B")
    Currency,
    /// Exact dollar amount with thousands separators ("$1,234.56")
    Price,
    /// Fraction rendered as a percentage (0.178 -> "17.8%")
    Percent,
    /// Valuation multiple ("4.2x")
    Multiple,
    /// Whole count with thousands separators
    Integer,
    /// Opaque text passed through unchanged
    Plain,
}

impl UnitKind {
    /// Parse an explicit type hint from a payload (e.g. a row-level
    /// `"type": "percent"`). Unknown hints return `None` and fall back to
    /// label-based classification.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_lowercase().as_str() {
            "currency" | "money" => Some(Self::Currency),
            "price" => Some(Self::Price),
            "percent" | "pct" => Some(Self::Percent),
            "multiple" => Some(Self::Multiple),
            "integer" | "count" => Some(Self::Integer),
            "plain" | "text" => Some(Self::Plain),
            _ => None,
        }
    }
}

/// One entry of the classification table: if any needle occurs in the
/// lowercased label, the rule's unit applies.
struct LabelRule {
    needles: &'static [&'static str],
    unit: UnitKind,
}

// Ordering is deliberate: margin/percent cues must outrank the generic
// "price"/"value" cues so that "EBITDA Margin" is never formatted as a
// dollar amount, and "share price" must be claimed as an exact price
// before the "shares" count rule sees it.
const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        needles: &["margin", "growth", "pct", "%"],
        unit: UnitKind::Percent,
    },
    LabelRule {
        needles: &[
            "share price",
            "target price",
            "current price",
            "52-week",
            "hi/lo",
        ],
        unit: UnitKind::Price,
    },
    LabelRule {
        needles: &["multiple", "ev/", "turnover"],
        unit: UnitKind::Multiple,
    },
    LabelRule {
        needles: &["employee", "shares", "count"],
        unit: UnitKind::Integer,
    },
    LabelRule {
        needles: &[
            "price", "value", "cap", "debt", "cash", "revenue", "income", "flow",
        ],
        unit: UnitKind::Currency,
    },
];

/// Infer the unit kind for a label, falling back to abbreviated currency
/// when no rule matches (financial payloads are dollar amounts more often
/// than anything else).
pub fn classify_label(label: &str) -> UnitKind {
    let lower = label.to_lowercase();
    for rule in LABEL_RULES {
        if rule.needles.iter().any(|needle| lower.contains(needle)) {
            return rule.unit;
        }
    }
    UnitKind::Currency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_outranks_currency() {
        // "EBITDA Margin" must hit the percent rule even though plain
        // "EBITDA" would fall through to the currency default
        assert_eq!(classify_label("EBITDA Margin"), UnitKind::Percent);
        assert_eq!(classify_label("Revenue Growth"), UnitKind::Percent);
        assert_eq!(classify_label("Dividend Pct"), UnitKind::Percent);
    }

    #[test]
    fn test_price_labels_are_exact() {
        assert_eq!(classify_label("Share Price"), UnitKind::Price);
        assert_eq!(classify_label("Target Price"), UnitKind::Price);
        assert_eq!(classify_label("52-Week Hi/Lo"), UnitKind::Price);
    }

    #[test]
    fn test_share_price_vs_shares_outstanding() {
        // "share price" is claimed before the "shares" count rule
        assert_eq!(classify_label("Share Price"), UnitKind::Price);
        assert_eq!(classify_label("Shares Outstanding"), UnitKind::Integer);
        assert_eq!(classify_label("Employees"), UnitKind::Integer);
    }

    #[test]
    fn test_multiples() {
        assert_eq!(classify_label("EV/EBITDA"), UnitKind::Multiple);
        assert_eq!(classify_label("Asset Turnover"), UnitKind::Multiple);
        assert_eq!(classify_label("Exit Multiple"), UnitKind::Multiple);
    }

    #[test]
    fn test_currency_cues_and_default() {
        assert_eq!(classify_label("Market Cap"), UnitKind::Currency);
        assert_eq!(classify_label("Net Debt"), UnitKind::Currency);
        assert_eq!(classify_label("Free Cash Flow"), UnitKind::Currency);
        // No cue at all: currency default
        assert_eq!(classify_label("EBITDA"), UnitKind::Currency);
        assert_eq!(classify_label(""), UnitKind::Currency);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_label("MARKET CAP"), UnitKind::Currency);
        assert_eq!(classify_label("ebitda margin"), UnitKind::Percent);
    }

    #[test]
    fn test_hint_parsing() {
        assert_eq!(UnitKind::from_hint("percent"), Some(UnitKind::Percent));
        assert_eq!(UnitKind::from_hint("Multiple"), Some(UnitKind::Multiple));
        assert_eq!(UnitKind::from_hint(" currency "), Some(UnitKind::Currency));
        assert_eq!(UnitKind::from_hint("bogus"), None);
        assert_eq!(UnitKind::from_hint(""), None);
    }
}
