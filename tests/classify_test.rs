use marketlens::classify::{UnitKind, classify_label};
use marketlens::coerce::{RawValue, normalize};
use marketlens::format::format_value;

#[test]
fn margin_labels_beat_currency_cues() {
    // "EBITDA Margin" with 0.178 must come out as a percentage, never as
    // a dollar amount via the currency default
    let nv = normalize("EBITDA Margin", &RawValue::Number(0.178), None);
    assert_eq!(format_value(&nv), "17.8%");

    assert_eq!(classify_label("Operating Margin"), UnitKind::Percent);
    assert_eq!(classify_label("Revenue Growth YoY"), UnitKind::Percent);
}

#[test]
fn price_labels_render_exact() {
    let nv = normalize("Current Price", &RawValue::Number(189.45), None);
    assert_eq!(format_value(&nv), "$189");

    let nv = normalize("Target Price", &RawValue::Number(42.18), None);
    assert_eq!(format_value(&nv), "$42.2");
}

#[test]
fn count_labels_render_grouped_integers() {
    let nv = normalize("Employees", &RawValue::Number(164_000.0), None);
    assert_eq!(format_value(&nv), "164,000");

    let nv = normalize("Shares Outstanding", &RawValue::Number(15_400_000_000.0), None);
    assert_eq!(format_value(&nv), "15,400,000,000");
}

#[test]
fn multiple_labels() {
    let nv = normalize("EV/EBITDA", &RawValue::Number(12.6), None);
    assert_eq!(format_value(&nv), "12.6\u{d7}");

    let nv = normalize("Asset Turnover", &RawValue::Number(0.83), None);
    assert_eq!(format_value(&nv), "0.8\u{d7}");
}

#[test]
fn currency_cues_and_default_abbreviate() {
    let nv = normalize("Free Cash Flow", &RawValue::Number(99_600_000_000.0), None);
    assert_eq!(format_value(&nv), "$99.6B");

    // Unmatched labels default to abbreviated currency
    let nv = normalize("EBITDA", &RawValue::Number(125_800_000_000.0), None);
    assert_eq!(format_value(&nv), "$125.8B");
}

#[test]
fn explicit_hint_overrides_label() {
    let nv = normalize("Revenue", &RawValue::Number(0.42), Some(UnitKind::Percent));
    assert_eq!(format_value(&nv), "42.0%");
}
