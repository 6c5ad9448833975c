use marketlens::coerce::PLACEHOLDER;
use marketlens::render::{StyleHint, render_kv};
use serde_json::json;

#[test]
fn object_map_preserves_insertion_order() {
    let section = json!({
        "Revenue": 383_300_000_000.0_f64,
        "Net Income": 97_000_000_000.0_f64,
        "EBITDA Margin": 0.331,
        "Employees": 164_000,
    });
    let rows = render_kv(&section);
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Revenue", "Net Income", "EBITDA Margin", "Employees"]);
    assert_eq!(rows[0].cell.text, "$383.3B");
    assert_eq!(rows[2].cell.text, "33.1%");
    assert_eq!(rows[3].cell.text, "164,000");
}

#[test]
fn pair_array_preserves_given_order() {
    let section = json!([
        {"label": "Market Cap", "value": "2.95T"},
        {"label": "P/E Multiple", "value": 29.4},
        {"label": "Dividend Yield", "value": "0.55%"},
    ]);
    let rows = render_kv(&section);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label, "Market Cap");
    // "T" is not a recognized magnitude; text passes through untouched
    assert_eq!(rows[0].cell.text, "2.95T");
    assert_eq!(rows[1].cell.text, "29.4\u{d7}");
    assert_eq!(rows[2].cell.text, "0.55%");
}

#[test]
fn empty_and_falsy_labels_are_dropped() {
    let section = json!([
        {"label": "", "value": 1},
        {"label": "   ", "value": 2},
        {"label": "Kept", "value": 3},
        {"value": 4},
    ]);
    let rows = render_kv(&section);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "Kept");
}

#[test]
fn empty_input_yields_exactly_one_placeholder_row() {
    for section in [json!({}), json!([]), json!(null), json!(42), json!("x")] {
        let rows = render_kv(&section);
        assert_eq!(rows.len(), 1, "section {section}");
        assert_eq!(rows[0].cell.text, PLACEHOLDER);
        assert_eq!(rows[0].cell.hint, StyleHint::Muted);
    }
}

#[test]
fn missing_and_preformatted_values() {
    let section = json!({
        "Rating": "Strong Buy",
        "Beta": null,
        "52-Week Hi/Lo": "199.62 / 124.17",
    });
    let rows = render_kv(&section);
    assert_eq!(rows[0].cell.text, "Strong Buy");
    assert_eq!(rows[1].cell.text, PLACEHOLDER);
    assert_eq!(rows[1].cell.hint, StyleHint::Muted);
    // Pre-formatted ranges pass through as text
    assert_eq!(rows[2].cell.text, "199.62 / 124.17");
}

#[test]
fn negative_values_get_negative_hint() {
    let section = json!({"Net Debt": -12_500_000_000.0_f64});
    let rows = render_kv(&section);
    assert_eq!(rows[0].cell.text, "-$12.5B");
    assert_eq!(rows[0].cell.hint, StyleHint::Negative);
}
