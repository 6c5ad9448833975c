use marketlens::payload::{SectionView, load_payload, render_payload};
use serde_json::json;

fn titles(sections: &[SectionView]) -> Vec<&str> {
    sections
        .iter()
        .map(|s| match s {
            SectionView::Kv { title, .. } | SectionView::Table { title, .. } => title.as_str(),
        })
        .collect()
}

#[test]
fn sections_render_in_document_order_with_humanized_titles() {
    let payload = json!({
        "metadata": {"ticker": "AAPL", "name": "Apple Inc."},
        "price": {"Current Price": 189.45, "Target Price": 210.0},
        "key_stats": {"Market Cap": "2.95T", "EBITDA Margin": 0.331},
        "financials": {
            "columns": ["FY2022", "FY2023"],
            "rows": [{"label": "Revenue", "values": [394.3e9, 383.3e9]}],
        },
        "valuation": [
            {"label": "DCF Base Case", "value": 205.0},
            {"label": "Exit Multiple", "value": "11.5x"},
        ],
        "series": {"years": [2022, 2023], "series": {"Revenue": [394.3e9, 383.3e9]}},
    });

    let sections = render_payload(&payload);
    assert_eq!(
        titles(&sections),
        vec!["Metadata", "Price", "Key Stats", "Financials", "Valuation", "Series"]
    );

    // Metadata is a KV section with passthrough strings
    let SectionView::Kv { rows, .. } = &sections[0] else {
        panic!("metadata should render as KV");
    };
    assert_eq!(rows[0].cell.text, "AAPL");

    // Price map formats exact prices
    let SectionView::Kv { rows, .. } = &sections[1] else {
        panic!("price should render as KV");
    };
    assert_eq!(rows[0].cell.text, "$189");

    // Tabular block becomes a table
    let SectionView::Table { table, .. } = &sections[3] else {
        panic!("financials should render as a table");
    };
    assert_eq!(table.rows[0].cells[1].text, "$383.3B");

    // Valuation cases are a KV list with embedded-unit coercion
    let SectionView::Kv { rows, .. } = &sections[4] else {
        panic!("valuation should render as KV");
    };
    assert_eq!(rows[1].cell.text, "11.5\u{d7}");

    // Time series becomes a table with years as columns
    let SectionView::Table { table, .. } = &sections[5] else {
        panic!("time series should render as a table");
    };
    assert_eq!(table.columns, vec!["2022", "2023"]);
    assert_eq!(table.rows[0].label, "Revenue");
    assert_eq!(table.rows[0].cells[0].text, "$394.3B");
}

#[test]
fn missing_sections_do_not_break_the_render() {
    // A payload with a single recognizable section renders just that one
    let payload = json!({"key_stats": {"Market Cap": 2.9e12}});
    let sections = render_payload(&payload);
    assert_eq!(sections.len(), 1);
    assert_eq!(titles(&sections), vec!["Key Stats"]);
}

#[test]
fn null_sections_render_placeholder_rows() {
    let payload = json!({"price": null});
    let sections = render_payload(&payload);
    let SectionView::Kv { rows, .. } = &sections[0] else {
        panic!("expected KV placeholder");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cell.text, "\u{2014}");
}

#[test]
fn load_payload_reports_errors() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), b"{\"price\": {\"Current Price\": 12.5}}").unwrap();
    let payload = load_payload(tmp.path()).unwrap();
    assert!(payload.get("price").is_some());

    std::fs::write(tmp.path(), b"{broken").unwrap();
    let err = load_payload(tmp.path()).unwrap_err();
    assert!(format!("{err}").contains("Payload error"));

    let err = load_payload("/nonexistent/payload.json").unwrap_err();
    assert!(format!("{err}").contains("I/O error"));
}

#[test]
fn non_object_payload_yields_single_placeholder_section() {
    for payload in [json!(null), json!([]), json!("garbage"), json!({})] {
        let sections = render_payload(&payload);
        assert_eq!(sections.len(), 1, "payload {payload}");
        assert_eq!(titles(&sections), vec!["No Data"]);
    }
}
