//! Adaptive payload rendering
//!
//! Backend payloads are heterogeneous JSON documents: a metadata block,
//! key/value maps (price, key stats, market data), tabular blocks with
//! columns and rows for multi-year financials, lists of labeled valuation
//! cases, and time series keyed by year. There is no fixed schema; this
//! module detects the shape of each top-level section and routes it to
//! the matching renderer. Missing or unrecognizable sections render as an
//! explicit placeholder, never as a broken layout.

use crate::error::{MarketlensError, Result};
use crate::render::{KvRow, RenderedTable, TableRow, TableSpec, render_kv, render_table_spec};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// A rendered payload section, ready for a presentation layer
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SectionView {
    /// Two-column label/value list
    Kv {
        /// Humanized section title
        title: String,
        /// Ordered rows, never empty
        rows: Vec<KvRow>,
    },
    /// Multi-column grid
    Table {
        /// Humanized section title
        title: String,
        /// Formatted grid, never empty
        table: RenderedTable,
    },
}

/// Humanize a payload key for display ("key_stats" -> "Key Stats")
fn humanize_key(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a table spec from a time-series section: years become columns,
/// each metric becomes a row. The metric map may live under "series" or
/// "metrics", or be spread across sibling keys whose values are arrays.
fn time_series_spec(obj: &serde_json::Map<String, Value>) -> TableSpec {
    let columns: Vec<String> = obj
        .get("years")
        .and_then(Value::as_array)
        .map(|years| {
            years
                .iter()
                .map(|y| match y {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let metric_map = obj
        .get("series")
        .or_else(|| obj.get("metrics"))
        .and_then(Value::as_object);

    let rows: Vec<TableRow> = match metric_map {
        Some(map) => map
            .iter()
            .filter_map(|(label, values)| {
                Some(TableRow {
                    label: label.clone(),
                    values: values.as_array()?.clone(),
                    type_hint: None,
                })
            })
            .collect(),
        // Tolerate the flattened shape: sibling keys with array values
        None => obj
            .iter()
            .filter(|(key, _)| key.as_str() != "years")
            .filter_map(|(label, values)| {
                Some(TableRow {
                    label: label.clone(),
                    values: values.as_array()?.clone(),
                    type_hint: None,
                })
            })
            .collect(),
    };

    TableSpec { columns, rows }
}

fn render_section(title: String, section: &Value) -> SectionView {
    if let Some(obj) = section.as_object() {
        if obj.contains_key("columns") && obj.contains_key("rows") {
            let spec: TableSpec = serde_json::from_value(section.clone()).unwrap_or_default();
            return SectionView::Table {
                title,
                table: render_table_spec(&spec),
            };
        }
        if obj.contains_key("years") {
            return SectionView::Table {
                title,
                table: render_table_spec(&time_series_spec(obj)),
            };
        }
    }
    // Everything else (object maps, label/value arrays, scalars, null)
    // goes through the KV renderer, which degrades to a placeholder row
    SectionView::Kv {
        title,
        rows: render_kv(section),
    }
}

/// Read and parse a payload document from disk
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<Value> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| MarketlensError::payload(format!("Invalid payload JSON: {}", e)))
}

/// Render a whole payload document into ordered sections.
///
/// Top-level keys are walked in document order; a payload that is not an
/// object (or has no keys) yields a single placeholder section.
pub fn render_payload(payload: &Value) -> Vec<SectionView> {
    let Some(obj) = payload.as_object().filter(|o| !o.is_empty()) else {
        return vec![SectionView::Kv {
            title: "No Data".to_string(),
            rows: render_kv(&Value::Null),
        }];
    };

    obj.iter()
        .map(|(key, section)| render_section(humanize_key(key), section))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("key_stats"), "Key Stats");
        assert_eq!(humanize_key("market-data"), "Market Data");
        assert_eq!(humanize_key("price"), "Price");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_time_series_with_series_map() {
        let obj = json!({
            "years": [2021, 2022, 2023],
            "series": {"Revenue": [100.0e9, 110.0e9, 120.0e9]},
        });
        let spec = time_series_spec(obj.as_object().unwrap());
        assert_eq!(spec.columns, vec!["2021", "2022", "2023"]);
        assert_eq!(spec.rows.len(), 1);
        assert_eq!(spec.rows[0].label, "Revenue");
    }

    #[test]
    fn test_time_series_flattened_shape() {
        let obj = json!({
            "years": ["FY22", "FY23"],
            "Gross Margin": [0.41, 0.44],
        });
        let spec = time_series_spec(obj.as_object().unwrap());
        assert_eq!(spec.columns, vec!["FY22", "FY23"]);
        assert_eq!(spec.rows[0].label, "Gross Margin");
    }
}
