//! Table and key-value rendering
//!
//! Consumes payload fragments of loosely agreed-upon shapes and produces
//! display-ready records: an ordered list of labeled cells for key-value
//! sections, or a grid for multi-column tabular data. The output is a
//! toolkit-neutral tree of (label, text, style hint) records; binding it
//! to an actual table or card widget is the caller's concern.
//!
//! Rendering is single-pass and stateless. Malformed individual entries
//! degrade to a placeholder cell without aborting the rest of the section,
//! and an empty section always yields one placeholder row so the visual
//! container is never blank.

use crate::classify::UnitKind;
use crate::coerce::{PLACEHOLDER, RawValue, normalize};
use crate::format::format_value;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Presentation hint attached to each rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleHint {
    /// Regular value
    Neutral,
    /// Negative numeric value (losses, declines)
    Negative,
    /// Placeholder / missing data
    Muted,
}

/// A single formatted cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Final display text
    pub text: String,
    /// Style hint for the presentation layer
    pub hint: StyleHint,
}

impl Cell {
    fn placeholder() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            hint: StyleHint::Muted,
        }
    }
}

/// One row of a key-value section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KvRow {
    /// Metric label as provided by the payload
    pub label: String,
    /// Formatted value
    pub cell: Cell,
}

/// Tabular payload fragment, deserialized tolerantly (every field has a
/// default so partial shapes never fail)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableSpec {
    /// Ordered column headers
    #[serde(default)]
    pub columns: Vec<String>,
    /// Ordered data rows
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

/// One row of a tabular payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableRow {
    /// Row label (metric name)
    #[serde(default)]
    pub label: String,
    /// Cell values aligned positionally to the columns
    #[serde(default)]
    pub values: Vec<Value>,
    /// Optional unit hint applied to every cell in the row
    #[serde(rename = "type", default)]
    pub type_hint: Option<String>,
}

/// A fully formatted table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTable {
    /// Column headers, unchanged from the payload
    pub columns: Vec<String>,
    /// Formatted rows in payload order
    pub rows: Vec<RenderedRow>,
}

/// One formatted table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRow {
    /// Row label
    pub label: String,
    /// One cell per column
    pub cells: Vec<Cell>,
}

fn render_cell(label: &str, value: &RawValue, hint: Option<UnitKind>) -> Cell {
    let normalized = normalize(label, value, hint);
    let text = format_value(&normalized);
    let hint = if text == PLACEHOLDER {
        StyleHint::Muted
    } else if normalized.numeric.is_some_and(|n| n < 0.0) && normalized.text_override.is_none() {
        StyleHint::Negative
    } else {
        StyleHint::Neutral
    };
    Cell { text, hint }
}

/// Flatten a key-value payload fragment into ordered (label, value) pairs.
///
/// Accepts either an array of `{label, value}` objects (given order kept)
/// or a plain object map (insertion order kept). Entries with empty or
/// blank labels are dropped. Anything else flattens to no entries.
fn kv_entries(section: &Value) -> Vec<(String, RawValue)> {
    let pairs: Vec<(String, RawValue)> = match section {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let obj = item.as_object()?;
                let label = obj.get("label").and_then(Value::as_str)?.to_string();
                let value = obj.get("value").map_or(RawValue::Null, RawValue::from);
                Some((label, value))
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), RawValue::from(value)))
            .collect(),
        _ => Vec::new(),
    };

    pairs
        .into_iter()
        .filter(|(label, _)| !label.trim().is_empty())
        .collect()
}

/// Render a key-value section.
///
/// Never returns an empty list: a missing, empty, or unrecognizable
/// section yields exactly one placeholder row.
pub fn render_kv(section: &Value) -> Vec<KvRow> {
    let entries = kv_entries(section);
    if entries.is_empty() {
        return vec![KvRow {
            label: PLACEHOLDER.to_string(),
            cell: Cell::placeholder(),
        }];
    }

    entries
        .into_iter()
        .map(|(label, value)| {
            let cell = render_cell(&label, &value, None);
            KvRow { label, cell }
        })
        .collect()
}

/// Render a tabular section from its JSON fragment.
///
/// Cell values align positionally to the columns; missing trailing values
/// render as the placeholder. A row-level `type` hint overrides
/// label-based classification for every cell in that row.
pub fn render_table(section: &Value) -> RenderedTable {
    let spec: TableSpec = serde_json::from_value(section.clone()).unwrap_or_default();
    render_table_spec(&spec)
}

/// Render an already-deserialized table spec
pub fn render_table_spec(spec: &TableSpec) -> RenderedTable {
    let rows: Vec<RenderedRow> = spec
        .rows
        .iter()
        .filter(|row| !row.label.trim().is_empty())
        .map(|row| {
            let hint = row.type_hint.as_deref().and_then(UnitKind::from_hint);
            let width = spec.columns.len().max(row.values.len());
            let cells = (0..width)
                .map(|i| {
                    let value = row.values.get(i).map_or(RawValue::Null, RawValue::from);
                    render_cell(&row.label, &value, hint)
                })
                .collect();
            RenderedRow {
                label: row.label.clone(),
                cells,
            }
        })
        .collect();

    if rows.is_empty() {
        return RenderedTable {
            columns: spec.columns.clone(),
            rows: vec![RenderedRow {
                label: PLACEHOLDER.to_string(),
                cells: vec![Cell::placeholder()],
            }],
        };
    }

    RenderedTable {
        columns: spec.columns.clone(),
        rows,
    }
}
