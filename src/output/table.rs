//! Tabular layout of schemaless records

use crate::types::{JsonValue, Record};
use std::collections::HashSet;

/// Compute the column set for a record collection
///
/// Union of field names across all records, in first-seen order. Records that
/// are not JSON objects contribute no columns. Deterministic record order
/// therefore yields a deterministic header.
pub fn table_columns(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for record in records {
        if let JsonValue::Object(obj) = record {
            for key in obj.keys() {
                if seen.insert(key.clone()) {
                    columns.push(key.clone());
                }
            }
        }
    }

    columns
}

/// Render one cell value
///
/// Missing fields and JSON nulls become empty cells, strings are written
/// verbatim, and nested arrays or objects are serialized as compact JSON text.
pub fn render_cell(value: Option<&JsonValue>) -> String {
    match value {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
