//! Table module
//!
//! Turns the value found at an extraction path into a [`Table`].
//!
//! # Overview
//!
//! - A non-empty list of strings becomes one column named after the
//!   path's terminal key (see [`column_name_for`])
//! - A non-empty list of objects becomes one row per object, columns in
//!   first-seen key order
//! - Anything else becomes an empty table carrying an [`EmptyReason`]

mod types;

pub use types::{EmptyReason, Table, TableShape};

use crate::types::{JsonObject, JsonValue};
use tracing::warn;

/// Build a table from an extracted value
///
/// `terminal_key` is the last key of the extraction path and names the
/// column of string-list tables. Never fails: unrecognised shapes give an
/// empty table.
pub fn tabularize(value: Option<&JsonValue>, terminal_key: &str) -> Table {
    let Some(value) = value else {
        return Table::empty(EmptyReason::Absent);
    };

    let JsonValue::Array(items) = value else {
        return Table::empty(EmptyReason::NotAList);
    };

    if items.is_empty() {
        return Table::empty(EmptyReason::EmptyList);
    }

    if items.iter().all(JsonValue::is_string) {
        let column = column_name_for(terminal_key);
        let rows = items
            .iter()
            .map(|item| {
                let mut row = JsonObject::new();
                row.insert(column.clone(), item.clone());
                JsonValue::Object(row)
            })
            .collect();
        return Table::from_parts(TableShape::StringList, vec![column], rows);
    }

    if !items.iter().all(JsonValue::is_object) {
        warn!(
            key = terminal_key,
            "List mixes objects with other values, skipping"
        );
        return Table::empty(EmptyReason::ShapeMismatch);
    }

    let columns = union_of_keys(items);
    if columns.is_empty() {
        return Table::empty(EmptyReason::NoColumns);
    }

    Table::from_parts(TableShape::Records, columns, items.clone())
}

/// Column name for a list of strings found under `key`
///
/// Trailing lowercase `s` characters are stripped and the first character
/// upper-cased: `Notas` becomes `Nota`. Inner characters are left alone, so
/// `UnidadesDeMedida` keeps its name. A key made only of `s` is used whole
/// rather than giving an empty column name. This is a naming heuristic, not
/// real singularisation; irregular plurals come out wrong.
pub fn column_name_for(key: &str) -> String {
    let stem = match key.trim_end_matches('s') {
        "" => key,
        stem => stem,
    };

    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keys of all records, in the order they are first seen
fn union_of_keys(records: &[JsonValue]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        if let JsonValue::Object(obj) = record {
            for key in obj.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}
