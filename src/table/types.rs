//! Table types

use crate::error::Result;
use crate::output::json_to_arrow;
use crate::types::JsonValue;
use arrow::record_batch::RecordBatch;
use std::fmt;

/// Why a table ended up with no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The extraction path did not resolve
    Absent,
    /// The path resolved to something other than a list
    NotAList,
    /// The path resolved to an empty list
    EmptyList,
    /// The list mixes records with other values, or holds non-string scalars
    ShapeMismatch,
    /// Every record was an empty object
    NoColumns,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EmptyReason::Absent => "path not found",
            EmptyReason::NotAList => "value is not a list",
            EmptyReason::EmptyList => "list is empty",
            EmptyReason::ShapeMismatch => "list elements are neither all strings nor all objects",
            EmptyReason::NoColumns => "records have no fields",
        };
        f.write_str(text)
    }
}

/// What kind of source list a table was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// Nothing to write
    Empty(EmptyReason),
    /// Single named column of strings
    StringList,
    /// One row per JSON object
    Records,
}

/// In-memory table handed to a writer
///
/// Rows are JSON objects keyed by column name. Records are not required to
/// share the same keys; missing keys become nulls on conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    shape: TableShape,
    columns: Vec<String>,
    rows: Vec<JsonValue>,
}

impl Table {
    /// Create an empty table
    pub fn empty(reason: EmptyReason) -> Self {
        Self {
            shape: TableShape::Empty(reason),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn from_parts(shape: TableShape, columns: Vec<String>, rows: Vec<JsonValue>) -> Self {
        Self {
            shape,
            columns,
            rows,
        }
    }

    /// Source shape
    pub fn shape(&self) -> TableShape {
        self.shape
    }

    /// Reason the table is empty, if it is
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self.shape {
            TableShape::Empty(reason) => Some(reason),
            _ => None,
        }
    }

    /// Column names in output order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows as JSON objects
    pub fn rows(&self) -> &[JsonValue] {
        &self.rows
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert to an Arrow RecordBatch with inferred column types
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        json_to_arrow(&self.rows, None)
    }
}
