//! Table writers
//!
//! The pipeline hands each non-empty [`Table`] to a [`TableWriter`]; the
//! writer decides the file format and extension.

use super::writer::{write_batch_to_parquet, ParquetCompression};
use crate::error::{Error, Result};
use crate::table::Table;
use std::path::Path;

/// Persists one table to one file
pub trait TableWriter: Send + Sync {
    /// File extension without the leading dot
    fn extension(&self) -> &str;

    /// Write `table` to `path`, replacing any existing file
    ///
    /// Returns the number of rows written. Writing an empty table is an
    /// error; callers skip those.
    fn write_table(&self, table: &Table, path: &Path) -> Result<usize>;
}

/// Writes tables as Parquet files without an index column
#[derive(Debug, Clone, Copy, Default)]
pub struct ParquetTableWriter {
    compression: ParquetCompression,
}

impl ParquetTableWriter {
    /// Create a writer using `compression`
    pub fn new(compression: ParquetCompression) -> Self {
        Self { compression }
    }
}

impl TableWriter for ParquetTableWriter {
    fn extension(&self) -> &str {
        "parquet"
    }

    fn write_table(&self, table: &Table, path: &Path) -> Result<usize> {
        if table.is_empty() {
            return Err(Error::output(format!(
                "Refusing to write empty table to '{}'",
                path.display()
            )));
        }

        let batch = table.to_record_batch()?;
        write_batch_to_parquet(path, &batch, self.compression)
    }
}
