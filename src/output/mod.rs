//! Output module
//!
//! Handles Arrow RecordBatch creation and Parquet file writing.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Inferring Arrow schemas from JSON records
//! - Converting JSON to Arrow RecordBatches (and back)
//! - Writing Parquet files
//! - The `TableWriter` seam used by the pipeline

mod schema;
mod sink;
mod writer;

pub use schema::{arrow_to_json, infer_schema, json_to_arrow};
pub use sink::{ParquetTableWriter, TableWriter};
pub use writer::{write_batch_to_parquet, ParquetCompression};

#[cfg(test)]
mod tests;
