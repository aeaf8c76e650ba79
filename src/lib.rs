//! # sidra-extract
//!
//! Fetches the JSON descriptor of an IBGE/SIDRA table and writes selected
//! lists from it as Parquet files.
//!
//! ## Flow
//!
//! ```text
//! DocumentSource ──► JSON ──► extract(path) ──► tabularize ──► TableWriter
//!   (HTTP GET)                 per OutputSpec     Table          .parquet
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sidra_extract::{Pipeline, PipelineConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let pipeline = Pipeline::from_config(PipelineConfig::default())?;
//!     let summary = pipeline.run().await?;
//!     println!("{} files written", summary.files_written());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Path walking over JSON documents
pub mod extract;

/// Lists to tables
pub mod table;

/// Arrow/Parquet output
pub mod output;

/// HTTP client and document sources
pub mod http;

/// Run configuration
pub mod config;

/// Fetch, extract and write
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{OutputSpec, PipelineConfig};
pub use error::{Error, Result};
pub use extract::{extract, ExtractionPath};
pub use pipeline::{EntryOutcome, Pipeline, RunStatus, RunSummary};
pub use table::{tabularize, Table};
pub use types::{JsonObject, JsonValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
