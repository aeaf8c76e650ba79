//! Pipeline module
//!
//! Runs one fetch followed by one extract/tabularize/write cycle per
//! configured output.
//!
//! # Overview
//!
//! - `Pipeline` - owns the config, a `DocumentSource` and a `TableWriter`
//! - `RunSummary` - per-output outcomes
//!
//! A failed or empty fetch stops a run early without error. A missing or
//! malformed list yields no file for that output; a write failure is logged
//! and the next output is processed.

mod types;

pub use types::{EntryOutcome, EntryReport, RunStatus, RunSummary};

use crate::config::{OutputSpec, PipelineConfig};
use crate::error::{Result, ResultExt};
use crate::extract::extract;
use crate::http::{DocumentSource, HttpSource};
use crate::output::{ParquetTableWriter, TableWriter};
use crate::table::tabularize;
use crate::types::{is_empty_document, JsonValue};
use std::fs;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Extraction pipeline
pub struct Pipeline {
    config: PipelineConfig,
    source: Box<dyn DocumentSource>,
    writer: Box<dyn TableWriter>,
}

impl Pipeline {
    /// Create a pipeline from its parts
    pub fn new(
        config: PipelineConfig,
        source: impl DocumentSource + 'static,
        writer: impl TableWriter + 'static,
    ) -> Self {
        Self {
            config,
            source: Box::new(source),
            writer: Box::new(writer),
        }
    }

    /// Pipeline fetching `config.source.url` over HTTP and writing Parquet
    pub fn from_config(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let source = HttpSource::with_config(&config.source.url, config.source.http_client_config())?;
        let writer = ParquetTableWriter::new(config.compression);
        Ok(Self::new(config, source, writer))
    }

    /// Replace the document source
    #[must_use]
    pub fn with_source(mut self, source: impl DocumentSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Run configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Create the output directory, fetch the document and process it
    ///
    /// A failed or empty fetch gives a summary with `RunStatus::NoData`.
    /// Returns `Err` when the output directory cannot be created or the
    /// source fails for a reason other than a fetch failure (e.g. a local
    /// input file that cannot be read).
    pub async fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        info!("Starting extraction run");

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create '{}'", output_dir.display()))?;

        let source = self.source.describe();
        info!(source = %source, "Fetching document");

        let document = match self.source.fetch().await {
            Ok(document) => document,
            Err(e) if e.is_fetch_failure() => {
                error!(source = %source, error = %e, "Failed to fetch document");
                info!("Run finished without data");
                return Ok(RunSummary::no_data(Some(e.to_string())));
            }
            Err(e) => return Err(e),
        };

        if is_empty_document(&document) {
            warn!(source = %source, "Document is empty");
            info!("Run finished without data");
            return Ok(RunSummary::no_data(None));
        }
        info!("Document fetched");

        let summary = self.process_document(&document);
        info!(
            written = summary.files_written(),
            empty = summary.empty_count(),
            failed = summary.failed_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Run finished"
        );
        Ok(summary)
    }

    /// Extract and write every configured output from `document`
    ///
    /// Outputs are processed in config order; each is independent of the
    /// others. The output directory must already exist.
    pub fn process_document(&self, document: &JsonValue) -> RunSummary {
        let entries = self
            .config
            .outputs
            .iter()
            .map(|spec| self.process_entry(document, spec))
            .collect();
        RunSummary::completed(entries)
    }

    fn process_entry(&self, document: &JsonValue, spec: &OutputSpec) -> EntryReport {
        let file_name = spec.file_name(self.writer.extension());
        let table = tabularize(extract(document, &spec.path), spec.path.terminal_key());

        let outcome = if let Some(reason) = table.empty_reason() {
            info!(file = %file_name, path = %spec.path, %reason, "Table is empty, no file written");
            EntryOutcome::Empty { reason }
        } else {
            let target = self.config.output_dir.join(&file_name);
            debug!(file = %file_name, columns = ?table.columns(), "Writing table");
            match self.writer.write_table(&table, &target) {
                Ok(rows) => {
                    info!(file = %target.display(), rows, "File written");
                    EntryOutcome::Written { path: target, rows }
                }
                Err(e) => {
                    error!(file = %target.display(), error = %e, "Failed to write file");
                    EntryOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            }
        };

        EntryReport {
            name: spec.name.clone(),
            path: spec.path.to_string(),
            outcome,
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("source", &self.source.describe())
            .field("extension", &self.writer.extension())
            .finish()
    }
}
