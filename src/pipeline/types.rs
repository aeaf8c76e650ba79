//! Run result types

use crate::table::EmptyReason;
use std::path::{Path, PathBuf};

/// How the run as a whole ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The document was fetched and every output was attempted
    Completed,
    /// No document to work on; nothing was extracted
    NoData {
        /// Fetch error, if the fetch itself failed
        error: Option<String>,
    },
}

/// What happened to one output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// File written
    Written { path: PathBuf, rows: usize },
    /// Nothing to write
    Empty { reason: EmptyReason },
    /// The writer failed; other outputs are unaffected
    Failed { error: String },
}

/// Per-output report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    /// Output name from the config
    pub name: String,
    /// Dotted extraction path
    pub path: String,
    /// Result
    pub outcome: EntryOutcome,
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub status: RunStatus,
    pub entries: Vec<EntryReport>,
}

impl RunSummary {
    pub(crate) fn no_data(error: Option<String>) -> Self {
        Self {
            status: RunStatus::NoData { error },
            entries: Vec::new(),
        }
    }

    pub(crate) fn completed(entries: Vec<EntryReport>) -> Self {
        Self {
            status: RunStatus::Completed,
            entries,
        }
    }

    /// Whether the run stopped before extraction
    pub fn is_no_data(&self) -> bool {
        matches!(self.status, RunStatus::NoData { .. })
    }

    /// Report for the output named `name`
    pub fn entry(&self, name: &str) -> Option<&EntryReport> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Paths of all files written, in processing order
    pub fn written_paths(&self) -> Vec<&Path> {
        self.entries
            .iter()
            .filter_map(|e| match &e.outcome {
                EntryOutcome::Written { path, .. } => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    /// Number of files written
    pub fn files_written(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Written { .. }))
    }

    /// Number of outputs skipped as empty
    pub fn empty_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Empty { .. }))
    }

    /// Number of outputs whose write failed
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
