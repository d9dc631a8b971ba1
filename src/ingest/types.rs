//! Run summary types

use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one archive's pipeline
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Every row reached the table
    Loaded {
        /// Rows committed
        rows: u64,
    },
    /// The pipeline failed after one or more batches had committed
    PartiallyLoaded {
        /// Rows durably committed before the failure
        rows: u64,
        /// What stopped the load
        error: String,
    },
    /// Nothing reached the table
    Failed {
        /// What went wrong
        error: String,
    },
}

impl FileOutcome {
    /// Rows committed for this file
    pub fn rows(&self) -> u64 {
        match self {
            Self::Loaded { rows } | Self::PartiallyLoaded { rows, .. } => *rows,
            Self::Failed { .. } => 0,
        }
    }

    /// Whether this outcome is a clean, complete load
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Report for one processed archive
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Source archive path
    pub archive: PathBuf,
    /// Destination table name
    pub table: String,
    /// What happened
    pub outcome: FileOutcome,
}

/// Summary of a whole ingestion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Per-file reports, in processing order
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    /// Number of archives processed
    pub fn files_processed(&self) -> usize {
        self.reports.len()
    }

    /// Total rows committed across all files
    pub fn rows_loaded(&self) -> u64 {
        self.reports.iter().map(|r| r.outcome.rows()).sum()
    }

    /// Whether any file failed or only partially loaded
    pub fn has_failures(&self) -> bool {
        !self.reports.iter().all(|r| r.outcome.is_loaded())
    }
}
