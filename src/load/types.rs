//! Types for the batch loader

use crate::error::Error;

/// A load that stopped partway through its row stream.
///
/// Batches commit independently, so rows committed before the failure stay
/// in the table. The orchestrator uses `rows_committed` to distinguish a
/// partial load from a file that never produced data.
#[derive(Debug)]
pub struct LoadFailure {
    /// Rows durably committed before the failure
    pub rows_committed: u64,
    /// The underlying error
    pub error: Error,
}

impl LoadFailure {
    /// Wrap an error that occurred before any row was committed
    pub fn before_first_commit(error: Error) -> Self {
        Self {
            rows_committed: 0,
            error,
        }
    }
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} rows committed before failure)",
            self.error, self.rows_committed
        )
    }
}

/// Result of a load: total rows on success, a [`LoadFailure`] otherwise
pub type LoadResult = std::result::Result<u64, LoadFailure>;
