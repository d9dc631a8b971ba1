//! Ingestion run configuration

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default number of rows submitted per INSERT / transaction
pub const DEFAULT_BATCH_SIZE: usize = 100_000;

/// Default decompression copy buffer (1 MiB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Default directory for decompressed files
pub const DEFAULT_OUTPUT_DIR: &str = "unzipped";

/// Configuration for an ingestion run
#[derive(Debug, Clone)]
pub struct IngestConfig {
    batch_size: usize,
    buffer_size: usize,
    output_dir: PathBuf,
    keep_decompressed: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            buffer_size: DEFAULT_BUFFER_SIZE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            keep_decompressed: true,
        }
    }
}

impl IngestConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows per committed batch
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the decompression copy buffer size in bytes
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Set the directory decompressed files are written to
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Keep or remove decompressed files after each archive finishes
    #[must_use]
    pub fn with_keep_decompressed(mut self, keep: bool) -> Self {
        self.keep_decompressed = keep;
        self
    }

    /// Get the batch size
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Get the decompression buffer size
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Get the output directory for decompressed files
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get whether decompressed files are kept after loading
    #[must_use]
    pub fn keep_decompressed(&self) -> bool {
        self.keep_decompressed
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::config("batch_size must be greater than zero"));
        }
        if self.buffer_size == 0 {
            return Err(Error::config("buffer_size must be greater than zero"));
        }
        Ok(())
    }
}
