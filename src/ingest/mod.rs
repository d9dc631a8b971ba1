//! Ingestion orchestrator
//!
//! Scans an input directory for `.csv.bz2` archives and drives each one
//! through decompression, schema normalization, table provisioning and the
//! batch loader. Archives are processed sequentially; one archive's failure
//! is recorded and the run continues with the next.

mod types;

pub use types::{FileOutcome, FileReport, RunSummary};

use crate::config::IngestConfig;
use crate::csv_source::CsvSource;
use crate::decompress::decompress;
use crate::error::Result;
use crate::load::{self, LoadFailure, LoadResult};
use crate::progress::ProgressSink;
use crate::schema::{check_unique, normalize_columns};
use crate::store::Store;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Filename suffix that marks a compressed tabular archive
const ARCHIVE_SUFFIX: &str = ".csv.bz2";

/// Drives the whole ingestion run over one store connection.
///
/// The ingestor owns the store for the duration of the run; dropping it
/// releases the connection.
pub struct Ingestor<'a, S: Store> {
    store: S,
    config: IngestConfig,
    sink: &'a dyn ProgressSink,
}

impl<'a, S: Store> Ingestor<'a, S> {
    /// Create a new ingestor over a store connection
    pub fn new(store: S, config: IngestConfig, sink: &'a dyn ProgressSink) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            sink,
        })
    }

    /// Process every recognized archive in `input_dir`.
    ///
    /// Fails only if the directory itself cannot be read; per-archive errors
    /// land in the summary.
    pub fn run(&mut self, input_dir: &Path) -> Result<RunSummary> {
        let archives = discover_archives(input_dir)?;
        tracing::info!(
            "found {} archive(s) in {}",
            archives.len(),
            input_dir.display()
        );

        let mut summary = RunSummary::default();
        for (archive, table) in archives {
            self.sink
                .notify(&format!("Loading {} into table '{table}'", archive.display()));

            let outcome = match self.ingest_archive(&archive, &table) {
                Ok(rows) => {
                    self.sink.notify(&format!(
                        "Finished table '{table}': {rows} rows loaded"
                    ));
                    FileOutcome::Loaded { rows }
                }
                Err(failure) if failure.rows_committed > 0 => {
                    self.sink.notify(&format!(
                        "Table '{table}' partially loaded ({} rows committed): {}",
                        failure.rows_committed, failure.error
                    ));
                    FileOutcome::PartiallyLoaded {
                        rows: failure.rows_committed,
                        error: failure.error.to_string(),
                    }
                }
                Err(failure) => {
                    self.sink.notify(&format!(
                        "Failed to load {} into table '{table}': {}",
                        archive.display(),
                        failure.error
                    ));
                    FileOutcome::Failed {
                        error: failure.error.to_string(),
                    }
                }
            };

            summary.reports.push(FileReport {
                archive,
                table,
                outcome,
            });
        }

        Ok(summary)
    }

    /// Consume the ingestor and hand back the store connection
    pub fn into_store(self) -> S {
        self.store
    }

    /// Run one archive through the full pipeline
    fn ingest_archive(&mut self, archive: &Path, table: &str) -> LoadResult {
        let dest = self.decompressed_path(archive);
        decompress(archive, &dest, self.config.buffer_size(), self.sink)
            .map_err(LoadFailure::before_first_commit)?;

        let result = self.load_csv(&dest, table);

        if !self.config.keep_decompressed() {
            if let Err(e) = fs::remove_file(&dest) {
                tracing::warn!("could not remove {}: {e}", dest.display());
            }
        }

        result
    }

    /// Normalize the header, provision the table and load the rows
    fn load_csv(&mut self, path: &Path, table: &str) -> LoadResult {
        let mut source = CsvSource::open(path).map_err(LoadFailure::before_first_commit)?;
        let header = source.headers().map_err(LoadFailure::before_first_commit)?;

        let columns = normalize_columns(&header);
        check_unique(&columns).map_err(LoadFailure::before_first_commit)?;

        self.store
            .ensure_table(table, &columns)
            .map_err(LoadFailure::before_first_commit)?;

        load::load(
            &mut self.store,
            table,
            &columns,
            source.into_rows(),
            self.config.batch_size(),
            self.sink,
        )
    }

    /// Where the decompressed copy of `archive` lands
    fn decompressed_path(&self, archive: &Path) -> PathBuf {
        let file_name = archive
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let decompressed = file_name.strip_suffix(".bz2").unwrap_or(&file_name);
        self.config.output_dir().join(decompressed)
    }
}

/// List recognized archives in `dir` with their derived table names,
/// sorted by file name for a deterministic processing order.
fn discover_archives(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        if let Some(table) = table_name(&file_name) {
            archives.push((entry.path(), table));
        }
    }
    archives.sort();
    Ok(archives)
}

/// Derive a table name by stripping the archive and tabular suffixes.
///
/// Returns `None` for files that are not recognized archives.
pub(crate) fn table_name(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(ARCHIVE_SUFFIX)
        .filter(|stem| !stem.is_empty())
        .map(ToString::to_string)
}
