//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::IngestConfig;
use crate::error::Result;
use crate::ingest::{FileOutcome, Ingestor, RunSummary};
use crate::progress::{ProgressSink, StdoutSink};
use crate::store::DuckdbStore;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, returning the process exit code.
    ///
    /// A run with any failed or partially loaded file exits non-zero so
    /// operators and scripts can tell a clean run from a degraded one.
    pub fn run(&self) -> Result<i32> {
        match &self.cli.command {
            Commands::Ingest {
                directory,
                output_dir,
                database,
                batch_size,
                remove_decompressed,
            } => self.ingest(
                directory,
                output_dir,
                database,
                *batch_size,
                *remove_decompressed,
            ),
            Commands::Check { database } => Self::check(database),
        }
    }

    /// Run the ingestion pipeline over a directory of archives
    fn ingest(
        &self,
        directory: &Path,
        output_dir: &Path,
        database: &str,
        batch_size: usize,
        remove_decompressed: bool,
    ) -> Result<i32> {
        let config = IngestConfig::new()
            .with_batch_size(batch_size)
            .with_output_dir(output_dir)
            .with_keep_decompressed(!remove_decompressed);

        // A connection failure here is fatal: no archives are touched
        let store = open_store(database)?;
        let sink = StdoutSink::new();
        sink.notify(&format!("Connected to database '{database}'"));

        let mut ingestor = Ingestor::new(store, config, &sink)?;
        let summary = ingestor.run(directory)?;
        drop(ingestor); // release the connection before reporting

        self.print_summary(&summary)?;
        Ok(if summary.has_failures() { 1 } else { 0 })
    }

    /// Probe the database connection
    fn check(database: &str) -> Result<i32> {
        let store = open_store(database)?;
        store.check_connection()?;
        println!("Connection to '{database}' OK");
        Ok(0)
    }

    /// Print the run summary in the requested format
    fn print_summary(&self, summary: &RunSummary) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(summary)?);
            }
            OutputFormat::Pretty => {
                for report in &summary.reports {
                    let line = match &report.outcome {
                        FileOutcome::Loaded { rows } => {
                            format!("loaded     {} rows", rows)
                        }
                        FileOutcome::PartiallyLoaded { rows, error } => {
                            format!("partial    {} rows committed - {error}", rows)
                        }
                        FileOutcome::Failed { error } => format!("failed     {error}"),
                    };
                    println!("{:<24} {line}", report.table);
                }
                println!(
                    "{} file(s) processed, {} row(s) loaded",
                    summary.files_processed(),
                    summary.rows_loaded()
                );
            }
        }
        Ok(())
    }
}

/// Open the store, treating ":memory:" as an in-memory database
fn open_store(database: &str) -> Result<DuckdbStore> {
    if database == ":memory:" {
        DuckdbStore::open_in_memory()
    } else {
        DuckdbStore::open(Path::new(database))
    }
}
