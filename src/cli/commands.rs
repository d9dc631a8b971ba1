//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tabload - bulk loader for compressed tabular archives
#[derive(Parser, Debug)]
#[command(name = "tabload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for the run summary
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load every .csv.bz2 archive in a directory into the database
    Ingest {
        /// Directory containing the archives
        #[arg(short, long)]
        directory: PathBuf,

        /// Directory decompressed files are written to
        #[arg(long, default_value = "unzipped")]
        output_dir: PathBuf,

        /// Database file path, or ":memory:" for a throwaway database
        #[arg(long, default_value = "tabload.db")]
        database: String,

        /// Rows per committed batch
        #[arg(long, default_value_t = crate::config::DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Remove decompressed files once their archive finishes
        #[arg(long)]
        remove_decompressed: bool,
    },

    /// Test that the database can be opened and queried
    Check {
        /// Database file path, or ":memory:"
        #[arg(long, default_value = "tabload.db")]
        database: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON summary
    Json,
    /// Human-readable summary
    Pretty,
}
