//! # tabload
//!
//! A bulk loader that moves bzip2-compressed CSV archives into a relational
//! store. Each archive is decompressed in a bounded-memory stream, its header
//! normalized into safe column names, its destination table created if
//! absent (all columns TEXT), and its rows loaded in fixed-size batches, one
//! multi-row INSERT and one transaction commit per batch.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tabload::config::IngestConfig;
//! use tabload::ingest::Ingestor;
//! use tabload::progress::StdoutSink;
//! use tabload::store::DuckdbStore;
//!
//! fn main() -> tabload::Result<()> {
//!     let store = DuckdbStore::open("warehouse.db".as_ref())?;
//!     let sink = StdoutSink::new();
//!     let mut ingestor = Ingestor::new(store, IngestConfig::default(), &sink)?;
//!     let summary = ingestor.run("archives/".as_ref())?;
//!     println!("{} rows loaded", summary.rows_loaded());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Ingestion Orchestrator                   │
//! │   scan dir → per archive: decompress → normalize → load     │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────┬───┴────────┬────────────┬─────────┐
//! │ Decompress │   Schema   │   Store    │    Load    │ Progress│
//! ├────────────┼────────────┼────────────┼────────────┼─────────┤
//! │ bzip2      │ normalize  │ ensure     │ batch      │ stdout  │
//! │ streaming  │ quote      │ table      │ commit     │ sink    │
//! │ 1 MiB buf  │ uniqueness │ insert     │ per batch  │         │
//! └────────────┴────────────┴────────────┴────────────┴─────────┘
//! ```
//!
//! Per-file failures are isolated: a corrupt archive or rejected batch is
//! recorded in the run summary and the next archive proceeds. Because each
//! batch commits independently, a mid-file failure leaves that table loaded
//! up to the last committed batch; the summary reports this distinctly from
//! a file that loaded nothing.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_sign_loss)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Ingestion run configuration
pub mod config;

/// Progress notification sink
pub mod progress;

/// Streaming bzip2 decompression
pub mod decompress;

/// Column-name normalization and identifier quoting
pub mod schema;

/// Relational store boundary and DuckDB implementation
pub mod store;

/// Row stream over a decompressed CSV file
pub mod csv_source;

/// Batched row loading
pub mod load;

/// Ingestion orchestrator and run summary
pub mod ingest;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
