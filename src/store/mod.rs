//! Relational store boundary
//!
//! The pipeline talks to the database through the [`Store`] trait so the
//! loader and orchestrator can be exercised against a mock in tests. The
//! shipped implementation is [`DuckdbStore`], an embedded DuckDB connection.

mod duckdb;

pub use self::duckdb::DuckdbStore;

use crate::error::Result;


/// A relational store that can provision tables and accept row batches.
///
/// Identifiers passed in are raw (already normalized, not yet quoted);
/// implementations are responsible for safe quoting and for binding values
/// as parameters rather than concatenating them into SQL.
pub trait Store {
    /// Create `table` with one TEXT column per entry of `columns` if it does
    /// not already exist. Re-running against an existing table is a no-op.
    fn ensure_table(&mut self, table: &str, columns: &[String]) -> Result<()>;

    /// Insert `rows` into `table` as a single multi-row INSERT inside one
    /// transaction, committed before returning. Every row must have exactly
    /// `columns.len()` fields. An empty batch is a no-op.
    fn insert_batch(&mut self, table: &str, columns: &[String], rows: &[Vec<String>])
        -> Result<()>;
}
