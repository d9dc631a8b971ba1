//! DuckDB-backed store implementation

use super::Store;
use crate::error::{Error, Result};
use crate::schema::quote_ident;
use duckdb::{params_from_iter, Connection};
use std::path::Path;

/// Embedded DuckDB store
pub struct DuckdbStore {
    conn: Connection,
}

impl DuckdbStore {
    /// Open a store backed by a database file, creating it if absent
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            Error::config(format!(
                "Failed to open database '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self { conn })
    }

    /// Open an in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::config(format!("Failed to create in-memory database: {e}")))?;
        Ok(Self { conn })
    }

    /// Probe the connection with a trivial query
    pub fn check_connection(&self) -> Result<()> {
        self.conn
            .query_row("SELECT 1", [], |row| row.get::<_, i32>(0))
            .map_err(|e| Error::config(format!("Connection check failed: {e}")))?;
        Ok(())
    }

    /// Whether a table with this name exists
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = ?",
                [table],
                |row| row.get(0),
            )
            .map_err(|e| Error::load(table, format!("Failed to query catalog: {e}")))?;
        Ok(count > 0)
    }

    /// Count the rows currently in `table`
    pub fn count_rows(&self, table: &str) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));
        let count: i64 = self
            .conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|e| Error::load(table, format!("Failed to count rows: {e}")))?;
        Ok(count as u64)
    }

    /// Fetch all rows of the named columns, in insertion order.
    ///
    /// Verification helper used by the CLI summary checks and tests; all
    /// columns are TEXT so every value comes back as a string.
    pub fn select_all(&self, table: &str, columns: &[String]) -> Result<Vec<Vec<String>>> {
        let column_list = columns
            .iter()
            .map(|c| quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("SELECT {column_list} FROM {}", quote_ident(table));

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| Error::load(table, format!("Failed to prepare select: {e}")))?;

        let rows = stmt
            .query_map([], |row| {
                (0..columns.len())
                    .map(|i| row.get::<_, String>(i))
                    .collect::<std::result::Result<Vec<String>, _>>()
            })
            .map_err(|e| Error::load(table, format!("Failed to query rows: {e}")))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::load(table, format!("Failed to read row: {e}")))?;

        Ok(rows)
    }
}

impl Store for DuckdbStore {
    fn ensure_table(&mut self, table: &str, columns: &[String]) -> Result<()> {
        let column_defs = columns
            .iter()
            .map(|c| format!("{} TEXT", quote_ident(c)))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({column_defs})",
            quote_ident(table)
        );

        tracing::debug!("ensuring table: {sql}");
        self.conn
            .execute_batch(&sql)
            .map_err(|e| Error::schema(format!("Failed to create table '{table}': {e}")))
    }

    fn insert_batch(
        &mut self,
        table: &str,
        columns: &[String],
        rows: &[Vec<String>],
    ) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let column_list = columns
            .iter()
            .map(|c| quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ");
        let row_placeholder = format!("({})", vec!["?"; columns.len()].join(", "));
        let placeholders = vec![row_placeholder; rows.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({column_list}) VALUES {placeholders}",
            quote_ident(table)
        );

        let tx = self
            .conn
            .transaction()
            .map_err(|e| Error::load(table, format!("Failed to begin transaction: {e}")))?;

        {
            let mut stmt = tx
                .prepare(&sql)
                .map_err(|e| Error::load(table, format!("Failed to prepare insert: {e}")))?;
            let values = rows.iter().flat_map(|row| row.iter().map(String::as_str));
            stmt.execute(params_from_iter(values))
                .map_err(|e| Error::load(table, format!("Batch insert rejected: {e}")))?;
        }

        tx.commit()
            .map_err(|e| Error::load(table, format!("Commit failed: {e}")))?;

        tracing::debug!("committed batch of {} rows into '{table}'", rows.len());
        Ok(())
    }
}
