//! Batched row loading
//!
//! Consumes a one-shot row stream, accumulating rows into fixed-size batches.
//! Each full batch goes to the store as a single multi-row INSERT committed in
//! its own transaction; the final partial batch is flushed after the stream
//! ends. A failure on batch N never rolls back batches 1..N-1.

mod types;

pub use types::{LoadFailure, LoadResult};

use crate::error::{Error, Result};
use crate::progress::ProgressSink;
use crate::store::Store;


/// Load `rows` into `table`, committing every `batch_size` rows.
///
/// Every row must have exactly `columns.len()` fields; a mismatch rejects the
/// rest of the file, surfacing how many rows were already committed. A
/// zero-row stream returns 0 without issuing any insert.
pub fn load<S, I>(
    store: &mut S,
    table: &str,
    columns: &[String],
    rows: I,
    batch_size: usize,
    sink: &dyn ProgressSink,
) -> LoadResult
where
    S: Store + ?Sized,
    I: IntoIterator<Item = Result<Vec<String>>>,
{
    let mut batch: Vec<Vec<String>> = Vec::new();
    let mut total: u64 = 0;
    let mut row_number: u64 = 0; // 1-based, counting data rows only

    for row in rows {
        row_number += 1;
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                return Err(LoadFailure {
                    rows_committed: total,
                    error,
                })
            }
        };

        if row.len() != columns.len() {
            return Err(LoadFailure {
                rows_committed: total,
                error: Error::schema(format!(
                    "row {row_number} has {} fields, header has {}",
                    row.len(),
                    columns.len()
                )),
            });
        }

        batch.push(row);
        if batch.len() >= batch_size {
            submit(store, table, columns, &mut batch, &mut total, sink)?;
        }
    }

    if !batch.is_empty() {
        submit(store, table, columns, &mut batch, &mut total, sink)?;
    }

    Ok(total)
}

/// Submit and commit one batch, then clear it and report progress
fn submit<S: Store + ?Sized>(
    store: &mut S,
    table: &str,
    columns: &[String],
    batch: &mut Vec<Vec<String>>,
    total: &mut u64,
    sink: &dyn ProgressSink,
) -> std::result::Result<(), LoadFailure> {
    match store.insert_batch(table, columns, batch) {
        Ok(()) => {
            *total += batch.len() as u64;
            batch.clear();
            sink.notify(&format!("Loaded {total} rows into table '{table}'"));
            Ok(())
        }
        Err(error) => Err(LoadFailure {
            rows_committed: *total,
            error,
        }),
    }
}
