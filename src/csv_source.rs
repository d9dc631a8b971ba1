//! Row stream over a decompressed CSV file
//!
//! Thin adapter around the `csv` crate: the header is read once, then the
//! remaining rows are consumed through a one-shot, forward-only iterator.
//! Field-count policy is enforced by the loader, so the underlying reader is
//! configured flexible.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;

/// A comma-delimited UTF-8 file with a header row as the first line
pub struct CsvSource {
    reader: csv::Reader<File>,
}

impl CsvSource {
    /// Open a CSV file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| Error::csv_parse(format!("Failed to open '{}': {e}", path.display())))?;
        Ok(Self { reader })
    }

    /// Read the header row.
    ///
    /// A file without a header row (empty file) is a schema error.
    pub fn headers(&mut self) -> Result<Vec<String>> {
        let headers = self
            .reader
            .headers()
            .map_err(|e| Error::schema(format!("Failed to read header row: {e}")))?;
        if headers.is_empty() {
            return Err(Error::schema("file contains no header row"));
        }
        Ok(headers.iter().map(ToString::to_string).collect())
    }

    /// Consume the source, yielding data rows in file order.
    ///
    /// The stream is non-restartable; the file handle is consumed with it.
    pub fn into_rows(self) -> impl Iterator<Item = Result<Vec<String>>> {
        self.reader.into_records().map(|record| {
            record
                .map(|rec| rec.iter().map(ToString::to_string).collect())
                .map_err(|e| Error::csv_parse(e.to_string()))
        })
    }
}
