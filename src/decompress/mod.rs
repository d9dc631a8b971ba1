//! Streaming bzip2 decompression
//!
//! Decompresses one archive to a destination file through a bounded copy
//! buffer, so memory stays constant regardless of archive size. A failed
//! decompression never leaves a partial destination file behind.

use crate::error::{Error, Result};
use crate::progress::ProgressSink;
use bzip2::read::BzDecoder;
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};


/// Decompress `source` (a bzip2 stream) into `dest`.
///
/// Missing parent directories of `dest` are created first. On success one
/// progress notification naming `dest` is emitted and `dest` is returned.
/// On failure the partial output file is removed and the error propagated.
pub fn decompress(
    source: &Path,
    dest: &Path,
    buffer_size: usize,
    sink: &dyn ProgressSink,
) -> Result<PathBuf> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let input = File::open(source)
        .map_err(|e| Error::decompression(source.display().to_string(), e.to_string()))?;
    let mut decoder = BzDecoder::new(BufReader::new(input));

    let mut output = File::create(dest)?;
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let read = match decoder.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                remove_partial(dest);
                return Err(Error::decompression(
                    source.display().to_string(),
                    e.to_string(),
                ));
            }
        };

        if let Err(e) = output.write_all(&buffer[..read]) {
            remove_partial(dest);
            return Err(Error::Io(e));
        }
    }

    if let Err(e) = output.flush() {
        remove_partial(dest);
        return Err(Error::Io(e));
    }

    tracing::debug!("decompressed {} -> {}", source.display(), dest.display());
    sink.notify(&format!("Decompressed: {}", dest.display()));

    Ok(dest.to_path_buf())
}

/// Best-effort removal of a partially written destination file
fn remove_partial(dest: &Path) {
    if let Err(e) = fs::remove_file(dest) {
        tracing::warn!("could not remove partial file {}: {e}", dest.display());
    }
}
