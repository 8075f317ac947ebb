//! Atomic write operations for edge-list files.
//!
//! Data is written to a sibling temporary file, flushed, and then renamed over
//! the target. On POSIX systems a rename within one filesystem is atomic, so a
//! crash mid-write leaves the previous file intact. The temporary file may be
//! left behind; the next successful write replaces it.

use crate::error::Result;
use crate::record::Record;
use crate::writer::EdgeListWriter;
use std::borrow::Borrow;
use std::path::{Path, PathBuf};
use tokio::fs::File;

/// Atomically writes records to an edge-list file.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, if a
/// record cannot be represented, or if the final rename fails. On failure the
/// original file is unchanged and the temporary file is removed on a best
/// effort basis.
///
/// # Examples
///
/// ```no_run
/// use wayfinder_edgelist::{write_edgelist_atomic, Record};
///
/// # async fn example() -> wayfinder_edgelist::Result<()> {
/// let records = vec![Record::edge("A", "B", 2), Record::edge("B", "A", 2)];
/// write_edgelist_atomic("graph.txt", &records).await?;
/// # Ok(())
/// # }
/// ```
pub async fn write_edgelist_atomic<I, P>(path: P, records: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Borrow<Record>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    let written = match write_to_temp_file(&temp_path, records).await {
        Ok(written) => written,
        Err(e) => {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e);
        }
    };

    tokio::fs::rename(&temp_path, path).await?;
    tracing::debug!(path = %path.display(), records = written, "edge list written");

    Ok(written)
}

/// Builds the temporary path by appending `.tmp` to the file extension.
fn make_temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.to_path_buf();
    let new_extension = match path.extension() {
        Some(ext) => {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".tmp");
            new_ext
        }
        None => std::ffi::OsString::from("tmp"),
    };
    temp_path.set_extension(new_extension);
    temp_path
}

async fn write_to_temp_file<I>(temp_path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Borrow<Record>,
{
    let file = File::create(temp_path).await?;
    let mut writer = EdgeListWriter::new(file);
    writer.write_all(records).await?;
    writer.flush().await?;
    Ok(writer.records_written())
}
