//! Whole-file loading.
//!
//! [`read_edgelist_resilient`] keeps every valid record and reports the rest
//! as [`Warning`]s, which is what a user-edited graph file usually needs.

use crate::error::Result;
use crate::reader::EdgeListReader;
use crate::record::Record;
use crate::warning::{Warning, WarningCollector};
use std::path::Path;
use tokio::fs::File;

/// A record together with the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Physical line number, counting blank and comment lines.
    pub line_number: usize,
    /// The parsed record.
    pub record: Record,
}

/// Reads every valid record from an edge-list file, collecting warnings for
/// lines that had to be skipped.
///
/// Malformed lines become [`Warning::MalformedRecord`]. Lines that parse but
/// carry an identifier the format cannot hold (for example a token starting
/// with `#`) become [`Warning::SkippedLine`].
///
/// # Errors
///
/// Only I/O failures are returned as errors.
///
/// # Examples
///
/// ```no_run
/// use wayfinder_edgelist::read_edgelist_resilient;
///
/// # async fn example() -> wayfinder_edgelist::Result<()> {
/// let (records, warnings) = read_edgelist_resilient("graph.txt").await?;
/// for warning in &warnings {
///     eprintln!("{warning}");
/// }
/// println!("loaded {} records", records.len());
/// # Ok(())
/// # }
/// ```
pub async fn read_edgelist_resilient<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<LineRecord>, Vec<Warning>)> {
    let file = File::open(path.as_ref()).await?;
    let mut reader = EdgeListReader::new(file);
    let collector = WarningCollector::new();
    let mut records = Vec::new();

    while let Some(record) = reader.read_record_resilient(&collector).await? {
        let line_number = reader.line_number();
        match record.validate() {
            Ok(()) => records.push(LineRecord {
                line_number,
                record,
            }),
            Err(reason) => collector.add(Warning::SkippedLine {
                line_number,
                reason,
            }),
        }
    }

    tracing::debug!(
        path = %path.as_ref().display(),
        records = records.len(),
        warnings = collector.len(),
        "edge list read"
    );

    Ok((records, collector.into_warnings()))
}
