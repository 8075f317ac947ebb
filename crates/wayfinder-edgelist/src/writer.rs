//! Edge-list writing operations.

use crate::error::{Error, Result};
use crate::record::Record;
use std::borrow::Borrow;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Async writer for edge-list data.
///
/// Each [`Record`] is written as one line. Records whose identifiers could not
/// be read back (empty, containing whitespace, or starting with `#`) are
/// rejected before anything is written for them.
///
/// # Examples
///
/// ```
/// use wayfinder_edgelist::{EdgeListWriter, Record};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> wayfinder_edgelist::Result<()> {
/// let mut writer = EdgeListWriter::new(Vec::new());
/// writer.write(&Record::edge("A", "B", 4)).await?;
/// writer.write(&Record::node("C")).await?;
/// writer.flush().await?;
///
/// let bytes = writer.into_inner().into_inner();
/// assert_eq!(bytes, b"A B 4\nC\n");
/// # Ok(())
/// # }
/// ```
pub struct EdgeListWriter<W> {
    /// Buffered writer wrapping the underlying async writer.
    writer: BufWriter<W>,
    /// Number of records written so far.
    records_written: usize,
}

impl<W: AsyncWrite + Unpin> EdgeListWriter<W> {
    /// Creates a new `EdgeListWriter` wrapping the given async writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            records_written: 0,
        }
    }

    /// Returns how many records have been written.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Writes a single record followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the record cannot be represented,
    /// or [`Error::Io`] if the write fails.
    pub async fn write(&mut self, record: &Record) -> Result<()> {
        record.validate().map_err(Error::InvalidFormat)?;
        let line = format!("{record}\n");
        self.writer.write_all(line.as_bytes()).await?;
        self.records_written += 1;
        Ok(())
    }

    /// Writes every record of an iterator, stopping at the first failure.
    pub async fn write_all<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Borrow<Record>,
    {
        for record in records {
            self.write(record.borrow()).await?;
        }
        Ok(())
    }

    /// Flushes buffered data to the underlying writer.
    pub async fn flush(&mut self) -> Result<()> {
        self.writer.flush().await?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying buffered writer.
    ///
    /// This does not flush. Call [`flush`](Self::flush) first.
    #[must_use]
    pub fn into_inner(self) -> BufWriter<W> {
        self.writer
    }
}
