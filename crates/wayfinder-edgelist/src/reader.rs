//! Edge-list reading operations.
//!
//! This module provides async, line-by-line reading of edge lists with line
//! number tracking for error reporting.

use crate::error::{Error, Result};
use crate::record::{Record, COMMENT_PREFIX};
use crate::warning::{Warning, WarningCollector};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Outcome of pulling one raw line from the underlying reader.
enum Line {
    /// End of input.
    Eof,
    /// Blank or comment line.
    Ignored,
    /// Line that is not valid UTF-8.
    NotUtf8,
    /// Content line, trimmed.
    Content(String),
}

/// Async reader for edge-list data.
///
/// `EdgeListReader` wraps an async reader in a [`BufReader`] and yields
/// [`Record`]s. Blank lines and lines starting with `#` are skipped. Line
/// numbers are 1-based and count every physical line, including skipped ones.
///
/// # Examples
///
/// ```
/// use wayfinder_edgelist::{EdgeListReader, Record};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> wayfinder_edgelist::Result<()> {
/// let data = b"A B 3\n# comment\nC\n";
/// let mut reader = EdgeListReader::new(&data[..]);
///
/// assert_eq!(reader.read_record().await?, Some(Record::edge("A", "B", 3)));
/// assert_eq!(reader.read_record().await?, Some(Record::node("C")));
/// assert_eq!(reader.read_record().await?, None);
/// assert_eq!(reader.line_number(), 3);
/// # Ok(())
/// # }
/// ```
pub struct EdgeListReader<R> {
    /// Buffered reader wrapping the underlying async reader.
    reader: BufReader<R>,
    /// Number of physical lines consumed so far.
    line_number: usize,
    /// Reused line buffer.
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> EdgeListReader<R> {
    /// Creates a new `EdgeListReader` wrapping the given async reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the 1-based number of the last line read, or 0 before any read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next record, failing on the first malformed line.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] naming the line number when a line is
    /// not valid UTF-8 or cannot be parsed, and [`Error::Io`] on read failure.
    pub async fn read_record(&mut self) -> Result<Option<Record>> {
        loop {
            match self.next_line().await? {
                Line::Eof => return Ok(None),
                Line::Ignored => continue,
                Line::NotUtf8 => {
                    return Err(Error::InvalidFormat(format!(
                        "line {}: not valid UTF-8",
                        self.line_number
                    )));
                }
                Line::Content(text) => {
                    return text.parse::<Record>().map(Some).map_err(|e| {
                        Error::InvalidFormat(format!("line {}: {}", self.line_number, e))
                    });
                }
            }
        }
    }

    /// Reads the next record, skipping malformed lines.
    ///
    /// Every skipped line is reported to `warnings`. Only I/O failures are
    /// returned as errors.
    pub async fn read_record_resilient(
        &mut self,
        warnings: &WarningCollector,
    ) -> Result<Option<Record>> {
        loop {
            match self.next_line().await? {
                Line::Eof => return Ok(None),
                Line::Ignored => continue,
                Line::NotUtf8 => warnings.add(Warning::MalformedRecord {
                    line_number: self.line_number,
                    error: "not valid UTF-8".to_string(),
                }),
                Line::Content(text) => match text.parse::<Record>() {
                    Ok(record) => return Ok(Some(record)),
                    Err(e) => warnings.add(Warning::MalformedRecord {
                        line_number: self.line_number,
                        error: e.to_string(),
                    }),
                },
            }
        }
    }

    async fn next_line(&mut self) -> Result<Line> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf).await?;
        if read == 0 {
            return Ok(Line::Eof);
        }
        self.line_number += 1;

        let Ok(text) = std::str::from_utf8(&self.buf) else {
            return Ok(Line::NotUtf8);
        };
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            return Ok(Line::Ignored);
        }
        Ok(Line::Content(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reader_starts_at_line_zero() {
        let reader = EdgeListReader::new(&b""[..]);
        assert_eq!(reader.line_number(), 0);
    }

    #[tokio::test]
    async fn empty_input_yields_none() {
        let mut reader = EdgeListReader::new(&b""[..]);
        assert_eq!(reader.read_record().await.unwrap(), None);
        assert_eq!(reader.line_number(), 0);
    }

    #[tokio::test]
    async fn last_line_without_newline_is_read() {
        let mut reader = EdgeListReader::new(&b"A B 1\nB C 2"[..]);
        assert_eq!(
            reader.read_record().await.unwrap(),
            Some(Record::edge("A", "B", 1))
        );
        assert_eq!(
            reader.read_record().await.unwrap(),
            Some(Record::edge("B", "C", 2))
        );
        assert_eq!(reader.read_record().await.unwrap(), None);
    }

    #[tokio::test]
    async fn crlf_line_endings_are_trimmed() {
        let mut reader = EdgeListReader::new(&b"A B 1\r\nC\r\n"[..]);
        assert_eq!(
            reader.read_record().await.unwrap(),
            Some(Record::edge("A", "B", 1))
        );
        assert_eq!(reader.read_record().await.unwrap(), Some(Record::node("C")));
    }

    #[tokio::test]
    async fn strict_read_reports_line_number() {
        let mut reader = EdgeListReader::new(&b"A B 1\n\nA B x\n"[..]);
        reader.read_record().await.unwrap();
        let Error::InvalidFormat(msg) = reader.read_record().await.unwrap_err() else {
            panic!("expected a format error");
        };
        assert!(msg.starts_with("line 3:"), "got: {msg}");
    }

    #[tokio::test]
    async fn strict_read_rejects_invalid_utf8() {
        let mut reader = EdgeListReader::new(&b"A \xff 1\n"[..]);
        let err = reader.read_record().await.unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[tokio::test]
    async fn resilient_read_skips_and_records_bad_lines() {
        let data = b"A B 1\nA B\n\xfe\nB C -2\nC D 3\n";
        let mut reader = EdgeListReader::new(&data[..]);
        let warnings = WarningCollector::new();

        let first = reader.read_record_resilient(&warnings).await.unwrap();
        let second = reader.read_record_resilient(&warnings).await.unwrap();
        let end = reader.read_record_resilient(&warnings).await.unwrap();

        assert_eq!(first, Some(Record::edge("A", "B", 1)));
        assert_eq!(second, Some(Record::edge("C", "D", 3)));
        assert_eq!(end, None);

        let lines: Vec<usize> = warnings
            .warnings()
            .iter()
            .map(Warning::line_number)
            .collect();
        assert_eq!(lines, vec![2, 3, 4]);
    }
}
