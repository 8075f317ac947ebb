//! Whitespace-delimited token input.

use std::collections::VecDeque;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads whitespace-separated tokens, regardless of how they are split
/// across lines.
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: AsyncBufRead + Unpin> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input is not valid UTF-8.
    pub async fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(input: &[u8]) -> Vec<String> {
        let mut reader = TokenReader::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = reader.next_token().await.unwrap() {
            tokens.push(token);
        }
        tokens
    }

    #[tokio::test]
    async fn splits_on_any_whitespace() {
        assert_eq!(
            collect(b"1 Gondar\n  Lake-Tana\t5\r\n\n0").await,
            vec!["1", "Gondar", "Lake-Tana", "5", "0"]
        );
    }

    #[tokio::test]
    async fn empty_input_has_no_tokens() {
        assert!(collect(b"").await.is_empty());
        assert!(collect(b"   \n\n").await.is_empty());
    }
}
