//! Error types for wayfinder-edgelist operations.

use std::io;
use thiserror::Error;

/// The error type for wayfinder-edgelist operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line or a record could not be represented in the edge-list format.
    #[error("Invalid edge list format: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for wayfinder-edgelist operations.
pub type Result<T> = std::result::Result<T, Error>;
