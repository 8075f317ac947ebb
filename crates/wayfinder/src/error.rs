//! Error types for wayfinder operations.

use std::io;
use thiserror::Error;

/// The error type for wayfinder operations.
///
/// The first group of variants are outcomes of graph operations that callers
/// report to the user and then carry on from. The rest are infrastructure
/// failures. [`Error::is_domain`] separates the two.
#[derive(Debug, Error)]
pub enum Error {
    /// A place named by the caller does not exist.
    #[error("Place not found: {0}")]
    NodeNotFound(String),

    /// No road connects the two places in the requested direction.
    #[error("Road not found: {from} -> {to}")]
    EdgeNotFound {
        /// Source place of the missing road.
        from: String,
        /// Destination place of the missing road.
        to: String,
    },

    /// The place already exists.
    #[error("Place already exists: {0}")]
    DuplicateNode(String),

    /// The destination cannot be reached from the start.
    #[error("No path exists from {from} to {to}")]
    NoPathExists {
        /// Start of the requested route.
        from: String,
        /// Destination of the requested route.
        to: String,
    },

    /// A place name that cannot be stored.
    #[error("Invalid place name: {0}")]
    InvalidNodeId(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The graph file could not be read or written.
    #[error("Storage error: {0}")]
    Persistence(#[from] wayfinder_edgelist::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` for outcomes of graph operations that are reported
    /// to the user rather than treated as failures.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::NodeNotFound(_)
                | Self::EdgeNotFound { .. }
                | Self::DuplicateNode(_)
                | Self::NoPathExists { .. }
                | Self::InvalidNodeId(_)
        )
    }

    pub(crate) fn edge_not_found(from: &str, to: &str) -> Self {
        Self::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// A specialized Result type for wayfinder operations.
pub type Result<T> = std::result::Result<T, Error>;
