//! Async reading and writing of weighted edge lists.
//!
//! An edge list is a plain-text file with one record per line:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! Fasil-Ghebbi Gondar-Castle 2
//! Gondar-Castle Fasil-Ghebbi 2
//! Blue-Nile-Falls
//! ```
//!
//! Three tokens describe a directed edge `<source> <destination> <weight>`.
//! A single token declares a node with no outgoing edges.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod record;
pub mod resilient;
pub mod warning;
pub mod writer;

pub use atomic::write_edgelist_atomic;
pub use error::{Error, Result};
pub use reader::EdgeListReader;
pub use record::{ParseRecordError, Record};
pub use resilient::{read_edgelist_resilient, LineRecord};
pub use warning::{Warning, WarningCollector};
pub use writer::EdgeListWriter;
