//! Command implementations.
//!
//! - [`init`]: repository creation and configuration
//! - [`ops`]: graph operations producing [`crate::output::Report`]s

pub mod init;
pub mod ops;
