//! Domain types for the place-and-road graph.
//!
//! A place is identified by a [`NodeId`]. Roads are directed [`Edge`]s owned by
//! their source place. Queries return [`Route`]s.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Non-negative road length.
pub type Weight = u32;

/// Accumulated length of a route.
pub type Distance = u64;

/// Identifier of a place.
///
/// A valid identifier is non-empty, at most [`NodeId::MAX_LEN`] characters,
/// contains no whitespace or control characters, and does not start with `#`.
/// These rules keep every identifier representable in an edge-list file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Longest accepted identifier, in characters.
    pub const MAX_LEN: usize = 128;

    /// Create a validated place identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeId`] describing the first rule the name breaks.
    ///
    /// ```
    /// use wayfinder::domain::NodeId;
    ///
    /// assert!(NodeId::new("Fasil-Ghebbi").is_ok());
    /// assert!(NodeId::new("Fasil Ghebbi").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate(&id).map_err(Error::InvalidNodeId)?;
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(id: &str) -> std::result::Result<(), String> {
    if id.is_empty() {
        return Err("place name cannot be empty".to_string());
    }
    let len = id.chars().count();
    if len > NodeId::MAX_LEN {
        return Err(format!(
            "place name is {len} characters, the limit is {}",
            NodeId::MAX_LEN
        ));
    }
    if id.chars().any(char::is_whitespace) {
        let hint = "use `-` or `_` instead";
        return Err(format!("`{id}` contains whitespace, {hint}"));
    }
    if id.chars().any(char::is_control) {
        let shown = id.escape_debug();
        return Err(format!("`{shown}` contains control characters"));
    }
    if id.starts_with('#') {
        return Err(format!("`{id}` cannot start with `#`"));
    }
    Ok(())
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for NodeId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A directed road, stored in the outgoing list of its source place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Place the road leads to.
    pub destination: NodeId,

    /// Road length.
    pub weight: Weight,
}

/// Result of adding a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeInsertion {
    /// The place was new.
    Added,
    /// The place was already present; nothing changed.
    AlreadyExists,
}

/// A path through the graph together with its total length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Places from start to destination, both included.
    pub nodes: Vec<NodeId>,

    /// Sum of the road lengths along the path.
    pub distance: Distance,
}

impl Route {
    /// Number of roads travelled.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
