//! Edge-list records and their line representation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Marker that starts a comment line.
pub const COMMENT_PREFIX: char = '#';

/// A single line of an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Record {
    /// A node that has no outgoing edges of its own.
    Node(String),

    /// A directed, weighted edge.
    Edge {
        /// Node the edge leaves from.
        source: String,
        /// Node the edge points at.
        destination: String,
        /// Non-negative edge weight.
        weight: u32,
    },
}

/// Why a line could not be parsed as a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRecordError {
    /// The line had neither one nor three tokens.
    #[error("expected `<source> <destination> <weight>` or `<node>`, found {0} tokens")]
    WrongTokenCount(usize),

    /// The weight token was a negative integer.
    #[error("weight `{0}` is negative")]
    NegativeWeight(String),

    /// The weight token was not an integer in range.
    #[error("weight `{0}` is not a non-negative integer")]
    InvalidWeight(String),
}

impl Record {
    /// Convenience constructor for an edge record.
    pub fn edge(source: impl Into<String>, destination: impl Into<String>, weight: u32) -> Self {
        Self::Edge {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }

    /// Convenience constructor for a node record.
    pub fn node(id: impl Into<String>) -> Self {
        Self::Node(id.into())
    }

    /// Check that every token of this record survives a write/read cycle.
    ///
    /// Tokens must be non-empty, must not contain whitespace, and must not
    /// start with the comment marker.
    pub fn validate(&self) -> std::result::Result<(), String> {
        match self {
            Self::Node(id) => validate_token(id),
            Self::Edge {
                source,
                destination,
                ..
            } => {
                validate_token(source)?;
                validate_token(destination)
            }
        }
    }
}

fn validate_token(token: &str) -> std::result::Result<(), String> {
    if token.is_empty() {
        return Err("empty identifier".to_string());
    }
    if token.chars().any(char::is_whitespace) {
        return Err(format!("identifier `{token}` contains whitespace"));
    }
    if token.starts_with(COMMENT_PREFIX) {
        return Err(format!(
            "identifier `{token}` starts with the comment marker `{COMMENT_PREFIX}`"
        ));
    }
    Ok(())
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => write!(f, "{id}"),
            Self::Edge {
                source,
                destination,
                weight,
            } => write!(f, "{source} {destination} {weight}"),
        }
    }
}

impl FromStr for Record {
    type Err = ParseRecordError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [node] => Ok(Self::Node((*node).to_string())),
            [source, destination, weight] => Ok(Self::Edge {
                source: (*source).to_string(),
                destination: (*destination).to_string(),
                weight: parse_weight(weight)?,
            }),
            other => Err(ParseRecordError::WrongTokenCount(other.len())),
        }
    }
}

fn parse_weight(token: &str) -> std::result::Result<u32, ParseRecordError> {
    token.parse::<u32>().map_err(|_| {
        let is_negative_integer = token
            .strip_prefix('-')
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
        if is_negative_integer {
            ParseRecordError::NegativeWeight(token.to_string())
        } else {
            ParseRecordError::InvalidWeight(token.to_string())
        }
    })
}
