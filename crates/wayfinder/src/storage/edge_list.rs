//! Edge-list file persistence.
//!
//! Each road is stored as `<source> <destination> <weight>`. Places without
//! outgoing roads are stored as a line holding only their name, so isolated
//! places survive a save/load cycle.

use super::GraphRepository;
use crate::domain::NodeId;
use crate::error::Result;
use crate::graph::{AdjacencyGraph, GraphView, MutableGraph};
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use wayfinder_edgelist::{read_edgelist_resilient, write_edgelist_atomic, Record, Warning};

/// A non-fatal problem found while loading a graph file.
///
/// The offending line is skipped; everything else is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The line is not a valid record.
    ///
    /// **Common causes**: wrong number of tokens, a negative or non-numeric
    /// weight, manual editing errors.
    MalformedLine {
        /// 1-based line number.
        line_number: usize,
        /// Why the line was rejected.
        error: String,
    },

    /// The line names a place that cannot be stored.
    InvalidPlace {
        /// 1-based line number.
        line_number: usize,
        /// Why the name was rejected.
        error: String,
    },
}

impl LoadWarning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedLine { line_number, .. } | Self::InvalidPlace { line_number, .. } => {
                *line_number
            }
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line_number, error } => {
                write!(f, "line {line_number}: skipped malformed line: {error}")
            }
            Self::InvalidPlace { line_number, error } => {
                write!(f, "line {line_number}: skipped invalid place: {error}")
            }
        }
    }
}

impl From<Warning> for LoadWarning {
    fn from(warning: Warning) -> Self {
        match warning {
            Warning::MalformedRecord { line_number, error } => {
                Self::MalformedLine { line_number, error }
            }
            Warning::SkippedLine {
                line_number,
                reason,
            } => Self::InvalidPlace {
                line_number,
                error: reason,
            },
        }
    }
}

/// Converts a graph to edge-list records in graph order.
///
/// Every road becomes an edge record. A place with no outgoing roads becomes a
/// node record at its position in the order.
pub fn graph_to_records<G: GraphView>(graph: &G) -> Vec<Record> {
    let mut records = Vec::with_capacity(graph.edge_count() + graph.node_count());
    for (source, edges) in graph.adjacency() {
        if edges.is_empty() {
            records.push(Record::node(source.as_str()));
        }
        for edge in edges {
            records.push(Record::edge(
                source.as_str(),
                edge.destination.as_str(),
                edge.weight,
            ));
        }
    }
    records
}

/// Atomically writes a graph to an edge-list file.
///
/// # Errors
///
/// Returns [`crate::error::Error::Persistence`] if the file cannot be written.
/// The previous file is left unchanged in that case.
pub async fn save_to_edgelist<G: GraphView + Sync>(graph: &G, path: &Path) -> Result<usize> {
    let records = graph_to_records(graph);
    let written = write_edgelist_atomic(path, &records).await?;
    tracing::info!(
        path = %path.display(),
        places = graph.node_count(),
        roads = graph.edge_count(),
        "graph saved"
    );
    Ok(written)
}

/// Replaces the contents of `graph` with the graph stored in an edge-list file.
///
/// The file is read completely before the graph is cleared, so a file that
/// cannot be read leaves the graph untouched. Records are then replayed: a
/// node line adds a place, an edge line adds both places and one road.
///
/// # Errors
///
/// Returns [`crate::error::Error::Persistence`] only if the file cannot be
/// opened or read. Bad lines are skipped and reported as [`LoadWarning`]s.
pub async fn load_from_edgelist<G: MutableGraph + Send>(
    graph: &mut G,
    path: &Path,
) -> Result<Vec<LoadWarning>> {
    let (records, skipped) = read_edgelist_resilient(path).await?;
    let mut warnings: Vec<LoadWarning> = skipped.into_iter().map(Into::into).collect();

    graph.clear();
    for entry in records {
        if let Err(error) = replay(graph, entry.record) {
            warnings.push(LoadWarning::InvalidPlace {
                line_number: entry.line_number,
                error: error.to_string(),
            });
        }
    }
    warnings.sort_by_key(LoadWarning::line_number);

    tracing::info!(
        path = %path.display(),
        places = graph.node_count(),
        roads = graph.edge_count(),
        warnings = warnings.len(),
        "graph loaded"
    );
    Ok(warnings)
}

fn replay<G: MutableGraph>(graph: &mut G, record: Record) -> Result<()> {
    match record {
        Record::Node(name) => {
            graph.add_node(NodeId::new(name)?);
            Ok(())
        }
        Record::Edge {
            source,
            destination,
            weight,
        } => {
            let source = NodeId::new(source)?;
            let destination = NodeId::new(destination)?;
            let (from, to) = (
                source.as_str().to_string(),
                destination.as_str().to_string(),
            );
            graph.add_node(source);
            graph.add_node(destination);
            graph.add_edge(&from, &to, weight)
        }
    }
}

/// Repository backed by an edge-list file.
///
/// A missing file loads as an empty graph.
#[derive(Debug, Clone)]
pub struct EdgeListRepository {
    path: PathBuf,
}

impl EdgeListRepository {
    /// Creates a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The graph file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GraphRepository for EdgeListRepository {
    async fn load(&self, graph: &mut AdjacencyGraph) -> Result<Vec<LoadWarning>> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::debug!(
                path = %self.path.display(),
                "graph file missing, starting empty"
            );
            graph.clear();
            return Ok(Vec::new());
        }
        let warnings = load_from_edgelist(graph, &self.path).await?;
        for warning in &warnings {
            tracing::warn!(%warning, "graph file load warning");
        }
        Ok(warnings)
    }

    async fn save(&self, graph: &AdjacencyGraph) -> Result<()> {
        save_to_edgelist(graph, &self.path).await?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("edge list ({})", self.path.display())
    }
}
