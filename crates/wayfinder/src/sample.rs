//! Built-in sample map of Gondar landmarks.

use crate::domain::{NodeId, Weight};
use crate::error::Result;
use crate::graph::{AdjacencyGraph, MutableGraph};

/// Two-way roads of the sample map.
pub const SAMPLE_ROADS: [(&str, &str, Weight); 6] = [
    ("Fasil-Ghebbi", "Gondar-Castle", 2),
    ("Fasil-Ghebbi", "Debre-Birhan-Selassie", 3),
    ("Gondar-Castle", "Lake-Tana", 5),
    ("Debre-Birhan-Selassie", "Church-of-St-Mary", 4),
    ("Lake-Tana", "Blue-Nile-Falls", 10),
    ("Church-of-St-Mary", "Fasil-Ghebbi", 2),
];

/// Builds the sample map, connecting every pair in [`SAMPLE_ROADS`] both ways.
///
/// # Errors
///
/// Only fails if a sample name were invalid, which the tests rule out.
pub fn sample_graph() -> Result<AdjacencyGraph> {
    let mut graph = AdjacencyGraph::new();
    for (a, b, weight) in SAMPLE_ROADS {
        graph.connect(NodeId::new(a)?, NodeId::new(b)?, weight)?;
    }
    Ok(graph)
}
