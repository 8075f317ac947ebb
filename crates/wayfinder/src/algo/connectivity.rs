//! Reachability check from the first place.

use super::traversal::bfs_order;
use crate::domain::NodeId;
use crate::graph::GraphView;
use std::collections::HashSet;

/// Whether every place can be reached from the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectivity {
    /// Every place was reached, or the graph is empty.
    Connected,
    /// At least one place was not reached.
    Disconnected {
        /// First place in graph order that was not reached.
        unreachable: NodeId,
    },
}

impl Connectivity {
    /// Returns `true` for [`Connectivity::Connected`].
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Runs a breadth-first search from the first place in graph order, following
/// road direction, and reports the first place it did not reach.
///
/// Only the first place is used as a root, so a graph can be reported as
/// disconnected even when some other place reaches everything.
pub fn check_connectivity<G: GraphView>(graph: &G) -> Connectivity {
    let Some(first) = graph.nodes().next() else {
        return Connectivity::Connected;
    };

    let reached: HashSet<&NodeId> = bfs_order(graph, first).into_iter().collect();
    match graph.nodes().find(|id| !reached.contains(id)) {
        None => Connectivity::Connected,
        Some(id) => {
            tracing::debug!(root = %first, unreachable = %id, "graph is not connected");
            Connectivity::Disconnected {
                unreachable: id.clone(),
            }
        }
    }
}
