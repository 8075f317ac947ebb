//! Graph storage capabilities.
//!
//! Algorithms are written against [`GraphView`]. Code that changes the graph
//! needs [`MutableGraph`]. [`AdjacencyGraph`] implements both.
//!
//! # Example
//!
//! ```
//! use wayfinder::domain::NodeId;
//! use wayfinder::graph::{AdjacencyGraph, GraphView, MutableGraph};
//!
//! let mut graph = AdjacencyGraph::new();
//! let gondar = NodeId::new("Gondar").unwrap();
//! let tana = NodeId::new("Lake-Tana").unwrap();
//!
//! graph.connect(gondar, tana, 5).unwrap();
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.find_edge("Gondar", "Lake-Tana").unwrap().weight, 5);
//! ```

use crate::domain::{Edge, NodeId, NodeInsertion, Weight};
use crate::error::{Error, Result};

mod adjacency;

pub use adjacency::AdjacencyGraph;

/// Read access to a weighted directed graph.
///
/// Iteration follows the natural order of the implementation. For
/// [`AdjacencyGraph`] that is sorted by place name, and each place's roads
/// keep their insertion order.
pub trait GraphView {
    /// Returns `true` if the place exists.
    fn contains_node(&self, id: &str) -> bool;

    /// Outgoing roads of a place, or `None` if it does not exist.
    fn edges(&self, id: &str) -> Option<&[Edge]>;

    /// Every place paired with its outgoing roads.
    fn adjacency(&self) -> impl Iterator<Item = (&NodeId, &[Edge])>;

    /// Number of places.
    fn node_count(&self) -> usize;

    /// Every place.
    fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency().map(|(node, _)| node)
    }

    /// Number of directed roads, counting parallel roads separately.
    fn edge_count(&self) -> usize {
        self.adjacency().map(|(_, edges)| edges.len()).sum()
    }

    /// Returns `true` if the graph has no places.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Every road paired with its source place.
    fn all_edges(&self) -> impl Iterator<Item = (&NodeId, &Edge)> {
        self.adjacency()
            .flat_map(|(source, edges)| edges.iter().map(move |edge| (source, edge)))
    }

    /// Outgoing roads of a place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the place does not exist.
    fn neighbors(&self, id: &str) -> Result<&[Edge]> {
        self.edges(id)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }

    /// The first road from `from` to `to` in scan order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `from` does not exist and
    /// [`Error::EdgeNotFound`] if no such road exists.
    fn find_edge(&self, from: &str, to: &str) -> Result<&Edge> {
        self.neighbors(from)?
            .iter()
            .find(|edge| edge.destination.as_str() == to)
            .ok_or_else(|| Error::edge_not_found(from, to))
    }
}

/// Write access to a weighted directed graph.
///
/// Roads may only join places that already exist.
pub trait MutableGraph: GraphView {
    /// Adds a place with no roads. Adding an existing place changes nothing.
    fn add_node(&mut self, id: NodeId) -> NodeInsertion;

    /// Appends a road `from -> to`. Parallel roads are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] naming the first missing endpoint.
    fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()>;

    /// Changes the length of the first road `from -> to` and returns its
    /// previous length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `from` does not exist and
    /// [`Error::EdgeNotFound`] if no such road exists.
    fn update_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<Weight>;

    /// Removes every road `from -> to` and returns how many there were.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `from` does not exist and
    /// [`Error::EdgeNotFound`] if no such road exists.
    fn delete_edge(&mut self, from: &str, to: &str) -> Result<usize>;

    /// Removes a place, its outgoing roads, and every road leading to it.
    /// Returns the number of incoming roads removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the place does not exist.
    fn delete_node(&mut self, id: &str) -> Result<usize>;

    /// Removes every place and road.
    fn clear(&mut self);

    /// Adds both places if needed, then a road in each direction.
    ///
    /// # Errors
    ///
    /// Never fails once both places exist; the error type is shared with
    /// [`MutableGraph::add_edge`].
    fn connect(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        let (a_name, b_name) = (a.as_str().to_string(), b.as_str().to_string());
        self.add_node(a);
        self.add_node(b);
        self.add_edge(&a_name, &b_name, weight)?;
        self.add_edge(&b_name, &a_name, weight)
    }
}
