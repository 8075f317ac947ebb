//! Adjacency-list graph keyed by place name.

use super::{GraphView, MutableGraph};
use crate::domain::{Edge, NodeId, NodeInsertion, Weight};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// A weighted directed graph stored as place -> outgoing roads.
///
/// Places are kept in a [`BTreeMap`], so iteration is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    nodes: BTreeMap<NodeId, Vec<Edge>>,
}

impl AdjacencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn require(&self, id: &str) -> Result<&NodeId> {
        self.nodes
            .get_key_value(id)
            .map(|(key, _)| key)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }

    fn edges_mut(&mut self, id: &str) -> Result<&mut Vec<Edge>> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }
}

impl GraphView for AdjacencyGraph {
    fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    fn edges(&self, id: &str) -> Option<&[Edge]> {
        self.nodes.get(id).map(Vec::as_slice)
    }

    fn adjacency(&self) -> impl Iterator<Item = (&NodeId, &[Edge])> {
        self.nodes.iter().map(|(id, edges)| (id, edges.as_slice()))
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }
}

impl MutableGraph for AdjacencyGraph {
    fn add_node(&mut self, id: NodeId) -> NodeInsertion {
        if self.nodes.contains_key(&id) {
            return NodeInsertion::AlreadyExists;
        }
        tracing::debug!(place = %id, "place added");
        self.nodes.insert(id, Vec::new());
        NodeInsertion::Added
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        self.require(from)?;
        let destination = self.require(to)?.clone();
        tracing::debug!(from, to, weight, "road added");
        self.edges_mut(from)?.push(Edge {
            destination,
            weight,
        });
        Ok(())
    }

    fn update_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<Weight> {
        let edge = self
            .edges_mut(from)?
            .iter_mut()
            .find(|edge| edge.destination.as_str() == to)
            .ok_or_else(|| Error::edge_not_found(from, to))?;
        let previous = std::mem::replace(&mut edge.weight, weight);
        tracing::debug!(from, to, previous, weight, "road updated");
        Ok(previous)
    }

    fn delete_edge(&mut self, from: &str, to: &str) -> Result<usize> {
        let edges = self.edges_mut(from)?;
        let before = edges.len();
        edges.retain(|edge| edge.destination.as_str() != to);
        let removed = before - edges.len();
        if removed == 0 {
            return Err(Error::edge_not_found(from, to));
        }
        tracing::debug!(from, to, removed, "road deleted");
        Ok(removed)
    }

    fn delete_node(&mut self, id: &str) -> Result<usize> {
        if self.nodes.remove(id).is_none() {
            return Err(Error::NodeNotFound(id.to_string()));
        }
        let mut incoming = 0;
        for edges in self.nodes.values_mut() {
            let before = edges.len();
            edges.retain(|edge| edge.destination.as_str() != id);
            incoming += before - edges.len();
        }
        tracing::debug!(place = id, incoming, "place deleted");
        Ok(incoming)
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn id(name: &str) -> NodeId {
        NodeId::new(name).unwrap()
    }

    #[fixture]
    fn triangle() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for name in ["A", "B", "C"] {
            graph.add_node(id(name));
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("C", "A", 3).unwrap();
        graph.add_edge("A", "C", 9).unwrap();
        graph
    }

    #[test]
    fn add_node_reports_existing() {
        let mut graph = AdjacencyGraph::new();
        assert_eq!(graph.add_node(id("A")), NodeInsertion::Added);
        assert_eq!(graph.add_node(id("A")), NodeInsertion::AlreadyExists);
        assert_eq!(graph.node_count(), 1);
    }

    #[rstest]
    fn add_edge_requires_both_endpoints(mut triangle: AdjacencyGraph) {
        let err = triangle.add_edge("A", "Z", 1).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(ref name) if name == "Z"));
        let err = triangle.add_edge("Z", "A", 1).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(ref name) if name == "Z"));
        assert!(!triangle.contains_node("Z"));
    }

    #[rstest]
    fn parallel_edges_are_kept_and_update_hits_first(mut triangle: AdjacencyGraph) {
        triangle.add_edge("A", "B", 7).unwrap();
        assert_eq!(triangle.edges("A").unwrap().len(), 3);

        assert_eq!(triangle.update_edge("A", "B", 4).unwrap(), 1);
        let weights: Vec<Weight> = triangle
            .edges("A")
            .unwrap()
            .iter()
            .filter(|e| e.destination.as_str() == "B")
            .map(|e| e.weight)
            .collect();
        assert_eq!(weights, vec![4, 7]);
    }

    #[rstest]
    fn update_missing_edge_fails(mut triangle: AdjacencyGraph) {
        assert!(matches!(
            triangle.update_edge("B", "A", 1),
            Err(Error::EdgeNotFound { .. })
        ));
        assert!(matches!(
            triangle.update_edge("Z", "A", 1),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[rstest]
    fn delete_edge_removes_all_parallel_roads(mut triangle: AdjacencyGraph) {
        triangle.add_edge("A", "B", 7).unwrap();
        assert_eq!(triangle.delete_edge("A", "B").unwrap(), 2);
        assert!(matches!(
            triangle.delete_edge("A", "B"),
            Err(Error::EdgeNotFound { .. })
        ));
        assert_eq!(triangle.edge_count(), 3);
    }

    #[rstest]
    fn delete_node_removes_incoming_roads(mut triangle: AdjacencyGraph) {
        assert_eq!(triangle.delete_node("C").unwrap(), 2);
        assert!(!triangle.contains_node("C"));
        let remaining: Vec<_> = triangle.all_edges().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].1.destination.as_str(), "B");

        let again = triangle.delete_node("C");
        assert!(matches!(again, Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn nodes_iterate_sorted() {
        let mut graph = AdjacencyGraph::new();
        for name in ["Lake-Tana", "Axum", "Gondar"] {
            graph.add_node(id(name));
        }
        let names: Vec<&str> = graph.nodes().map(NodeId::as_str).collect();
        assert_eq!(names, vec!["Axum", "Gondar", "Lake-Tana"]);
    }

    #[test]
    fn connect_adds_places_and_both_directions() {
        let mut graph = AdjacencyGraph::new();
        graph.connect(id("A"), id("B"), 3).unwrap();
        assert_eq!(graph.find_edge("A", "B").unwrap().weight, 3);
        assert_eq!(graph.find_edge("B", "A").unwrap().weight, 3);
    }

    #[rstest]
    fn clear_empties_graph(mut triangle: AdjacencyGraph) {
        triangle.clear();
        assert!(triangle.is_empty());
        assert_eq!(triangle.edge_count(), 0);
    }
}
