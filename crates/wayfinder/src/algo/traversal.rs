//! Breadth-first and depth-first traversal.

use crate::domain::NodeId;
use crate::error::{Error, Result};
use crate::graph::GraphView;
use std::collections::{HashSet, VecDeque};

/// Places in breadth-first order from `start`, following roads in the order
/// they were added.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` does not exist.
pub fn bfs<G: GraphView>(graph: &G, start: &str) -> Result<Vec<NodeId>> {
    let start = start_node(graph, start)?;
    Ok(bfs_order(graph, start).into_iter().cloned().collect())
}

/// Places in depth-first preorder from `start`.
///
/// Uses an explicit stack of `(place, next road index)` frames, so the order
/// matches a recursive visit without recursion depth limits.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` does not exist.
pub fn dfs<G: GraphView>(graph: &G, start: &str) -> Result<Vec<NodeId>> {
    let start = start_node(graph, start)?;

    let mut visited: HashSet<&NodeId> = HashSet::from([start]);
    let mut order = vec![start.clone()];
    let mut stack: Vec<(&NodeId, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let edges = graph.edges(node.as_str()).unwrap_or_default();
        let Some(edge) = edges.get(next) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;
        if visited.insert(&edge.destination) {
            order.push(edge.destination.clone());
            stack.push((&edge.destination, 0));
        }
    }

    Ok(order)
}

/// Places with no outgoing and no incoming roads, in graph order.
pub fn isolated_nodes<G: GraphView>(graph: &G) -> Vec<NodeId> {
    let targets: HashSet<&NodeId> = graph
        .all_edges()
        .map(|(_, edge)| &edge.destination)
        .collect();
    graph
        .adjacency()
        .filter(|(id, edges)| edges.is_empty() && !targets.contains(id))
        .map(|(id, _)| id.clone())
        .collect()
}

/// Breadth-first visit order from a place known to exist.
pub(crate) fn bfs_order<'g, G: GraphView>(graph: &'g G, start: &'g NodeId) -> Vec<&'g NodeId> {
    let mut visited: HashSet<&NodeId> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for edge in graph.edges(node.as_str()).unwrap_or_default() {
            if visited.insert(&edge.destination) {
                queue.push_back(&edge.destination);
            }
        }
    }

    order
}

fn start_node<'g, G: GraphView>(graph: &'g G, start: &str) -> Result<&'g NodeId> {
    graph
        .nodes()
        .find(|id| id.as_str() == start)
        .ok_or_else(|| Error::NodeNotFound(start.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, MutableGraph};
    use rstest::{fixture, rstest};

    fn id(name: &str) -> NodeId {
        NodeId::new(name).unwrap()
    }

    fn names(nodes: &[NodeId]) -> Vec<&str> {
        nodes.iter().map(NodeId::as_str).collect()
    }

    /// A -> B, A -> C, B -> D, C -> D, D -> A, E isolated.
    #[fixture]
    fn graph() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for name in ["A", "B", "C", "D", "E"] {
            graph.add_node(id(name));
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("A", "C", 1).unwrap();
        graph.add_edge("B", "D", 1).unwrap();
        graph.add_edge("C", "D", 1).unwrap();
        graph.add_edge("D", "A", 1).unwrap();
        graph
    }

    /// Reference recursive preorder.
    fn recursive_dfs<'g>(
        graph: &'g AdjacencyGraph,
        node: &'g NodeId,
        seen: &mut Vec<&'g NodeId>,
    ) {
        seen.push(node);
        for edge in graph.edges(node.as_str()).unwrap() {
            if !seen.contains(&&edge.destination) {
                recursive_dfs(graph, &edge.destination, seen);
            }
        }
    }

    #[rstest]
    fn bfs_visits_by_layer(graph: AdjacencyGraph) {
        assert_eq!(names(&bfs(&graph, "A").unwrap()), vec!["A", "B", "C", "D"]);
    }

    #[rstest]
    fn dfs_goes_deep_first(graph: AdjacencyGraph) {
        assert_eq!(names(&dfs(&graph, "A").unwrap()), vec!["A", "B", "D", "C"]);
    }

    #[rstest]
    #[case("A")]
    #[case("B")]
    #[case("C")]
    #[case("E")]
    fn dfs_matches_recursive_order(graph: AdjacencyGraph, #[case] start: &str) {
        let start_id = graph.nodes().find(|n| n.as_str() == start).unwrap();
        let mut expected = Vec::new();
        recursive_dfs(&graph, start_id, &mut expected);
        let expected: Vec<NodeId> = expected.into_iter().cloned().collect();
        assert_eq!(dfs(&graph, start).unwrap(), expected);
    }

    #[rstest]
    fn traversal_from_missing_place_fails(graph: AdjacencyGraph) {
        assert!(matches!(bfs(&graph, "Z"), Err(Error::NodeNotFound(_))));
        assert!(matches!(dfs(&graph, "Z"), Err(Error::NodeNotFound(_))));
    }

    #[rstest]
    fn isolated_requires_no_roads_either_way(mut graph: AdjacencyGraph) {
        graph.add_node(id("F"));
        graph.add_node(id("G"));
        graph.add_edge("A", "G", 1).unwrap();
        assert_eq!(names(&isolated_nodes(&graph)), vec!["E", "F"]);
    }

    #[test]
    fn dead_end_with_incoming_road_is_not_isolated() {
        let mut graph = AdjacencyGraph::new();
        graph.add_node(id("Gondar"));
        graph.add_node(id("Blue-Nile-Falls"));
        graph.add_edge("Gondar", "Blue-Nile-Falls", 30).unwrap();

        assert!(graph.edges("Blue-Nile-Falls").unwrap().is_empty());
        assert!(isolated_nodes(&graph).is_empty());

        graph.delete_edge("Gondar", "Blue-Nile-Falls").unwrap();
        assert_eq!(
            names(&isolated_nodes(&graph)),
            vec!["Blue-Nile-Falls", "Gondar"]
        );
    }

    #[test]
    fn long_chain_does_not_overflow_stack() {
        let mut graph = AdjacencyGraph::new();
        let count = 50_000;
        for i in 0..count {
            graph.add_node(id(&format!("n{i}")));
        }
        for i in 1..count {
            graph
                .add_edge(&format!("n{}", i - 1), &format!("n{i}"), 1)
                .unwrap();
        }
        assert_eq!(dfs(&graph, "n0").unwrap().len(), count);
    }
}
