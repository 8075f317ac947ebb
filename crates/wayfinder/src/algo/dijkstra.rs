//! Dijkstra shortest paths.
//!
//! Uses a binary min-heap without decrease-key. When a shorter distance is
//! found the node is pushed again, and entries that are worse than the best
//! known distance are skipped when popped.

use crate::domain::{Distance, NodeId, Route};
use crate::error::{Error, Result};
use crate::graph::GraphView;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

/// Shortest distances from one start place to every known place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    start: NodeId,
    distances: BTreeMap<NodeId, Option<Distance>>,
}

impl DistanceMap {
    /// The place distances were measured from.
    #[must_use]
    pub fn start(&self) -> &NodeId {
        &self.start
    }

    /// Distance to `id`, or `None` if it is unreachable or unknown.
    #[must_use]
    pub fn distance_to(&self, id: &str) -> Option<Distance> {
        self.distances.get(id).copied().flatten()
    }

    /// Returns `true` if `id` can be reached from the start.
    #[must_use]
    pub fn is_reachable(&self, id: &str) -> bool {
        self.distance_to(id).is_some()
    }

    /// Every place with its distance, sorted by name. `None` means unreachable.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, Option<Distance>)> {
        self.distances.iter().map(|(id, dist)| (id, *dist))
    }

    /// Places that cannot be reached from the start.
    pub fn unreachable(&self) -> impl Iterator<Item = &NodeId> {
        self.distances
            .iter()
            .filter(|(_, dist)| dist.is_none())
            .map(|(id, _)| id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Shortest-path queries over a weighted graph.
///
/// Implemented for every [`GraphView`].
///
/// ```
/// use wayfinder::algo::PathFinder;
/// use wayfinder::domain::NodeId;
/// use wayfinder::graph::{AdjacencyGraph, MutableGraph};
///
/// let mut graph = AdjacencyGraph::new();
/// for name in ["A", "B", "C"] {
///     graph.add_node(NodeId::new(name).unwrap());
/// }
/// graph.add_edge("A", "B", 1).unwrap();
/// graph.add_edge("B", "C", 2).unwrap();
/// graph.add_edge("A", "C", 5).unwrap();
///
/// let a = NodeId::new("A").unwrap();
/// let c = NodeId::new("C").unwrap();
/// let route = graph.shortest_path(&a, &c).unwrap();
/// assert_eq!(route.to_string(), "A -> B -> C");
/// assert_eq!(route.distance, 3);
/// ```
pub trait PathFinder {
    /// Distances from `start` to every place.
    ///
    /// Every place starts unreachable and `start` starts at zero, so `start`
    /// is listed even when the graph does not contain it.
    fn distances_from(&self, start: &NodeId) -> DistanceMap;

    /// The shortest route from `start` to `end`.
    ///
    /// When several routes are equally short, any one of them may be returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPathExists`] when `end` cannot be reached.
    fn shortest_path(&self, start: &NodeId, end: &NodeId) -> Result<Route>;
}

impl<G: GraphView> PathFinder for G {
    fn distances_from(&self, start: &NodeId) -> DistanceMap {
        let search = Search::run(self, start, None);

        let mut distances: BTreeMap<NodeId, Option<Distance>> =
            self.nodes().map(|id| (id.clone(), None)).collect();
        distances.insert(start.clone(), Some(0));
        for (id, dist) in search.best {
            distances.insert(id.clone(), Some(dist));
        }

        DistanceMap {
            start: start.clone(),
            distances,
        }
    }

    fn shortest_path(&self, start: &NodeId, end: &NodeId) -> Result<Route> {
        let search = Search::run(self, start, Some(end));

        let Some(&distance) = search.best.get(end) else {
            return Err(Error::NoPathExists {
                from: start.to_string(),
                to: end.to_string(),
            });
        };

        let mut nodes = vec![end.clone()];
        let mut current = end;
        while let Some(&prev) = search.previous.get(current) {
            nodes.push(prev.clone());
            current = prev;
        }
        nodes.reverse();

        Ok(Route { nodes, distance })
    }
}

/// Settled distances and predecessors of one run.
struct Search<'a> {
    best: HashMap<&'a NodeId, Distance>,
    previous: HashMap<&'a NodeId, &'a NodeId>,
}

impl<'a> Search<'a> {
    /// Runs until the queue is empty, or until `target` is settled.
    fn run<G: GraphView>(graph: &'a G, start: &'a NodeId, target: Option<&NodeId>) -> Self {
        let mut best: HashMap<&NodeId, Distance> = HashMap::new();
        let mut previous: HashMap<&NodeId, &NodeId> = HashMap::new();
        let mut queue = BinaryHeap::new();

        best.insert(start, 0);
        queue.push(Reverse((0, start)));

        while let Some(Reverse((dist, node))) = queue.pop() {
            if best.get(node).is_some_and(|&known| dist > known) {
                continue;
            }
            if target == Some(node) {
                break;
            }
            let Some(edges) = graph.edges(node.as_str()) else {
                continue;
            };
            for edge in edges {
                let candidate = dist.saturating_add(Distance::from(edge.weight));
                let improves = best
                    .get(&edge.destination)
                    .is_none_or(|&known| candidate < known);
                if improves {
                    best.insert(&edge.destination, candidate);
                    previous.insert(&edge.destination, node);
                    queue.push(Reverse((candidate, &edge.destination)));
                }
            }
        }

        Self { best, previous }
    }
}
