//! Exhaustive simple-path enumeration.
//!
//! Everything here enumerates every simple path between two places, which is
//! exponential in the number of places. Use `max_hops` to bound the search on
//! anything but small maps.

use crate::domain::{Distance, NodeId, Route, Weight};
use crate::error::{Error, Result};
use crate::graph::GraphView;
use petgraph::algo;
use petgraph::graphmap::DiGraphMap;

/// Every simple path from `from` to `to`, in depth-first enumeration order.
///
/// Parallel roads collapse into one step whose length is the heaviest of
/// them. `max_hops` limits the number of roads in a path. When `from == to`
/// the only path is the single place itself.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if either endpoint does not exist.
pub fn all_simple_paths<G: GraphView>(
    graph: &G,
    from: &str,
    to: &str,
    max_hops: Option<usize>,
) -> Result<Vec<Route>> {
    let snapshot = Snapshot::new(graph);
    let start = snapshot.node(from)?;
    let end = snapshot.node(to)?;

    if start == end {
        return Ok(vec![Route {
            nodes: vec![start.clone()],
            distance: 0,
        }]);
    }

    let max_intermediate = match max_hops {
        Some(0) => return Ok(Vec::new()),
        Some(hops) => Some(hops - 1),
        None => None,
    };

    let routes: Vec<Route> =
        algo::all_simple_paths::<Vec<&NodeId>, _>(&snapshot.map, start, end, 0, max_intermediate)
            .map(|path| snapshot.route(&path))
            .collect();
    tracing::debug!(from, to, paths = routes.len(), "enumerated simple paths");
    Ok(routes)
}

/// The simple path from `from` to `to` with the largest total length.
///
/// Ties keep the path enumerated first.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if either endpoint does not exist and
/// [`Error::NoPathExists`] if no path connects them.
pub fn longest_simple_path<G: GraphView>(
    graph: &G,
    from: &str,
    to: &str,
    max_hops: Option<usize>,
) -> Result<Route> {
    let mut longest: Option<Route> = None;
    for route in all_simple_paths(graph, from, to, max_hops)? {
        match &longest {
            Some(best) if best.distance >= route.distance => {}
            _ => longest = Some(route),
        }
    }
    longest.ok_or_else(|| Error::NoPathExists {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Petgraph copy of a graph with parallel roads merged.
struct Snapshot<'g> {
    map: DiGraphMap<&'g NodeId, Weight>,
}

impl<'g> Snapshot<'g> {
    fn new<G: GraphView>(graph: &'g G) -> Self {
        let mut map: DiGraphMap<&'g NodeId, Weight> =
            DiGraphMap::with_capacity(graph.node_count(), graph.edge_count());
        for id in graph.nodes() {
            map.add_node(id);
        }
        for (source, edge) in graph.all_edges() {
            match map.edge_weight_mut(source, &edge.destination) {
                Some(weight) => *weight = (*weight).max(edge.weight),
                None => {
                    map.add_edge(source, &edge.destination, edge.weight);
                }
            }
        }
        Self { map }
    }

    fn node(&self, id: &str) -> Result<&'g NodeId> {
        self.map
            .nodes()
            .find(|node| node.as_str() == id)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }

    fn route(&self, path: &[&NodeId]) -> Route {
        let distance = path
            .windows(2)
            .filter_map(|pair| self.map.edge_weight(pair[0], pair[1]))
            .map(|&weight| Distance::from(weight))
            .sum();
        Route {
            nodes: path.iter().map(|&id| id.clone()).collect(),
            distance,
        }
    }
}
