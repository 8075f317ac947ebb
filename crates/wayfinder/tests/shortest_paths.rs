//! Integration tests for shortest-path queries and reachability.
//!
//! Dijkstra results are compared against a brute-force search over every
//! simple path and against petgraph's own Dijkstra.

use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::HashMap;
use wayfinder::algo::{check_connectivity, Connectivity, PathFinder};
use wayfinder::domain::{Distance, NodeId};
use wayfinder::error::Error;
use wayfinder::graph::{AdjacencyGraph, GraphView, MutableGraph};

mod common;
use common::{diamond, graph_of, id};

// ========== Worked Examples ==========

#[test]
fn diamond_shortest_route() {
    let graph = diamond();
    let route = graph.shortest_path(&id("A"), &id("D")).unwrap();

    assert_eq!(route.nodes, vec![id("A"), id("B"), id("C"), id("D")]);
    assert_eq!(route.distance, 4);
}

#[test]
fn isolated_place_is_unreachable_and_disconnects() {
    let graph = diamond();
    let distances = graph.distances_from(&id("A"));

    assert_eq!(distances.distance_to("A"), Some(0));
    assert_eq!(distances.distance_to("C"), Some(3));
    assert_eq!(distances.distance_to("E"), None);
    assert_eq!(
        check_connectivity(&graph),
        Connectivity::Disconnected {
            unreachable: id("E")
        }
    );
}

#[rstest]
#[case::unreachable("D", "A")]
#[case::isolated("A", "E")]
#[case::absent("A", "Z")]
fn no_route_reports_no_path(#[case] from: &str, #[case] to: &str) {
    let result = diamond().shortest_path(&id(from), &id(to));
    assert!(matches!(result, Err(Error::NoPathExists { .. })));
}

#[test]
fn route_to_self_is_single_place() {
    let route = diamond().shortest_path(&id("E"), &id("E")).unwrap();
    assert_eq!(route.nodes, vec![id("E")]);
    assert_eq!(route.distance, 0);
}

#[test]
fn zero_weight_roads_are_allowed() {
    let graph = graph_of(
        &["A", "B", "C"],
        &[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)],
    );
    assert_eq!(graph.shortest_path(&id("A"), &id("C")).unwrap().distance, 0);
}

#[test]
fn parallel_roads_use_the_shortest() {
    let graph = graph_of(&["A", "B"], &[("A", "B", 9), ("A", "B", 2), ("A", "B", 5)]);
    assert_eq!(graph.shortest_path(&id("A"), &id("B")).unwrap().distance, 2);
}

#[test]
fn long_weights_do_not_overflow() {
    let graph = graph_of(
        &["A", "B", "C"],
        &[("A", "B", u32::MAX), ("B", "C", u32::MAX)],
    );
    let route = graph.shortest_path(&id("A"), &id("C")).unwrap();
    assert_eq!(route.distance, 2 * Distance::from(u32::MAX));
}

#[test]
fn connectivity_follows_road_direction() {
    let one_way = graph_of(&["A", "B"], &[("B", "A", 1)]);
    assert!(!check_connectivity(&one_way).is_connected());

    let two_way = graph_of(&["A", "B"], &[("B", "A", 1), ("A", "B", 1)]);
    assert!(check_connectivity(&two_way).is_connected());

    assert!(check_connectivity(&AdjacencyGraph::new()).is_connected());
}

// ========== Property Tests ==========

const MAX_PLACES: usize = 7;

fn name(index: usize) -> NodeId {
    id(&format!("N{index}"))
}

fn arb_graph() -> impl Strategy<Value = AdjacencyGraph> {
    (1..=MAX_PLACES).prop_flat_map(|places| {
        let roads = prop::collection::vec((0..places, 0..places, 0u32..50), 0..places * 3);
        roads.prop_map(move |roads| {
            let mut graph = AdjacencyGraph::new();
            for index in 0..places {
                graph.add_node(name(index));
            }
            for (from, to, weight) in roads {
                graph
                    .add_edge(name(from).as_str(), name(to).as_str(), weight)
                    .unwrap();
            }
            graph
        })
    })
}

/// Minimum length over every simple path, by exhaustive search.
fn brute_force(graph: &AdjacencyGraph, from: &NodeId, to: &NodeId) -> Option<Distance> {
    fn walk(
        graph: &AdjacencyGraph,
        at: &NodeId,
        to: &NodeId,
        visited: &mut Vec<NodeId>,
        length: Distance,
        best: &mut Option<Distance>,
    ) {
        if at == to {
            *best = Some(best.map_or(length, |b| b.min(length)));
            return;
        }
        for edge in graph.edges(at.as_str()).unwrap_or_default() {
            if visited.contains(&edge.destination) {
                continue;
            }
            visited.push(edge.destination.clone());
            walk(
                graph,
                &edge.destination,
                to,
                visited,
                length + Distance::from(edge.weight),
                best,
            );
            visited.pop();
        }
    }

    let mut best = None;
    walk(graph, from, to, &mut vec![from.clone()], 0, &mut best);
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn dijkstra_matches_brute_force(graph in arb_graph(), a in 0..MAX_PLACES, b in 0..MAX_PLACES) {
        let places = graph.node_count();
        let (start, end) = (name(a % places), name(b % places));

        let expected = brute_force(&graph, &start, &end);
        let distances = graph.distances_from(&start);
        prop_assert_eq!(distances.distance_to(end.as_str()), expected);

        match graph.shortest_path(&start, &end) {
            Ok(route) => {
                prop_assert_eq!(Some(route.distance), expected);
                prop_assert_eq!(route.nodes.first(), Some(&start));
                prop_assert_eq!(route.nodes.last(), Some(&end));
                let walked: Distance = route
                    .nodes
                    .windows(2)
                    .map(|pair| {
                        graph
                            .edges(pair[0].as_str())
                            .unwrap()
                            .iter()
                            .filter(|edge| edge.destination == pair[1])
                            .map(|edge| Distance::from(edge.weight))
                            .min()
                            .unwrap()
                    })
                    .sum();
                prop_assert_eq!(walked, route.distance);
            }
            Err(Error::NoPathExists { .. }) => prop_assert_eq!(expected, None),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn dijkstra_matches_petgraph(graph in arb_graph(), a in 0..MAX_PLACES) {
        let mut reference: DiGraph<(), Distance> = DiGraph::new();
        let indices: HashMap<&NodeId, NodeIndex> =
            graph.nodes().map(|place| (place, reference.add_node(()))).collect();
        for (from, edge) in graph.all_edges() {
            let weight = Distance::from(edge.weight);
            reference.add_edge(indices[from], indices[&edge.destination], weight);
        }

        let start = name(a % graph.node_count());
        let expected = petgraph::algo::dijkstra(&reference, indices[&start], None, |e| *e.weight());
        let distances = graph.distances_from(&start);

        for place in graph.nodes() {
            prop_assert_eq!(
                distances.distance_to(place.as_str()),
                expected.get(&indices[place]).copied(),
                "distance to {}", place
            );
        }
    }

    #[test]
    fn connectivity_agrees_with_distances(graph in arb_graph()) {
        let first = graph.nodes().next().unwrap().clone();
        let distances = graph.distances_from(&first);
        let unreachable: Vec<&NodeId> = distances.unreachable().collect();

        match check_connectivity(&graph) {
            Connectivity::Connected => prop_assert!(unreachable.is_empty()),
            Connectivity::Disconnected { unreachable: place } => {
                prop_assert!(unreachable.contains(&&place));
            }
        }
    }
}
