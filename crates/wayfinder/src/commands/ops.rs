//! Graph operations shared by the CLI and the interactive shell.
//!
//! Each function performs one operation and describes the outcome as a
//! [`Report`]. Domain errors are returned as errors; [`settle`] turns them
//! into [`Report::Problem`] for callers that report and carry on.

use crate::algo::{
    all_simple_paths, bfs, check_connectivity, dfs, isolated_nodes, longest_simple_path, PathFinder,
};
use crate::domain::{NodeId, NodeInsertion, Weight};
use crate::error::{Error, Result};
use crate::graph::{AdjacencyGraph, GraphView, MutableGraph};
use crate::output::{PlaceRoads, Report, Road, VisitOrder};
use crate::storage::{load_from_edgelist, save_to_edgelist};
use std::path::Path;

/// Converts a domain error into a [`Report::Problem`] and passes
/// infrastructure errors through.
///
/// # Errors
///
/// Returns the original error when [`Error::is_domain`] is `false`.
pub fn settle(result: Result<Report>) -> Result<Report> {
    match result {
        Err(e) if e.is_domain() => Ok(Report::problem(&e)),
        other => other,
    }
}

/// Adds a place.
///
/// # Errors
///
/// Returns [`Error::DuplicateNode`] if the place already exists. The graph is
/// unchanged in that case.
pub fn add_place<G: MutableGraph>(graph: &mut G, place: NodeId) -> Result<Report> {
    match graph.add_node(place.clone()) {
        NodeInsertion::Added => Ok(Report::PlaceAdded { place }),
        NodeInsertion::AlreadyExists => Err(Error::DuplicateNode(place.to_string())),
    }
}

/// Adds a one-way road between existing places, or a two-way road that
/// creates missing places when `both_ways` is set.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] for a one-way road with a missing endpoint.
pub fn add_road<G: MutableGraph>(
    graph: &mut G,
    from: &NodeId,
    to: &NodeId,
    weight: Weight,
    both_ways: bool,
) -> Result<Report> {
    if both_ways {
        graph.connect(from.clone(), to.clone(), weight)?;
    } else {
        graph.add_edge(from.as_str(), to.as_str(), weight)?;
    }
    Ok(Report::RoadAdded {
        from: from.clone(),
        to: to.clone(),
        weight,
        both_ways,
    })
}

/// Changes the length of a road.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] or [`Error::EdgeNotFound`].
pub fn update_road<G: MutableGraph>(
    graph: &mut G,
    from: &NodeId,
    to: &NodeId,
    weight: Weight,
) -> Result<Report> {
    let previous = graph.update_edge(from.as_str(), to.as_str(), weight)?;
    Ok(Report::RoadUpdated {
        from: from.clone(),
        to: to.clone(),
        previous,
        weight,
    })
}

/// Removes every road `from -> to`.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] or [`Error::EdgeNotFound`].
pub fn delete_road<G: MutableGraph>(graph: &mut G, from: &NodeId, to: &NodeId) -> Result<Report> {
    let removed = graph.delete_edge(from.as_str(), to.as_str())?;
    Ok(Report::RoadsDeleted {
        from: from.clone(),
        to: to.clone(),
        removed,
    })
}

/// Removes a place together with every road touching it.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if the place does not exist.
pub fn delete_place<G: MutableGraph>(graph: &mut G, place: &NodeId) -> Result<Report> {
    let incoming_removed = graph.delete_node(place.as_str())?;
    Ok(Report::PlaceDeleted {
        place: place.clone(),
        incoming_removed,
    })
}

/// Reports whether a place exists.
pub fn find_place<G: GraphView>(graph: &G, place: &NodeId) -> Report {
    Report::PlaceLookup {
        place: place.clone(),
        exists: graph.contains_node(place.as_str()),
    }
}

/// Looks up the first road `from -> to`.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] or [`Error::EdgeNotFound`].
pub fn find_road<G: GraphView>(graph: &G, from: &NodeId, to: &NodeId) -> Result<Report> {
    let edge = graph.find_edge(from.as_str(), to.as_str())?;
    Ok(Report::RoadFound {
        road: Road {
            from: from.clone(),
            to: to.clone(),
            weight: edge.weight,
        },
    })
}

/// Every place with its outgoing roads.
pub fn show<G: GraphView>(graph: &G) -> Report {
    Report::Adjacency {
        places: graph
            .adjacency()
            .map(|(place, roads)| PlaceRoads {
                place: place.clone(),
                roads: roads.to_vec(),
            })
            .collect(),
    }
}

/// Every road as a flat list.
pub fn roads<G: GraphView>(graph: &G) -> Report {
    Report::Roads {
        roads: graph
            .all_edges()
            .map(|(from, edge)| Road {
                from: from.clone(),
                to: edge.destination.clone(),
                weight: edge.weight,
            })
            .collect(),
    }
}

/// Outgoing roads of a place.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if the place does not exist.
pub fn neighbors<G: GraphView>(graph: &G, place: &NodeId) -> Result<Report> {
    let roads = graph.neighbors(place.as_str())?.to_vec();
    Ok(Report::Neighbors {
        place: place.clone(),
        roads,
    })
}

/// Shortest distance from `start` to every place.
pub fn distances<G: GraphView>(graph: &G, start: &NodeId) -> Report {
    Report::distances(&graph.distances_from(start))
}

/// Shortest route between two places.
///
/// # Errors
///
/// Returns [`Error::NoPathExists`] when `end` cannot be reached.
pub fn shortest<G: GraphView>(graph: &G, start: &NodeId, end: &NodeId) -> Result<Report> {
    let route = graph.shortest_path(start, end)?;
    Ok(Report::ShortestPath { route })
}

/// Whether every place is reachable from the first one.
pub fn connectivity<G: GraphView>(graph: &G) -> Report {
    Report::connectivity(check_connectivity(graph))
}

/// Places without any roads.
pub fn isolated<G: GraphView>(graph: &G) -> Report {
    Report::Isolated {
        places: isolated_nodes(graph),
    }
}

/// Visit order of a breadth- or depth-first traversal.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` does not exist.
pub fn traverse<G: GraphView>(graph: &G, order: VisitOrder, start: &NodeId) -> Result<Report> {
    let places = match order {
        VisitOrder::Bfs => bfs(graph, start.as_str())?,
        VisitOrder::Dfs => dfs(graph, start.as_str())?,
    };
    Ok(Report::Visit {
        order,
        start: start.clone(),
        places,
    })
}

/// Every simple route between two places.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if either place does not exist.
pub fn all_paths<G: GraphView>(
    graph: &G,
    from: &NodeId,
    to: &NodeId,
    max_hops: Option<usize>,
) -> Result<Report> {
    let routes = all_simple_paths(graph, from.as_str(), to.as_str(), max_hops)?;
    Ok(Report::Paths {
        from: from.clone(),
        to: to.clone(),
        routes,
    })
}

/// The heaviest simple route between two places.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] or [`Error::NoPathExists`].
pub fn longest<G: GraphView>(
    graph: &G,
    from: &NodeId,
    to: &NodeId,
    max_hops: Option<usize>,
) -> Result<Report> {
    let route = longest_simple_path(graph, from.as_str(), to.as_str(), max_hops)?;
    Ok(Report::LongestPath { route })
}

/// Writes the graph to an edge-list file.
///
/// # Errors
///
/// Returns [`Error::Persistence`] if the file cannot be written.
pub async fn export(graph: &AdjacencyGraph, path: &Path) -> Result<Report> {
    save_to_edgelist(graph, path).await?;
    Ok(Report::Saved {
        path: path.display().to_string(),
        places: graph.node_count(),
        roads: graph.edge_count(),
    })
}

/// Replaces the graph with the contents of an edge-list file.
///
/// # Errors
///
/// Returns [`Error::Io`] or [`Error::Persistence`] if the file cannot be
/// read. The graph is unchanged in that case.
pub async fn import(graph: &mut AdjacencyGraph, path: &Path) -> Result<Report> {
    let warnings = load_from_edgelist(graph, path).await?;
    let (places, roads) = (graph.node_count(), graph.edge_count());
    Ok(Report::loaded(path, places, roads, &warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    fn id(name: &str) -> NodeId {
        NodeId::new(name).unwrap()
    }

    #[fixture]
    fn diamond() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for name in ["A", "B", "C", "D", "E"] {
            graph.add_node(id(name));
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("A", "C", 5).unwrap();
        graph.add_edge("C", "D", 1).unwrap();
        graph
    }

    #[test]
    fn settle_reports_domain_errors() {
        let report = settle(Err(Error::NodeNotFound("Z".into()))).unwrap();
        assert!(report.is_problem());
    }

    #[test]
    fn settle_passes_infrastructure_errors() {
        let result = settle(Err(Error::Config("broken".into())));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[rstest]
    fn adding_existing_place_is_duplicate(mut diamond: AdjacencyGraph) {
        let before = diamond.clone();
        let Err(Error::DuplicateNode(name)) = add_place(&mut diamond, id("A")) else {
            panic!("expected a duplicate place");
        };
        assert_eq!(name, "A");
        assert_eq!(diamond, before);
    }

    #[rstest]
    fn one_way_road_needs_both_places(mut diamond: AdjacencyGraph) {
        let result = add_road(&mut diamond, &id("A"), &id("Z"), 3, false);
        let Err(Error::NodeNotFound(name)) = result else {
            panic!("expected a missing place");
        };
        assert_eq!(name, "Z");
        assert!(!diamond.contains_node("Z"));
    }

    #[rstest]
    fn two_way_road_creates_places(mut diamond: AdjacencyGraph) {
        add_road(&mut diamond, &id("E"), &id("F"), 7, true).unwrap();
        assert_eq!(diamond.find_edge("E", "F").unwrap().weight, 7);
        assert_eq!(diamond.find_edge("F", "E").unwrap().weight, 7);
    }

    #[rstest]
    fn update_reports_previous_length(mut diamond: AdjacencyGraph) {
        let report = update_road(&mut diamond, &id("A"), &id("C"), 9).unwrap();
        assert_eq!(
            report,
            Report::RoadUpdated {
                from: id("A"),
                to: id("C"),
                previous: 5,
                weight: 9
            }
        );
    }

    #[rstest]
    fn shortest_route_through_diamond(diamond: AdjacencyGraph) {
        let report = shortest(&diamond, &id("A"), &id("D")).unwrap();
        assert_eq!(
            report,
            Report::ShortestPath {
                route: Route {
                    nodes: vec![id("A"), id("B"), id("C"), id("D")],
                    distance: 4
                }
            }
        );
    }

    #[rstest]
    fn unreachable_place_is_a_problem(diamond: AdjacencyGraph) {
        let report = settle(shortest(&diamond, &id("A"), &id("E"))).unwrap();
        let Report::Problem { kind, .. } = report else {
            panic!("expected a problem report");
        };
        assert_eq!(kind, "no_path_exists");
    }

    #[rstest]
    fn find_place_never_fails(diamond: AdjacencyGraph) {
        assert_eq!(
            find_place(&diamond, &id("Z")),
            Report::PlaceLookup {
                place: id("Z"),
                exists: false
            }
        );
    }

    #[rstest]
    fn traverse_follows_order(diamond: AdjacencyGraph) {
        let Report::Visit { places, .. } = traverse(&diamond, VisitOrder::Dfs, &id("A")).unwrap()
        else {
            panic!("expected a visit report");
        };
        assert_eq!(places, vec![id("A"), id("B"), id("C"), id("D")]);
    }

    #[rstest]
    fn roads_lists_every_road(diamond: AdjacencyGraph) {
        let Report::Roads { roads } = roads(&diamond) else {
            panic!("expected a roads report");
        };
        assert_eq!(roads.len(), 4);
        assert_eq!(roads[0].from, id("A"));
    }

    #[rstest]
    #[tokio::test]
    async fn export_then_import(diamond: AdjacencyGraph) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("map.txt");

        let Report::Saved { places, roads, .. } = export(&diamond, &path).await.unwrap() else {
            panic!("expected a saved report");
        };
        assert_eq!((places, roads), (5, 4));

        let mut graph = AdjacencyGraph::new();
        let loaded = import(&mut graph, &path).await.unwrap();
        assert_eq!(loaded, Report::loaded(&path, 5, 4, &[]));
        assert_eq!(graph, diamond);
    }

    #[tokio::test]
    async fn import_missing_file_keeps_graph() {
        let temp_dir = TempDir::new().unwrap();
        let mut graph = AdjacencyGraph::new();
        graph.add_node(id("A"));

        let result = import(&mut graph, &temp_dir.path().join("absent.txt")).await;
        assert!(result.is_err());
        assert!(!result.unwrap_err().is_domain());
        assert!(graph.contains_node("A"));
    }
}
