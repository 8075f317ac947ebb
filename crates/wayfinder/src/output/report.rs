//! Observable outcome of every graph operation.
//!
//! Commands and the interactive shell produce a [`Report`]; the output
//! module renders it as text or JSON.

use crate::algo::{Connectivity, DistanceMap};
use crate::domain::{Distance, Edge, NodeId, Route, Weight};
use crate::error::Error;
use crate::storage::LoadWarning;
use serde::Serialize;
use std::path::Path;

/// How a traversal visits places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitOrder {
    /// Breadth-first.
    Bfs,
    /// Depth-first.
    Dfs,
}

/// One place with its distance from the start, `None` if unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceEntry {
    /// The place.
    pub place: NodeId,
    /// Distance from the start.
    pub distance: Option<Distance>,
}

/// A place and its outgoing roads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceRoads {
    /// The place.
    pub place: NodeId,
    /// Its outgoing roads, in insertion order.
    pub roads: Vec<Edge>,
}

/// A road together with its source place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Road {
    /// Source place.
    pub from: NodeId,
    /// Destination place.
    pub to: NodeId,
    /// Road length.
    pub weight: Weight,
}

/// Outcome of an operation, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    /// A place was added.
    PlaceAdded {
        /// The new place.
        place: NodeId,
    },
    /// A road was added, in one or both directions.
    RoadAdded {
        /// Source place.
        from: NodeId,
        /// Destination place.
        to: NodeId,
        /// Road length.
        weight: Weight,
        /// Whether the reverse road was added too.
        both_ways: bool,
    },
    /// A road's length changed.
    RoadUpdated {
        /// Source place.
        from: NodeId,
        /// Destination place.
        to: NodeId,
        /// Length before the update.
        previous: Weight,
        /// Length after the update.
        weight: Weight,
    },
    /// Roads between two places were removed.
    RoadsDeleted {
        /// Source place.
        from: NodeId,
        /// Destination place.
        to: NodeId,
        /// Number of parallel roads removed.
        removed: usize,
    },
    /// A place and its roads were removed.
    PlaceDeleted {
        /// The removed place.
        place: NodeId,
        /// Roads from other places that led to it.
        incoming_removed: usize,
    },
    /// Result of looking up a place.
    PlaceLookup {
        /// The place searched for.
        place: NodeId,
        /// Whether it exists.
        exists: bool,
    },
    /// A road that was looked up and found.
    RoadFound {
        /// The road.
        road: Road,
    },
    /// Every place with its outgoing roads.
    Adjacency {
        /// Places in graph order.
        places: Vec<PlaceRoads>,
    },
    /// Every road in the graph.
    Roads {
        /// Roads in graph order.
        roads: Vec<Road>,
    },
    /// Outgoing roads of one place.
    Neighbors {
        /// Roads from this place.
        place: NodeId,
        /// Outgoing roads.
        roads: Vec<Edge>,
    },
    /// Single-source distances.
    Distances {
        /// Start place.
        start: NodeId,
        /// Every place with its distance.
        distances: Vec<DistanceEntry>,
    },
    /// A shortest route.
    ShortestPath {
        /// The route.
        route: Route,
    },
    /// The heaviest simple route.
    LongestPath {
        /// The route.
        route: Route,
    },
    /// Every simple route between two places.
    Paths {
        /// Start place.
        from: NodeId,
        /// Destination place.
        to: NodeId,
        /// Routes in enumeration order.
        routes: Vec<Route>,
    },
    /// Result of the reachability check.
    Connectivity {
        /// Whether every place is reachable from the first one.
        connected: bool,
        /// First place that is not.
        unreachable: Option<NodeId>,
    },
    /// Places without any roads.
    Isolated {
        /// The isolated places.
        places: Vec<NodeId>,
    },
    /// Traversal visit order.
    Visit {
        /// Breadth- or depth-first.
        order: VisitOrder,
        /// Start place.
        start: NodeId,
        /// Places in visit order.
        places: Vec<NodeId>,
    },
    /// The graph was written to a file.
    Saved {
        /// Target file.
        path: String,
        /// Places written.
        places: usize,
        /// Roads written.
        roads: usize,
    },
    /// The graph was read from a file.
    Loaded {
        /// Source file.
        path: String,
        /// Places loaded.
        places: usize,
        /// Roads loaded.
        roads: usize,
        /// Lines that were skipped.
        warnings: Vec<String>,
    },
    /// Repository summary.
    Info {
        /// Where the graph is stored.
        storage: String,
        /// Unit shown next to distances.
        unit: String,
        /// Number of places.
        places: usize,
        /// Number of roads.
        roads: usize,
    },
    /// A graph operation could not be carried out.
    Problem {
        /// Machine-readable kind.
        kind: String,
        /// Human-readable message.
        message: String,
    },
}

impl Report {
    /// Builds a [`Report::Problem`] from an error.
    #[must_use]
    pub fn problem(error: &Error) -> Self {
        let kind = match error {
            Error::NodeNotFound(_) => "node_not_found",
            Error::EdgeNotFound { .. } => "edge_not_found",
            Error::DuplicateNode(_) => "duplicate_node",
            Error::NoPathExists { .. } => "no_path_exists",
            Error::InvalidNodeId(_) => "invalid_node_id",
            Error::Io(_) => "io",
            Error::Persistence(_) => "persistence",
            Error::Config(_) => "config",
        };
        Self::Problem {
            kind: kind.to_string(),
            message: error.to_string(),
        }
    }

    /// Builds a [`Report::Distances`] from a distance map.
    #[must_use]
    pub fn distances(map: &DistanceMap) -> Self {
        Self::Distances {
            start: map.start().clone(),
            distances: map
                .iter()
                .map(|(place, distance)| DistanceEntry {
                    place: place.clone(),
                    distance,
                })
                .collect(),
        }
    }

    /// Builds a [`Report::Connectivity`] from a check result.
    #[must_use]
    pub fn connectivity(result: Connectivity) -> Self {
        match result {
            Connectivity::Connected => Self::Connectivity {
                connected: true,
                unreachable: None,
            },
            Connectivity::Disconnected { unreachable } => Self::Connectivity {
                connected: false,
                unreachable: Some(unreachable),
            },
        }
    }

    /// Builds a [`Report::Loaded`].
    #[must_use]
    pub fn loaded(path: &Path, places: usize, roads: usize, warnings: &[LoadWarning]) -> Self {
        Self::Loaded {
            path: path.display().to_string(),
            places,
            roads,
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns `true` for [`Report::Problem`].
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(self, Self::Problem { .. })
    }
}
