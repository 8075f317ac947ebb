//! Graph algorithms.
//!
//! - [`dijkstra`]: single-source distances and point-to-point shortest paths
//! - [`connectivity`]: reachability of every place from the first one
//! - [`traversal`]: BFS and DFS visit orders, isolated places
//! - [`exhaustive`]: all simple paths and the longest simple path. These are
//!   exponential in the size of the graph and meant for small maps only.

pub mod connectivity;
pub mod dijkstra;
pub mod exhaustive;
pub mod traversal;

pub use connectivity::{check_connectivity, Connectivity};
pub use dijkstra::{DistanceMap, PathFinder};
pub use exhaustive::{all_simple_paths, longest_simple_path};
pub use traversal::{bfs, dfs, isolated_nodes};
