//! Wayfinder - shortest routes over a map of places and roads.
//!
//! This crate provides both a CLI application and a library. The library
//! side is a weighted directed graph with Dijkstra shortest paths, a
//! reachability check, traversals, and edge-list persistence.
//!
//! # Example
//!
//! ```
//! use wayfinder::algo::{PathFinder, check_connectivity};
//! use wayfinder::sample::sample_graph;
//! use wayfinder::domain::NodeId;
//!
//! let graph = sample_graph().unwrap();
//! let start = NodeId::new("Church-of-St-Mary").unwrap();
//! let end = NodeId::new("Blue-Nile-Falls").unwrap();
//!
//! assert_eq!(graph.shortest_path(&start, &end).unwrap().distance, 19);
//! assert!(check_connectivity(&graph).is_connected());
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod algo;
pub mod domain;
pub mod error;
pub mod graph;
pub mod sample;
pub mod storage;

// Public CLI module (needed by binary)
pub mod cli;

// Command implementations
pub mod commands;

// Application context and front ends
pub mod app;
pub mod output;
pub mod shell;
