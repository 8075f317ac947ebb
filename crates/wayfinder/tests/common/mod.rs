//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use wayfinder::domain::NodeId;
use wayfinder::graph::{AdjacencyGraph, MutableGraph};

/// Path of the binary built for this test run.
pub const WAYFINDER_BIN: &str = env!("CARGO_BIN_EXE_wayfinder");

fn wayfinder_command(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(WAYFINDER_BIN);
    command
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("WAYFINDER_ASCII", "1")
        .env("RUST_LOG", "off");
    command
}

/// Run the wayfinder binary in the specified directory
pub fn run_wayfinder_in_dir(dir: &Path, args: &[&str]) -> Output {
    wayfinder_command(dir, args)
        .output()
        .expect("Failed to execute wayfinder binary")
}

/// Run the wayfinder binary with `input` piped to stdin
pub fn run_wayfinder_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = wayfinder_command(dir, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn wayfinder binary");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for wayfinder")
}

/// Asserts that `output` contains `expected`, printing the output otherwise
pub fn assert_shows(output: &str, expected: &str) {
    assert!(output.contains(expected), "got: {output}");
}

/// Stdout of a finished command as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Shorthand for a valid place name
pub fn id(name: &str) -> NodeId {
    NodeId::new(name).expect("valid place name")
}

/// A graph with the given places and one-way roads
pub fn graph_of(places: &[&str], roads: &[(&str, &str, u32)]) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new();
    for place in places {
        graph.add_node(id(place));
    }
    for (from, to, weight) in roads {
        graph.add_edge(from, to, *weight).expect("endpoints exist");
    }
    graph
}

/// A,B,C,D with A->B(1), B->C(2), A->C(5), C->D(1), plus isolated E
pub fn diamond() -> AdjacencyGraph {
    graph_of(
        &["A", "B", "C", "D", "E"],
        &[("A", "B", 1), ("B", "C", 2), ("A", "C", 5), ("C", "D", 1)],
    )
}
