//! Storage abstraction layer for wayfinder.
//!
//! A [`GraphRepository`] loads a graph into memory and saves it back. Two
//! backends exist:
//!
//! - **Edge list**: a plain-text file with one road per line
//! - **Memory**: keeps the last saved graph for the lifetime of the process
//!
//! The trait is object-safe, so the application holds a
//! `Box<dyn GraphRepository>` chosen at runtime by [`create_repository`].
//!
//! # Example
//!
//! ```no_run
//! use wayfinder::graph::AdjacencyGraph;
//! use wayfinder::storage::{StorageBackend, create_repository};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = create_repository(StorageBackend::EdgeList(".wayfinder/graph.txt".into()));
//!     let mut graph = AdjacencyGraph::new();
//!     for warning in repo.load(&mut graph).await? {
//!         eprintln!("{warning}");
//!     }
//!     repo.save(&graph).await?;
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::graph::AdjacencyGraph;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod edge_list;
pub mod memory;

pub use edge_list::{load_from_edgelist, save_to_edgelist, EdgeListRepository, LoadWarning};
pub use memory::MemoryRepository;

/// Loads and saves whole graphs.
#[async_trait]
pub trait GraphRepository: Send + Sync {
    /// Replaces the contents of `graph` with the stored graph.
    ///
    /// Returns the non-fatal problems found while loading.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored graph cannot be read at all.
    async fn load(&self, graph: &mut AdjacencyGraph) -> Result<Vec<LoadWarning>>;

    /// Stores `graph`, replacing what was stored before.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph cannot be written.
    async fn save(&self, graph: &AdjacencyGraph) -> Result<()>;

    /// Short human-readable description of where the graph lives.
    fn describe(&self) -> String;
}

/// Available storage backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Keep the graph in memory only.
    Memory,

    /// Edge-list file at the given path.
    EdgeList(PathBuf),
}

impl StorageBackend {
    /// Returns the file path for file-based backends.
    #[must_use]
    pub fn data_path(&self) -> Option<&Path> {
        match self {
            Self::EdgeList(path) => Some(path),
            Self::Memory => None,
        }
    }
}

/// Create a repository for the given backend.
#[must_use]
pub fn create_repository(backend: StorageBackend) -> Box<dyn GraphRepository> {
    match backend {
        StorageBackend::Memory => Box::new(MemoryRepository::new()),
        StorageBackend::EdgeList(path) => Box::new(EdgeListRepository::new(path)),
    }
}
