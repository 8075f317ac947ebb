//! In-memory repository.

use super::edge_list::LoadWarning;
use super::GraphRepository;
use crate::error::Result;
use crate::graph::{AdjacencyGraph, GraphView};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Repository that keeps the last saved graph in memory.
///
/// Nothing outlives the process. Useful for scratch sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    snapshot: RwLock<AdjacencyGraph>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose first load yields `graph`.
    #[must_use]
    pub fn with_graph(graph: AdjacencyGraph) -> Self {
        Self {
            snapshot: RwLock::new(graph),
        }
    }
}

#[async_trait]
impl GraphRepository for MemoryRepository {
    async fn load(&self, graph: &mut AdjacencyGraph) -> Result<Vec<LoadWarning>> {
        graph.clone_from(&*self.snapshot.read().await);
        Ok(Vec::new())
    }

    async fn save(&self, graph: &AdjacencyGraph) -> Result<()> {
        let mut snapshot = self.snapshot.write().await;
        snapshot.clone_from(graph);
        tracing::debug!(places = snapshot.node_count(), "graph kept in memory");
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
