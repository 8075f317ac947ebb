//! Application context for CLI command execution.
//!
//! [`App`] finds the repository, loads the graph through the configured
//! [`GraphRepository`], and writes it back after mutating commands.
//!
//! # Example
//!
//! ```no_run
//! use wayfinder::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new(".")).await?;
//!     println!("{}", app.describe());
//!     Ok(())
//! }
//! ```

use crate::commands::init::{
    find_wayfinder_root, WayfinderConfig, CONFIG_FILE_NAME, DEFAULT_DISTANCE_UNIT,
    WAYFINDER_DIR_NAME,
};
use crate::error::{Error, Result};
use crate::graph::AdjacencyGraph;
use crate::storage::{create_repository, EdgeListRepository, GraphRepository, LoadWarning};
use std::path::Path;

/// Application context for CLI operations.
///
/// The graph is loaded once on creation and lives in memory until
/// [`App::save`] writes it back.
pub struct App {
    /// The in-memory graph
    graph: AdjacencyGraph,

    /// Where the graph is loaded from and saved to
    repository: Box<dyn GraphRepository>,

    /// Unit shown next to distances
    distance_unit: String,

    /// Problems found while loading
    load_warnings: Vec<LoadWarning>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("repository", &self.repository.describe())
            .field("distance_unit", &self.distance_unit)
            .field("load_warnings", &self.load_warnings.len())
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create an App from the given working directory.
    ///
    /// Searches up the directory tree for a `.wayfinder/` directory, loads
    /// its configuration, and loads the graph.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No wayfinder repository is found in the directory tree
    /// - Configuration cannot be loaded
    /// - The graph file cannot be read
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_wayfinder_root(working_dir).ok_or_else(|| {
            Error::Config(
                "Not a wayfinder repository (or any parent directory). Run 'wayfinder init' first"
                    .to_string(),
            )
        })?;

        let config_path = root_dir.join(WAYFINDER_DIR_NAME).join(CONFIG_FILE_NAME);
        let config = WayfinderConfig::load(&config_path).await?;

        let repository = create_repository(config.backend(&root_dir)?);
        Self::with_repository(repository, &config.distance_unit).await
    }

    /// Create an App over a bare edge-list file, without a repository.
    ///
    /// A missing file starts an empty graph and is created on save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub async fn from_graph_file(path: &Path) -> Result<Self> {
        let repository = Box::new(EdgeListRepository::new(path));
        Self::with_repository(repository, DEFAULT_DISTANCE_UNIT).await
    }

    /// Create an App over any repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot load the graph.
    pub async fn with_repository(
        repository: Box<dyn GraphRepository>,
        distance_unit: &str,
    ) -> Result<Self> {
        let mut graph = AdjacencyGraph::new();
        let load_warnings = repository.load(&mut graph).await?;
        tracing::debug!(
            repository = %repository.describe(),
            warnings = load_warnings.len(),
            "application ready"
        );

        Ok(Self {
            graph,
            repository,
            distance_unit: distance_unit.to_string(),
            load_warnings,
        })
    }

    /// The loaded graph.
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Mutable access to the loaded graph.
    pub fn graph_mut(&mut self) -> &mut AdjacencyGraph {
        &mut self.graph
    }

    /// Unit shown next to distances.
    pub fn distance_unit(&self) -> &str {
        &self.distance_unit
    }

    /// Where the graph lives.
    pub fn describe(&self) -> String {
        self.repository.describe()
    }

    /// Problems found while loading the graph.
    pub fn load_warnings(&self) -> &[LoadWarning] {
        &self.load_warnings
    }

    /// Save the graph through the repository.
    ///
    /// This should be called after any mutating operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot write the graph.
    pub async fn save(&self) -> Result<()> {
        self.repository.save(&self.graph).await
    }
}
