//! Implementation of the `init` command.
//!
//! This module handles initialization of a new wayfinder repository, creating
//! the `.wayfinder/` directory with its configuration and graph file.

use crate::error::{Error, Result};
use crate::graph::{AdjacencyGraph, GraphView};
use crate::sample::sample_graph;
use crate::storage::{save_to_edgelist, StorageBackend};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default unit shown next to distances.
pub const DEFAULT_DISTANCE_UNIT: &str = "km";

/// Name of the wayfinder directory.
pub const WAYFINDER_DIR_NAME: &str = ".wayfinder";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the graph file.
pub const GRAPH_FILE_NAME: &str = "graph.txt";

/// Name of the gitignore file.
pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Longest accepted distance unit.
pub const MAX_UNIT_LENGTH: usize = 16;

/// Maximum number of parent directories searched for a repository.
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration stored in `.wayfinder/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WayfinderConfig {
    /// Unit shown next to distances.
    #[serde(rename = "distance-unit", default = "default_unit")]
    pub distance_unit: String,

    /// Storage backend configuration.
    pub storage: StorageConfig,
}

/// Storage section of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Backend name, `file` or `memory`.
    pub backend: String,

    /// Graph file, relative to the repository root.
    #[serde(rename = "graph-file")]
    pub graph_file: String,
}

fn default_unit() -> String {
    DEFAULT_DISTANCE_UNIT.to_string()
}

impl WayfinderConfig {
    /// Creates a configuration for a file-backed repository.
    #[must_use]
    pub fn new(distance_unit: &str) -> Self {
        Self {
            distance_unit: distance_unit.to_string(),
            storage: StorageConfig {
                backend: "file".to_string(),
                graph_file: format!("{WAYFINDER_DIR_NAME}/{GRAPH_FILE_NAME}"),
            },
        }
    }

    /// Loads the configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not valid configuration.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        validate_unit(&config.distance_unit)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Resolves the configured backend against the repository root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown backend name.
    pub fn backend(&self, root: &Path) -> Result<StorageBackend> {
        match self.storage.backend.as_str() {
            "file" => {
                let path = root.join(&self.storage.graph_file);
                Ok(StorageBackend::EdgeList(path))
            }
            "memory" => Ok(StorageBackend::Memory),
            other => Err(Error::Config(format!(
                "Unknown storage backend '{other}', expected 'file' or 'memory'"
            ))),
        }
    }
}

impl Default for WayfinderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DISTANCE_UNIT)
    }
}

/// Result of a successful init.
#[derive(Debug)]
pub struct InitResult {
    /// The created `.wayfinder` directory.
    pub wayfinder_dir: PathBuf,
    /// The configuration file.
    pub config_file: PathBuf,
    /// The graph file.
    pub graph_file: PathBuf,
    /// The gitignore file.
    pub gitignore_file: PathBuf,
    /// Places written to the graph file.
    pub places: usize,
    /// Roads written to the graph file.
    pub roads: usize,
}

/// Checks a distance unit label.
///
/// # Errors
///
/// Returns [`Error::Config`] if the unit is empty, too long, or contains
/// whitespace.
pub fn validate_unit(unit: &str) -> Result<()> {
    if unit.is_empty() {
        return Err(Error::Config("Distance unit cannot be empty".to_string()));
    }
    if unit.chars().count() > MAX_UNIT_LENGTH {
        return Err(Error::Config(format!(
            "Distance unit cannot exceed {MAX_UNIT_LENGTH} characters"
        )));
    }
    if unit.chars().any(char::is_whitespace) {
        let message = "Distance unit cannot contain whitespace";
        return Err(Error::Config(message.to_string()));
    }
    Ok(())
}

/// Creates a `.wayfinder` repository in `base_dir`.
///
/// The graph file starts empty, or holds the Gondar sample map when `sample`
/// is set.
///
/// # Errors
///
/// Returns [`Error::Config`] if the directory is already initialized or the
/// unit is invalid, and [`Error::Io`] if a file cannot be created.
pub async fn init(base_dir: &Path, unit: Option<&str>, sample: bool) -> Result<InitResult> {
    let unit = unit.unwrap_or(DEFAULT_DISTANCE_UNIT).trim();
    validate_unit(unit)?;

    let wayfinder_dir = base_dir.join(WAYFINDER_DIR_NAME);
    if wayfinder_dir.exists() {
        return Err(Error::Config(format!(
            "Wayfinder is already initialized in this directory. Found existing '{}'",
            WAYFINDER_DIR_NAME
        )));
    }

    fs::create_dir_all(&wayfinder_dir).await?;

    let config_file = wayfinder_dir.join(CONFIG_FILE_NAME);
    WayfinderConfig::new(unit).save(&config_file).await?;

    let graph_file = wayfinder_dir.join(GRAPH_FILE_NAME);
    let graph = if sample {
        sample_graph()?
    } else {
        AdjacencyGraph::new()
    };
    save_to_edgelist(&graph, &graph_file).await?;

    let gitignore_file = wayfinder_dir.join(GITIGNORE_FILE_NAME);
    let gitignore_content = "\
# Leftovers from interrupted saves
*.tmp
";
    fs::write(&gitignore_file, gitignore_content).await?;

    tracing::info!(dir = %wayfinder_dir.display(), sample, "repository initialized");

    Ok(InitResult {
        wayfinder_dir,
        config_file,
        graph_file,
        gitignore_file,
        places: graph.node_count(),
        roads: graph.edge_count(),
    })
}

/// Returns `true` if `base_dir` contains a `.wayfinder` directory.
#[must_use]
pub fn is_initialized(base_dir: &Path) -> bool {
    base_dir.join(WAYFINDER_DIR_NAME).exists()
}

/// Walks up from `start_dir` looking for a directory that contains `.wayfinder`.
#[must_use]
pub fn find_wayfinder_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        if current.join(WAYFINDER_DIR_NAME).exists() {
            return Some(current);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;
    use crate::storage::load_from_edgelist;
    use rstest::rstest;
    use tempfile::TempDir;

    // ========== Configuration Tests ==========

    #[test]
    fn test_config_new() {
        let config = WayfinderConfig::new("mi");
        assert_eq!(config.distance_unit, "mi");
        assert_eq!(config.storage.backend, "file");
        assert_eq!(config.storage.graph_file, ".wayfinder/graph.txt");
    }

    #[tokio::test]
    async fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let original = WayfinderConfig::new("km");
        original.save(&config_path).await.unwrap();

        let loaded = WayfinderConfig::load(&config_path).await.unwrap();
        assert_eq!(original, loaded);
    }

    #[tokio::test]
    async fn test_config_yaml_format() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        WayfinderConfig::default().save(&config_path).await.unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("distance-unit: km"));
        assert!(content.contains("backend: file"));
        assert!(content.contains("graph-file: .wayfinder/graph.txt"));
    }

    #[tokio::test]
    async fn test_config_missing_unit_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        let yaml = "storage:\n  backend: memory\n  graph-file: g.txt\n";
        tokio::fs::write(&config_path, yaml).await.unwrap();

        let config = WayfinderConfig::load(&config_path).await.unwrap();
        assert_eq!(config.distance_unit, DEFAULT_DISTANCE_UNIT);
        let backend = config.backend(temp_dir.path()).unwrap();
        assert_eq!(backend, StorageBackend::Memory);
    }

    #[rstest]
    #[case::file("file", true)]
    #[case::memory("memory", true)]
    #[case::unknown("postgres", false)]
    fn test_config_backend(#[case] backend: &str, #[case] ok: bool) {
        let mut config = WayfinderConfig::default();
        config.storage.backend = backend.to_string();
        assert_eq!(config.backend(Path::new("/repo")).is_ok(), ok);
    }

    #[rstest]
    #[case::empty("", "cannot be empty")]
    #[case::too_long("kilometres-long-unit", "cannot exceed")]
    #[case::space("k m", "whitespace")]
    fn test_validate_unit_invalid(#[case] unit: &str, #[case] expected: &str) {
        let err = validate_unit(unit).unwrap_err().to_string();
        assert!(err.contains(expected), "got: {err}");
    }

    // ========== Init Command Tests ==========

    #[tokio::test]
    async fn test_init_creates_directory_structure() {
        let temp_dir = TempDir::new().unwrap();

        let result = init(temp_dir.path(), None, false).await.unwrap();

        assert!(result.wayfinder_dir.exists());
        assert!(result.config_file.exists());
        assert!(result.graph_file.exists());
        assert!(result.gitignore_file.exists());
        assert_eq!(result.places, 0);
        let gitignore = tokio::fs::read_to_string(&result.gitignore_file)
            .await
            .unwrap();
        assert!(gitignore.contains("*.tmp"));
    }

    #[tokio::test]
    async fn test_init_with_sample_writes_sample_graph() {
        let temp_dir = TempDir::new().unwrap();

        let result = init(temp_dir.path(), Some("km"), true).await.unwrap();
        assert_eq!((result.places, result.roads), (6, 12));

        let mut graph = AdjacencyGraph::new();
        let warnings = load_from_edgelist(&mut graph, &result.graph_file)
            .await
            .unwrap();
        assert!(warnings.is_empty());
        assert_eq!(graph.edge_count(), 12);
    }

    #[tokio::test]
    async fn test_init_fails_if_already_initialized() {
        let temp_dir = TempDir::new().unwrap();
        init(temp_dir.path(), None, false).await.unwrap();

        let err = init(temp_dir.path(), None, false).await.unwrap_err();
        let message = err.to_string().to_lowercase();
        assert!(message.contains("already initialized"));
    }

    #[tokio::test]
    async fn test_find_root_from_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        init(temp_dir.path(), None, false).await.unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let root = temp_dir.path().to_path_buf();
        assert_eq!(find_wayfinder_root(&nested), Some(root));
        assert!(is_initialized(temp_dir.path()));
        assert!(!is_initialized(&nested));
    }
}
