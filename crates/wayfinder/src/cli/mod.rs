//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for wayfinder using clap's
//! derive API. Each command has its own argument struct with validation.
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--graph FILE`: Use a bare edge-list file instead of the `.wayfinder`
//!   repository
//!
//! # Example
//!
//! ```bash
//! wayfinder init --sample
//! wayfinder road add Gondar Azezo 12 --both
//! wayfinder path Church-of-St-Mary Blue-Nile-Falls
//! wayfinder --json distances Fasil-Ghebbi
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{
    FileArgs, InitArgs, PathArgs, PathsArgs, PlaceAction, PlaceArgs, RoadAction, RoadArgs,
    StartArgs,
};

// Re-export validators for external use
pub use validators::{validate_hops, validate_place, validate_unit};

/// Wayfinder - Shortest routes between places
///
/// Keeps a map of places joined by weighted one-way roads and answers route,
/// distance, and reachability questions. The map is stored in
/// `.wayfinder/graph.txt` as a plain edge list.
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Work on this edge-list file instead of the repository graph
    #[arg(long, global = true, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new wayfinder repository
    ///
    /// Creates the `.wayfinder/` directory with configuration and an empty
    /// graph, or the sample map with `--sample`.
    Init(InitArgs),

    /// Show repository information
    ///
    /// Displays the storage location, distance unit, and graph size.
    Info,

    /// Add, delete, and inspect places
    Place(PlaceArgs),

    /// Add, update, delete, and look up roads
    Road(RoadArgs),

    /// Show every place with its outgoing roads
    Show,

    /// List every road
    Roads,

    /// Shortest distance from a place to every other place
    Distances(StartArgs),

    /// Shortest route between two places
    Path(PathArgs),

    /// Check that every place is reachable from the first one
    Connected,

    /// Breadth-first visit order from a place
    Bfs(StartArgs),

    /// Depth-first visit order from a place
    Dfs(StartArgs),

    /// Every simple route between two places
    ///
    /// The search is exhaustive; use `--max-hops` on large maps.
    Paths(PathsArgs),

    /// The longest simple route between two places
    Longest(PathsArgs),

    /// Write the graph to an edge-list file
    Export(FileArgs),

    /// Replace the graph with the contents of an edge-list file
    Import(FileArgs),

    /// Interactive numbered menu
    Shell,
}

impl Commands {
    /// Returns `true` for commands that change the stored graph.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        match self {
            Self::Place(args) => !matches!(
                args.action,
                PlaceAction::Find { .. } | PlaceAction::Neighbors { .. } | PlaceAction::Isolated
            ),
            Self::Road(args) => !matches!(args.action, RoadAction::Find { .. }),
            Self::Import(_) | Self::Shell => true,
            _ => false,
        }
    }
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Open the graph named by `--graph`, or the repository graph.
    async fn open_app(&self) -> Result<crate::app::App> {
        use crate::app::App;

        let app = match &self.graph {
            Some(path) => App::from_graph_file(path).await?,
            None => App::from_directory(&std::env::current_dir()?).await?,
        };
        Ok(app)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::output::{OutputMode, VisitOrder};

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let Some(command) = &self.command else {
            println!("Wayfinder shortest-route finder");
            println!("Use --help for more information");
            return Ok(());
        };
        tracing::debug!(?command, mutating = command.is_mutating(), "dispatching");

        match command {
            Commands::Init(args) => execute::execute_init(args, output_mode).await,
            Commands::Info => {
                let app = self.open_app().await?;
                execute::execute_info(&app, output_mode)
            }
            Commands::Place(args) => {
                let mut app = self.open_app().await?;
                execute::execute_place(&mut app, args, output_mode).await
            }
            Commands::Road(args) => {
                let mut app = self.open_app().await?;
                execute::execute_road(&mut app, args, output_mode).await
            }
            Commands::Show => {
                let app = self.open_app().await?;
                execute::execute_show(&app, output_mode)
            }
            Commands::Roads => {
                let app = self.open_app().await?;
                execute::execute_roads(&app, output_mode)
            }
            Commands::Distances(args) => {
                let app = self.open_app().await?;
                execute::execute_distances(&app, args, output_mode)
            }
            Commands::Path(args) => {
                let app = self.open_app().await?;
                execute::execute_path(&app, args, output_mode)
            }
            Commands::Connected => {
                let app = self.open_app().await?;
                execute::execute_connected(&app, output_mode)
            }
            Commands::Bfs(args) => {
                let app = self.open_app().await?;
                execute::execute_traverse(&app, VisitOrder::Bfs, args, output_mode)
            }
            Commands::Dfs(args) => {
                let app = self.open_app().await?;
                execute::execute_traverse(&app, VisitOrder::Dfs, args, output_mode)
            }
            Commands::Paths(args) => {
                let app = self.open_app().await?;
                execute::execute_paths(&app, args, output_mode)
            }
            Commands::Longest(args) => {
                let app = self.open_app().await?;
                execute::execute_longest(&app, args, output_mode)
            }
            Commands::Export(args) => {
                let app = self.open_app().await?;
                execute::execute_export(&app, args, output_mode).await
            }
            Commands::Import(args) => {
                let mut app = self.open_app().await?;
                execute::execute_import(&mut app, args, output_mode).await
            }
            Commands::Shell => {
                let mut app = self.open_app().await?;
                execute::execute_shell(&mut app).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ========== CLI Parsing Tests ==========

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["wayfinder"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert!(cli.graph.is_none());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let argv = ["wayfinder", "show", "--json", "--graph", "map.txt"];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert!(cli.json);
        assert_eq!(cli.graph, Some(PathBuf::from("map.txt")));
        assert!(matches!(cli.command, Some(Commands::Show)));
    }

    #[test]
    fn test_parse_init_defaults() {
        let cli = Cli::try_parse_from(["wayfinder", "init"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => {
                assert!(!args.sample);
                assert!(args.unit.is_none());
                assert!(!args.quiet);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_parse_init_with_options() {
        let argv = ["wayfinder", "init", "--sample", "--unit", "mi", "-q"];
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => {
                assert!(args.sample);
                assert_eq!(args.unit.as_deref(), Some("mi"));
                assert!(args.quiet);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_parse_init_rejects_bad_unit() {
        let argv = ["wayfinder", "init", "--unit", ""];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_parse_road_add_both() {
        let argv = ["wayfinder", "road", "add", "Gondar", "Azezo", "12", "--both"];
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Some(Commands::Road(RoadArgs {
                action:
                    RoadAction::Add {
                        from,
                        to,
                        weight,
                        both,
                    },
            })) => {
                assert_eq!(from.as_str(), "Gondar");
                assert_eq!(to.as_str(), "Azezo");
                assert_eq!(weight, 12);
                assert!(both);
            }
            _ => panic!("Expected Road Add command"),
        }
    }

    #[rstest]
    #[case::negative_weight(&["wayfinder", "road", "add", "A", "B", "-1"])]
    #[case::text_weight(&["wayfinder", "road", "update", "A", "B", "far"])]
    #[case::bad_place(&["wayfinder", "place", "add", "#A"])]
    #[case::zero_hops(&["wayfinder", "paths", "A", "B", "--max-hops", "0"])]
    #[case::missing_end(&["wayfinder", "path", "A"])]
    fn test_parse_rejects_invalid_input(#[case] argv: &[&str]) {
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[rstest]
    #[case(&["wayfinder", "info"])]
    #[case(&["wayfinder", "place", "add", "A"])]
    #[case(&["wayfinder", "place", "delete", "A"])]
    #[case(&["wayfinder", "place", "find", "A"])]
    #[case(&["wayfinder", "place", "neighbors", "A"])]
    #[case(&["wayfinder", "place", "isolated"])]
    #[case(&["wayfinder", "road", "update", "A", "B", "3"])]
    #[case(&["wayfinder", "road", "delete", "A", "B"])]
    #[case(&["wayfinder", "road", "find", "A", "B"])]
    #[case(&["wayfinder", "roads"])]
    #[case(&["wayfinder", "distances", "A"])]
    #[case(&["wayfinder", "path", "A", "D"])]
    #[case(&["wayfinder", "connected"])]
    #[case(&["wayfinder", "bfs", "A"])]
    #[case(&["wayfinder", "dfs", "A"])]
    #[case(&["wayfinder", "paths", "A", "D", "-m", "3"])]
    #[case(&["wayfinder", "longest", "A", "D"])]
    #[case(&["wayfinder", "export", "out.txt"])]
    #[case(&["wayfinder", "import", "in.txt"])]
    #[case(&["wayfinder", "shell"])]
    fn test_parse_every_command(#[case] argv: &[&str]) {
        let cli = Cli::try_parse_from(argv).unwrap();
        assert!(cli.command.is_some());
    }

    #[test]
    fn test_parse_paths_max_hops() {
        let argv = ["wayfinder", "longest", "A", "D", "--max-hops", "4"];
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Some(Commands::Longest(args)) => assert_eq!(args.max_hops, Some(4)),
            _ => panic!("Expected Longest command"),
        }
    }

    #[rstest]
    #[case(&["wayfinder", "place", "add", "A"], true)]
    #[case(&["wayfinder", "place", "find", "A"], false)]
    #[case(&["wayfinder", "road", "delete", "A", "B"], true)]
    #[case(&["wayfinder", "road", "find", "A", "B"], false)]
    #[case(&["wayfinder", "import", "in.txt"], true)]
    #[case(&["wayfinder", "path", "A", "B"], false)]
    fn test_mutating_commands(#[case] argv: &[&str], #[case] mutating: bool) {
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.command.unwrap().is_mutating(), mutating);
    }
}
