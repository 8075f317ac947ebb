//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::validators::{validate_hops, validate_place, validate_unit};
use crate::domain::{NodeId, Weight};

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Seed the graph with the Gondar sample map
    #[arg(short, long)]
    pub sample: bool,

    /// Unit shown next to distances (e.g., "km", "mi")
    #[arg(short, long, value_parser = validate_unit)]
    pub unit: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `place` command
#[derive(Parser, Debug, Clone)]
pub struct PlaceArgs {
    /// Place subcommand
    #[command(subcommand)]
    pub action: PlaceAction,
}

/// Place management actions
#[derive(Subcommand, Debug, Clone)]
pub enum PlaceAction {
    /// Add a place with no roads
    Add {
        /// Place name
        #[arg(value_parser = validate_place)]
        place: NodeId,
    },

    /// Delete a place and every road touching it
    Delete {
        /// Place name
        #[arg(value_parser = validate_place)]
        place: NodeId,
    },

    /// Check whether a place exists
    Find {
        /// Place name
        #[arg(value_parser = validate_place)]
        place: NodeId,
    },

    /// List the roads leaving a place
    Neighbors {
        /// Place name
        #[arg(value_parser = validate_place)]
        place: NodeId,
    },

    /// List places with no roads at all
    Isolated,
}

/// Arguments for the `road` command
#[derive(Parser, Debug, Clone)]
pub struct RoadArgs {
    /// Road subcommand
    #[command(subcommand)]
    pub action: RoadAction,
}

/// Road management actions
#[derive(Subcommand, Debug, Clone)]
pub enum RoadAction {
    /// Add a road between two places
    Add {
        /// Source place
        #[arg(value_parser = validate_place)]
        from: NodeId,

        /// Destination place
        #[arg(value_parser = validate_place)]
        to: NodeId,

        /// Road length
        weight: Weight,

        /// Also add the reverse road, creating missing places
        #[arg(short, long)]
        both: bool,
    },

    /// Change the length of a road
    Update {
        /// Source place
        #[arg(value_parser = validate_place)]
        from: NodeId,

        /// Destination place
        #[arg(value_parser = validate_place)]
        to: NodeId,

        /// New road length
        weight: Weight,
    },

    /// Delete every road from one place to another
    Delete {
        /// Source place
        #[arg(value_parser = validate_place)]
        from: NodeId,

        /// Destination place
        #[arg(value_parser = validate_place)]
        to: NodeId,
    },

    /// Look up a road
    Find {
        /// Source place
        #[arg(value_parser = validate_place)]
        from: NodeId,

        /// Destination place
        #[arg(value_parser = validate_place)]
        to: NodeId,
    },
}

/// Arguments for commands that start from one place
#[derive(Parser, Debug, Clone)]
pub struct StartArgs {
    /// Start place
    #[arg(value_parser = validate_place)]
    pub start: NodeId,
}

/// Arguments for the `path` command
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Start place
    #[arg(value_parser = validate_place)]
    pub start: NodeId,

    /// Destination place
    #[arg(value_parser = validate_place)]
    pub end: NodeId,
}

/// Arguments for the `paths` and `longest` commands
#[derive(Parser, Debug, Clone)]
pub struct PathsArgs {
    /// Start place
    #[arg(value_parser = validate_place)]
    pub from: NodeId,

    /// Destination place
    #[arg(value_parser = validate_place)]
    pub to: NodeId,

    /// Only consider paths with at most this many roads
    ///
    /// Enumeration is exponential in the number of places; set a limit on
    /// large maps.
    #[arg(short = 'm', long, value_parser = validate_hops)]
    pub max_hops: Option<usize>,
}

/// Arguments for the `export` and `import` commands
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Edge-list file
    pub file: PathBuf,
}
