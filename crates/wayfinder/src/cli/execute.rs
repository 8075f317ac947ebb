//! Command execution logic.
//!
//! Each function runs one command against an [`App`] and prints the
//! resulting [`Report`]. Mutating commands save the graph afterwards unless
//! the operation was refused.

use anyhow::Result;
use std::io;

use super::args::{
    FileArgs, InitArgs, PathArgs, PathsArgs, PlaceAction, PlaceArgs, RoadAction, RoadArgs,
    StartArgs,
};
use crate::app::App;
use crate::commands::ops::{self, settle};
use crate::graph::GraphView;
use crate::output::{self, OutputConfig, OutputMode, Report, VisitOrder};

/// Print a report in the app's distance unit.
fn emit(app: &App, report: &Report, output_mode: OutputMode) -> Result<()> {
    output::print_report(report, output_mode, app.distance_unit())?;
    Ok(())
}

/// Settle a mutation: save on success, report either way.
async fn commit(
    app: &App,
    result: crate::error::Result<Report>,
    output_mode: OutputMode,
) -> Result<()> {
    let report = settle(result)?;
    if !report.is_problem() {
        app.save().await?;
    }
    emit(app, &report, output_mode)
}

/// Execute the init command
pub async fn execute_init(args: &InitArgs, output_mode: OutputMode) -> Result<()> {
    use crate::commands::init;

    let current_dir = std::env::current_dir()?;

    if !args.quiet && output_mode == OutputMode::Text {
        let suffix = if args.sample {
            " with the sample map"
        } else {
            ""
        };
        println!("Initializing wayfinder repository{suffix}...");
    }

    let result = init::init(&current_dir, args.unit.as_deref(), args.sample).await?;

    if args.quiet {
        return Ok(());
    }
    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "wayfinder_dir": result.wayfinder_dir.display().to_string(),
                "config_file": result.config_file.display().to_string(),
                "graph_file": result.graph_file.display().to_string(),
                "places": result.places,
                "roads": result.roads,
            }))?;
        }
        OutputMode::Text => {
            let dir = result.wayfinder_dir.display();
            println!("Initialized wayfinder in {dir}");
            println!("  Config: {}", result.config_file.display());
            println!("  Graph:  {}", result.graph_file.display());
            println!("  {} places, {} roads", result.places, result.roads);
        }
    }

    Ok(())
}

/// Execute the info command
pub fn execute_info(app: &App, output_mode: OutputMode) -> Result<()> {
    let report = Report::Info {
        storage: app.describe(),
        unit: app.distance_unit().to_string(),
        places: app.graph().node_count(),
        roads: app.graph().edge_count(),
    };
    emit(app, &report, output_mode)?;

    if output_mode == OutputMode::Text && !app.load_warnings().is_empty() {
        let config = OutputConfig::from_env();
        for warning in app.load_warnings() {
            eprintln!("{}", output::warning(&warning.to_string(), &config));
        }
    }
    Ok(())
}

/// Execute the place command
pub async fn execute_place(app: &mut App, args: &PlaceArgs, output_mode: OutputMode) -> Result<()> {
    match &args.action {
        PlaceAction::Add { place } => {
            let result = ops::add_place(app.graph_mut(), place.clone());
            commit(app, result, output_mode).await
        }
        PlaceAction::Delete { place } => {
            let result = ops::delete_place(app.graph_mut(), place);
            commit(app, result, output_mode).await
        }
        PlaceAction::Find { place } => {
            emit(app, &ops::find_place(app.graph(), place), output_mode)
        }
        PlaceAction::Neighbors { place } => {
            let report = settle(ops::neighbors(app.graph(), place))?;
            emit(app, &report, output_mode)
        }
        PlaceAction::Isolated => emit(app, &ops::isolated(app.graph()), output_mode),
    }
}

/// Execute the road command
pub async fn execute_road(app: &mut App, args: &RoadArgs, output_mode: OutputMode) -> Result<()> {
    match &args.action {
        RoadAction::Add {
            from,
            to,
            weight,
            both,
        } => {
            let result = ops::add_road(app.graph_mut(), from, to, *weight, *both);
            commit(app, result, output_mode).await
        }
        RoadAction::Update { from, to, weight } => {
            let result = ops::update_road(app.graph_mut(), from, to, *weight);
            commit(app, result, output_mode).await
        }
        RoadAction::Delete { from, to } => {
            let result = ops::delete_road(app.graph_mut(), from, to);
            commit(app, result, output_mode).await
        }
        RoadAction::Find { from, to } => {
            let report = settle(ops::find_road(app.graph(), from, to))?;
            emit(app, &report, output_mode)
        }
    }
}

/// Execute the show command
pub fn execute_show(app: &App, output_mode: OutputMode) -> Result<()> {
    emit(app, &ops::show(app.graph()), output_mode)
}

/// Execute the roads command
pub fn execute_roads(app: &App, output_mode: OutputMode) -> Result<()> {
    emit(app, &ops::roads(app.graph()), output_mode)
}

/// Execute the distances command
pub fn execute_distances(app: &App, args: &StartArgs, output_mode: OutputMode) -> Result<()> {
    emit(app, &ops::distances(app.graph(), &args.start), output_mode)
}

/// Execute the path command
pub fn execute_path(app: &App, args: &PathArgs, output_mode: OutputMode) -> Result<()> {
    let report = settle(ops::shortest(app.graph(), &args.start, &args.end))?;
    emit(app, &report, output_mode)
}

/// Execute the connected command
pub fn execute_connected(app: &App, output_mode: OutputMode) -> Result<()> {
    emit(app, &ops::connectivity(app.graph()), output_mode)
}

/// Execute the bfs and dfs commands
pub fn execute_traverse(
    app: &App,
    order: VisitOrder,
    args: &StartArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let report = settle(ops::traverse(app.graph(), order, &args.start))?;
    emit(app, &report, output_mode)
}

/// Execute the paths command
pub fn execute_paths(app: &App, args: &PathsArgs, output_mode: OutputMode) -> Result<()> {
    let routes = ops::all_paths(app.graph(), &args.from, &args.to, args.max_hops);
    let report = settle(routes)?;
    emit(app, &report, output_mode)
}

/// Execute the longest command
pub fn execute_longest(app: &App, args: &PathsArgs, output_mode: OutputMode) -> Result<()> {
    let longest = ops::longest(app.graph(), &args.from, &args.to, args.max_hops);
    let report = settle(longest)?;
    emit(app, &report, output_mode)
}

/// Execute the export command
pub async fn execute_export(app: &App, args: &FileArgs, output_mode: OutputMode) -> Result<()> {
    let report = ops::export(app.graph(), &args.file).await?;
    emit(app, &report, output_mode)
}

/// Execute the import command
///
/// The imported graph replaces the stored one.
pub async fn execute_import(app: &mut App, args: &FileArgs, output_mode: OutputMode) -> Result<()> {
    let report = ops::import(app.graph_mut(), &args.file).await?;
    app.save().await?;
    emit(app, &report, output_mode)
}

/// Execute the shell command
///
/// Runs the interactive menu on stdin and saves the graph on exit if any
/// action changed it.
pub async fn execute_shell(app: &mut App) -> Result<()> {
    use crate::shell::Shell;

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let unit = app.distance_unit().to_string();
    let mut shell = Shell::new(input, io::stdout(), OutputConfig::from_env(), unit);

    if shell.run(app.graph_mut()).await? {
        app.save().await?;
        tracing::info!(storage = %app.describe(), "shell changes saved");
    }
    Ok(())
}
