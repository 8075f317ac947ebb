//! Output formatting for CLI commands and the interactive shell.
//!
//! Every operation produces a [`Report`]. This module renders reports either
//! as human-readable text or as JSON for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - [`report`]: The [`Report`] type

pub mod color;
pub mod report;

use crate::domain::{Distance, Edge, NodeId, Route};
use serde::Serialize;
use std::env;
use std::fmt::Display;
use std::io::{self, Write};

pub use color::{error, info, success, warning};
pub use report::{DistanceEntry, PlaceRoads, Report, Road, VisitOrder};

use color::{arrow, bold, dimmed, distance, fail_icon, ok_icon, place, two_way_arrow};

// ============================================================================
// Output Configuration
// ============================================================================

/// Default terminal width when detection fails.
const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Default maximum width for wrapped content.
const DEFAULT_MAX_CONTENT_WIDTH: usize = 80;

/// Configuration for text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum width for wrapped lines.
    pub max_width: usize,
    /// Use ASCII arrows and icons instead of Unicode.
    pub use_ascii: bool,
    /// Emit ANSI colors.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// - `WAYFINDER_MAX_WIDTH`: maximum content width
    /// - `WAYFINDER_ASCII`: `1`/`true` for ASCII output
    /// - `NO_COLOR` (any value) or `WAYFINDER_COLOR=0|false`: disable colors
    ///
    /// Invalid values are logged and replaced by the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_width = match lookup("WAYFINDER_MAX_WIDTH") {
            Some(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "WAYFINDER_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = match lookup("WAYFINDER_ASCII") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "WAYFINDER_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            None => false,
        };

        // https://no-color.org/
        let color_off = |v: String| v == "0" || v.eq_ignore_ascii_case("false");
        let use_colors = lookup("NO_COLOR").is_none()
            && !lookup("WAYFINDER_COLOR").is_some_and(color_off);

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Plain configuration: no colors, ASCII arrows.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(DEFAULT_MAX_CONTENT_WIDTH, true, false)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| usize::from(w.0))
        .unwrap_or(usize::from(DEFAULT_TERMINAL_WIDTH))
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Prints a report to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_report(report: &Report, mode: OutputMode, unit: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut config = OutputConfig::from_env();
    config.max_width = config.max_width.min(get_terminal_width());
    write_report(&mut handle, report, mode, &config, unit)
}

/// Writes a report in the requested format.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report<W: Write>(
    w: &mut W,
    report: &Report,
    mode: OutputMode,
    config: &OutputConfig,
    unit: &str,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => write_report_text(w, report, config, unit),
        OutputMode::Json => write_json(w, report),
    }
}

/// Prints any serializable value as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn length(value: impl Display, unit: &str, config: &OutputConfig) -> String {
    distance(&format!("{value} {unit}"), config)
}

fn route_text(route: &Route, config: &OutputConfig) -> String {
    let separator = format!(" {} ", arrow(config));
    route
        .nodes
        .iter()
        .map(|node| place(node.as_str(), config))
        .collect::<Vec<_>>()
        .join(&separator)
}

fn places_text(places: &[NodeId], config: &OutputConfig) -> String {
    places
        .iter()
        .map(|node| place(node.as_str(), config))
        .collect::<Vec<_>>()
        .join(", ")
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

fn write_roads_block<W: Write>(
    w: &mut W,
    roads: &[Edge],
    config: &OutputConfig,
    unit: &str,
) -> io::Result<()> {
    // Wrap on plain text so escape codes do not count towards the width.
    let plain = OutputConfig {
        use_colors: false,
        ..config.clone()
    };
    let listed = roads
        .iter()
        .map(|edge| {
            format!(
                "{} {} ({})",
                arrow(&plain),
                edge.destination,
                length(edge.weight, unit, &plain)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    for line in wrap_text(&listed, config.max_width.saturating_sub(2)) {
        writeln!(w, "  {line}")?;
    }
    Ok(())
}

fn write_total<W: Write>(
    w: &mut W,
    total: Distance,
    unit: &str,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "Total distance: {}", length(total, unit, config))
}

#[allow(clippy::too_many_lines)]
fn write_report_text<W: Write>(
    w: &mut W,
    report: &Report,
    config: &OutputConfig,
    unit: &str,
) -> io::Result<()> {
    match report {
        Report::PlaceAdded { place: p } => {
            let name = place(p.as_str(), config);
            writeln!(w, "{} Added place {}", ok_icon(config), name)
        }
        Report::RoadAdded {
            from,
            to,
            weight,
            both_ways,
        } => {
            let joint = if *both_ways {
                two_way_arrow(config)
            } else {
                arrow(config)
            };
            writeln!(
                w,
                "{} Added road {} {} {} ({})",
                ok_icon(config),
                place(from.as_str(), config),
                joint,
                place(to.as_str(), config),
                length(weight, unit, config)
            )
        }
        Report::RoadUpdated {
            from,
            to,
            previous,
            weight,
        } => writeln!(
            w,
            "{} Updated road {} {} {}: {} {} {}",
            ok_icon(config),
            place(from.as_str(), config),
            arrow(config),
            place(to.as_str(), config),
            length(previous, unit, config),
            arrow(config),
            length(weight, unit, config)
        ),
        Report::RoadsDeleted { from, to, removed } => writeln!(
            w,
            "{} Deleted {} {} {} {}",
            ok_icon(config),
            plural(*removed, "road"),
            place(from.as_str(), config),
            arrow(config),
            place(to.as_str(), config)
        ),
        Report::PlaceDeleted {
            place: p,
            incoming_removed,
        } => writeln!(
            w,
            "{} Deleted place {} and {} leading to it",
            ok_icon(config),
            place(p.as_str(), config),
            plural(*incoming_removed, "road")
        ),
        Report::PlaceLookup { place: p, exists } => {
            if *exists {
                writeln!(w, "Place {} exists", place(p.as_str(), config))
            } else {
                writeln!(
                    w,
                    "{}",
                    warning(&format!("Place {p} does not exist"), config)
                )
            }
        }
        Report::RoadFound { road } => writeln!(
            w,
            "Road {} {} {} has length {}",
            place(road.from.as_str(), config),
            arrow(config),
            place(road.to.as_str(), config),
            length(road.weight, unit, config)
        ),
        Report::Adjacency { places } => {
            if places.is_empty() {
                return writeln!(w, "The graph is empty.");
            }
            for entry in places {
                if entry.roads.is_empty() {
                    writeln!(
                        w,
                        "{}: {}",
                        place(entry.place.as_str(), config),
                        dimmed("no roads", config)
                    )?;
                } else {
                    writeln!(w, "{}:", place(entry.place.as_str(), config))?;
                    write_roads_block(w, &entry.roads, config, unit)?;
                }
            }
            Ok(())
        }
        Report::Roads { roads } => {
            if roads.is_empty() {
                return writeln!(w, "No roads.");
            }
            let heading = format!("{}:", plural(roads.len(), "road"));
            writeln!(w, "{}", bold(&heading, config))?;
            for road in roads {
                writeln!(
                    w,
                    "  {} {} {}  {}",
                    place(road.from.as_str(), config),
                    arrow(config),
                    place(road.to.as_str(), config),
                    length(road.weight, unit, config)
                )?;
            }
            Ok(())
        }
        Report::Neighbors { place: p, roads } => {
            if roads.is_empty() {
                return writeln!(w, "{} has no outgoing roads.", place(p.as_str(), config));
            }
            writeln!(w, "Roads from {}:", place(p.as_str(), config))?;
            for edge in roads {
                writeln!(
                    w,
                    "  {} {} ({})",
                    arrow(config),
                    place(edge.destination.as_str(), config),
                    length(edge.weight, unit, config)
                )?;
            }
            Ok(())
        }
        Report::Distances { start, distances } => {
            writeln!(
                w,
                "{}",
                bold(&format!("Shortest distances from {start}:"), config)
            )?;
            for entry in distances {
                let value = match entry.distance {
                    Some(d) => length(d, unit, config),
                    None => error("unreachable", config),
                };
                writeln!(w, "  {}: {}", place(entry.place.as_str(), config), value)?;
            }
            Ok(())
        }
        Report::ShortestPath { route } => {
            writeln!(w, "Shortest path: {}", route_text(route, config))?;
            write_total(w, route.distance, unit, config)
        }
        Report::LongestPath { route } => {
            writeln!(w, "Longest simple path: {}", route_text(route, config))?;
            write_total(w, route.distance, unit, config)
        }
        Report::Paths { from, to, routes } => {
            if routes.is_empty() {
                return writeln!(
                    w,
                    "{}",
                    warning(&format!("No paths from {from} to {to}"), config)
                );
            }
            writeln!(
                w,
                "{} from {} to {}:",
                plural(routes.len(), "path"),
                place(from.as_str(), config),
                place(to.as_str(), config)
            )?;
            for route in routes {
                writeln!(
                    w,
                    "  {} ({})",
                    route_text(route, config),
                    length(route.distance, unit, config)
                )?;
            }
            Ok(())
        }
        Report::Connectivity {
            connected,
            unreachable,
        } => match (*connected, unreachable) {
            (true, _) | (false, None) => writeln!(w, "{} The graph is connected.", ok_icon(config)),
            (false, Some(p)) => writeln!(
                w,
                "{} The graph is not connected: {} cannot be reached.",
                fail_icon(config),
                place(p.as_str(), config)
            ),
        },
        Report::Isolated { places } => {
            if places.is_empty() {
                writeln!(w, "No isolated places.")
            } else {
                writeln!(w, "Isolated places: {}", places_text(places, config))
            }
        }
        Report::Visit {
            order,
            start,
            places,
        } => {
            let label = match order {
                VisitOrder::Bfs => "BFS",
                VisitOrder::Dfs => "DFS",
            };
            writeln!(
                w,
                "{label} from {}: {}",
                place(start.as_str(), config),
                places_text(places, config)
            )
        }
        Report::Saved {
            path,
            places,
            roads,
        } => writeln!(
            w,
            "{} Saved {} and {} to {}",
            ok_icon(config),
            plural(*places, "place"),
            plural(*roads, "road"),
            path
        ),
        Report::Loaded {
            path,
            places,
            roads,
            warnings,
        } => {
            writeln!(
                w,
                "{} Loaded {} and {} from {}",
                ok_icon(config),
                plural(*places, "place"),
                plural(*roads, "road"),
                path
            )?;
            for line in warnings {
                writeln!(w, "  {}", warning(line, config))?;
            }
            Ok(())
        }
        Report::Info {
            storage,
            unit: configured,
            places,
            roads,
        } => {
            writeln!(w, "{}", bold("Wayfinder Repository Information", config))?;
            writeln!(w, "================================")?;
            writeln!(w)?;
            let storage = info(storage, config);
            writeln!(w, "{}  {}", dimmed("Storage:", config), storage)?;
            writeln!(w, "{}     {}", dimmed("Unit:", config), configured)?;
            writeln!(
                w,
                "{}    {} and {}",
                dimmed("Graph:", config),
                plural(*places, "place"),
                plural(*roads, "road")
            )
        }
        Report::Problem { kind, message } => {
            if kind == "duplicate_node" {
                writeln!(w, "{}", warning(message, config))
            } else {
                writeln!(w, "{} {}", fail_icon(config), error(message, config))
            }
        }
    }
}

/// Wraps text to `max_width`, keeping blank lines.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, max_width.max(1))
                    .into_iter()
                    .map(std::borrow::Cow::into_owned)
                    .collect()
            }
        })
        .collect()
}
