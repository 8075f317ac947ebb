//! Interactive numbered menu.
//!
//! [`Shell`] drives the graph operations from any token stream, so the same
//! loop serves stdin and scripted test sessions. Every outcome, including
//! failures, is rendered as a [`Report`] and the loop carries on until the
//! user picks `0` or the input ends.

mod tokens;

pub use tokens::TokenReader;

use crate::commands::ops;
use crate::domain::{NodeId, Weight};
use crate::error::{Error, Result};
use crate::graph::AdjacencyGraph;
use crate::output::{write_report, OutputConfig, OutputMode, Report, VisitOrder};
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::io::AsyncBufRead;

/// A menu entry. Entry `n` in [`MenuChoice::ALL`] is chosen with `n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add place.
    AddPlace,
    /// Add one-way road.
    AddRoad,
    /// Connect two places both ways.
    ConnectPlaces,
    /// Update road length.
    UpdateRoad,
    /// Delete road.
    DeleteRoad,
    /// Delete place.
    DeletePlace,
    /// Show graph.
    ShowGraph,
    /// Search place.
    FindPlace,
    /// Search road.
    FindRoad,
    /// Distances from a place.
    Distances,
    /// Shortest path.
    ShortestPath,
    /// List all roads.
    ListRoads,
    /// Check connectivity.
    CheckConnectivity,
    /// Neighbors of a place.
    Neighbors,
    /// Isolated places.
    IsolatedPlaces,
    /// BFS traversal.
    BreadthFirst,
    /// DFS traversal.
    DepthFirst,
    /// All paths between two places.
    AllPaths,
    /// Longest path between two places.
    LongestPath,
    /// Save graph to file.
    SaveToFile,
    /// Load graph from file.
    LoadFromFile,
}

impl MenuChoice {
    /// Every entry, in menu order.
    pub const ALL: [Self; 21] = [
        Self::AddPlace,
        Self::AddRoad,
        Self::ConnectPlaces,
        Self::UpdateRoad,
        Self::DeleteRoad,
        Self::DeletePlace,
        Self::ShowGraph,
        Self::FindPlace,
        Self::FindRoad,
        Self::Distances,
        Self::ShortestPath,
        Self::ListRoads,
        Self::CheckConnectivity,
        Self::Neighbors,
        Self::IsolatedPlaces,
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::AllPaths,
        Self::LongestPath,
        Self::SaveToFile,
        Self::LoadFromFile,
    ];

    /// The entry for a menu number, `None` for `0` and out-of-range numbers.
    #[must_use]
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    /// Text shown in the menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AddPlace => "Add place",
            Self::AddRoad => "Add one-way road",
            Self::ConnectPlaces => "Connect two places both ways",
            Self::UpdateRoad => "Update road length",
            Self::DeleteRoad => "Delete road",
            Self::DeletePlace => "Delete place",
            Self::ShowGraph => "Show graph",
            Self::FindPlace => "Search place",
            Self::FindRoad => "Search road",
            Self::Distances => "Distances from a place",
            Self::ShortestPath => "Shortest path",
            Self::ListRoads => "List all roads",
            Self::CheckConnectivity => "Check connectivity",
            Self::Neighbors => "Neighbors of a place",
            Self::IsolatedPlaces => "Isolated places",
            Self::BreadthFirst => "BFS traversal",
            Self::DepthFirst => "DFS traversal",
            Self::AllPaths => "All paths between two places",
            Self::LongestPath => "Longest path between two places",
            Self::SaveToFile => "Save graph to file",
            Self::LoadFromFile => "Load graph from file",
        }
    }

    /// Whether a successful run of this entry changes the graph.
    #[must_use]
    pub fn mutates(self) -> bool {
        matches!(
            self,
            Self::AddPlace
                | Self::AddRoad
                | Self::ConnectPlaces
                | Self::UpdateRoad
                | Self::DeleteRoad
                | Self::DeletePlace
                | Self::LoadFromFile
        )
    }
}

/// Why a menu action ended without its own report.
enum Halt {
    /// Input ran out mid-prompt.
    EndOfInput,
    /// The input was unusable; the report says why.
    Rejected(Report),
    /// The operation failed.
    Failed(Error),
}

impl From<Error> for Halt {
    fn from(error: Error) -> Self {
        Self::Failed(error)
    }
}

impl From<io::Error> for Halt {
    fn from(error: io::Error) -> Self {
        Self::Failed(Error::Io(error))
    }
}

type Step<T> = std::result::Result<T, Halt>;

/// Interactive menu over a token input and a text output.
pub struct Shell<R, W> {
    input: TokenReader<R>,
    output: W,
    config: OutputConfig,
    unit: String,
}

impl<R: AsyncBufRead + Unpin, W: Write> Shell<R, W> {
    /// Creates a shell reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: OutputConfig, unit: impl Into<String>) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            config,
            unit: unit.into(),
        }
    }

    /// Gives back the output, for inspecting a finished session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until `0` or end of input.
    ///
    /// Returns `true` if any action changed the graph.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Failed operations are reported and the loop continues.
    pub async fn run(&mut self, graph: &mut AdjacencyGraph) -> Result<bool> {
        let mut changed = false;

        loop {
            self.write_menu()?;
            let Some(token) = self.input.next_token().await? else {
                break;
            };

            let choice = match token.parse::<usize>() {
                Ok(0) => break,
                Ok(number) => MenuChoice::from_number(number),
                Err(_) => None,
            };
            let Some(choice) = choice else {
                self.render(&Report::Problem {
                    kind: "invalid_choice".to_string(),
                    message: format!("Invalid choice '{token}', please try again"),
                })?;
                continue;
            };

            tracing::debug!(?choice, "menu action");
            match self.perform(choice, graph).await {
                Ok(report) => {
                    changed |= choice.mutates() && !report.is_problem();
                    self.render(&report)?;
                }
                Err(Halt::Rejected(report)) => self.render(&report)?,
                Err(Halt::Failed(error)) => self.render(&Report::problem(&error))?,
                Err(Halt::EndOfInput) => break,
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(changed)
    }

    async fn perform(&mut self, choice: MenuChoice, graph: &mut AdjacencyGraph) -> Step<Report> {
        let report = match choice {
            MenuChoice::AddPlace => {
                let place = self.place("Enter place").await?;
                ops::add_place(graph, place)?
            }
            MenuChoice::AddRoad | MenuChoice::ConnectPlaces => {
                let from = self.place("Enter source place").await?;
                let to = self.place("Enter destination place").await?;
                let weight = self.weight("Enter distance").await?;
                let both = choice == MenuChoice::ConnectPlaces;
                ops::add_road(graph, &from, &to, weight, both)?
            }
            MenuChoice::UpdateRoad => {
                let from = self.place("Enter source place").await?;
                let to = self.place("Enter destination place").await?;
                let weight = self.weight("Enter new distance").await?;
                ops::update_road(graph, &from, &to, weight)?
            }
            MenuChoice::DeleteRoad => {
                let from = self.place("Enter source place").await?;
                let to = self.place("Enter destination place").await?;
                ops::delete_road(graph, &from, &to)?
            }
            MenuChoice::DeletePlace => {
                let place = self.place("Enter place").await?;
                ops::delete_place(graph, &place)?
            }
            MenuChoice::ShowGraph => ops::show(graph),
            MenuChoice::FindPlace => {
                let place = self.place("Enter place").await?;
                ops::find_place(graph, &place)
            }
            MenuChoice::FindRoad => {
                let from = self.place("Enter source place").await?;
                let to = self.place("Enter destination place").await?;
                ops::find_road(graph, &from, &to)?
            }
            MenuChoice::Distances => {
                let start = self.place("Enter start place").await?;
                ops::distances(graph, &start)
            }
            MenuChoice::ShortestPath => {
                let start = self.place("Enter start place").await?;
                let end = self.place("Enter destination place").await?;
                ops::shortest(graph, &start, &end)?
            }
            MenuChoice::ListRoads => ops::roads(graph),
            MenuChoice::CheckConnectivity => ops::connectivity(graph),
            MenuChoice::Neighbors => {
                let place = self.place("Enter place").await?;
                ops::neighbors(graph, &place)?
            }
            MenuChoice::IsolatedPlaces => ops::isolated(graph),
            MenuChoice::BreadthFirst | MenuChoice::DepthFirst => {
                let start = self.place("Enter start place").await?;
                let order = if choice == MenuChoice::BreadthFirst {
                    VisitOrder::Bfs
                } else {
                    VisitOrder::Dfs
                };
                ops::traverse(graph, order, &start)?
            }
            MenuChoice::AllPaths => {
                let from = self.place("Enter start place").await?;
                let to = self.place("Enter destination place").await?;
                ops::all_paths(graph, &from, &to, None)?
            }
            MenuChoice::LongestPath => {
                let from = self.place("Enter start place").await?;
                let to = self.place("Enter destination place").await?;
                ops::longest(graph, &from, &to, None)?
            }
            MenuChoice::SaveToFile => {
                let path = self.file_name().await?;
                ops::export(graph, &path).await?
            }
            MenuChoice::LoadFromFile => {
                let path = self.file_name().await?;
                ops::import(graph, &path).await?
            }
        };
        Ok(report)
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{:>2}. {}", index + 1, choice.label())?;
        }
        writeln!(self.output, " 0. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn render(&mut self, report: &Report) -> io::Result<()> {
        writeln!(self.output)?;
        write_report(
            &mut self.output,
            report,
            OutputMode::Text,
            &self.config,
            &self.unit,
        )
    }

    async fn token(&mut self, prompt: &str) -> Step<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        self.input.next_token().await?.ok_or(Halt::EndOfInput)
    }

    async fn place(&mut self, prompt: &str) -> Step<NodeId> {
        let token = self.token(prompt).await?;
        Ok(NodeId::new(token)?)
    }

    async fn weight(&mut self, prompt: &str) -> Step<Weight> {
        let token = self.token(prompt).await?;
        token.parse().map_err(|_| {
            Halt::Rejected(Report::Problem {
                kind: "invalid_distance".to_string(),
                message: format!("Invalid distance '{token}', expected a whole number"),
            })
        })
    }

    async fn file_name(&mut self) -> Step<PathBuf> {
        Ok(PathBuf::from(self.token("Enter filename").await?))
    }
}
