//! Path command - Cheapest chain of routes between two cities

use super::edges::RouteRow;
use super::{require_city, Context};
use crate::output::{AsTable, CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use ttr_core::{Board, MinCostSearch, Path, Route};

/// Path finding result
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    /// Train cars on the path, absent when no path exists.
    pub total_length: Option<u32>,
    pub stops: Vec<String>,
    pub legs: Vec<RouteRow>,
}

impl PathResult {
    pub fn new(from: &str, to: &str, path: Option<Path<String, Route>>) -> Self {
        let (total_length, stops, legs) = match &path {
            Some(path) => (
                Some(path.total_weight()),
                path.nodes().into_iter().cloned().collect(),
                path.edges().iter().map(RouteRow::from).collect(),
            ),
            None => (None, Vec::new(), Vec::new()),
        };
        Self {
            from: from.to_string(),
            to: to.to_string(),
            found: path.is_some(),
            total_length,
            stops,
            legs,
        }
    }
}

impl Outputter for PathResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = format!(
            "{} {} {} {}\n",
            "Path from".bold(),
            self.from.cyan(),
            "to".bold(),
            self.to.cyan()
        );

        match self.total_length {
            Some(total) => {
                output.push_str(&format!("  {}\n", self.stops.join(" -> ")));
                output.push_str(&TableOutput::format_with_columns(
                    &self.legs,
                    &RouteRow::columns(),
                    config,
                ));
                output.push_str(&format!("\n{}: {} cars", "Total length".bold(), total));
            }
            None => output.push_str(&"  No path found.".dimmed().to_string()),
        }
        output
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.legs, &RouteRow::columns(), config)
    }
}

/// Search for the cheapest path, giving up after `max_expansions` pops if set.
pub fn find(
    board: &Board,
    from: &str,
    to: &str,
    max_expansions: Option<usize>,
) -> Result<PathResult> {
    require_city(board, from)?;
    require_city(board, to)?;

    let mut search = MinCostSearch::new(board.graph());
    if let Some(limit) = max_expansions {
        search = search.max_expansions(limit);
    }
    let path = search.run(&from.to_string(), &to.to_string())?;
    Ok(PathResult::new(from, to, path))
}

pub fn run(ctx: &Context, from: &str, to: &str, max_expansions: Option<usize>) -> Result<()> {
    let board = ctx.load_board()?;
    let result = find(&board, from, to, max_expansions)?;
    Output::new(result, ctx.output.clone()).render()
}
