//! Info command - Summary of a board file

use super::Context;
use crate::output::{Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use ttr_core::Board;

/// Board summary
#[derive(Debug, Serialize)]
pub struct BoardInfo {
    pub board: String,
    pub cities: usize,
    /// Two-way routes, each counted once.
    pub routes: usize,
    /// Directed edges in the graph (two per route).
    pub route_edges: usize,
    /// Train cars needed to claim every route.
    pub total_length: u64,
    pub colors: BTreeMap<String, usize>,
}

impl BoardInfo {
    pub fn from_board(name: impl Into<String>, board: &Board) -> Self {
        let document = board.to_document();
        let mut colors = BTreeMap::new();
        for entry in &document.edges {
            *colors.entry(entry.label.color.clone()).or_insert(0) += 1;
        }
        Self {
            board: name.into(),
            cities: board.city_count(),
            routes: document.edges.len(),
            route_edges: board.route_count(),
            total_length: document
                .edges
                .iter()
                .map(|e| u64::from(e.label.length))
                .sum(),
            colors,
        }
    }
}

impl Outputter for BoardInfo {
    fn to_table(&self, config: &OutputConfig) -> String {
        let colors = self
            .colors
            .iter()
            .map(|(color, count)| format!("{} {}", color, count))
            .collect::<Vec<_>>()
            .join(", ");
        let pairs = [
            ("Cities", self.cities.to_string()),
            ("Routes", self.routes.to_string()),
            ("Route edges", self.route_edges.to_string()),
            ("Total length", self.total_length.to_string()),
            ("Colors", if colors.is_empty() { "-".to_string() } else { colors }),
        ];
        format!(
            "{} {}\n{}",
            "Board".bold(),
            self.board.cyan(),
            TableOutput::format_key_value(&pairs, config)
        )
    }
}

pub fn run(ctx: &Context) -> Result<()> {
    let path = ctx.board_path()?;
    let board = ctx.load_board()?;
    let info = BoardInfo::from_board(path.display().to_string(), &board);
    Output::new(info, ctx.output.clone()).render()
}
