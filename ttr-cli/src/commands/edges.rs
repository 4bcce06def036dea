//! Edges command - List routes, optionally filtered by endpoint
//!
//! - `ttr edges` - every directed route edge
//! - `ttr edges --from A` - routes leaving A
//! - `ttr edges --to B` - routes arriving at B
//! - `ttr edges --from A --to B` - parallel routes between A and B
//! - `ttr edges --node N` - routes touching N

use super::{require_city, Context};
use crate::output::{Alignment, AsTable, Column, CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use serde::Serialize;
use ttr_core::{Board, Edge, Route};

#[derive(Debug, Clone, Serialize)]
pub struct RouteRow {
    pub src: String,
    pub dst: String,
    pub length: u32,
    pub color: String,
}

impl From<&Edge<String, Route>> for RouteRow {
    fn from(edge: &Edge<String, Route>) -> Self {
        Self {
            src: edge.src().clone(),
            dst: edge.dst().clone(),
            length: edge.label().length,
            color: edge.label().color.to_string(),
        }
    }
}

impl AsTable for RouteRow {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("From", "src").with_max_width(32),
            Column::new("To", "dst").with_max_width(32),
            Column::new("Length", "length").with_alignment(Alignment::Right),
            Column::new("Color", "color"),
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RouteList(pub Vec<RouteRow>);

impl Outputter for RouteList {
    fn to_table(&self, config: &OutputConfig) -> String {
        TableOutput::format_with_columns(&self.0, &RouteRow::columns(), config)
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.0, &RouteRow::columns(), config)
    }
}

/// Endpoint filter for the edge listing.
#[derive(Debug, Default, Clone)]
pub struct EdgeFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub node: Option<String>,
}

impl EdgeFilter {
    /// Route edges on `board` matching this filter, in graph order.
    pub fn select(&self, board: &Board) -> Result<Vec<RouteRow>> {
        for name in [&self.from, &self.to, &self.node].into_iter().flatten() {
            require_city(board, name)?;
        }

        let rows = board
            .routes()
            .filter(|edge| self.from.as_ref().map_or(true, |from| edge.src() == from))
            .filter(|edge| self.to.as_ref().map_or(true, |to| edge.dst() == to))
            .filter(|edge| self.node.as_ref().map_or(true, |node| edge.touches(node)))
            .map(RouteRow::from)
            .collect();
        Ok(rows)
    }
}

pub fn run(ctx: &Context, filter: &EdgeFilter) -> Result<()> {
    let board = ctx.load_board()?;
    let rows = filter.select(&board)?;
    tracing::debug!("{} route edge(s) match", rows.len());
    Output::new(RouteList(rows), ctx.output.clone()).render()
}
