//! Nodes command - List the cities on a board

use super::Context;
use crate::output::{Alignment, AsTable, Column, CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use serde::Serialize;
use ttr_core::Board;

#[derive(Debug, Serialize)]
pub struct CityRow {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Number of routes leaving the city.
    pub routes: usize,
}

impl AsTable for CityRow {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("City", "name").with_max_width(32),
            Column::new("X", "x").with_alignment(Alignment::Right),
            Column::new("Y", "y").with_alignment(Alignment::Right),
            Column::new("Routes", "routes").with_alignment(Alignment::Right),
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CityList(pub Vec<CityRow>);

impl CityList {
    pub fn from_board(board: &Board) -> Self {
        Self(
            board
                .positioned_cities()
                .map(|(name, point)| CityRow {
                    name: name.to_string(),
                    x: point.x,
                    y: point.y,
                    routes: board.routes_from(name).len(),
                })
                .collect(),
        )
    }
}

impl Outputter for CityList {
    fn to_table(&self, config: &OutputConfig) -> String {
        TableOutput::format_with_columns(&self.0, &CityRow::columns(), config)
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.0, &CityRow::columns(), config)
    }
}

pub fn run(ctx: &Context) -> Result<()> {
    let board = ctx.load_board()?;
    Output::new(CityList::from_board(&board), ctx.output.clone()).render()
}
