//! JSON board documents.
//!
//! A board file has two top-level lists:
//!
//! ```json
//! {
//!   "nodes": [{ "name": "Seattle", "location": [10.0, 20.0] }],
//!   "edges": [{ "src": "Seattle", "dst": "Portland",
//!               "label": { "length": 1, "color": "gray" } }]
//! }
//! ```
//!
//! Each edge entry is one two-way route. `"Edges"` is accepted as an alias of
//! `"edges"`.

use crate::board::Board;
use crate::drawable::Point;
use crate::error::{GraphError, Result};
use crate::route::{Color, Route};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use tracing::debug;

/// Serialized form of a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardDocument {
    pub nodes: Vec<CityEntry>,
    #[serde(alias = "Edges")]
    pub edges: Vec<RouteEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub location: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub src: String,
    pub dst: String,
    pub label: RouteLabel,
}

/// Route label as written in the file. The colour stays a string until the
/// loader decides how to treat unknown names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteLabel {
    pub length: u32,
    pub color: String,
}

impl BoardDocument {
    /// Snapshot `board`, writing each two-way route once.
    pub fn from_board(board: &Board) -> Self {
        let nodes = board
            .positioned_cities()
            .map(|(name, location)| CityEntry {
                name: name.to_string(),
                location,
            })
            .collect();

        // Edges still waiting for their reverse twin, keyed by (src, dst, route).
        let mut pending: HashMap<(&str, &str, Route), usize> = HashMap::new();
        let mut edges = Vec::new();
        for edge in board.routes() {
            let twin = (edge.dst().as_str(), edge.src().as_str(), *edge.label());
            if let Some(count) = pending.get_mut(&twin).filter(|count| **count > 0) {
                *count -= 1;
                continue;
            }
            *pending
                .entry((edge.src().as_str(), edge.dst().as_str(), *edge.label()))
                .or_insert(0) += 1;
            edges.push(RouteEntry {
                src: edge.src().clone(),
                dst: edge.dst().clone(),
                label: RouteLabel {
                    length: edge.label().length,
                    color: edge.label().color.to_string(),
                },
            });
        }

        Self { nodes, edges }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds a [`Board`] from JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardLoader {
    strict_colors: bool,
}

impl BoardLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject unknown colour names instead of mapping them to gray.
    pub fn strict_colors(mut self, strict: bool) -> Self {
        self.strict_colors = strict;
        self
    }

    pub fn load_str(&self, json: &str) -> Result<Board> {
        let document: BoardDocument = serde_json::from_str(json)?;
        self.build(document)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Board> {
        let document: BoardDocument = serde_json::from_reader(reader)?;
        self.build(document)
    }

    pub fn from_path(&self, path: impl AsRef<std::path::Path>) -> Result<Board> {
        let path = path.as_ref();
        debug!("Loading board from {}", path.display());
        let file = File::open(path)?;
        self.from_reader(BufReader::new(file))
    }

    /// Turn a parsed document into a board.
    pub fn build(&self, document: BoardDocument) -> Result<Board> {
        let mut board = Board::new();
        for city in document.nodes {
            if city.name.trim().is_empty() {
                return Err(GraphError::MalformedInput {
                    message: "city name is empty".to_string(),
                });
            }
            board.add_city(city.name, city.location)?;
        }
        for entry in document.edges {
            let color = self.color(&entry.label.color)?;
            board.add_route(&entry.src, &entry.dst, Route::new(entry.label.length, color))?;
        }
        debug!(
            "Loaded board with {} cities and {} route edges",
            board.city_count(),
            board.route_count()
        );
        Ok(board)
    }

    fn color(&self, name: &str) -> Result<Color> {
        if self.strict_colors {
            name.parse()
        } else {
            Ok(Color::parse_lenient(name))
        }
    }
}

impl Board {
    /// Parse a board with lenient colour handling.
    pub fn from_json(json: &str) -> Result<Board> {
        BoardLoader::new().load_str(json)
    }

    pub fn to_document(&self) -> BoardDocument {
        BoardDocument::from_board(self)
    }
}
