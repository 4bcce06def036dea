//! Route labels used by the board: a train-car length and a colour.

use crate::error::GraphError;
use crate::weight::Weighted;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Route colour category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Black,
    White,
    Orange,
    #[serde(alias = "grey")]
    Gray,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Black,
        Color::White,
        Color::Orange,
        Color::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Black => "black",
            Color::White => "white",
            Color::Orange => "orange",
            Color::Gray => "gray",
        }
    }

    /// Parse a colour name, falling back to gray for anything unrecognised.
    pub fn parse_lenient(name: &str) -> Color {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown route color '{}', using gray", name);
            Color::Gray
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "yellow" => Ok(Color::Yellow),
            "purple" => Ok(Color::Purple),
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "orange" => Ok(Color::Orange),
            "gray" | "grey" => Ok(Color::Gray),
            _ => Err(GraphError::UnknownColor {
                color: s.to_string(),
            }),
        }
    }
}

/// A board route: `length` train cars of a given `color`.
///
/// Routes are equal when both fields match but order by length alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub length: u32,
    pub color: Color,
}

impl Route {
    pub fn new(length: u32, color: Color) -> Self {
        Self { length, color }
    }
}

impl PartialOrd for Route {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.length.cmp(&other.length))
    }
}

impl Weighted for Route {
    type Cost = u32;

    fn weight(&self) -> u32 {
        self.length
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.length, self.color)
    }
}
