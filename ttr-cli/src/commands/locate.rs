//! Locate command - Map between city names and board coordinates
//!
//! - `ttr locate Denver` - where is Denver?
//! - `ttr locate --at 10,20` - which city sits exactly at (10, 20)?
//! - `ttr locate --at 10,20 --radius 5` - nearest city within 5 units

use super::{require_city, Context};
use crate::output::{Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use serde::Serialize;
use ttr_core::{Board, GraphError, Point};

/// Parse `X,Y` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", y.trim()))?;
    Ok(Point::new(x, y))
}

#[derive(Debug, Serialize)]
pub struct CityLocation {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Outputter for CityLocation {
    fn to_table(&self, config: &OutputConfig) -> String {
        let pairs = [
            ("City", self.name.clone()),
            ("X", self.x.to_string()),
            ("Y", self.y.to_string()),
        ];
        TableOutput::format_key_value(&pairs, config)
    }
}

/// What to look up.
#[derive(Debug, Clone)]
pub enum Query {
    City(String),
    At { point: Point, radius: Option<f64> },
}

pub fn locate(board: &Board, query: &Query) -> Result<CityLocation> {
    let name = match query {
        Query::City(name) => {
            require_city(board, name)?;
            name.clone()
        }
        Query::At { point, radius } => {
            let found = match radius {
                Some(radius) => board.city_near(*point, *radius),
                None => board.city_at(*point),
            };
            found
                .ok_or(GraphError::LocationNotFound {
                    x: point.x,
                    y: point.y,
                })?
                .to_string()
        }
    };
    let point = board.location(&name)?;
    Ok(CityLocation {
        name,
        x: point.x,
        y: point.y,
    })
}

pub fn run(ctx: &Context, query: &Query) -> Result<()> {
    let board = ctx.load_board()?;
    Output::new(locate(&board, query)?, ctx.output.clone()).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let mut board = Board::new();
        board.add_city("Denver", Point::new(10.0, 20.0)).unwrap();
        board.add_city("Helena", Point::new(8.0, 5.0)).unwrap();
        board
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_point("1.5").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn test_locate_by_name() {
        let found = locate(&board(), &Query::City("Helena".to_string())).unwrap();
        assert_eq!((found.x, found.y), (8.0, 5.0));
        assert!(locate(&board(), &Query::City("Reno".to_string())).is_err());
    }

    #[test]
    fn test_locate_by_point() {
        let exact = Query::At {
            point: Point::new(10.0, 20.0),
            radius: None,
        };
        assert_eq!(locate(&board(), &exact).unwrap().name, "Denver");

        let near = Query::At {
            point: Point::new(9.0, 6.0),
            radius: Some(2.0),
        };
        assert_eq!(locate(&board(), &near).unwrap().name, "Helena");

        let miss = Query::At {
            point: Point::new(9.0, 6.0),
            radius: None,
        };
        let err = locate(&board(), &miss).unwrap_err();
        assert!(err.downcast_ref::<GraphError>().is_some_and(GraphError::is_not_found));
    }
}
