//! TTR Core - route board graph engine.
//!
//! This crate provides the graph model behind the TTR board builder: a
//! generic directed multigraph, minimum-cost path search, a graph with node
//! locations, and the board and game model built on top of them.
//!
//! # Features
//!
//! - **Multigraph**: parallel edges and self-loops, insertion-ordered nodes
//! - **Minimum-cost paths**: lazy whole-path expansion over any [`Weighted`] label
//! - **Drawable graphs**: every node carries a 2-D [`Point`]
//! - **Boards**: two-way [`Route`]s between named cities, loaded from JSON
//! - **Games**: random destination [`Ticket`]s and a scored [`Game`] session
//!
//! # Usage
//!
//! ```
//! use ttr_core::{Board, Color, Point, Route};
//!
//! let mut board = Board::new();
//! board.add_city("Seattle", Point::new(10.0, 30.0))?;
//! board.add_city("Portland", Point::new(5.0, 50.0))?;
//! board.add_city("Calgary", Point::new(60.0, 5.0))?;
//! board.add_route("Seattle", "Portland", Route::new(1, Color::Gray))?;
//! board.add_route("Seattle", "Calgary", Route::new(4, Color::Gray))?;
//!
//! let path = board.shortest_route("Portland", "Calgary").unwrap();
//! assert_eq!(path.total_weight(), 5);
//! # Ok::<(), ttr_core::GraphError>(())
//! ```

pub mod board;
pub mod drawable;
pub mod edge;
pub mod error;
pub mod game;
pub mod graph;
pub mod loader;
pub mod path;
pub mod queue;
pub mod route;
pub mod search;
pub mod weight;

pub use board::Board;
pub use drawable::{DrawableGraph, Point};
pub use edge::{sort_by_label, Edge};
pub use error::{GraphError, Result};
pub use game::{Game, StepOutcome, Ticket};
pub use graph::Graph;
pub use loader::{BoardDocument, BoardLoader, CityEntry, RouteEntry, RouteLabel};
pub use path::Path;
pub use queue::MinQueue;
pub use route::{Color, Route};
pub use search::{CancelToken, MinCostSearch};
pub use weight::{Cost, Weighted};
