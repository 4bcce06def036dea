//! Route board: cities on a map joined by two-way routes.

use crate::drawable::{DrawableGraph, Point};
use crate::edge::Edge;
use crate::error::Result;
use crate::graph::Graph;
use crate::path::Path;
use crate::route::Route;
use std::fmt;
use tracing::debug;

/// A board of named cities.
///
/// Routes are undirected: every route is stored as a pair of directed edges,
/// so [`Board::route_count`] is twice the number of routes added.
#[derive(Clone, Debug, Default)]
pub struct Board {
    map: DrawableGraph<String, Route>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph<String, Route> {
        self.map.graph()
    }

    pub fn drawable(&self) -> &DrawableGraph<String, Route> {
        &self.map
    }

    pub fn add_city(&mut self, name: impl Into<String>, location: Point) -> Result<()> {
        self.map.add_node(name.into(), location)
    }

    /// Remove a city that has no routes left.
    pub fn remove_city(&mut self, name: &str) -> Result<Point> {
        self.map.remove_node(&name.to_string())
    }

    /// Remove a city together with every route touching it.
    pub fn remove_city_and_routes(&mut self, name: &str) -> Result<Point> {
        let (location, edges) = self.map.remove_node_and_edges(&name.to_string())?;
        debug!("Removed city {} and {} route edge(s)", name, edges.len());
        Ok(location)
    }

    /// Add `route` between `a` and `b` in both directions.
    pub fn add_route(&mut self, a: &str, b: &str, route: Route) -> Result<()> {
        let forward = Edge::new(a.to_string(), b.to_string(), route);
        let backward = forward.reversed();
        self.map.add_edge(forward)?;
        self.map.add_edge(backward)
    }

    /// Remove one copy of `route` between `a` and `b` in both directions.
    ///
    /// If either direction is missing the board is left unchanged.
    pub fn remove_route(&mut self, a: &str, b: &str, route: Route) -> Result<()> {
        let forward = Edge::new(a.to_string(), b.to_string(), route);
        let backward = forward.reversed();
        let removed = self.map.remove_edge(&forward)?;
        if let Err(err) = self.map.remove_edge(&backward) {
            self.map.add_edge(removed)?;
            return Err(err);
        }
        Ok(())
    }

    pub fn move_city(&mut self, name: &str, location: Point) -> Result<Point> {
        self.map.move_node(&name.to_string(), location)
    }

    pub fn location(&self, name: &str) -> Result<Point> {
        self.map.location(&name.to_string())
    }

    pub fn city_at(&self, location: Point) -> Option<&str> {
        self.map.node_at(location).map(String::as_str)
    }

    pub fn city_near(&self, location: Point, radius: f64) -> Option<&str> {
        self.map.node_near(location, radius).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains(&name.to_string())
    }

    /// Cities in insertion order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.map.nodes().map(String::as_str)
    }

    /// Cities with their locations.
    pub fn positioned_cities(&self) -> impl Iterator<Item = (&str, Point)> {
        self.map
            .positioned_nodes()
            .map(|(name, point)| (name.as_str(), point))
    }

    /// Every directed route edge.
    pub fn routes(&self) -> impl Iterator<Item = &Edge<String, Route>> {
        self.map.edges()
    }

    pub fn routes_from(&self, name: &str) -> &[Edge<String, Route>] {
        self.map.outgoing(&name.to_string())
    }

    pub fn routes_between(&self, a: &str, b: &str) -> Vec<&Edge<String, Route>> {
        self.map.edges_between(&a.to_string(), &b.to_string())
    }

    pub fn count_routes_between(&self, a: &str, b: &str) -> usize {
        self.map.count_edges_between(&a.to_string(), &b.to_string())
    }

    /// Cheapest chain of routes from `a` to `b`, measured in train cars.
    pub fn shortest_route(&self, a: &str, b: &str) -> Option<Path<String, Route>> {
        self.map
            .find_minimum_cost_path(&a.to_string(), &b.to_string())
    }

    pub fn city_count(&self) -> usize {
        self.map.node_count()
    }

    /// Number of directed route edges.
    pub fn route_count(&self) -> usize {
        self.map.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.map, f)
    }
}
