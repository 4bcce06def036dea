//! Graph with a 2-D location for every node.
//!
//! This is the boundary type handed to presentation layers: they read node
//! and edge lists plus coordinates, hit-test coordinates back to nodes, and
//! move nodes around without touching topology.

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::path::Path;
use crate::weight::Weighted;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

/// A location in model coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Points serialize as `[x, y]`.
impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Pair(f64, f64),
    Object { x: f64, y: f64 },
}

/// Points deserialize from `[x, y]` or `{"x": .., "y": ..}`.
impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match PointRepr::deserialize(deserializer)? {
            PointRepr::Pair(x, y) => Point { x, y },
            PointRepr::Object { x, y } => Point { x, y },
        })
    }
}

/// A [`Graph`] paired with a total node-to-[`Point`] mapping.
///
/// Adding or removing a node always adds or removes its location in the same
/// call; if the graph rejects the change, the location map is untouched.
#[derive(Clone, Debug)]
pub struct DrawableGraph<N, L> {
    graph: Graph<N, L>,
    locations: HashMap<N, Point>,
}

impl<N, L> Default for DrawableGraph<N, L> {
    fn default() -> Self {
        Self {
            graph: Graph::default(),
            locations: HashMap::new(),
        }
    }
}

impl<N, L> DrawableGraph<N, L>
where
    N: Clone + Eq + Hash + Debug,
    L: PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying graph, read-only.
    pub fn graph(&self) -> &Graph<N, L> {
        &self.graph
    }

    /// Add `node` at `location`. Fails without side effects if it exists.
    pub fn add_node(&mut self, node: N, location: Point) -> Result<()> {
        self.graph.add_node(node.clone())?;
        self.locations.insert(node, location);
        self.check_rep();
        Ok(())
    }

    /// Remove `node` and its location, returning the location.
    ///
    /// Fails without side effects if the node is missing or still has edges.
    pub fn remove_node(&mut self, node: &N) -> Result<Point> {
        self.graph.remove_node(node)?;
        let location = self
            .locations
            .remove(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        self.check_rep();
        Ok(location)
    }

    /// Remove `node`, every edge touching it, and its location.
    pub fn remove_node_and_edges(&mut self, node: &N) -> Result<(Point, Vec<Edge<N, L>>)> {
        let edges = self.graph.remove_node_and_edges(node)?;
        let location = self
            .locations
            .remove(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        self.check_rep();
        Ok((location, edges))
    }

    pub fn add_edge(&mut self, edge: Edge<N, L>) -> Result<()> {
        self.graph.add_edge(edge)
    }

    pub fn remove_edge(&mut self, edge: &Edge<N, L>) -> Result<Edge<N, L>> {
        self.graph.remove_edge(edge)
    }

    /// Location of `node`.
    pub fn location(&self, node: &N) -> Result<Point> {
        self.locations
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// The node placed exactly at `location`, if any.
    pub fn node_at(&self, location: Point) -> Option<&N> {
        self.graph
            .nodes()
            .find(|node| self.locations.get(*node) == Some(&location))
    }

    /// The node closest to `location` within `radius`, if any.
    pub fn node_near(&self, location: Point, radius: f64) -> Option<&N> {
        self.graph
            .nodes()
            .filter_map(|node| {
                let distance = self.locations.get(node)?.distance_to(&location);
                (distance <= radius).then_some((node, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(node, _)| node)
    }

    /// Update the location of `node`. Topology is unchanged.
    pub fn move_node(&mut self, node: &N, location: Point) -> Result<Point> {
        let slot = self
            .locations
            .get_mut(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        Ok(std::mem::replace(slot, location))
    }

    pub fn contains(&self, node: &N) -> bool {
        self.graph.contains(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.graph.nodes()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, L>> {
        self.graph.edges()
    }

    /// Nodes paired with their locations, in node insertion order.
    pub fn positioned_nodes(&self) -> impl Iterator<Item = (&N, Point)> {
        self.graph
            .nodes()
            .filter_map(|node| self.locations.get(node).map(|p| (node, *p)))
    }

    pub fn outgoing(&self, node: &N) -> &[Edge<N, L>] {
        self.graph.outgoing(node)
    }

    pub fn edges_between(&self, src: &N, dst: &N) -> Vec<&Edge<N, L>> {
        self.graph.edges_between(src, dst)
    }

    /// Number of parallel edges from `src` to `dst`.
    pub fn count_edges_between(&self, src: &N, dst: &N) -> usize {
        self.graph.count_edges_between(src, dst)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Remove every node, edge and location.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.locations.clear();
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        assert_eq!(self.graph.node_count(), self.locations.len());
        for node in self.graph.nodes() {
            assert!(self.locations.contains_key(node), "{:?} has no location", node);
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_rep(&self) {}
}

impl<N, L> DrawableGraph<N, L>
where
    N: Clone + Eq + Hash + Debug,
    L: Weighted + Clone + PartialEq + Debug,
{
    pub fn find_minimum_cost_path(&self, src: &N, dst: &N) -> Option<Path<N, L>> {
        self.graph.find_minimum_cost_path(src, dst)
    }
}

impl<N, L> fmt::Display for DrawableGraph<N, L>
where
    N: Clone + Eq + Hash + Debug + fmt::Display,
    L: PartialEq + Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes:")?;
        for (node, location) in self.positioned_nodes() {
            writeln!(f, "{} {}", node, location)?;
        }
        writeln!(f)?;
        writeln!(f, "Edges:")?;
        for edge in self.edges() {
            writeln!(f, "({}, {}, {})", edge.src(), edge.dst(), edge.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn square() -> DrawableGraph<&'static str, u32> {
        let mut graph = DrawableGraph::new();
        graph.add_node("nw", Point::new(0.0, 0.0)).unwrap();
        graph.add_node("ne", Point::new(10.0, 0.0)).unwrap();
        graph.add_node("se", Point::new(10.0, 10.0)).unwrap();
        graph.add_node("sw", Point::new(0.0, 10.0)).unwrap();
        graph.add_edge(Edge::new("nw", "ne", 1)).unwrap();
        graph.add_edge(Edge::new("ne", "se", 1)).unwrap();
        graph
    }

    #[test]
    fn test_location_after_add() {
        let graph = square();
        for node in graph.nodes() {
            assert!(graph.location(node).is_ok());
        }
        assert_eq!(graph.location(&"se").unwrap(), Point::new(10.0, 10.0));
        assert!(graph.location(&"center").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_add_keeps_original_location() {
        let mut graph = square();
        assert!(graph.add_node("nw", Point::new(5.0, 5.0)).is_err());
        assert_eq!(graph.location(&"nw").unwrap(), Point::new(0.0, 0.0));
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_remove_node_with_edges_keeps_location() {
        let mut graph = square();
        assert!(graph.remove_node(&"ne").is_err());
        assert!(graph.location(&"ne").is_ok());

        let location = graph.remove_node(&"sw").unwrap();
        assert_eq!(location, Point::new(0.0, 10.0));
        assert!(graph.location(&"sw").is_err());
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_remove_node_and_edges() {
        let mut graph = square();
        let (location, edges) = graph.remove_node_and_edges(&"ne").unwrap();
        assert_eq!(location, Point::new(10.0, 0.0));
        assert_eq!(edges.len(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_node_at_and_near() {
        let graph = square();
        assert_eq!(graph.node_at(Point::new(10.0, 0.0)), Some(&"ne"));
        assert_eq!(graph.node_at(Point::new(10.0, 0.5)), None);
        assert_eq!(graph.node_near(Point::new(9.0, 1.0), 2.0), Some(&"ne"));
        assert_eq!(graph.node_near(Point::new(5.0, 5.0), 2.0), None);
    }

    #[test]
    fn test_move_node_keeps_topology() {
        let mut graph = square();
        let old = graph.move_node(&"ne", Point::new(20.0, 20.0)).unwrap();
        assert_eq!(old, Point::new(10.0, 0.0));
        assert_eq!(graph.node_at(Point::new(20.0, 20.0)), Some(&"ne"));
        assert_eq!(graph.count_edges_between(&"nw", &"ne"), 1);
        assert!(graph.move_node(&"zz", Point::default()).is_err());
    }

    #[test]
    fn test_clear() {
        let mut graph = square();
        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.location(&"nw").is_err());
    }

    #[test]
    fn test_display() {
        let graph = square();
        let text = graph.to_string();
        assert!(text.starts_with("Nodes:\nnw (0, 0)\n"));
        assert!(text.contains("Edges:\n(nw, ne, 1)\n"));
    }

    #[test]
    fn test_point_serde_forms() {
        let pair: Point = serde_json::from_str("[1.5, 2]").unwrap();
        let object: Point = serde_json::from_str(r#"{"x": 1.5, "y": 2.0}"#).unwrap();
        assert_eq!(pair, object);
        assert_eq!(serde_json::to_string(&pair).unwrap(), "[1.5,2.0]");
        assert!(serde_json::from_str::<Point>("[1.5]").is_err());
    }

    #[test]
    fn random_stress_locations_stay_total() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_4452_4157);

        for _case in 0..40 {
            let mut graph: DrawableGraph<u32, u32> = DrawableGraph::new();
            let steps = rng.random_range(0..200);
            for _ in 0..steps {
                let a = rng.random_range(0..12);
                let b = rng.random_range(0..12);
                let at = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
                match rng.random_range(0..4) {
                    0 => {
                        let _ = graph.add_node(a, at);
                    }
                    1 => {
                        let _ = graph.add_edge(Edge::new(a, b, 1));
                    }
                    2 => {
                        let _ = graph.remove_node(&a);
                    }
                    _ => {
                        let _ = graph.move_node(&a, at);
                    }
                }
                for node in graph.nodes() {
                    assert!(graph.location(node).is_ok());
                }
            }
        }
    }
}
