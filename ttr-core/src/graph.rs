//! Generic mutable multigraph.
//!
//! Nodes are plain hashable values and are the keys of an insertion-ordered
//! adjacency map; each key owns the list of its outgoing edges.
//!
//! # Invariants
//!
//! - every edge stored under key `k` has `src == k`
//! - every edge's `dst` is a key of the map
//! - the node set is exactly the key set
//!
//! Mutations validate their preconditions and return a [`GraphError`]
//! instead of corrupting the structure. The invariants are re-checked after
//! each mutation in debug builds only.

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed multigraph with nodes `N` and edge labels `L`.
#[derive(Clone, Debug)]
pub struct Graph<N, L> {
    adjacency: IndexMap<N, Vec<Edge<N, L>>>,
}

impl<N, L> Default for Graph<N, L> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<N, L> Graph<N, L>
where
    N: Clone + Eq + Hash + Debug,
    L: PartialEq + Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from an initial node list and edge list.
    ///
    /// Fails on duplicate nodes or on edges whose endpoints are missing.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = Edge<N, L>>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Insert `node` with no outgoing edges.
    pub fn add_node(&mut self, node: N) -> Result<()> {
        if self.adjacency.contains_key(&node) {
            return Err(GraphError::DuplicateNode {
                node: format!("{:?}", node),
            });
        }
        self.adjacency.insert(node, Vec::new());
        self.check_rep();
        Ok(())
    }

    /// Remove `node`. It must not be the source or destination of any edge.
    pub fn remove_node(&mut self, node: &N) -> Result<()> {
        if !self.adjacency.contains_key(node) {
            return Err(GraphError::node_not_found(node));
        }
        let count = self.incident_edges(node).len();
        if count > 0 {
            return Err(GraphError::NodeHasEdges {
                node: format!("{:?}", node),
                count,
            });
        }
        self.adjacency.shift_remove(node);
        self.check_rep();
        Ok(())
    }

    /// Remove `node` together with every edge that touches it.
    ///
    /// Returns the removed edges, outgoing ones first.
    pub fn remove_node_and_edges(&mut self, node: &N) -> Result<Vec<Edge<N, L>>> {
        let mut removed = self
            .adjacency
            .shift_remove(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        for edges in self.adjacency.values_mut() {
            let mut kept = Vec::with_capacity(edges.len());
            for edge in edges.drain(..) {
                if edge.dst() == node {
                    removed.push(edge);
                } else {
                    kept.push(edge);
                }
            }
            *edges = kept;
        }
        self.check_rep();
        Ok(removed)
    }

    /// Append `edge` to its source's outgoing list. Duplicates are kept.
    pub fn add_edge(&mut self, edge: Edge<N, L>) -> Result<()> {
        if !self.adjacency.contains_key(edge.dst()) {
            return Err(GraphError::node_not_found(edge.dst()));
        }
        match self.adjacency.get_mut(edge.src()) {
            Some(edges) => edges.push(edge),
            None => return Err(GraphError::node_not_found(edge.src())),
        }
        self.check_rep();
        Ok(())
    }

    /// Remove one stored copy of `edge` (the first in storage order).
    pub fn remove_edge(&mut self, edge: &Edge<N, L>) -> Result<Edge<N, L>> {
        let edges = self
            .adjacency
            .get_mut(edge.src())
            .ok_or_else(|| GraphError::node_not_found(edge.src()))?;
        let index = edges
            .iter()
            .position(|e| e == edge)
            .ok_or_else(|| GraphError::edge_not_found(edge))?;
        let removed = edges.remove(index);
        self.check_rep();
        Ok(removed)
    }

    /// Whether `node` is in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Outgoing edges of `node`, in insertion order. Empty for unknown nodes.
    pub fn outgoing(&self, node: &N) -> &[Edge<N, L>] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The stored key equal to `node` and its outgoing edges, both borrowed
    /// from the graph.
    pub(crate) fn settle(&self, node: &N) -> Option<(&N, &[Edge<N, L>])> {
        self.adjacency
            .get_key_value(node)
            .map(|(key, edges)| (key, edges.as_slice()))
    }

    /// All edges from `src` to `dst`, in discovery order.
    pub fn edges_between(&self, src: &N, dst: &N) -> Vec<&Edge<N, L>> {
        self.outgoing(src)
            .iter()
            .filter(|e| e.dst() == dst)
            .collect()
    }

    /// Number of parallel edges from `src` to `dst`.
    pub fn count_edges_between(&self, src: &N, dst: &N) -> usize {
        self.outgoing(src).iter().filter(|e| e.dst() == dst).count()
    }

    /// Every edge with `node` as source or destination.
    ///
    /// Self-loops are reported once.
    pub fn incident_edges(&self, node: &N) -> Vec<&Edge<N, L>> {
        self.edges().filter(|e| e.touches(node)).collect()
    }

    /// Distinct destinations one edge away from `src`, first-seen order.
    pub fn children(&self, src: &N) -> Vec<&N> {
        let mut seen = HashSet::new();
        self.outgoing(src)
            .iter()
            .map(Edge::dst)
            .filter(|dst| seen.insert(*dst))
            .collect()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// All edges, grouped by source in node insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, L>> {
        self.adjacency.values().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True when the graph has no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        for (key, edges) in &self.adjacency {
            for edge in edges {
                assert!(
                    edge.src() == key,
                    "edge {:?} stored under {:?}",
                    edge,
                    key
                );
                assert!(
                    self.adjacency.contains_key(edge.dst()),
                    "edge {:?} points outside the graph",
                    edge
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_rep(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn abc() -> Graph<&'static str, u32> {
        Graph::from_parts(
            ["a", "b", "c"],
            [
                Edge::new("a", "b", 3),
                Edge::new("b", "c", 5),
                Edge::new("b", "c", 4),
                Edge::new("c", "a", 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph<String, u32> = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.nodes().count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_add_node_rejects_duplicates() {
        let mut graph = abc();
        let err = graph.add_node("a").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode { .. }));
        // Existing outgoing edges survive the failed insert.
        assert_eq!(graph.outgoing(&"a").len(), 1);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_add_edge_requires_endpoints() {
        let mut graph = abc();
        let err = graph.add_edge(Edge::new("a", "zz", 1)).unwrap_err();
        assert!(matches!(err, GraphError::NodeNotFound { .. }));
        let err = graph.add_edge(Edge::new("zz", "a", 1)).unwrap_err();
        assert!(matches!(err, GraphError::NodeNotFound { .. }));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_multigraph_preservation() {
        let mut graph: Graph<&str, u32> = Graph::from_parts(["x", "y"], []).unwrap();
        graph.add_edge(Edge::new("x", "y", 1)).unwrap();
        graph.add_edge(Edge::new("x", "y", 2)).unwrap();
        graph.add_edge(Edge::new("x", "y", 3)).unwrap();
        assert_eq!(graph.edges_between(&"x", &"y").len(), 3);

        graph.remove_edge(&Edge::new("x", "y", 2)).unwrap();
        let labels: Vec<u32> = graph
            .edges_between(&"x", &"y")
            .iter()
            .map(|e| *e.label())
            .collect();
        assert_eq!(labels, vec![1, 3]);
    }

    #[test]
    fn test_remove_edge_removes_one_copy() {
        let mut graph: Graph<&str, u32> = Graph::from_parts(["x", "y"], []).unwrap();
        for _ in 0..3 {
            graph.add_edge(Edge::new("x", "y", 7)).unwrap();
        }
        graph.remove_edge(&Edge::new("x", "y", 7)).unwrap();
        assert_eq!(graph.count_edges_between(&"x", &"y"), 2);
    }

    #[test]
    fn test_remove_missing_edge() {
        let mut graph = abc();
        let err = graph.remove_edge(&Edge::new("a", "b", 99)).unwrap_err();
        assert!(matches!(err, GraphError::EdgeNotFound { .. }));
        let err = graph.remove_edge(&Edge::new("q", "b", 3)).unwrap_err();
        assert!(matches!(err, GraphError::NodeNotFound { .. }));
    }

    #[test]
    fn test_remove_node_with_edges_fails() {
        let mut graph = abc();
        let err = graph.remove_node(&"b").unwrap_err();
        assert!(matches!(err, GraphError::NodeHasEdges { count: 3, .. }));
        assert!(graph.contains(&"b"));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_remove_node_only_incoming_edges_fails() {
        let mut graph: Graph<&str, u32> =
            Graph::from_parts(["a", "b"], [Edge::new("a", "b", 1)]).unwrap();
        assert!(matches!(
            graph.remove_node(&"b"),
            Err(GraphError::NodeHasEdges { count: 1, .. })
        ));
    }

    #[test]
    fn test_remove_isolated_node() {
        let mut graph = abc();
        graph.add_node("d").unwrap();
        graph.remove_node(&"d").unwrap();
        assert!(!graph.contains(&"d"));
        assert!(matches!(
            graph.remove_node(&"d"),
            Err(GraphError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_node_and_edges() {
        let mut graph = abc();
        let removed = graph.remove_node_and_edges(&"b").unwrap();
        assert_eq!(removed.len(), 3);
        assert!(!graph.contains(&"b"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.outgoing(&"c"), &[Edge::new("c", "a", 1)]);
    }

    #[test]
    fn test_incident_edges_and_children() {
        let graph = abc();
        assert_eq!(graph.incident_edges(&"b").len(), 3);
        assert_eq!(graph.incident_edges(&"a").len(), 2);
        assert_eq!(graph.children(&"b"), vec![&"c"]);
        assert_eq!(graph.children(&"a"), vec![&"b"]);
        assert!(graph.children(&"nope").is_empty());
    }

    #[test]
    fn test_self_loop_counted_once() {
        let mut graph: Graph<&str, u32> = Graph::from_parts(["a"], []).unwrap();
        graph.add_edge(Edge::new("a", "a", 1)).unwrap();
        assert_eq!(graph.incident_edges(&"a").len(), 1);
        assert_eq!(graph.children(&"a"), vec![&"a"]);
    }

    #[test]
    fn test_insertion_order() {
        let mut graph: Graph<&str, u32> = Graph::new();
        for n in ["m", "a", "z", "b"] {
            graph.add_node(n).unwrap();
        }
        graph.remove_node(&"a").unwrap();
        let nodes: Vec<_> = graph.nodes().copied().collect();
        assert_eq!(nodes, vec!["m", "z", "b"]);
    }

    #[test]
    fn test_unknown_node_queries_are_empty() {
        let graph = abc();
        assert!(graph.outgoing(&"x").is_empty());
        assert!(graph.edges_between(&"x", &"a").is_empty());
        assert_eq!(graph.count_edges_between(&"a", &"x"), 0);
        assert!(graph.incident_edges(&"x").is_empty());
    }

    #[test]
    fn test_clear() {
        let mut graph = abc();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    fn arbitrary_ops() -> impl Strategy<Value = Vec<(u8, u8, u8)>> {
        proptest::collection::vec((0u8..3, 0u8..8, 0u8..8), 0..120)
    }

    proptest! {
        // Edge count tracks successful add_edge minus remove_edge, node count
        // tracks distinct node inserts.
        #[test]
        fn prop_counts_match_operations(ops in arbitrary_ops()) {
            let mut graph: Graph<u8, u8> = Graph::new();
            let mut nodes = HashSet::new();
            let mut edges: Vec<Edge<u8, u8>> = Vec::new();

            for (op, a, b) in ops {
                match op {
                    0 => {
                        let inserted = graph.add_node(a).is_ok();
                        prop_assert_eq!(inserted, nodes.insert(a));
                    }
                    1 => {
                        let edge = Edge::new(a, b, a ^ b);
                        let ok = graph.add_edge(edge.clone()).is_ok();
                        prop_assert_eq!(ok, nodes.contains(&a) && nodes.contains(&b));
                        if ok {
                            edges.push(edge);
                        }
                    }
                    _ => {
                        let edge = Edge::new(a, b, a ^ b);
                        let ok = graph.remove_edge(&edge).is_ok();
                        let position = edges.iter().position(|e| *e == edge);
                        prop_assert_eq!(ok, position.is_some());
                        if let Some(i) = position {
                            edges.remove(i);
                        }
                    }
                }
                prop_assert_eq!(graph.node_count(), nodes.len());
                prop_assert_eq!(graph.edge_count(), edges.len());
            }
        }
    }

    #[test]
    fn random_stress_referential_integrity() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_4752_4150_48);

        for _case in 0..50 {
            let mut graph: Graph<u32, u32> = Graph::new();
            let steps = rng.random_range(0..300);
            for _ in 0..steps {
                let a = rng.random_range(0..16);
                let b = rng.random_range(0..16);
                match rng.random_range(0..5) {
                    0 => {
                        let _ = graph.add_node(a);
                    }
                    1 | 2 => {
                        let _ = graph.add_edge(Edge::new(a, b, rng.random_range(0..10)));
                    }
                    3 => {
                        let _ = graph.remove_node(&a);
                    }
                    _ => {
                        let _ = graph.remove_node_and_edges(&a);
                    }
                }
            }

            for edge in graph.edges() {
                assert!(graph.contains(edge.src()));
                assert!(graph.contains(edge.dst()));
            }
        }
    }
}
