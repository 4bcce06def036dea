//! Contiguous edge sequences with a running total weight.

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::weight::{Cost, Weighted};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A walk through a graph: each edge starts where the previous one ended.
///
/// Paths are append-only. Comparison looks at `total_weight` alone, so two
/// different routes of equal cost compare equal.
#[derive(Clone, Debug, Serialize)]
#[serde(bound(serialize = "N: Serialize, L: Serialize, L::Cost: Serialize"))]
pub struct Path<N, L: Weighted> {
    edges: Vec<Edge<N, L>>,
    total_weight: L::Cost,
}

impl<N, L: Weighted> Default for Path<N, L> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: L::Cost::ZERO,
        }
    }
}

impl<N, L> Path<N, L>
where
    N: PartialEq + Debug,
    L: Weighted,
{
    /// An empty path with zero weight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `edge`. Its source must be this path's current destination.
    pub fn push(&mut self, edge: Edge<N, L>) -> Result<()> {
        if let Some(last) = self.edges.last() {
            if last.dst() != edge.src() {
                return Err(GraphError::NonContiguousPath {
                    expected: format!("{:?}", last.dst()),
                    found: format!("{:?}", edge.src()),
                });
            }
        }
        self.total_weight = self
            .total_weight
            .checked_add(edge.label().weight())
            .ok_or_else(|| GraphError::CostOverflow {
                from: format!("{:?}", edge.src()),
                to: format!("{:?}", edge.dst()),
            })?;
        self.edges.push(edge);
        self.check_rep();
        Ok(())
    }

    /// A copy of this path with `edge` appended.
    pub fn extended(&self, edge: Edge<N, L>) -> Result<Self>
    where
        N: Clone,
        L: Clone,
    {
        let mut path = self.clone();
        path.push(edge)?;
        Ok(path)
    }

    pub fn edges(&self) -> &[Edge<N, L>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<N, L>> {
        self.edges
    }

    /// Sum of the edge weights.
    pub fn total_weight(&self) -> L::Cost {
        self.total_weight
    }

    /// Source of the first edge, `None` for an empty path.
    pub fn src(&self) -> Option<&N> {
        self.edges.first().map(Edge::src)
    }

    /// Destination of the last edge, `None` for an empty path.
    pub fn dst(&self) -> Option<&N> {
        self.edges.last().map(Edge::dst)
    }

    /// Nodes visited in order, including both ends.
    pub fn nodes(&self) -> Vec<&N> {
        let mut nodes: Vec<&N> = self.edges.iter().map(Edge::src).collect();
        if let Some(dst) = self.dst() {
            nodes.push(dst);
        }
        nodes
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        for pair in self.edges.windows(2) {
            assert!(
                pair[0].dst() == pair[1].src(),
                "path broken: edge ends at {:?}, next starts at {:?}",
                pair[0].dst(),
                pair[1].src()
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_rep(&self) {}
}

impl<N, L: Weighted> PartialEq for Path<N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.total_weight == other.total_weight
    }
}

impl<N, L: Weighted> PartialOrd for Path<N, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.total_weight.partial_cmp(&other.total_weight)
    }
}
