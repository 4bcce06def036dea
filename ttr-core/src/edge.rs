//! Immutable directed, labeled edges.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A directed edge from `src` to `dst` carrying `label`.
///
/// Two edges are equal when source, destination and label are all equal.
/// Structurally identical edges may coexist in a graph.
///
/// Edges have no ordering of their own; sort them by label with
/// [`Edge::cmp_by_label`] or [`sort_by_label`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N, L> {
    src: N,
    dst: N,
    label: L,
}

impl<N, L> Edge<N, L> {
    pub fn new(src: N, dst: N, label: L) -> Self {
        Self { src, dst, label }
    }

    pub fn src(&self) -> &N {
        &self.src
    }

    pub fn dst(&self) -> &N {
        &self.dst
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn into_parts(self) -> (N, N, L) {
        (self.src, self.dst, self.label)
    }

    /// Whether `node` is either endpoint.
    pub fn touches(&self, node: &N) -> bool
    where
        N: PartialEq,
    {
        self.src == *node || self.dst == *node
    }

    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self
    where
        N: Clone,
        L: Clone,
    {
        Self::new(self.dst.clone(), self.src.clone(), self.label.clone())
    }

    /// Compare two edges by label alone.
    pub fn cmp_by_label(&self, other: &Self) -> Ordering
    where
        L: PartialOrd,
    {
        self.label
            .partial_cmp(&other.label)
            .unwrap_or(Ordering::Equal)
    }
}

/// Stable sort of `edges` by label.
pub fn sort_by_label<N, L: PartialOrd>(edges: &mut [Edge<N, L>]) {
    edges.sort_by(|a, b| a.cmp_by_label(b));
}
