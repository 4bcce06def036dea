//! Minimum-cost path search.
//!
//! A Dijkstra variant that keeps whole partial paths in the priority queue
//! instead of a distance table. The queue is seeded with one single-edge path
//! per edge leaving the source; each pop settles the popped path's
//! destination, and the first popped path that ends at the destination is
//! returned.
//!
//! # Complexity
//!
//! Every push copies the parent path, so memory can grow to `O(V * E)` on
//! dense graphs. Time is `O(E log E)` heap work plus the copies.
//!
//! # Preconditions
//!
//! Edge weights must be non-negative. [`MinCostSearch`] checks this by
//! default; [`Graph::find_minimum_cost_path`] does not, and may return a
//! suboptimal path if the graph has negative weights.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::path::Path;
use crate::queue::MinQueue;
use crate::weight::{Cost, Weighted};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that stops a running search at its next iteration.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configurable minimum-cost search over a [`Graph`].
///
/// ```
/// use ttr_core::{Edge, Graph, MinCostSearch};
///
/// let graph = Graph::from_parts(
///     ["a", "b", "c"],
///     [Edge::new("a", "b", 3u32), Edge::new("b", "c", 5), Edge::new("b", "c", 4)],
/// ).unwrap();
///
/// let path = MinCostSearch::new(&graph).run(&"a", &"c").unwrap().unwrap();
/// assert_eq!(path.total_weight(), 7);
/// ```
#[derive(Debug)]
pub struct MinCostSearch<'g, N, L> {
    graph: &'g Graph<N, L>,
    validate_weights: bool,
    cancel: Option<CancelToken>,
    max_expansions: Option<usize>,
}

impl<'g, N, L> MinCostSearch<'g, N, L>
where
    N: Clone + Eq + Hash + Debug,
    L: Weighted + Clone + PartialEq + Debug,
{
    pub fn new(graph: &'g Graph<N, L>) -> Self {
        Self {
            graph,
            validate_weights: true,
            cancel: None,
            max_expansions: None,
        }
    }

    /// Reject graphs containing negative edge weights before searching.
    /// Enabled by default.
    pub fn validate_weights(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }

    /// Check `token` once per loop iteration.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Give up with [`GraphError::Cancelled`] after `limit` queue pops.
    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Find a minimum-cost path from `src` to `dst`.
    ///
    /// Returns `Ok(None)` when `dst` is unreachable, when `src` is unknown or
    /// has no outgoing edges, and when `src == dst` and no self-loop leads
    /// back (there is no zero-length path).
    ///
    /// Fails with [`GraphError::CostOverflow`] when every path to `dst` has a
    /// total weight too large for the cost type.
    pub fn run(&self, src: &N, dst: &N) -> Result<Option<Path<N, L>>> {
        if self.validate_weights {
            if let Some(edge) = self.graph.edges().find(|e| e.label().weight().is_negative()) {
                return Err(GraphError::NegativeWeight {
                    edge: format!("{:?}", edge),
                });
            }
        }

        let mut active: MinQueue<Path<N, L>> = MinQueue::new();
        for edge in self.graph.outgoing(src) {
            let mut start = Path::new();
            start.push(edge.clone())?;
            active.push(start);
        }
        tracing::debug!(
            "Searching {:?} -> {:?} with {} seed path(s)",
            src,
            dst,
            active.len()
        );

        let mut finished: HashSet<&N> = HashSet::new();
        let mut expansions = 0usize;
        // Overflowing paths cost more than any representable one, so they are
        // dropped and only reported if nothing else reaches `dst`.
        let mut overflow: Option<GraphError> = None;

        while let Some(min_path) = active.pop() {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                tracing::debug!("Search {:?} -> {:?} cancelled", src, dst);
                return Err(GraphError::Cancelled);
            }
            if self.max_expansions.is_some_and(|limit| expansions >= limit) {
                tracing::debug!(
                    "Search {:?} -> {:?} hit expansion limit {}",
                    src,
                    dst,
                    expansions
                );
                return Err(GraphError::Cancelled);
            }
            expansions += 1;

            let Some(min_dest) = min_path.dst() else {
                continue;
            };
            tracing::trace!(
                "Popped path to {:?} costing {:?}",
                min_dest,
                min_path.total_weight()
            );

            if min_dest == dst {
                tracing::debug!(
                    "Found path {:?} -> {:?} costing {:?} after {} expansion(s)",
                    src,
                    dst,
                    min_path.total_weight(),
                    expansions
                );
                return Ok(Some(min_path));
            }

            if finished.contains(min_dest) {
                continue;
            }

            // Graph borrows outlive min_path, so look the node up there.
            let Some((settled, outgoing)) = self.graph.settle(min_dest) else {
                continue;
            };
            for edge in outgoing {
                if finished.contains(edge.dst()) {
                    continue;
                }
                match min_path.extended(edge.clone()) {
                    Ok(path) => active.push(path),
                    Err(err @ GraphError::CostOverflow { .. }) => {
                        tracing::debug!("Dropping extension past {:?}: {}", min_dest, err);
                        overflow.get_or_insert(err);
                    }
                    Err(err) => return Err(err),
                }
            }
            finished.insert(settled);
        }

        if let Some(err) = overflow {
            tracing::debug!("No representable path {:?} -> {:?}", src, dst);
            return Err(err);
        }
        tracing::debug!("No path {:?} -> {:?}", src, dst);
        Ok(None)
    }
}

impl<N, L> Graph<N, L>
where
    N: Clone + Eq + Hash + Debug,
    L: Weighted + Clone + PartialEq + Debug,
{
    /// Find a minimum-cost path from `src` to `dst`, or `None` if there is
    /// none.
    ///
    /// Weights are not validated; see [`MinCostSearch`] for the checked,
    /// cancellable variant. Which of several equal-cost paths is returned is
    /// unspecified. Returns `None` if every path's cost overflows.
    pub fn find_minimum_cost_path(&self, src: &N, dst: &N) -> Option<Path<N, L>> {
        MinCostSearch::new(self)
            .validate_weights(false)
            .run(src, dst)
            .ok()
            .flatten()
    }

    /// Sum of the cheapest path's weights, if one exists.
    pub fn minimum_cost(&self, src: &N, dst: &N) -> Option<L::Cost> {
        self.find_minimum_cost_path(src, dst)
            .map(|path| path.total_weight())
    }
}
