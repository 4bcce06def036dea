//! Error types for ttr-core.

use thiserror::Error;

/// Result type alias for ttr-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph mutation, path construction, search and board loading.
///
/// Node and edge values are stored as their `Debug` rendering so the error
/// type stays independent of the graph's type parameters.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A referenced node is not in the graph.
    #[error("Node not found: {node}")]
    NodeNotFound {
        /// The missing node.
        node: String,
    },

    /// No stored edge equals the referenced edge.
    #[error("Edge not found: {edge}")]
    EdgeNotFound {
        /// The missing edge.
        edge: String,
    },

    /// No node sits at the requested coordinate.
    #[error("No node at location ({x}, {y})")]
    LocationNotFound { x: f64, y: f64 },

    /// The node is already present.
    #[error("Node already exists: {node}")]
    DuplicateNode { node: String },

    /// The node still has incident edges and cannot be removed.
    #[error("Node {node} still has {count} incident edge(s)")]
    NodeHasEdges { node: String, count: usize },

    /// An edge was appended to a path that does not end at the edge's source.
    #[error("Path is not contiguous: expected an edge from {expected}, got one from {found}")]
    NonContiguousPath {
        /// Destination of the path's last edge.
        expected: String,
        /// Source of the rejected edge.
        found: String,
    },

    /// Minimum-cost search requires non-negative edge weights.
    #[error("Negative edge weight: {edge}")]
    NegativeWeight { edge: String },

    /// A path's total weight no longer fits in its cost type.
    #[error("Path cost overflows on the edge from {from} to {to}")]
    CostOverflow { from: String, to: String },

    /// The search was cancelled or ran past its expansion budget.
    #[error("Search cancelled")]
    Cancelled,

    /// A move was attempted after the game finished.
    #[error("Game is already complete")]
    GameOver,

    /// A game move between two cities that share no route.
    #[error("No direct route from {from} to {to}")]
    NoDirectRoute { from: String, to: String },

    /// Board data is structurally valid JSON but semantically wrong.
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// Unrecognised route colour (strict loading only).
    #[error("Unknown route color: {color}")]
    UnknownColor { color: String },

    /// IO error reading a board file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error (missing keys, wrong types).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn node_not_found(node: &impl std::fmt::Debug) -> Self {
        GraphError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }

    pub(crate) fn edge_not_found(edge: &impl std::fmt::Debug) -> Self {
        GraphError::EdgeNotFound {
            edge: format!("{:?}", edge),
        }
    }

    /// True for the "referenced thing does not exist" class of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound { .. }
                | GraphError::EdgeNotFound { .. }
                | GraphError::LocationNotFound { .. }
        )
    }

    /// True for errors caused by bad input data rather than bad API usage.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            GraphError::MalformedInput { .. }
                | GraphError::UnknownColor { .. }
                | GraphError::Json(_)
        )
    }
}
