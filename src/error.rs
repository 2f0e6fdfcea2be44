/*!
# Errors

All fallible operations of this crate report a [`GraphError`]. Every variant is a
programmer-error-class failure: none of them is resolved by retrying, and no algorithm
recovers from one internally.
*/

use std::fmt::Debug;

use thiserror::Error;

use crate::{edge::*, node::*};

/// Errors that can occur when querying graphs or running algorithms on them
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    // Invalid arguments
    #[error("node not found: {0}")]
    UnknownNode(String),

    #[error("node index {node} out of range for graph with {len} nodes")]
    NodeOutOfRange { node: Node, len: NumNodes },

    #[error("edge not found: {from} -> {to}")]
    UnknownEdge { from: String, to: String },

    // Precondition violations
    #[error("edge {edge} has weight {weight}, but only non-negative weights are supported")]
    NegativeWeight { edge: Edge, weight: Weight },

    #[error("edge {edge} has weight NaN")]
    UndefinedWeight { edge: Edge },

    // Structural violations
    #[error("graph is not acyclic: only {visited} of {total} nodes could be ordered")]
    NotAcyclic { visited: NumNodes, total: NumNodes },

    #[error("negative cycle reachable from the source")]
    NegativeCycle,
}

impl GraphError {
    /// Builds an [`GraphError::UnknownNode`] from the label that could not be found
    pub fn unknown_node<L: Debug + ?Sized>(label: &L) -> Self {
        GraphError::UnknownNode(format!("{label:?}"))
    }

    /// Builds an [`GraphError::UnknownEdge`] from the labels of its endpoints
    pub fn unknown_edge<L: Debug + ?Sized>(source: &L, target: &L) -> Self {
        GraphError::UnknownEdge {
            from: format!("{source:?}"),
            to: format!("{target:?}"),
        }
    }
}

/// Result type used throughout the crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::unknown_node("X").to_string(),
            "node not found: \"X\""
        );
        assert_eq!(
            GraphError::NegativeWeight {
                edge: Edge(1, 2),
                weight: -3.0
            }
            .to_string(),
            "edge (1,2) has weight -3, but only non-negative weights are supported"
        );
        assert_eq!(
            GraphError::NotAcyclic {
                visited: 2,
                total: 5
            }
            .to_string(),
            "graph is not acyclic: only 2 of 5 nodes could be ordered"
        );
        assert_eq!(
            GraphError::UndefinedWeight { edge: Edge(0, 3) }.to_string(),
            "edge (0,3) has weight NaN"
        );
    }
}
