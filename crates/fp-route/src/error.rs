//! Routing error type.

use thiserror::Error;

use fp_core::VertexId;
use fp_graph::GraphError;

/// Errors produced by `fp-route`.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// There is nothing to snap the requested points to.
    #[error("cannot route on an empty graph")]
    GraphEmpty,

    #[error("no passable route from {from} to {to}")]
    NoRoute { from: VertexId, to: VertexId },

    #[error("route search cancelled")]
    Cancelled,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
