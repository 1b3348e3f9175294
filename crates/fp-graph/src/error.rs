//! Graph error type.

use thiserror::Error;

use fp_core::VertexId;

/// Errors produced by `fp-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("routing graph has no vertices")]
    Empty,

    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    #[error("no edge between {a} and {b}")]
    NoEdge { a: VertexId, b: VertexId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
