//! `fp-graph` — the pedestrian routing graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`graph`]   | `RoutingGraph` (CSR + R-tree), `Vertex`, `Edge`, `WayRecord`  |
//! | [`builder`] | `RoutingGraphBuilder`, `build_graph`, raw way/node records    |
//! | `spatial`   | unit-sphere R-tree backing `nearest_vertex_indexed`           |
//! | [`osm`]     | `load_from_pbf` (feature = `"osm"` only)                      |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | `nearest_vertex` scans vertices on the rayon pool.         |
//! | `osm`      | Enables OSM PBF loading via the `osmpbf` crate.            |

pub mod builder;
pub mod error;
pub mod graph;
mod spatial;

#[cfg(feature = "osm")]
pub mod osm;

#[cfg(test)]
mod tests;

pub use builder::{build_graph, NodeRef, RawNode, RawWay, RoutingGraphBuilder};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, RoutingGraph, Vertex, WayRecord};
