//! Turning a vertex sequence into a [`RouteResult`].

use fp_core::{GeoPoint, VertexId};
use fp_graph::RoutingGraph;

use crate::{RoutePart, RouteResult, RoutingResult};

/// Average walking speed used for time estimates, metres per second.
pub const WALKING_SPEED_MPS: f64 = 0.92;

/// Build the route for `vertices`, which must be consecutive neighbours in
/// `graph`.
///
/// The result opens with a start marker at the first vertex, has one
/// progression per edge and closes with an arrival marker at the last vertex.
/// A single vertex yields the two markers only.
///
/// # Errors
///
/// `GraphError::NoEdge` (wrapped) if two consecutive vertices are not joined.
pub fn assemble_route(
    graph: &RoutingGraph,
    start: GeoPoint,
    end: GeoPoint,
    vertices: &[VertexId],
) -> RoutingResult<RouteResult> {
    let mut parts = Vec::with_capacity(vertices.len() + 1);

    if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
        parts.push(RoutePart::Start { position: graph.try_vertex(first)?.pos });
        for pair in vertices.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let edge = graph.edge_between(a, b)?;
            parts.push(RoutePart::Progression {
                distance_m:     edge.length_m,
                estimated_secs: edge.length_m / WALKING_SPEED_MPS,
                start:          graph.position(a),
                end:            graph.position(b),
            });
        }
        parts.push(RoutePart::Arrive { position: graph.try_vertex(last)?.pos });
    }

    Ok(RouteResult { start, end, parts, vertices: vertices.to_vec() })
}
