//! The routing graph.
//!
//! # Data layout
//!
//! Edges are undirected and stored once, indexed by `EdgeId`.  Adjacency is
//! kept in **Compressed Sparse Row (CSR)** form with every edge listed under
//! both of its endpoints.  The neighbours of `VertexId v` occupy
//!
//! ```text
//! adj_vertex[ adj_start[v] .. adj_start[v+1] ]
//! adj_edge  [ adj_start[v] .. adj_start[v+1] ]
//! ```
//!
//! so expanding a vertex in the search is a contiguous scan.
//!
//! Tags live on [`Vertex`] and [`WayRecord`] and are interpreted into
//! profiles once, by the builder.  Edges only point at their way.

use rustc_hash::FxHashMap;

use fp_core::{geodesic_distance, EdgeId, GeoPoint, Tags, VertexId, WayId};
use fp_tags::{NodeProfile, WayProfile};

use crate::spatial::SpatialIndex;
use crate::{GraphError, GraphResult, RoutingGraphBuilder};

// ── Records ───────────────────────────────────────────────────────────────────

/// A junction or shape point of the network.
#[derive(Clone, Debug)]
pub struct Vertex {
    /// OpenStreetMap node id.
    pub osm_id:  i64,
    pub pos:     GeoPoint,
    pub tags:    Tags,
    pub profile: NodeProfile,
}

/// One way of the source data.  Every edge the way contributed points here.
#[derive(Clone, Debug)]
pub struct WayRecord {
    /// OpenStreetMap way id.
    pub osm_id:  i64,
    pub tags:    Tags,
    pub profile: WayProfile,
}

/// An undirected segment between two distinct vertices.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub a:        VertexId,
    pub b:        VertexId,
    pub way:      WayId,
    /// Geodesic length in metres.
    pub length_m: f64,
}

impl Edge {
    /// The endpoint that is not `v`.  `v` must be an endpoint.
    #[inline]
    pub fn other(&self, v: VertexId) -> VertexId {
        if v == self.a { self.b } else { self.a }
    }
}

// ── RoutingGraph ──────────────────────────────────────────────────────────────

/// Undirected pedestrian graph in CSR form plus a spatial index for snapping.
///
/// Immutable once built; share it by reference across requests and threads.
/// Do not construct directly; use [`RoutingGraphBuilder`] or
/// [`build_graph`](crate::build_graph).
pub struct RoutingGraph {
    pub(crate) vertices:   Vec<Vertex>,
    pub(crate) ways:       Vec<WayRecord>,
    pub(crate) edges:      Vec<Edge>,
    /// CSR row pointer, length `vertex_count + 1`.
    pub(crate) adj_start:  Vec<u32>,
    pub(crate) adj_vertex: Vec<VertexId>,
    pub(crate) adj_edge:   Vec<EdgeId>,
    pub(crate) way_index:  FxHashMap<i64, WayId>,
    pub(crate) spatial:    SpatialIndex,
}

impl RoutingGraph {
    /// A graph with no vertices.  Every snapping query fails with
    /// [`GraphError::Empty`].
    pub fn empty() -> Self {
        RoutingGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── Records ───────────────────────────────────────────────────────────

    /// Panics on an id this graph did not hand out; see [`try_vertex`](Self::try_vertex).
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    pub fn try_vertex(&self, id: VertexId) -> GraphResult<&Vertex> {
        self.vertices.get(id.index()).ok_or(GraphError::VertexNotFound(id))
    }

    #[inline]
    pub fn position(&self, id: VertexId) -> GeoPoint {
        self.vertices[id.index()].pos
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    #[inline]
    pub fn way(&self, id: WayId) -> &WayRecord {
        &self.ways[id.index()]
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices.iter().enumerate().map(|(i, v)| (VertexId(i as u32), v))
    }

    pub fn ways(&self) -> impl ExactSizeIterator<Item = (WayId, &WayRecord)> + '_ {
        self.ways.iter().enumerate().map(|(i, w)| (WayId(i as u32), w))
    }

    /// Look a way up by its OpenStreetMap id.
    pub fn way_by_osm_id(&self, osm_id: i64) -> Option<WayId> {
        self.way_index.get(&osm_id).copied()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `(neighbour, edge)` pairs for every edge incident to `v`.
    ///
    /// A contiguous index range; no allocation.
    #[inline]
    pub fn neighbours(&self, v: VertexId) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        let start = self.adj_start[v.index()] as usize;
        let end = self.adj_start[v.index() + 1] as usize;
        self.adj_vertex[start..end]
            .iter()
            .copied()
            .zip(self.adj_edge[start..end].iter().copied())
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        (self.adj_start[v.index() + 1] - self.adj_start[v.index()]) as usize
    }

    /// The edge joining `a` and `b`, in either direction.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> GraphResult<&Edge> {
        if a.index() >= self.vertices.len() {
            return Err(GraphError::VertexNotFound(a));
        }
        self.neighbours(a)
            .find(|&(n, _)| n == b)
            .map(|(_, e)| &self.edges[e.index()])
            .ok_or(GraphError::NoEdge { a, b })
    }

    /// Vertex pairs of every edge contributed by the way with this OSM id,
    /// in edge order.  Empty if the way is unknown.
    pub fn edges_of_way(&self, osm_way_id: i64) -> Vec<(VertexId, VertexId)> {
        let Some(way) = self.way_by_osm_id(osm_way_id) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|e| e.way == way)
            .map(|e| (e.a, e.b))
            .collect()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The vertex geodesically nearest to `point`, by exhaustive scan.
    ///
    /// Ties resolve to the lowest `VertexId`.  With the `parallel` feature the
    /// scan is spread over the rayon pool; the result is identical.
    pub fn nearest_vertex(&self, point: GeoPoint) -> GraphResult<VertexId> {
        let key = |(i, v): (usize, &Vertex)| (geodesic_distance(point, v.pos), i);
        let closer = |x: &(f64, usize), y: &(f64, usize)| x.0.total_cmp(&y.0).then(x.1.cmp(&y.1));

        #[cfg(feature = "parallel")]
        let best = {
            use rayon::prelude::*;
            self.vertices.par_iter().enumerate().map(key).min_by(closer)
        };
        #[cfg(not(feature = "parallel"))]
        let best = self.vertices.iter().enumerate().map(key).min_by(closer);

        best.map(|(_, i)| VertexId(i as u32)).ok_or(GraphError::Empty)
    }

    /// Same contract as [`nearest_vertex`](Self::nearest_vertex), answered
    /// from the R-tree in logarithmic time.
    pub fn nearest_vertex_indexed(&self, point: GeoPoint) -> GraphResult<VertexId> {
        self.spatial.nearest(point, &self.vertices).ok_or(GraphError::Empty)
    }
}
