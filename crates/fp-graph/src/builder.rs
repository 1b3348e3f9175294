//! Graph construction from raw way and node records.

use std::collections::HashMap;
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;

use fp_core::{geodesic_distance, EdgeId, GeoPoint, Tags, VertexId, WayId};
use fp_tags::{NodeProfile, WayProfile};

use crate::graph::{Edge, RoutingGraph, Vertex, WayRecord};
use crate::spatial::SpatialIndex;

// ── Raw records ───────────────────────────────────────────────────────────────

/// A node as delivered by the data source.
#[derive(Clone, Debug, PartialEq)]
pub struct RawNode {
    pub pos:  GeoPoint,
    pub tags: Tags,
}

/// A way's reference to one of its nodes, in way order.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRef {
    pub id:   i64,
    pub pos:  GeoPoint,
    pub tags: Tags,
}

impl NodeRef {
    pub fn new(id: i64, pos: GeoPoint) -> Self {
        Self { id, pos, tags: Tags::new() }
    }
}

/// A way as delivered by the data source.
#[derive(Clone, Debug, PartialEq)]
pub struct RawWay {
    pub osm_id: i64,
    pub tags:   Tags,
    pub nodes:  Vec<NodeRef>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Build a graph from raw ways, taking vertex positions and tags from
/// `nodes_by_id` wherever a node is listed there.
///
/// Each consecutive pair of distinct nodes in a way becomes one undirected
/// edge.  When several ways share a vertex pair the last one wins.
pub fn build_graph<I, S>(ways: I, nodes_by_id: &HashMap<i64, RawNode, S>) -> RoutingGraph
where
    I: IntoIterator<Item = RawWay>,
    S: BuildHasher,
{
    let mut builder = RoutingGraphBuilder::new();
    for mut way in ways {
        for node in &mut way.nodes {
            if let Some(raw) = nodes_by_id.get(&node.id) {
                node.pos = raw.pos;
                node.tags = raw.tags.clone();
            }
        }
        builder.add_way(way);
    }
    builder.build()
}

// ── RoutingGraphBuilder ───────────────────────────────────────────────────────

struct PendingVertex {
    osm_id: i64,
    pos:    GeoPoint,
    tags:   Tags,
}

/// Construct a [`RoutingGraph`] incrementally, then call [`build`](Self::build).
///
/// Vertices are keyed by OSM node id and numbered densely in first-seen
/// order.  `build()` interprets every tag map into its profile, lays out the
/// CSR adjacency and bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use fp_core::{GeoPoint, Tags};
/// use fp_graph::{NodeRef, RawWay, RoutingGraphBuilder};
///
/// let mut b = RoutingGraphBuilder::new();
/// b.add_way(RawWay {
///     osm_id: 1,
///     tags:   Tags::from([("highway", "footway")]),
///     nodes:  vec![
///         NodeRef::new(10, GeoPoint::new(51.5000, -0.1200)),
///         NodeRef::new(11, GeoPoint::new(51.5010, -0.1200)),
///     ],
/// });
/// let graph = b.build();
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct RoutingGraphBuilder {
    vertices:     Vec<PendingVertex>,
    vertex_index: FxHashMap<i64, VertexId>,
    ways:         Vec<(i64, Tags)>,
    edges:        Vec<Edge>,
    edge_index:   FxHashMap<(VertexId, VertexId), EdgeId>,
}

impl RoutingGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, or return the existing one for this OSM id.
    ///
    /// The first position seen is kept.  Non-empty `tags` replace whatever
    /// the vertex carried before.
    pub fn add_vertex(&mut self, osm_id: i64, pos: GeoPoint, tags: Tags) -> VertexId {
        if let Some(&id) = self.vertex_index.get(&osm_id) {
            if !tags.is_empty() {
                self.vertices[id.index()].tags = tags;
            }
            return id;
        }
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(PendingVertex { osm_id, pos, tags });
        self.vertex_index.insert(osm_id, id);
        id
    }

    /// Add a way and one edge per consecutive pair of distinct nodes.
    pub fn add_way(&mut self, way: RawWay) -> WayId {
        let way_id = WayId(self.ways.len() as u32);
        let ids: Vec<VertexId> = way
            .nodes
            .into_iter()
            .map(|n| self.add_vertex(n.id, n.pos, n.tags))
            .collect();
        self.ways.push((way.osm_id, way.tags));

        for pair in ids.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a == b {
                continue;
            }
            let length_m = geodesic_distance(
                self.vertices[a.index()].pos,
                self.vertices[b.index()].pos,
            );
            let edge = Edge { a, b, way: way_id, length_m };
            let key = if a < b { (a, b) } else { (b, a) };
            match self.edge_index.get(&key) {
                Some(&existing) => {
                    let old = &mut self.edges[existing.index()];
                    log::debug!(
                        "segment {a}-{b} of way {} replaces way {}",
                        way.osm_id,
                        self.ways[old.way.index()].0,
                    );
                    *old = edge;
                }
                None => {
                    self.edge_index.insert(key, EdgeId(self.edges.len() as u32));
                    self.edges.push(edge);
                }
            }
        }
        way_id
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and produce a [`RoutingGraph`].
    pub fn build(self) -> RoutingGraph {
        let vertex_count = self.vertices.len();

        // CSR row pointer over both directions of every edge.
        let mut adj_start = vec![0u32; vertex_count + 1];
        for e in &self.edges {
            adj_start[e.a.index() + 1] += 1;
            adj_start[e.b.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[vertex_count] as usize, self.edges.len() * 2);

        let slots = self.edges.len() * 2;
        let mut adj_vertex = vec![VertexId::INVALID; slots];
        let mut adj_edge = vec![EdgeId::INVALID; slots];
        let mut cursor: Vec<u32> = adj_start[..vertex_count].to_vec();
        for (i, e) in self.edges.iter().enumerate() {
            for (from, to) in [(e.a, e.b), (e.b, e.a)] {
                let slot = cursor[from.index()] as usize;
                adj_vertex[slot] = to;
                adj_edge[slot] = EdgeId(i as u32);
                cursor[from.index()] += 1;
            }
        }

        let vertices: Vec<Vertex> = self
            .vertices
            .into_iter()
            .map(|v| Vertex {
                osm_id:  v.osm_id,
                pos:     v.pos,
                profile: NodeProfile::interpret(&v.tags),
                tags:    v.tags,
            })
            .collect();

        let mut way_index = FxHashMap::default();
        let ways: Vec<WayRecord> = self
            .ways
            .into_iter()
            .enumerate()
            .map(|(i, (osm_id, tags))| {
                way_index.insert(osm_id, WayId(i as u32));
                WayRecord { osm_id, profile: WayProfile::interpret(&tags), tags }
            })
            .collect();

        let spatial = SpatialIndex::new(&vertices);
        log::debug!(
            "built routing graph: {} vertices, {} edges, {} ways",
            vertices.len(),
            self.edges.len(),
            ways.len(),
        );

        RoutingGraph {
            vertices,
            ways,
            edges: self.edges,
            adj_start,
            adj_vertex,
            adj_edge,
            way_index,
            spatial,
        }
    }
}
