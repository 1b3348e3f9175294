//! R-tree over vertex positions.
//!
//! Positions are indexed as points on the unit sphere so that straight-line
//! (chord) distance is monotonic in great-circle distance everywhere,
//! including across the antimeridian.  The ellipsoid differs from the sphere
//! by well under 1 %, so the chord-nearest vertex is only a first guess: every
//! vertex within a small margin of it is re-ranked by geodesic distance.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use fp_core::{geodesic_distance, GeoPoint, VertexId};

use crate::Vertex;

/// Candidates within this factor of the best chord distance are re-ranked.
const CANDIDATE_MARGIN: f64 = 1.01;

#[derive(Clone)]
struct VertexEntry {
    xyz: [f64; 3],
    id:  VertexId,
}

impl RTreeObject for VertexEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.xyz)
    }
}

impl PointDistance for VertexEntry {
    /// Squared chord length on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.xyz[0] - point[0];
        let dy = self.xyz[1] - point[1];
        let dz = self.xyz[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

fn unit_vector(p: GeoPoint) -> [f64; 3] {
    let (lat, lon) = (p.lat.to_radians(), p.lon.to_radians());
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

pub(crate) struct SpatialIndex {
    tree: RTree<VertexEntry>,
}

impl SpatialIndex {
    /// Bulk-load from vertex positions in `VertexId` order.
    pub(crate) fn new(vertices: &[Vertex]) -> Self {
        let entries: Vec<VertexEntry> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| VertexEntry { xyz: unit_vector(v.pos), id: VertexId(i as u32) })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Geodesically nearest vertex; ties go to the lowest id.
    pub(crate) fn nearest(&self, point: GeoPoint, vertices: &[Vertex]) -> Option<VertexId> {
        let query = unit_vector(point);
        let first = self.tree.nearest_neighbor(&query)?;
        let radius = first.distance_2(&query).sqrt() * CANDIDATE_MARGIN + 1e-12;

        self.tree
            .locate_within_distance(query, radius * radius)
            .map(|e| (geodesic_distance(point, vertices[e.id.index()].pos), e.id))
            .min_by(|x, y| x.0.total_cmp(&y.0).then(x.1.cmp(&y.1)))
            .map(|(_, id)| id)
    }
}
