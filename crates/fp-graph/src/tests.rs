//! Unit tests for fp-graph.
//!
//! All tests use hand-crafted ways so they run without any OSM file.

#[cfg(test)]
mod helpers {
    use fp_core::{GeoPoint, Tags};

    use crate::{NodeRef, RawWay};

    pub fn footway(osm_id: i64, nodes: &[(i64, f64, f64)]) -> RawWay {
        RawWay {
            osm_id,
            tags: Tags::from([("highway", "footway")]),
            nodes: nodes
                .iter()
                .map(|&(id, lat, lon)| NodeRef::new(id, GeoPoint::new(lat, lon)))
                .collect(),
        }
    }

    /// A small T junction around Edinburgh's Meadows.
    ///
    /// ```text
    ///   1 ── 2 ── 3      way 100: 1-2-3
    ///        │
    ///        4           way 200: 2-4
    /// ```
    pub fn junction() -> Vec<RawWay> {
        vec![
            footway(100, &[(1, 55.9400, -3.1950), (2, 55.9400, -3.1930), (3, 55.9400, -3.1910)]),
            footway(200, &[(2, 55.9400, -3.1930), (4, 55.9385, -3.1930)]),
        ]
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use std::collections::HashMap;

    use approx::assert_relative_eq;
    use fp_core::{geodesic_distance, GeoPoint, Tags, VertexId};
    use fp_tags::{Barrier, Highway, PathClass};

    use super::helpers::{footway, junction};
    use crate::{build_graph, RawNode, RoutingGraph, RoutingGraphBuilder};

    fn no_nodes() -> HashMap<i64, RawNode> {
        HashMap::new()
    }

    #[test]
    fn empty_build() {
        let graph = RoutingGraph::empty();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.way_count(), 0);
    }

    #[test]
    fn shared_nodes_become_one_vertex() {
        let graph = build_graph(junction(), &no_nodes());
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.way_count(), 2);
        assert_eq!(graph.vertex(VertexId(1)).osm_id, 2);
    }

    #[test]
    fn edge_length_is_geodesic() {
        let graph = build_graph(junction(), &no_nodes());
        let edge = graph.edge_between(VertexId(0), VertexId(1)).unwrap();
        let expected = geodesic_distance(graph.position(VertexId(0)), graph.position(VertexId(1)));
        assert_relative_eq!(edge.length_m, expected);
        assert!(edge.length_m > 100.0 && edge.length_m < 150.0);
    }

    #[test]
    fn self_loops_are_skipped() {
        let way = footway(1, &[(1, 51.0, 0.0), (1, 51.0, 0.0), (2, 51.001, 0.0)]);
        let graph = build_graph([way], &no_nodes());
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn later_way_wins_shared_segment() {
        let first = footway(1, &[(1, 51.0, 0.0), (2, 51.001, 0.0)]);
        let mut second = footway(2, &[(2, 51.001, 0.0), (1, 51.0, 0.0)]);
        second.tags = Tags::from([("highway", "steps")]);
        let graph = build_graph([first, second], &no_nodes());
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edge_between(VertexId(0), VertexId(1)).unwrap();
        let way = graph.way(edge.way);
        assert_eq!(way.osm_id, 2);
        assert_eq!(way.profile.highway, Highway::Path(PathClass::Steps));
    }

    #[test]
    fn node_records_fill_tags() {
        let mut nodes = HashMap::new();
        nodes.insert(2, RawNode {
            pos:  GeoPoint::new(55.9400, -3.1930),
            tags: Tags::from([("barrier", "gate")]),
        });
        let graph = build_graph(junction(), &nodes);
        let gate = graph.vertex(VertexId(1));
        assert_eq!(gate.tags.get("barrier"), Some("gate"));
        assert_eq!(gate.profile.barrier, Some(Barrier::Gate));
        assert!(!graph.vertex(VertexId(0)).profile.tagged);
    }

    #[test]
    fn builder_keeps_first_position() {
        let mut b = RoutingGraphBuilder::new();
        let a = b.add_vertex(7, GeoPoint::new(1.0, 1.0), Tags::new());
        let again = b.add_vertex(7, GeoPoint::new(2.0, 2.0), Tags::from([("highway", "crossing")]));
        assert_eq!(a, again);
        let graph = b.build();
        assert_eq!(graph.position(a), GeoPoint::new(1.0, 1.0));
        assert!(graph.vertex(a).profile.crossing.is_some());
    }
}

// ── Adjacency & lookups ───────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use std::collections::HashMap;

    use fp_core::VertexId;

    use super::helpers::junction;
    use crate::{build_graph, GraphError};

    #[test]
    fn neighbours_in_both_directions() {
        let graph = build_graph(junction(), &HashMap::new());
        let mut around_2: Vec<VertexId> = graph.neighbours(VertexId(1)).map(|(n, _)| n).collect();
        around_2.sort();
        assert_eq!(around_2, vec![VertexId(0), VertexId(2), VertexId(3)]);
        assert_eq!(graph.degree(VertexId(3)), 1);
        let (n, e) = graph.neighbours(VertexId(3)).next().unwrap();
        assert_eq!(n, VertexId(1));
        assert_eq!(graph.edge(e).other(VertexId(3)), VertexId(1));
    }

    #[test]
    fn edge_between_is_symmetric() {
        let graph = build_graph(junction(), &HashMap::new());
        let ab = graph.edge_between(VertexId(1), VertexId(3)).unwrap();
        let ba = graph.edge_between(VertexId(3), VertexId(1)).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn missing_edge_and_vertex() {
        let graph = build_graph(junction(), &HashMap::new());
        assert!(matches!(
            graph.edge_between(VertexId(0), VertexId(3)),
            Err(GraphError::NoEdge { .. })
        ));
        assert!(matches!(graph.try_vertex(VertexId(99)), Err(GraphError::VertexNotFound(_))));
        assert!(matches!(
            graph.edge_between(VertexId(99), VertexId(0)),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn edges_of_way_by_osm_id() {
        let graph = build_graph(junction(), &HashMap::new());
        assert_eq!(
            graph.edges_of_way(100),
            vec![(VertexId(0), VertexId(1)), (VertexId(1), VertexId(2))]
        );
        assert_eq!(graph.edges_of_way(200), vec![(VertexId(1), VertexId(3))]);
        assert!(graph.edges_of_way(999).is_empty());
    }
}

// ── Snapping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapping {
    use std::collections::HashMap;

    use fp_core::{GeoPoint, VertexId};

    use super::helpers::{footway, junction};
    use crate::{build_graph, GraphError, RoutingGraph};

    #[test]
    fn empty_graph_fails() {
        let graph = RoutingGraph::empty();
        let p = GeoPoint::new(55.94, -3.19);
        assert!(matches!(graph.nearest_vertex(p), Err(GraphError::Empty)));
        assert!(matches!(graph.nearest_vertex_indexed(p), Err(GraphError::Empty)));
    }

    #[test]
    fn nearest_vertex_linear() {
        let graph = build_graph(junction(), &HashMap::new());
        let near_4 = GeoPoint::new(55.9383, -3.1931);
        assert_eq!(graph.nearest_vertex(near_4).unwrap(), VertexId(3));
        let near_1 = GeoPoint::new(55.9402, -3.1955);
        assert_eq!(graph.nearest_vertex(near_1).unwrap(), VertexId(0));
    }

    #[test]
    fn indexed_agrees_with_linear() {
        let graph = build_graph(junction(), &HashMap::new());
        for p in [
            GeoPoint::new(55.9383, -3.1931),
            GeoPoint::new(55.9405, -3.1915),
            GeoPoint::new(55.9395, -3.1941),
            GeoPoint::new(56.5, -2.0),
        ] {
            assert_eq!(graph.nearest_vertex_indexed(p).unwrap(), graph.nearest_vertex(p).unwrap());
        }
    }

    #[test]
    fn ties_go_to_lowest_id() {
        // Two vertices mirrored about the meridian of the query point.
        let way = footway(1, &[(1, 0.0, 0.001), (2, 0.0, -0.001)]);
        let graph = build_graph([way], &HashMap::new());
        let p = GeoPoint::new(0.0, 0.0);
        assert_eq!(graph.nearest_vertex(p).unwrap(), VertexId(0));
        assert_eq!(graph.nearest_vertex_indexed(p).unwrap(), VertexId(0));
    }

    #[test]
    fn indexed_handles_antimeridian() {
        let way = footway(1, &[(1, 10.0, 179.999), (2, 10.0, 170.0)]);
        let graph = build_graph([way], &HashMap::new());
        let p = GeoPoint::new(10.0, -179.999);
        assert_eq!(graph.nearest_vertex_indexed(p).unwrap(), VertexId(0));
        assert_eq!(graph.nearest_vertex(p).unwrap(), VertexId(0));
    }
}
