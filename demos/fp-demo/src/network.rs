//! Synthetic walking network around the Meadows, Edinburgh.
//!
//! Small enough to read at a glance, but it mixes the things the cost model
//! cares about: a busy road without pavements, a residential street, a lit
//! park path, a signalised crossing, an unpaved shortcut and some steps.

use fp_core::{GeoPoint, Tags};
use fp_graph::{NodeRef, RawWay, RoutingGraph, RoutingGraphBuilder};

fn node(id: i64, lat: f64, lon: f64) -> NodeRef {
    NodeRef::new(id, GeoPoint::new(lat, lon))
}

fn way<const N: usize>(osm_id: i64, tags: [(&str, &str); N], nodes: Vec<NodeRef>) -> RawWay {
    RawWay { osm_id, tags: Tags::from(tags), nodes }
}

/// Build the network.
///
/// Returns `(graph, [west_gate, east_gate])`, the default route endpoints.
pub fn build_network() -> (RoutingGraph, [GeoPoint; 2]) {
    let west_gate = node(1, 55.9410, -3.1960);
    let junction  = node(2, 55.9410, -3.1930);
    let east_gate = node(3, 55.9410, -3.1890);
    let park_mid  = node(4, 55.9400, -3.1925);
    let steps_top = node(5, 55.9418, -3.1912);

    let mut crossing = node(6, 55.9403, -3.1900);
    crossing.tags = Tags::from([
        ("highway", "crossing"),
        ("crossing", "traffic_signals"),
        ("kerb", "lowered"),
        ("tactile_paving", "yes"),
    ]);

    let mut b = RoutingGraphBuilder::new();

    // Melville Drive: fast, two lanes, no pavement on this stretch.
    b.add_way(way(
        1001,
        [("highway", "primary"), ("sidewalk", "no"), ("lanes", "2"), ("maxspeed", "30 mph")],
        vec![west_gate.clone(), junction.clone(), east_gate.clone()],
    ));

    // Lit, paved path across the park.
    b.add_way(way(
        1002,
        [("highway", "footway"), ("surface", "asphalt"), ("lit", "yes"), ("width", "3")],
        vec![west_gate.clone(), park_mid.clone(), crossing.clone(), east_gate.clone()],
    ));

    // Desire line over the grass.
    b.add_way(way(
        1003,
        [("highway", "path"), ("informal", "yes"), ("surface", "grass")],
        vec![junction.clone(), park_mid],
    ));

    // Residential street with pavements on both sides.
    b.add_way(way(
        1004,
        [("highway", "residential"), ("sidewalk", "both"), ("maxspeed", "20 mph")],
        vec![junction, steps_top.clone()],
    ));

    // Steps down to the east gate.
    b.add_way(way(
        1005,
        [("highway", "steps"), ("incline", "down")],
        vec![steps_top, east_gate],
    ));

    (b.build(), [GeoPoint::new(55.9410, -3.1960), GeoPoint::new(55.9410, -3.1890)])
}
