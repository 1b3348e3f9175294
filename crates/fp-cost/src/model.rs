//! The cost model and the `CostFunction` seam used by the router.

use std::sync::LazyLock;

use fp_core::{EdgeId, Tags, VertexId, WayId};
use fp_graph::{RoutingGraph, Vertex, WayRecord};
use fp_prefs::{OptionName, Preferences};
use fp_tags::{Highway, NodeProfile, Sidewalk, WayProfile};

use crate::{access_is_legal, general_factor, node_cost, path_weight, road_base_weight, road_factor, Cost};

/// Weight of a road whose sidewalk is only assumed.
const GUESSED_SIDEWALK: f64 = 1.2;
/// Fast roads make even a pavement unpleasant.
const FAST_ROAD_MPH: f64 = 60.0;

/// Profile of the pavement beside a road with a tagged sidewalk.
static PAVEMENT: LazyLock<WayProfile> = LazyLock::new(|| {
    WayProfile::interpret(&Tags::from([
        ("highway", "footway"),
        ("footway", "sidewalk"),
        ("surface", "asphalt"),
    ]))
});

// ── EdgeCost ──────────────────────────────────────────────────────────────────

/// The pieces of one edge traversal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeCost {
    /// Per-metre weight of the edge's way.
    pub way:      Cost,
    /// Flat charge of the vertex being left.
    pub node:     Cost,
    pub length_m: f64,
    /// `node + way × length`.
    pub total:    Cost,
}

// ── CostFunction ──────────────────────────────────────────────────────────────

/// What a path search needs to know about costs.
///
/// # Thread safety
///
/// Implementations must be `Sync` so one instance can serve searches running
/// on several threads.
pub trait CostFunction: Sync {
    /// Per-metre weight of a way.
    fn way_cost(&self, id: WayId, way: &WayRecord) -> Cost;

    /// Flat charge for passing through a vertex.
    fn node_cost(&self, id: VertexId, vertex: &Vertex) -> Cost;

    /// Cost of leaving `from` along `edge`.
    fn edge_cost(&self, graph: &RoutingGraph, from: VertexId, edge: EdgeId) -> EdgeCost {
        let e = graph.edge(edge);
        let way = self.way_cost(e.way, graph.way(e.way));
        let node = self.node_cost(from, graph.vertex(from));
        EdgeCost { way, node, length_m: e.length_m, total: node + way * e.length_m }
    }
}

// ── CostModel ─────────────────────────────────────────────────────────────────

/// Walkability costs under one set of preferences.
///
/// Stateless apart from the borrowed preferences: every method is a pure
/// function of its arguments.
#[derive(Copy, Clone, Debug)]
pub struct CostModel<'p> {
    prefs: &'p Preferences,
}

impl<'p> CostModel<'p> {
    pub fn new(prefs: &'p Preferences) -> Self {
        Self { prefs }
    }

    pub fn preferences(&self) -> &'p Preferences {
        self.prefs
    }

    /// Per-metre weight of a way.  The first matching rule wins:
    ///
    /// 1. illegal access is impassable;
    /// 2. roads are weighted by class, then by whether a sidewalk exists;
    /// 3. paths by their character;
    /// 4. `highway=road` gets a neutral weight;
    /// 5. anything else is impassable.
    pub fn way_cost(&self, way: &WayProfile) -> Cost {
        let prefs = self.prefs;
        if !access_is_legal(way.access, prefs) {
            return Cost::IMPASSABLE;
        }

        if let Some(base) = road_base_weight(way, prefs) {
            return Cost::new(self.road_cost(way, base));
        }
        if let Some(weight) = path_weight(way, prefs) {
            return Cost::new(weight * general_factor(way, prefs));
        }
        if way.highway == Highway::Incomplete {
            log::warn!("routing along unclassified highway=road");
            return Cost::new(1.0);
        }
        Cost::IMPASSABLE
    }

    fn road_cost(&self, way: &WayProfile, base: f64) -> f64 {
        let prefs = self.prefs;
        let (has_sidewalk, guessed) = match way.sidewalk {
            Some(Sidewalk::No) => (false, false),
            Some(_) => (true, false),
            None => (way.highway.usually_has_sidewalk(), true),
        };

        if !has_sidewalk {
            if way.foot_use_sidepath {
                return f64::INFINITY;
            }
            let mut weight = base * road_factor(way) * general_factor(way, prefs);
            if prefs.enabled(OptionName::AllowWalkingOnRoads) {
                weight *= 0.8;
            }
            return weight;
        }

        let mut pavement = if guessed {
            GUESSED_SIDEWALK
        } else {
            path_weight(&PAVEMENT, prefs).unwrap_or(1.0)
        };
        if way.maxspeed_mph.is_some_and(|mph| mph >= FAST_ROAD_MPH) {
            pavement *= 1.1;
        }
        pavement
    }

    pub fn node_cost(&self, node: &NodeProfile) -> Cost {
        node_cost(node, self.prefs)
    }
}

impl CostFunction for CostModel<'_> {
    fn way_cost(&self, _id: WayId, way: &WayRecord) -> Cost {
        CostModel::way_cost(self, &way.profile)
    }

    fn node_cost(&self, _id: VertexId, vertex: &Vertex) -> Cost {
        CostModel::node_cost(self, &vertex.profile)
    }
}
