//! Search observers for diagnostics and cost inspection.

use rustc_hash::FxHashMap;

use fp_core::{GeoPoint, VertexId, WayId};
use fp_cost::Cost;

/// One edge the search priced while expanding `from`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeCostRecord {
    pub from:       VertexId,
    pub to:         VertexId,
    pub from_pos:   GeoPoint,
    pub to_pos:     GeoPoint,
    pub way:        WayId,
    pub way_osm_id: i64,
    pub length_m:   f64,
    /// Per-metre way weight.
    pub way_cost:   Cost,
    /// Flat charge of `from`.
    pub node_cost:  Cost,
    /// Full traversal cost, `node_cost + way_cost × length_m`.
    pub total_cost: Cost,
}

impl EdgeCostRecord {
    /// The way's share of the traversal, `way_cost × length_m`.
    pub fn way_total(&self) -> Cost {
        self.way_cost * self.length_m
    }
}

/// Counters reported when a search finishes, successfully or not.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded:  usize,
    pub evaluated: usize,
    pub found:     bool,
}

/// Callbacks invoked by a [`Router`](crate::Router) during a search.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — counting impassable edges
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Blocked(usize);
///
/// impl SearchObserver for Blocked {
///     fn on_edge_evaluated(&mut self, record: &EdgeCostRecord) {
///         if record.total_cost.is_impassable() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called once before the first expansion.
    fn on_search_start(&mut self, _from: VertexId, _to: VertexId) {}

    /// Called when a vertex is taken off the open set; `g` is its settled cost.
    fn on_vertex_expanded(&mut self, _vertex: VertexId, _g: f64) {}

    /// Called for every edge priced, including impassable ones.
    fn on_edge_evaluated(&mut self, _record: &EdgeCostRecord) {}

    /// Called once when the search stops.
    fn on_search_end(&mut self, _stats: &SearchStats) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

// ── CostTrace ─────────────────────────────────────────────────────────────────

/// Aggregate over every evaluated edge of one way.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WayWeight {
    pub osm_id:       i64,
    /// Per-metre weight.
    pub weight:       Cost,
    /// Sum of `weight × length` over evaluated edges.
    pub total_weight: Cost,
}

/// Collects every priced edge, per segment and per way.
///
/// Useful for rendering cost overlays or explaining why a route avoided a
/// street.  Collection is per search; reuse across searches accumulates.
#[derive(Debug, Default)]
pub struct CostTrace {
    pub segments: Vec<EdgeCostRecord>,
    pub ways:     FxHashMap<WayId, WayWeight>,
    pub stats:    SearchStats,
}

impl CostTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records for segments leaving `from` toward `to`.
    pub fn segment(&self, from: VertexId, to: VertexId) -> Option<&EdgeCostRecord> {
        self.segments.iter().find(|r| r.from == from && r.to == to)
    }

    /// Ways ordered by descending total weight, impassable first.
    pub fn heaviest_ways(&self) -> Vec<(WayId, WayWeight)> {
        let mut ways: Vec<(WayId, WayWeight)> = self.ways.iter().map(|(k, v)| (*k, *v)).collect();
        ways.sort_by(|a, b| {
            b.1.total_weight
                .value()
                .total_cmp(&a.1.total_weight.value())
                .then(a.0.cmp(&b.0))
        });
        ways
    }
}

impl SearchObserver for CostTrace {
    fn on_edge_evaluated(&mut self, record: &EdgeCostRecord) {
        self.segments.push(*record);
        self.ways
            .entry(record.way)
            .and_modify(|w| {
                w.total_weight = w.total_weight + record.way_total();
            })
            .or_insert(WayWeight {
                osm_id:       record.way_osm_id,
                weight:       record.way_cost,
                total_weight: record.way_total(),
            });
    }

    fn on_search_end(&mut self, stats: &SearchStats) {
        self.stats = *stats;
    }
}
