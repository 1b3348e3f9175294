//! Path search trait and default A* implementation.
//!
//! # Pluggability
//!
//! The calculator searches via the [`Router`] trait, so applications can swap
//! in custom implementations (bidirectional search, contraction hierarchies)
//! without touching cost or assembly code.
//!
//! # Cost units
//!
//! Search costs are the unitless [`Cost`](fp_cost::Cost) values of the cost
//! model: metres scaled by walkability weights, plus flat vertex charges.
//! The heuristic is the planar distance in degrees, which is tiny next to any
//! real edge cost and therefore only breaks ties toward the target.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use fp_core::{planar_heuristic, GeoPoint, VertexId};
use fp_cost::CostFunction;
use fp_graph::RoutingGraph;

use crate::observer::{EdgeCostRecord, SearchObserver, SearchStats};
use crate::{RoutingError, RoutingResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve requests on
/// several threads.
pub trait Router: Send + Sync {
    /// Minimum-cost vertex sequence from `from` to `to`, both inclusive.
    ///
    /// `from == to` yields `[from]`.  Every edge priced is reported to
    /// `observer`.
    fn route(
        &self,
        graph: &RoutingGraph,
        costs: &dyn CostFunction,
        from: VertexId,
        to: VertexId,
        observer: &mut dyn SearchObserver,
    ) -> RoutingResult<Vec<VertexId>>;
}

// ── Cancellation ──────────────────────────────────────────────────────────────

/// Shared flag a caller sets to stop a running search.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the undirected CSR graph.
///
/// The open set is a binary heap keyed on `f = g + h`; equal keys pop in
/// insertion order, so results are deterministic.  Impassable edges are
/// priced (and observed) but never enqueued.
#[derive(Clone, Debug, Default)]
pub struct AStarRouter {
    cancel: Option<CancelFlag>,
}

impl AStarRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `flag` before every expansion and stop with
    /// [`RoutingError::Cancelled`] once it is set.
    pub fn with_cancel(flag: CancelFlag) -> Self {
        Self { cancel: Some(flag) }
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

impl Router for AStarRouter {
    fn route(
        &self,
        graph: &RoutingGraph,
        costs: &dyn CostFunction,
        from: VertexId,
        to: VertexId,
        observer: &mut dyn SearchObserver,
    ) -> RoutingResult<Vec<VertexId>> {
        graph.try_vertex(from)?;
        graph.try_vertex(to)?;
        observer.on_search_start(from, to);

        let mut stats = SearchStats::default();
        let result = self.astar(graph, costs, from, to, observer, &mut stats);
        stats.found = result.is_ok();
        log::debug!(
            "A* {from} -> {to}: {} expanded, {} edges priced, found = {}",
            stats.expanded,
            stats.evaluated,
            stats.found,
        );
        observer.on_search_end(&stats);
        result
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Open-set entry.  Ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// `f`, then the lowest sequence number.
struct OpenEntry {
    f:      f64,
    seq:    u64,
    vertex: VertexId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl AStarRouter {
    fn astar(
        &self,
        graph: &RoutingGraph,
        costs: &dyn CostFunction,
        from: VertexId,
        to: VertexId,
        observer: &mut dyn SearchObserver,
        stats: &mut SearchStats,
    ) -> RoutingResult<Vec<VertexId>> {
        if from == to {
            return Ok(vec![from]);
        }

        let n = graph.vertex_count();
        let target: GeoPoint = graph.position(to);
        let h = |v: VertexId| planar_heuristic(graph.position(v), target);

        // g[v] = best known cost to reach v.
        let mut g = vec![f64::INFINITY; n];
        // pred[v] = vertex v was reached from; INVALID until reached.
        let mut pred = vec![VertexId::INVALID; n];
        let mut closed = vec![false; n];

        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;
        g[from.index()] = 0.0;
        heap.push(OpenEntry { f: h(from), seq, vertex: from });

        while let Some(OpenEntry { vertex, .. }) = heap.pop() {
            if self.cancelled() {
                return Err(RoutingError::Cancelled);
            }
            if closed[vertex.index()] {
                continue;
            }
            if vertex == to {
                return Ok(reconstruct(&pred, from, to));
            }
            closed[vertex.index()] = true;
            stats.expanded += 1;

            let g_here = g[vertex.index()];
            log::trace!("expand {vertex} g = {g_here:.3}");
            observer.on_vertex_expanded(vertex, g_here);

            for (next, edge) in graph.neighbours(vertex) {
                if closed[next.index()] {
                    continue;
                }
                let cost = costs.edge_cost(graph, vertex, edge);
                stats.evaluated += 1;

                let way = graph.edge(edge).way;
                observer.on_edge_evaluated(&EdgeCostRecord {
                    from:       vertex,
                    to:         next,
                    from_pos:   graph.position(vertex),
                    to_pos:     graph.position(next),
                    way,
                    way_osm_id: graph.way(way).osm_id,
                    length_m:   cost.length_m,
                    way_cost:   cost.way,
                    node_cost:  cost.node,
                    total_cost: cost.total,
                });

                if cost.total.is_impassable() {
                    continue;
                }
                let tentative = g_here + cost.total.value();
                if tentative < g[next.index()] {
                    g[next.index()] = tentative;
                    pred[next.index()] = vertex;
                    seq += 1;
                    heap.push(OpenEntry { f: tentative + h(next), seq, vertex: next });
                }
            }
        }

        Err(RoutingError::NoRoute { from, to })
    }
}

fn reconstruct(pred: &[VertexId], from: VertexId, to: VertexId) -> Vec<VertexId> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = pred[cur.index()];
        path.push(cur);
    }
    path.reverse();
    path
}
