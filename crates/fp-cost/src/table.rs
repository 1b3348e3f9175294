//! Per-request table of way costs.
//!
//! A search evaluates the same way once per edge it relaxes.  Tabulating the
//! cost of every way up front turns each of those into an index lookup.

use fp_core::{VertexId, WayId};
use fp_graph::{RoutingGraph, Vertex, WayRecord};

use crate::{Cost, CostFunction, CostModel};

/// Way costs for one graph under one cost model, indexed by `WayId`.
#[derive(Clone, Debug)]
pub struct WayCosts {
    costs: Vec<Cost>,
}

impl WayCosts {
    /// Evaluate every way in `graph`.  With the `parallel` feature the ways
    /// are spread over the rayon pool.
    pub fn compute(graph: &RoutingGraph, model: &CostModel<'_>) -> Self {
        let records: Vec<&WayRecord> = graph.ways().map(|(_, w)| w).collect();

        #[cfg(feature = "parallel")]
        let costs = {
            use rayon::prelude::*;
            records.par_iter().map(|w| model.way_cost(&w.profile)).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let costs = records.iter().map(|w| model.way_cost(&w.profile)).collect();

        Self { costs }
    }

    #[inline]
    pub fn get(&self, id: WayId) -> Cost {
        self.costs[id.index()]
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Number of ways nobody can walk under this model.
    pub fn impassable_count(&self) -> usize {
        self.costs.iter().filter(|c| c.is_impassable()).count()
    }
}

/// A [`CostModel`] reading way costs from a precomputed [`WayCosts`].
///
/// Equivalent to the bare model; only faster.
pub struct TabulatedCosts<'m> {
    model: CostModel<'m>,
    ways:  WayCosts,
}

impl<'m> TabulatedCosts<'m> {
    pub fn new(graph: &RoutingGraph, model: CostModel<'m>) -> Self {
        let ways = WayCosts::compute(graph, &model);
        Self { model, ways }
    }

    pub fn model(&self) -> &CostModel<'m> {
        &self.model
    }

    pub fn way_costs(&self) -> &WayCosts {
        &self.ways
    }
}

impl CostFunction for TabulatedCosts<'_> {
    #[inline]
    fn way_cost(&self, id: WayId, _way: &WayRecord) -> Cost {
        self.ways.get(id)
    }

    #[inline]
    fn node_cost(&self, _id: VertexId, vertex: &Vertex) -> Cost {
        self.model.node_cost(&vertex.profile)
    }
}
