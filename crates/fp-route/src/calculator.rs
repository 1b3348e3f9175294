//! The primary entry point: coordinates in, walking route out.

use fp_core::{GeoPoint, VertexId};
use fp_cost::{CostModel, TabulatedCosts};
use fp_graph::{GraphError, RoutingGraph};
use fp_prefs::Preferences;

use crate::{
    assemble_route, AStarRouter, CancelFlag, NoopObserver, RouteResult, Router, RoutingError,
    RoutingResult, SearchObserver,
};

/// Routes between coordinates on one graph under one set of preferences.
///
/// Holds no per-request state, so a single calculator can be shared between
/// threads.  Diagnostics go to the observer passed to
/// [`calculate_route_observed`](Self::calculate_route_observed).
pub struct RouteCalculator<'a> {
    graph:  &'a RoutingGraph,
    prefs:  &'a Preferences,
    router: Box<dyn Router + 'a>,
}

impl<'a> RouteCalculator<'a> {
    /// A calculator using [`AStarRouter`].
    pub fn new(graph: &'a RoutingGraph, prefs: &'a Preferences) -> Self {
        Self { graph, prefs, router: Box::new(AStarRouter::new()) }
    }

    /// Replace the search algorithm.
    pub fn with_router(mut self, router: impl Router + 'a) -> Self {
        self.router = Box::new(router);
        self
    }

    /// Search with an [`AStarRouter`] that stops once `flag` is set.
    pub fn with_cancel(self, flag: CancelFlag) -> Self {
        self.with_router(AStarRouter::with_cancel(flag))
    }

    pub fn graph(&self) -> &'a RoutingGraph {
        self.graph
    }

    pub fn preferences(&self) -> &'a Preferences {
        self.prefs
    }

    /// The cheapest walking route from `start` to `end`.
    ///
    /// Both points snap to their geodesically nearest vertex.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::GraphEmpty`] if the graph has no vertices.
    /// - [`RoutingError::NoRoute`] if every connection is impassable.
    /// - [`RoutingError::Cancelled`] if the router's cancel flag was set.
    pub fn calculate_route(&self, start: GeoPoint, end: GeoPoint) -> RoutingResult<RouteResult> {
        self.calculate_route_observed(start, end, &mut NoopObserver)
    }

    /// As [`calculate_route`](Self::calculate_route), reporting every search
    /// event to `observer`.
    pub fn calculate_route_observed(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        observer: &mut dyn SearchObserver,
    ) -> RoutingResult<RouteResult> {
        let from = self.snap(start)?;
        let to = self.snap(end)?;
        log::debug!("routing {start} -> {end} snapped to {from} -> {to}");

        let costs = TabulatedCosts::new(self.graph, CostModel::new(self.prefs));
        let vertices = self.router.route(self.graph, &costs, from, to, observer)?;
        assemble_route(self.graph, start, end, &vertices)
    }

    fn snap(&self, point: GeoPoint) -> RoutingResult<VertexId> {
        self.graph.nearest_vertex_indexed(point).map_err(|e| match e {
            GraphError::Empty => RoutingError::GraphEmpty,
            other => RoutingError::Graph(other),
        })
    }
}
