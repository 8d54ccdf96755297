//! Query boundary: name resolution, graph caching, route planning.
//!
//! The graph's edge set depends on the fast-lane flag, so built graphs
//! are cached per flag value and shared as immutable `Arc`s; concurrent
//! queries may safely read one cached graph. Nothing here is fatal:
//! every failure condition is representable in the result type.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use tracing::debug;

use crate::dataset::Dataset;
use crate::graph::WorldGraph;
use crate::planner::{Itinerary, shortest_path};

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of cached graphs. One per fast-lane flag value
    /// suffices, but the cache is cheap to oversize.
    pub graph_cache_capacity: u64,

    /// Optional expiry for cached graphs. `None` keeps them for the
    /// lifetime of the engine, which is right while the dataset is
    /// loaded once at startup.
    pub graph_cache_ttl: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            graph_cache_capacity: 2,
            graph_cache_ttl: None,
        }
    }
}

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The queried name is not a known location. The engine requires
    /// exact names; fuzzy resolution is the caller's concern.
    #[error("unknown location: {0}")]
    UnknownLocation(String),
}

/// Outcome of a route query.
///
/// An unreachable destination is a normal result, not an error.
#[derive(Debug, Clone)]
pub enum RouteOutcome {
    /// A least-total-time route was found.
    Found(Itinerary),
    /// No path exists between the two locations.
    NoPath,
}

/// The route-planning engine over one loaded dataset.
pub struct RouteEngine {
    dataset: Dataset,
    graphs: Cache<bool, Arc<WorldGraph>>,
}

impl RouteEngine {
    /// Create an engine with default configuration.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_config(dataset, &EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(dataset: Dataset, config: &EngineConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.graph_cache_capacity);
        if let Some(ttl) = config.graph_cache_ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            dataset,
            graphs: builder.build(),
        }
    }

    /// The graph for a fast-lane flag value, building it on first use.
    pub fn graph(&self, include_fast_lanes: bool) -> Arc<WorldGraph> {
        self.graphs.get_with(include_fast_lanes, || {
            debug!(include_fast_lanes, "building world graph");
            Arc::new(WorldGraph::build(&self.dataset, include_fast_lanes))
        })
    }

    /// Plan the least-total-time route between two exactly-named
    /// locations.
    ///
    /// Identical origin and destination yield a trivial empty itinerary;
    /// callers wanting to reject that case should validate first.
    pub fn find_route(
        &self,
        origin: &str,
        destination: &str,
        include_fast_lanes: bool,
    ) -> Result<RouteOutcome, EngineError> {
        let graph = self.graph(include_fast_lanes);

        let from = graph
            .point_of(origin)
            .ok_or_else(|| EngineError::UnknownLocation(origin.to_string()))?;
        let to = graph
            .point_of(destination)
            .ok_or_else(|| EngineError::UnknownLocation(destination.to_string()))?;

        match shortest_path(&graph, from, to) {
            Some(trace) => Ok(RouteOutcome::Found(Itinerary::from_trace(&trace, &graph))),
            None => Ok(RouteOutcome::NoPath),
        }
    }
}
