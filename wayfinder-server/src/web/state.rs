//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::RouteEngine;
use crate::names::LocationDirectory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The route-planning engine.
    pub engine: Arc<RouteEngine>,

    /// Sorted location directory for selection and fuzzy resolution.
    pub directory: Arc<LocationDirectory>,
}

impl AppState {
    /// Create the app state, building the location directory from the
    /// engine's base graph. The name set does not depend on the
    /// fast-lane flag, so either graph would do.
    pub fn new(engine: RouteEngine) -> Self {
        let directory = LocationDirectory::from_graph(&engine.graph(false));
        Self {
            engine: Arc::new(engine),
            directory: Arc::new(directory),
        }
    }
}
