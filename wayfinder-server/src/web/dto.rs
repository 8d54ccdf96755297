//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::mapview;
use crate::planner::{Itinerary, Segment};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin location name (exact or lenient)
    pub origin: String,

    /// Destination location name (exact or lenient)
    pub destination: String,

    /// Whether fast lanes may be used
    #[serde(default)]
    pub include_fast_lanes: bool,
}

/// Request to search locations by name.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Search query
    pub q: String,

    /// Maximum number of results (defaults to 10, capped at 50)
    pub limit: Option<usize>,
}

/// Response listing known locations.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    /// Sorted display names
    pub locations: Vec<String>,
}

/// One leg of a planned route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Where the leg starts
    pub from: String,

    /// Where the leg ends
    pub to: String,

    /// Destination coordinates
    pub to_x: i64,
    pub to_z: i64,

    /// Destination owner, when worth calling out
    pub to_owner: Option<String>,

    /// Travel mode for this leg
    pub mode: String,

    /// Distance covered, in world units
    pub distance: f64,

    /// Time spent on this leg, in seconds
    pub elapsed_seconds: f64,

    /// Time spent on this leg, as mm:ss
    pub elapsed: String,

    /// Rail route name, for rail legs on a named route
    pub route_name: Option<String>,
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    /// Whether a route exists
    pub found: bool,

    /// Resolved origin name
    pub origin: String,

    /// Resolved destination name
    pub destination: String,

    /// Legs of the route, in travel order
    pub segments: Vec<SegmentResult>,

    /// Total travel time, in seconds
    pub total_time_seconds: f64,

    /// Total travel time, as mm:ss
    pub total_time: String,

    /// Total distance, in world units
    pub total_distance: f64,

    /// Names of rail routes traversed, in travel order
    pub route_names: Vec<String>,

    /// Map-viewer URL highlighting the traversed rail routes
    pub map_url: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl SegmentResult {
    /// Create from a domain Segment.
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            from: segment.from_name.clone(),
            to: segment.to_name.clone(),
            to_x: segment.to_point.x,
            to_z: segment.to_point.z,
            to_owner: segment.to_owner.clone(),
            mode: segment.mode.label().to_string(),
            distance: segment.distance,
            elapsed_seconds: segment.elapsed.seconds(),
            elapsed: segment.elapsed.to_string(),
            route_name: segment.route_name.clone(),
        }
    }
}

impl PlanRouteResponse {
    /// Create from a reconstructed itinerary.
    pub fn from_itinerary(origin: &str, destination: &str, itinerary: &Itinerary) -> Self {
        Self {
            found: true,
            origin: origin.to_string(),
            destination: destination.to_string(),
            segments: itinerary
                .segments
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            total_time_seconds: itinerary.total_time.seconds(),
            total_time: itinerary.total_time.to_string(),
            total_distance: itinerary.total_distance,
            route_names: itinerary.route_names.clone(),
            map_url: mapview::route_url(&itinerary.route_names),
        }
    }

    /// The response for a pair of locations with no connecting path.
    pub fn no_path(origin: &str, destination: &str) -> Self {
        Self {
            found: false,
            origin: origin.to_string(),
            destination: destination.to_string(),
            segments: Vec::new(),
            total_time_seconds: 0.0,
            total_time: "00:00".to_string(),
            total_distance: 0.0,
            route_names: Vec::new(),
            map_url: None,
        }
    }
}
