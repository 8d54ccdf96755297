//! Itinerary reconstruction from a search trace.
//!
//! Walks consecutive hop pairs and emits one segment per pair, covering
//! the whole trace. Segment distance is derived by reversing the mode's
//! speed model against the elapsed time, which reproduces the geometric
//! distance used when the edge was built rather than recomputing it.

use crate::domain::{Point, TransportMode, TravelTime, owner_is_notable};
use crate::graph::WorldGraph;

use super::search::SearchTrace;

/// One leg of a reconstructed itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Display name of the segment's start.
    pub from_name: String,
    /// Display name of the segment's end.
    pub to_name: String,
    /// Coordinate of the segment's end.
    pub to_point: Point,
    /// Owner of the destination, when worth calling out.
    pub to_owner: Option<String>,
    /// Mode travelled.
    pub mode: TransportMode,
    /// Distance covered, in world units.
    pub distance: f64,
    /// Time spent on this segment.
    pub elapsed: TravelTime,
    /// Rail route name, for rail segments with a registered route.
    pub route_name: Option<String>,
}

/// A complete reconstructed route.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    /// Travel segments in order.
    pub segments: Vec<Segment>,
    /// Total travel time; equals the trace's final cumulative time.
    pub total_time: TravelTime,
    /// Total distance across all segments.
    pub total_distance: f64,
    /// Names of rail routes traversed, in travel order.
    pub route_names: Vec<String>,
}

impl Itinerary {
    /// An itinerary with no travel at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reconstruct an itinerary from a completed search trace.
    ///
    /// A trace with fewer than two hops (origin equals destination)
    /// produces an empty itinerary with zero totals.
    pub fn from_trace(trace: &SearchTrace, graph: &WorldGraph) -> Self {
        let hops = trace.hops();
        if hops.len() < 2 {
            return Self::empty();
        }

        let mut segments = Vec::with_capacity(hops.len() - 1);
        let mut total_distance = 0.0;
        let mut route_names = Vec::new();

        for pair in hops.windows(2) {
            let (prev, current) = (&pair[0], &pair[1]);
            // Every non-origin hop records its arrival mode.
            let Some(mode) = current.arrival_mode else {
                continue;
            };

            let elapsed = current.cumulative - prev.cumulative;
            let distance = elapsed.seconds() * mode.speed();
            total_distance += distance;

            let from_name = display_name(graph, prev.point);
            let to_name = display_name(graph, current.point);
            let to_owner = graph
                .owner_of(&to_name)
                .filter(|owner| owner_is_notable(owner, &to_name))
                .map(str::to_string);

            let route_name = match mode {
                TransportMode::Rail => graph
                    .route_name(prev.point, current.point)
                    .map(str::to_string),
                _ => None,
            };
            if let Some(name) = &route_name {
                route_names.push(name.clone());
            }

            segments.push(Segment {
                from_name,
                to_name,
                to_point: current.point,
                to_owner,
                mode,
                distance,
                elapsed,
                route_name,
            });
        }

        Self {
            segments,
            total_time: trace.total_time(),
            total_distance,
            route_names,
        }
    }
}

/// A point's display name, falling back to its coordinates.
fn display_name(graph: &WorldGraph, point: Point) -> String {
    graph
        .name_of(point)
        .map(str::to_string)
        .unwrap_or_else(|| point.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, RouteGrouping};
    use crate::domain::Location;
    use crate::planner::shortest_path;

    fn location(name: &str, x: i64, z: i64, owner: &str) -> Location {
        Location::new(
            name.to_string(),
            Point::new(x, z),
            owner.to_string(),
            String::new(),
        )
    }

    fn rail_chain() -> (WorldGraph, Point, Point, Point) {
        let dataset = Dataset {
            locations: vec![
                location("Home", 0, 0, ""),
                location("Junction", 100, 0, "Public Land"),
                location("Terminus", 200, 0, "Alex"),
            ],
            routes: vec![
                RouteGrouping {
                    name: "West Line".to_string(),
                    members: vec![Point::new(0, 0), Point::new(100, 0)],
                },
                RouteGrouping {
                    name: "East Line".to_string(),
                    members: vec![Point::new(100, 0), Point::new(200, 0)],
                },
            ],
        };
        let graph = WorldGraph::build(&dataset, false);
        (
            graph,
            Point::new(0, 0),
            Point::new(100, 0),
            Point::new(200, 0),
        )
    }

    #[test]
    fn one_segment_per_hop_pair_covers_the_full_trace() {
        let (graph, home, _, terminus) = rail_chain();

        // 3-hop (odd-length) trace: both segments must survive, including
        // the final one.
        let trace = shortest_path(&graph, home, terminus).unwrap();
        assert_eq!(trace.hops().len(), 3);

        let itinerary = Itinerary::from_trace(&trace, &graph);
        assert_eq!(itinerary.segments.len(), 2);
        assert_eq!(itinerary.segments[0].to_name, "Junction");
        assert_eq!(itinerary.segments[1].to_name, "Terminus");
    }

    #[test]
    fn even_length_trace_also_fully_covered() {
        let (graph, home, junction, _) = rail_chain();

        let trace = shortest_path(&graph, home, junction).unwrap();
        assert_eq!(trace.hops().len(), 2);

        let itinerary = Itinerary::from_trace(&trace, &graph);
        assert_eq!(itinerary.segments.len(), 1);
    }

    #[test]
    fn distances_reproduce_geometry_and_sum_to_total() {
        let (graph, home, _, terminus) = rail_chain();
        let trace = shortest_path(&graph, home, terminus).unwrap();
        let itinerary = Itinerary::from_trace(&trace, &graph);

        // Each rail segment: 12.5 s at 8 units/sec reproduces the
        // 100-unit manhattan distance.
        for segment in &itinerary.segments {
            assert_eq!(segment.distance, 100.0);
            assert_eq!(segment.elapsed.seconds(), 12.5);
        }

        let distance_sum: f64 = itinerary.segments.iter().map(|s| s.distance).sum();
        assert_eq!(distance_sum, itinerary.total_distance);

        let elapsed_sum: f64 = itinerary.segments.iter().map(|s| s.elapsed.seconds()).sum();
        assert_eq!(elapsed_sum, itinerary.total_time.seconds());
        assert_eq!(itinerary.total_time, trace.total_time());
    }

    #[test]
    fn rail_segments_carry_route_names_in_travel_order() {
        let (graph, home, _, terminus) = rail_chain();
        let trace = shortest_path(&graph, home, terminus).unwrap();
        let itinerary = Itinerary::from_trace(&trace, &graph);

        assert_eq!(itinerary.segments[0].route_name.as_deref(), Some("West Line"));
        assert_eq!(itinerary.segments[1].route_name.as_deref(), Some("East Line"));
        assert_eq!(itinerary.route_names, vec!["West Line", "East Line"]);
    }

    #[test]
    fn walking_segments_carry_no_route_name() {
        let dataset = Dataset {
            locations: vec![location("A", 0, 0, ""), location("B", 0, 30, "")],
            routes: vec![],
        };
        let graph = WorldGraph::build(&dataset, false);
        let trace = shortest_path(&graph, Point::new(0, 0), Point::new(0, 30)).unwrap();
        let itinerary = Itinerary::from_trace(&trace, &graph);

        assert_eq!(itinerary.segments.len(), 1);
        assert_eq!(itinerary.segments[0].mode, TransportMode::Walk);
        assert_eq!(itinerary.segments[0].route_name, None);
        assert!(itinerary.route_names.is_empty());
        // 10 s of walking at 3 units/sec reproduces the 30-unit line.
        assert_eq!(itinerary.segments[0].distance, 30.0);
    }

    #[test]
    fn owner_annotation_follows_notability_rules() {
        let (graph, home, _, terminus) = rail_chain();
        let trace = shortest_path(&graph, home, terminus).unwrap();
        let itinerary = Itinerary::from_trace(&trace, &graph);

        // Public Land is never called out; a named owner is.
        assert_eq!(itinerary.segments[0].to_owner, None);
        assert_eq!(itinerary.segments[1].to_owner.as_deref(), Some("Alex"));
    }

    #[test]
    fn trivial_trace_yields_empty_itinerary() {
        let (graph, home, _, _) = rail_chain();
        let trace = shortest_path(&graph, home, home).unwrap();
        let itinerary = Itinerary::from_trace(&trace, &graph);

        assert!(itinerary.segments.is_empty());
        assert_eq!(itinerary.total_time, TravelTime::ZERO);
        assert_eq!(itinerary.total_distance, 0.0);
        assert!(itinerary.route_names.is_empty());
    }

    #[test]
    fn empty_trace_yields_empty_itinerary() {
        let (graph, _, _, _) = rail_chain();
        let itinerary = Itinerary::from_trace(&SearchTrace::default(), &graph);
        assert!(itinerary.segments.is_empty());
        assert_eq!(itinerary.total_time, TravelTime::ZERO);
    }
}
