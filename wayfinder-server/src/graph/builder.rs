//! Multi-modal graph construction.
//!
//! Builds the weighted adjacency structure three layers at a time: rail
//! edges from named two-endpoint route groupings, an optional complete
//! ice-highway layer over tagged locations, and an unconditional complete
//! walking layer over every known location. Walking being universal, the
//! graph is never disconnected for locations in the dataset.
//!
//! Edge counts are quadratic in the number of locations, which is fine for
//! the map sizes this serves; see the search module for the resulting
//! complexity bound.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::dataset::Dataset;
use crate::domain::{Point, TransportMode, TravelTime};

/// A directed arc to a neighboring point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Destination point.
    pub to: Point,
    /// Travel time along this edge.
    pub travel_time: TravelTime,
    /// Mode of travel.
    pub mode: TransportMode,
}

/// The weighted multi-modal graph plus its lookup tables.
///
/// Immutable once built. The edge set depends on the fast-lane flag, so a
/// graph is built (or fetched from cache) per flag value, never mutated.
#[derive(Debug, Default)]
pub struct WorldGraph {
    adjacency: HashMap<Point, Vec<Edge>>,
    name_to_point: HashMap<String, Point>,
    point_to_name: HashMap<Point, String>,
    owners: HashMap<String, String>,
    route_names: HashMap<(Point, Point), String>,
}

impl WorldGraph {
    /// Build the graph from a dataset.
    ///
    /// Locations are deduplicated by name, first record wins. Route
    /// groupings without exactly two members and a non-empty name are
    /// skipped entirely; unmatched fragments are expected in the source
    /// and are not an error.
    pub fn build(dataset: &Dataset, include_fast_lanes: bool) -> Self {
        let mut graph = Self::default();

        // First-seen point per distinct coordinate, in row order. Dataset
        // rows repeat locations (one row per route membership), and two
        // names on one coordinate must not produce zero-weight edges.
        let mut points: Vec<Point> = Vec::new();
        let mut ice_highways: Vec<Point> = Vec::new();

        for location in &dataset.locations {
            if graph.name_to_point.contains_key(location.name()) {
                continue;
            }
            graph
                .name_to_point
                .insert(location.name().to_string(), location.point());
            if let Some(owner) = location.owner() {
                graph
                    .owners
                    .insert(location.name().to_string(), owner.to_string());
            }
            if let Entry::Vacant(entry) = graph.point_to_name.entry(location.point()) {
                entry.insert(location.name().to_string());
                points.push(location.point());
                if location.is_ice_highway() {
                    ice_highways.push(location.point());
                }
            }
        }

        for grouping in &dataset.routes {
            if grouping.name.is_empty() || grouping.members.len() != 2 {
                debug!(
                    route = %grouping.name,
                    members = grouping.members.len(),
                    "skipping route grouping without exactly two named members"
                );
                continue;
            }
            let (a, b) = (grouping.members[0], grouping.members[1]);
            graph.add_bidirectional(a, b, TransportMode::Rail);
            graph.route_names.insert((a, b), grouping.name.clone());
            graph.route_names.insert((b, a), grouping.name.clone());
        }

        if include_fast_lanes {
            for i in 0..ice_highways.len() {
                for j in (i + 1)..ice_highways.len() {
                    graph.add_bidirectional(
                        ice_highways[i],
                        ice_highways[j],
                        TransportMode::IceHighway,
                    );
                }
            }
        }

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                graph.add_bidirectional(points[i], points[j], TransportMode::Walk);
            }
        }

        debug!(
            locations = graph.name_to_point.len(),
            nodes = points.len(),
            ice_highways = ice_highways.len(),
            include_fast_lanes,
            "built world graph"
        );

        graph
    }

    fn add_bidirectional(&mut self, a: Point, b: Point, mode: TransportMode) {
        let travel_time = TravelTime::from_seconds(mode.travel_time(a, b));
        self.adjacency.entry(a).or_default().push(Edge {
            to: b,
            travel_time,
            mode,
        });
        self.adjacency.entry(b).or_default().push(Edge {
            to: a,
            travel_time,
            mode,
        });
    }

    /// Outgoing edges from a point.
    pub fn edges(&self, point: Point) -> &[Edge] {
        self.adjacency.get(&point).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve a location name to its point.
    pub fn point_of(&self, name: &str) -> Option<Point> {
        self.name_to_point.get(name).copied()
    }

    /// Resolve a point back to its display name.
    pub fn name_of(&self, point: Point) -> Option<&str> {
        self.point_to_name.get(&point).map(String::as_str)
    }

    /// The owner of a named location, if it has one.
    pub fn owner_of(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(String::as_str)
    }

    /// The route name for a directed rail hop, if one exists.
    pub fn route_name(&self, from: Point, to: Point) -> Option<&str> {
        self.route_names.get(&(from, to)).map(String::as_str)
    }

    /// All known location names with their owners.
    pub fn locations(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.name_to_point
            .keys()
            .map(|name| (name.as_str(), self.owner_of(name)))
    }

    /// Number of distinct location names.
    pub fn location_count(&self) -> usize {
        self.name_to_point.len()
    }
}
