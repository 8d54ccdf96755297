//! Row records and the normalized dataset.

use serde::Deserialize;

use crate::domain::{Location, Point};

/// One row of the world-map sheet.
///
/// A location may appear on several rows, once per route (`Path`) it is an
/// endpoint of. Owner, kind, and path columns may be blank.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRow {
    /// Location name.
    #[serde(rename = "Location")]
    pub name: String,

    /// East-west coordinate.
    #[serde(rename = "X")]
    pub x: i64,

    /// North-south coordinate.
    #[serde(rename = "Z")]
    pub z: i64,

    /// Owner label, blank for unowned land.
    #[serde(rename = "Owner", default)]
    pub owner: String,

    /// Free-text kind tag.
    #[serde(rename = "Type", default)]
    pub kind: String,

    /// Route this row is an endpoint of, blank if none.
    #[serde(rename = "Path", default)]
    pub path: String,
}

impl LocationRow {
    /// The row's coordinate.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.z)
    }
}

/// Rows sharing a route name, in row order.
///
/// Only groupings with exactly two members become edges; the graph builder
/// makes that call, the dataset keeps whatever the sheet said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGrouping {
    /// The route's name.
    pub name: String,
    /// Member endpoints, in the order their rows appeared.
    pub members: Vec<Point>,
}

/// The normalized dataset: location records plus route groupings.
///
/// Locations are kept in row order and may repeat a name (one row per
/// route membership); the graph builder deduplicates first-seen-wins.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Location records, in row order.
    pub locations: Vec<Location>,
    /// Route groupings, in order of first appearance.
    pub routes: Vec<RouteGrouping>,
}

impl Dataset {
    /// Assemble a dataset from parsed rows.
    ///
    /// Every row contributes a location record. Rows with a non-blank
    /// `Path` are additionally collected into route groupings, keyed by
    /// path name, preserving first-appearance order.
    pub fn from_rows(rows: Vec<LocationRow>) -> Self {
        use std::collections::HashMap;

        let mut locations = Vec::with_capacity(rows.len());
        let mut routes: Vec<RouteGrouping> = Vec::new();
        let mut route_index: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let point = row.point();
            locations.push(Location::new(row.name, point, row.owner, row.kind));

            if row.path.is_empty() {
                continue;
            }
            match route_index.get(&row.path) {
                Some(&i) => routes[i].members.push(point),
                None => {
                    route_index.insert(row.path.clone(), routes.len());
                    routes.push(RouteGrouping {
                        name: row.path,
                        members: vec![point],
                    });
                }
            }
        }

        Self { locations, routes }
    }
}
