//! Transport modes and their cost models.

use std::fmt;

use crate::distance;

use super::Point;

/// How a traveller moves between two points.
///
/// Each mode carries its own speed and distance metric. Rail follows built
/// track, so its cost uses rectilinear (manhattan) distance; ice highways
/// and walking cut straight across the world, so they use euclidean
/// distance.
///
/// # Examples
///
/// ```
/// use wayfinder_server::domain::TransportMode;
///
/// assert_eq!(TransportMode::Rail.speed(), 8.0);
/// assert_eq!(TransportMode::IceHighway.speed(), 72.0);
/// assert_eq!(TransportMode::Walk.speed(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    /// A pre-built rail line between two named endpoints.
    Rail,
    /// A high-speed lane, available only between tagged locations.
    IceHighway,
    /// On foot; always available between any two locations.
    Walk,
}

impl TransportMode {
    /// Travel speed in world units per second.
    pub fn speed(self) -> f64 {
        match self {
            TransportMode::Rail => 8.0,
            TransportMode::IceHighway => 72.0,
            TransportMode::Walk => 3.0,
        }
    }

    /// Distance between two points under this mode's metric.
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            TransportMode::Rail => distance::manhattan(a, b),
            TransportMode::IceHighway | TransportMode::Walk => distance::euclidean(a, b),
        }
    }

    /// Travel time in seconds between two points under this mode.
    pub fn travel_time(self, a: Point, b: Point) -> f64 {
        self.distance(a, b) / self.speed()
    }

    /// Human-readable mode name.
    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Rail => "Rail",
            TransportMode::IceHighway => "Ice Highway",
            TransportMode::Walk => "Walk",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
