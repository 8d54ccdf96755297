//! Distance metrics over world coordinates.
//!
//! Two metrics feed edge weights during graph construction: straight-line
//! (euclidean) distance for movement that cuts across the world, and grid
//! (manhattan) distance for movement along built track. Both are pure and
//! total; values from different metrics are never compared directly.

use crate::domain::Point;

/// Straight-line distance between two points.
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dz = (a.z - b.z) as f64;
    dx.hypot(dz)
}

/// Rectilinear (grid) distance between two points.
pub fn manhattan(a: Point, b: Point) -> f64 {
    ((a.x - b.x).abs() + (a.z - b.z).abs()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_known_values() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(0, 0), Point::new(0, 40)), 40.0);
        assert_eq!(euclidean(Point::new(30, 0), Point::new(0, 40)), 50.0);
    }

    #[test]
    fn manhattan_known_values() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7.0);
        assert_eq!(manhattan(Point::new(-2, -3), Point::new(2, 3)), 10.0);
    }

    #[test]
    fn zero_distance_to_self() {
        let p = Point::new(17, -42);
        assert_eq!(euclidean(p, p), 0.0);
        assert_eq!(manhattan(p, p), 0.0);
    }
}
