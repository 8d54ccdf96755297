//! World coordinate type.

use std::fmt;

/// A 2-D world coordinate on the horizontal plane.
///
/// Points identify graph nodes, so equality is exact: two points are the
/// same node iff both coordinates match. Coordinates are whole world units
/// (the source dataset records block positions).
///
/// # Examples
///
/// ```
/// use wayfinder_server::domain::Point;
///
/// let spawn = Point::new(0, 0);
/// let market = Point::new(30, 0);
///
/// assert_ne!(spawn, market);
/// assert_eq!(spawn, Point::new(0, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// East-west coordinate.
    pub x: i64,
    /// North-south coordinate.
    pub z: i64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({},{})", self.x, self.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.z)
    }
}
