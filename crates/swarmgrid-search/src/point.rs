//! Planar positions and waypoint lists.

use std::fmt;

use smallvec::SmallVec;

/// A position in meters with a heading in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// East offset.
    pub x: f64,
    /// North offset.
    pub y: f64,
    /// Heading, counter-clockwise from +x.
    pub theta: f64,
}

impl Point {
    /// A point at `(x, y)` with zero heading.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, theta: 0.0 }
    }

    /// Euclidean distance to `other`, ignoring heading.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The point `radius` meters from `self` in direction `angle`.
    pub fn offset_polar(&self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Ordered waypoints; almost always a single entry.
pub type Waypoints = SmallVec<[Point; 4]>;
