//! Planar coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2-D planar coordinate.
///
/// Coordinates are frame-agnostic: site surveys typically use meters in a
/// local floor-plan frame, while small geographic fences can use raw
/// degrees. Every geometry routine operates in whatever frame the caller
/// supplied; mixing frames between beacons and fences is a caller bug the
/// library cannot detect.
///
/// Serializes as a two-element array (`[x, y]`), matching the common
/// fixture and feed formats for vertex rings.
///
/// # Examples
///
/// ```
/// use beaconfix::geometry::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance_to(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    /// Horizontal coordinate (east in a site frame).
    pub x: f64,
    /// Vertical coordinate (north in a site frame).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
