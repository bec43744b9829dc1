//! Polygon region entity and ring geometry.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::GeometryError;
use super::point::Point;

/// Unique identifier for a registered polygon region.
///
/// Assigned by the caller when the region is defined (typically by a
/// provisioning feed) and never changed afterwards. Serializes as a plain
/// integer.
///
/// # Examples
///
/// ```
/// use beaconfix::geometry::PolygonId;
///
/// let id = PolygonId::new(42);
/// assert_eq!(format!("{}", id), "42");
/// assert_eq!(id.value(), 42);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PolygonId(u64);

impl PolygonId {
    /// Create a new polygon identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PolygonId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable geofence region: an ordered vertex ring plus a
/// caller-assigned identifier and optional human-readable name.
///
/// Vertex order defines the ring (consecutive vertices are edges, last
/// connects back to first); winding direction does not matter for any of
/// the ring operations. Construction performs no validation — a malformed
/// ring (fewer than three vertices, non-finite coordinates) surfaces as a
/// [`GeometryError`] from the operation that touches it, so registry
/// data-integrity bugs are reported where they matter instead of being
/// silently skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    id: PolygonId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from an identifier and vertex ring.
    pub fn new(id: PolygonId, vertices: Vec<Point>) -> Self {
        Self {
            id,
            name: None,
            vertices,
        }
    }

    /// Create a named polygon (provisioning feeds usually carry a label).
    pub fn named(id: PolygonId, name: &str, vertices: Vec<Point>) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            vertices,
        }
    }

    /// Get the region identifier.
    pub fn id(&self) -> PolygonId {
        self.id
    }

    /// Get the human-readable label, if one was provided.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the vertex ring.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Validate the ring before running geometry over it.
    fn check_ring(&self) -> Result<(), GeometryError> {
        if self.vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: self.vertices.len(),
            });
        }
        for (index, vertex) in self.vertices.iter().enumerate() {
            if !vertex.is_finite() {
                return Err(GeometryError::NonFiniteVertex { index });
            }
        }
        Ok(())
    }

    /// Test whether `point` lies inside the ring.
    ///
    /// Crossing-number (ray casting) algorithm: a horizontal ray from the
    /// point toward +x is tested against every edge, and an odd number of
    /// crossings means inside. Points exactly on an edge follow the
    /// algorithm's half-open convention and may land on either side; fences
    /// should not be drawn through beacon survey points.
    pub fn contains(&self, point: Point) -> Result<bool, GeometryError> {
        self.check_ring()?;

        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let Point { x: xi, y: yi } = self.vertices[i];
            let Point { x: xj, y: yj } = self.vertices[j];
            if ((yi > point.y) != (yj > point.y))
                && (point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi)
            {
                inside = !inside;
            }
            j = i;
        }
        Ok(inside)
    }

    /// Enclosed area of the ring (shoelace formula, absolute value).
    ///
    /// A collinear ring legally reports zero area; it simply never wins a
    /// smallest-area tie-break during region matching.
    pub fn area(&self) -> Result<f64, GeometryError> {
        self.check_ring()?;

        let n = self.vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.vertices[i].x * self.vertices[j].y;
            area -= self.vertices[j].x * self.vertices[i].y;
        }
        Ok((area / 2.0).abs())
    }

    /// Vertex-average centroid of the ring.
    ///
    /// The ring is treated as a point set here, which is cheap and stable
    /// for the convex-ish fences this system works with.
    pub fn centroid(&self) -> Result<Point, GeometryError> {
        self.check_ring()?;

        let n = self.vertices.len() as f64;
        let sum_x: f64 = self.vertices.iter().map(|v| v.x).sum();
        let sum_y: f64 = self.vertices.iter().map(|v| v.y).sum();
        Ok(Point::new(sum_x / n, sum_y / n))
    }

    /// Minimum distance from `point` to any edge segment of the ring.
    ///
    /// Zero for points on the boundary; does not distinguish inside from
    /// outside (use [`Polygon::contains`] for that).
    pub fn nearest_distance(&self, point: Point) -> Result<f64, GeometryError> {
        self.check_ring()?;

        let n = self.vertices.len();
        let mut best = f64::INFINITY;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let d = segment_distance(point, a, b);
            if d < best {
                best = d;
            }
        }
        Ok(best)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} (region {})", name, self.id),
            None => write!(f, "region {}", self.id),
        }
    }
}

/// Distance from `p` to the segment `a`–`b`.
///
/// Projects `p` onto the segment's supporting line and clamps the
/// projection parameter to [0, 1]; degenerate segments fall back to
/// point distance.
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    let projected = Point::new(a.x + t * abx, a.y + t * aby);
    p.distance_to(projected)
}
