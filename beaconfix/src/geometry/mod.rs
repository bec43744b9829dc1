//! Planar geometry primitives for geofence evaluation.
//!
//! Everything the registry and resolver need to reason about regions:
//! [`Point`] coordinates, [`Polygon`] vertex rings with crossing-number
//! containment, shoelace area, centroid and nearest-edge distance, and the
//! [`GeometryError`] cases for malformed rings.
//!
//! # Design
//!
//! Ring operations are fallible on purpose. A polygon with two vertices or
//! a NaN coordinate is a data-integrity bug in the provisioning feed, and
//! the resolver surfaces it as an error instead of quietly treating the
//! region as empty.
//!
//! # Usage
//!
//! ```
//! use beaconfix::geometry::{Point, Polygon, PolygonId};
//!
//! let square = Polygon::new(
//!     PolygonId::new(1),
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(1.0, 0.0),
//!         Point::new(1.0, 1.0),
//!         Point::new(0.0, 1.0),
//!     ],
//! );
//!
//! assert_eq!(square.contains(Point::new(0.5, 0.5)), Ok(true));
//! assert_eq!(square.contains(Point::new(2.0, 2.0)), Ok(false));
//! assert_eq!(square.area(), Ok(1.0));
//! ```

mod error;
mod point;
mod polygon;

pub use error::GeometryError;
pub use point::Point;
pub use polygon::{Polygon, PolygonId};
