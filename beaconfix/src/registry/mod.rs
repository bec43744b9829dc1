//! Geofence region registry.
//!
//! The [`PolygonRegistry`] is the authoritative, queryable set of known
//! regions. Provisioning code adds and removes polygons (singly, in
//! batches, or via atomic wholesale [`PolygonRegistry::populate`]); any
//! number of resolvers concurrently read snapshots and perform id lookups.
//!
//! Construct one instance at startup and share it explicitly via `Arc` —
//! there is no hidden global.
//!
//! # Usage
//!
//! ```
//! use beaconfix::geometry::{Point, Polygon, PolygonId};
//! use beaconfix::registry::PolygonRegistry;
//!
//! let registry = PolygonRegistry::new();
//! registry.insert(Polygon::new(
//!     PolygonId::new(1),
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(10.0, 0.0),
//!         Point::new(10.0, 8.0),
//!         Point::new(0.0, 8.0),
//!     ],
//! ));
//!
//! assert!(registry.get(PolygonId::new(1)).is_some());
//! assert!(registry.get(PolygonId::new(2)).is_none());
//! assert_eq!(registry.all().len(), 1);
//! ```

mod store;

pub use store::PolygonRegistry;
