//! beaconfix - Beacon-based indoor location resolution
//!
//! This library estimates where a mobile device is from the signal
//! transmissions it hears, then names the mapped region (geofence) that
//! contains or neighbours the estimate.
//!
//! # High-Level API
//!
//! Share a [`registry::PolygonRegistry`] and a
//! [`beacon::BeaconDirectory`] with a [`resolver::LocationResolver`],
//! then feed it transmissions:
//!
//! ```
//! use std::sync::Arc;
//! use beaconfix::beacon::{Beacon, BeaconDirectory, Transmission};
//! use beaconfix::geometry::{Point, Polygon, PolygonId};
//! use beaconfix::registry::PolygonRegistry;
//! use beaconfix::resolver::LocationResolver;
//!
//! let registry = Arc::new(PolygonRegistry::new());
//! registry.insert(Polygon::named(
//!     PolygonId::new(1),
//!     "lobby",
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(4.0, 0.0),
//!         Point::new(4.0, 4.0),
//!         Point::new(0.0, 4.0),
//!     ],
//! ));
//!
//! let directory = Arc::new(BeaconDirectory::new());
//! directory.insert(Beacon::new("b-101", Point::new(2.0, 2.0)));
//!
//! let resolver = LocationResolver::new(registry, directory);
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let location = runtime
//!     .block_on(resolver.resolve(vec![Transmission::new("b-101", 0.8)]))
//!     .unwrap();
//!
//! assert_eq!(location.region_id, Some(PolygonId::new(1)));
//! ```

pub mod beacon;
pub mod geometry;
pub mod logging;
pub mod registry;
pub mod resolver;

/// Version of the beaconfix library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
