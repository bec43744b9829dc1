//! Beacon-based location resolution.
//!
//! Turns a batch of beacon transmissions into a [`Location`] in two
//! stages: a weighted-average position estimate from the readings that
//! reference surveyed beacons, then a match against the polygon registry
//! to name the region the device is in (or nearest to).
//!
//! # Resolution Contract
//!
//! Every request ends in exactly one of two outcomes:
//!
//! - A [`Location`] carrying the estimated position, the matched region
//!   (if any), and a [`Confidence`] grade.
//! - A [`ResolveError`] explaining why no position could be produced.
//!
//! An empty registry is not an error — the resolver still reports the
//! estimated position, with no region attached. Malformed region
//! geometry encountered during matching is surfaced as
//! [`ResolveError::Geometry`] rather than silently skipped.
//!
//! # Thread Safety
//!
//! [`LocationResolver`] is `Clone` and shares its registry and beacon
//! directory through `Arc`. Each request takes a point-in-time snapshot
//! of the registry, so concurrent registry edits never tear a
//! resolution mid-flight.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use beaconfix::beacon::{Beacon, BeaconDirectory, Transmission};
//! use beaconfix::geometry::{Point, Polygon, PolygonId};
//! use beaconfix::registry::PolygonRegistry;
//! use beaconfix::resolver::LocationResolver;
//!
//! let registry = Arc::new(PolygonRegistry::new());
//! registry.insert(Polygon::new(
//!     PolygonId::new(7),
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(1.0, 0.0),
//!         Point::new(1.0, 1.0),
//!         Point::new(0.0, 1.0),
//!     ],
//! ));
//!
//! let directory = Arc::new(BeaconDirectory::new());
//! directory.insert(Beacon::new("b-1", Point::new(0.5, 0.5)));
//!
//! let resolver = LocationResolver::new(registry, directory);
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let location = runtime
//!     .block_on(resolver.resolve(vec![Transmission::new("b-1", 1.0)]))
//!     .unwrap();
//!
//! assert_eq!(location.region_id, Some(PolygonId::new(7)));
//! ```

mod config;
mod core;
mod error;
mod estimate;
mod location;
mod matching;

pub use config::ResolverConfig;
pub use core::LocationResolver;
pub use error::ResolveError;
pub use location::{Confidence, Location};
pub use matching::{match_region, RegionMatch};
