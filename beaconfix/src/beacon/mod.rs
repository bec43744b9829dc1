//! Beacon identities, observations, and the known-beacon catalogue.
//!
//! A [`Transmission`] is one signal reading as delivered by the platform's
//! scanning service ("smaller signal means closer"). The
//! [`BeaconDirectory`] maps beacon identities to surveyed positions; the
//! resolver consults it to turn readings into a position estimate and
//! silently skips readings from beacons it does not know.
//!
//! # Usage
//!
//! ```
//! use beaconfix::beacon::{Beacon, BeaconDirectory, BeaconId, Transmission};
//! use beaconfix::geometry::Point;
//!
//! let directory = BeaconDirectory::new();
//! directory.insert(Beacon::new("b-301", Point::new(2.0, 3.5)));
//!
//! let reading = Transmission::new("b-301", 1.2);
//! let position = directory.position_of(&reading.beacon_id);
//! assert_eq!(position, Some(Point::new(2.0, 3.5)));
//! assert!(directory.position_of(&BeaconId::new("ghost")).is_none());
//! ```

mod directory;
mod transmission;

pub use directory::{Beacon, BeaconDirectory};
pub use transmission::{BeaconId, Transmission};
