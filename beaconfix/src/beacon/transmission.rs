//! Beacon identity and observation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a beacon installation.
///
/// Beacon hardware reports opaque string identities (UUID + major/minor
/// tuples, MAC-derived names, survey labels); the library treats them as
/// plain strings.
///
/// # Examples
///
/// ```
/// use beaconfix::beacon::BeaconId;
///
/// let id = BeaconId::new("b-301");
/// assert_eq!(id.as_str(), "b-301");
/// assert_eq!(format!("{}", id), "b-301");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeaconId(String);

impl BeaconId {
    /// Create a beacon identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BeaconId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BeaconId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for BeaconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One observed signal reading from a beacon.
///
/// `signal` is a proximity measure where smaller means closer (a distance
/// estimate in the same unit as the site frame, typically derived from RSSI
/// by the platform's scanning service). Transmissions are transient: they
/// exist for the duration of one resolution request and are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transmission {
    /// Identity of the originating beacon.
    pub beacon_id: BeaconId,
    /// Proximity measure; smaller is closer.
    pub signal: f64,
    /// Observation time, when the scanner provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Transmission {
    /// Create a transmission without a timestamp.
    pub fn new(beacon_id: impl Into<BeaconId>, signal: f64) -> Self {
        Self {
            beacon_id: beacon_id.into(),
            signal,
            timestamp: None,
        }
    }

    /// Attach an observation timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Age of the observation, or `None` when no timestamp was supplied.
    pub fn age(&self) -> Option<chrono::Duration> {
        self.timestamp.map(|t| Utc::now() - t)
    }

    /// Check whether the observation is older than `max_age`.
    ///
    /// Readings without a timestamp are never stale; neither are readings
    /// timestamped in the future (clock skew between scanner and host).
    pub fn is_stale(&self, max_age: std::time::Duration) -> bool {
        match self.age() {
            Some(age) => age.to_std().map(|a| a > max_age).unwrap_or(false),
            None => false,
        }
    }
}
