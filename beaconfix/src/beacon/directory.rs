//! Known-beacon catalogue.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::transmission::BeaconId;
use crate::geometry::Point;

/// A surveyed beacon installation: identifier plus fixed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beacon {
    /// Identity the beacon transmits.
    pub id: BeaconId,
    /// Surveyed position in the site frame.
    pub position: Point,
}

impl Beacon {
    /// Create a beacon record.
    pub fn new(id: impl Into<BeaconId>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// Catalogue of known beacon installations.
///
/// Maps beacon identities to their surveyed positions. The resolver reads
/// one entry per transmission; survey updates write individual entries.
/// Per-entry consistency is all the resolver needs, so the store is a
/// concurrent map rather than a coarse-locked one — unlike the polygon
/// registry, no reader ever depends on seeing a batch of beacon updates
/// atomically.
pub struct BeaconDirectory {
    beacons: DashMap<BeaconId, Point>,
}

impl BeaconDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            beacons: DashMap::new(),
        }
    }

    /// Register a beacon, replacing any prior survey for the same id.
    pub fn insert(&self, beacon: Beacon) {
        self.beacons.insert(beacon.id, beacon.position);
    }

    /// Look up the surveyed position for a beacon identity.
    ///
    /// `None` means the beacon is unknown to this site; the resolver skips
    /// such readings.
    pub fn position_of(&self, id: &BeaconId) -> Option<Point> {
        self.beacons.get(id).map(|entry| *entry.value())
    }

    /// Remove a beacon from the catalogue.
    ///
    /// Returns its last surveyed position, or `None` if it was unknown.
    pub fn remove(&self, id: &BeaconId) -> Option<Point> {
        self.beacons.remove(id).map(|(_, position)| position)
    }

    /// Load a survey batch.
    ///
    /// Entries are applied individually (later duplicates win); there is no
    /// batch atomicity requirement here.
    pub fn load(&self, batch: impl IntoIterator<Item = Beacon>) {
        let mut loaded = 0usize;
        for beacon in batch {
            self.beacons.insert(beacon.id, beacon.position);
            loaded += 1;
        }
        debug!(loaded, total = self.beacons.len(), "loaded beacon survey");
    }

    /// Number of known beacons.
    pub fn len(&self) -> usize {
        self.beacons.len()
    }

    /// True when no beacons are known.
    pub fn is_empty(&self) -> bool {
        self.beacons.is_empty()
    }
}

impl Default for BeaconDirectory {
    fn default() -> Self {
        Self::new()
    }
}
