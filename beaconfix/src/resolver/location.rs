//! Resolved location output types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::{Point, PolygonId};

/// How the reported region relates to the estimated position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The position lies inside the reported region.
    Contained,
    /// No region contains the position; the reported region is the nearest
    /// one by edge distance.
    Nearby,
    /// No regions were registered; the location carries the raw position
    /// only.
    Unmatched,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::Contained => "contained",
            Confidence::Nearby => "nearby",
            Confidence::Unmatched => "unmatched",
        };
        write!(f, "{}", label)
    }
}

/// A resolved location.
///
/// Produced only by a successful resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Estimated position in the site frame.
    pub position: Point,
    /// Region containing (or nearest to) the position, when one exists.
    pub region_id: Option<PolygonId>,
    /// How the region relates to the position.
    pub confidence: Confidence,
    /// Number of transmissions that contributed to the estimate.
    pub beacons_used: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.region_id, self.confidence) {
            (Some(id), Confidence::Nearby) => write!(
                f,
                "{} near region {} ({}, {} beacons)",
                self.position, id, self.confidence, self.beacons_used
            ),
            (Some(id), _) => write!(
                f,
                "{} in region {} ({}, {} beacons)",
                self.position, id, self.confidence, self.beacons_used
            ),
            (None, _) => write!(
                f,
                "{} outside any region ({}, {} beacons)",
                self.position, self.confidence, self.beacons_used
            ),
        }
    }
}
