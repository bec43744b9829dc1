//! Error types for location resolution.

use thiserror::Error;

use crate::geometry::{GeometryError, PolygonId};

/// Errors that can occur during a resolution request.
///
/// Every failure reaches the caller through the failure continuation (or
/// the `Err` arm of `resolve`); the resolver retries nothing itself, and a
/// failed request never corrupts registry state or affects later calls.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The transmission set was empty.
    #[error("no transmissions supplied")]
    InsufficientData,

    /// None of the supplied transmissions could be used: every beacon was
    /// unknown, stale, or carried an unusable signal value.
    #[error("none of the {supplied} transmissions reference a usable known beacon")]
    UnresolvableBeacons {
        /// How many transmissions the caller supplied.
        supplied: usize,
    },

    /// A malformed polygon was encountered during region matching.
    ///
    /// Surfaced rather than skipped: a ring this broken inside the registry
    /// is a provisioning bug that silent fallback would hide.
    #[error("region {id} is malformed: {source}")]
    Geometry {
        /// Identifier of the offending polygon.
        id: PolygonId,
        /// The underlying ring defect.
        #[source]
        source: GeometryError,
    },

    /// The background computation failed (worker panic or executor fault).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResolveError {
    /// Short stable label for the error kind, for logs and structured
    /// output.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::InsufficientData => "insufficient_data",
            ResolveError::UnresolvableBeacons { .. } => "unresolvable_beacons",
            ResolveError::Geometry { .. } => "geometry",
            ResolveError::Internal(_) => "internal",
        }
    }
}
