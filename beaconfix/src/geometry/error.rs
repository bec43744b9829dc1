//! Geometry error types.

use thiserror::Error;

/// Errors raised by ring geometry operations.
///
/// A malformed polygon reaching a containment or distance test indicates a
/// data-integrity problem in whatever fed the registry, so these are
/// surfaced to the caller rather than treated as "not contained".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The vertex ring has fewer than three vertices and encloses nothing.
    #[error("polygon ring has {count} vertices, at least 3 required")]
    TooFewVertices { count: usize },

    /// A vertex carries a NaN or infinite coordinate.
    #[error("polygon vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
}
