//! Location resolver orchestration.
//!
//! Ties the two stages together: estimate a position from the
//! transmissions (stage 1), match it against the registry snapshot
//! (stage 2), and deliver a [`Location`] or [`ResolveError`] to the
//! caller.

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::beacon::{BeaconDirectory, Transmission};
use crate::geometry::Polygon;
use crate::registry::PolygonRegistry;

use super::config::ResolverConfig;
use super::error::ResolveError;
use super::estimate::estimate_position;
use super::location::{Confidence, Location};
use super::matching::{match_region, RegionMatch};

/// Resolves beacon transmissions into locations against a shared region
/// registry.
///
/// The registry and beacon directory are injected at construction and
/// shared via `Arc`; the resolver never mutates either. Cloning the
/// resolver is cheap (two `Arc`s plus the config), so one instance can be
/// handed to any number of concurrent tasks.
///
/// Each request is stateless: `pending → resolved | failed`, nothing in
/// between is observable, and a failed request has no effect on later
/// ones.
#[derive(Clone)]
pub struct LocationResolver {
    registry: Arc<PolygonRegistry>,
    directory: Arc<BeaconDirectory>,
    config: ResolverConfig,
}

impl LocationResolver {
    /// Create a resolver with default configuration.
    pub fn new(registry: Arc<PolygonRegistry>, directory: Arc<BeaconDirectory>) -> Self {
        Self::with_config(registry, directory, ResolverConfig::default())
    }

    /// Create a resolver with explicit configuration.
    pub fn with_config(
        registry: Arc<PolygonRegistry>,
        directory: Arc<BeaconDirectory>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            registry,
            directory,
            config,
        }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a set of transmissions into a location.
    ///
    /// Takes a registry snapshot up front (one consistent view per
    /// request), then runs both computation stages on the blocking pool so
    /// a large registry scan never stalls the async executor. A panicked
    /// worker surfaces as [`ResolveError::Internal`].
    #[instrument(skip(self, transmissions), fields(readings = transmissions.len()))]
    pub async fn resolve(
        &self,
        transmissions: Vec<Transmission>,
    ) -> Result<Location, ResolveError> {
        if transmissions.is_empty() {
            return Err(ResolveError::InsufficientData);
        }

        let polygons = self.registry.all();
        let directory = Arc::clone(&self.directory);
        let config = self.config.clone();

        run_computation(move || compute_location(&transmissions, &directory, &polygons, &config))
            .await
    }

    /// Resolve with completion callbacks instead of an awaited result.
    ///
    /// Returns immediately after spawning a worker task. Exactly one of
    /// the two callbacks runs, exactly once, always on the spawned worker
    /// task (never the caller's context) — including when the computation
    /// faults internally, in which case `on_failure` receives
    /// [`ResolveError::Internal`]. Must be called within a Tokio runtime.
    ///
    /// The returned handle can be awaited to observe completion; dropping
    /// it detaches the task without cancelling delivery.
    pub fn determine<S, F>(
        &self,
        transmissions: Vec<Transmission>,
        on_success: S,
        on_failure: F,
    ) -> JoinHandle<()>
    where
        S: FnOnce(Location) + Send + 'static,
        F: FnOnce(ResolveError) + Send + 'static,
    {
        let resolver = self.clone();
        deliver(
            async move { resolver.resolve(transmissions).await },
            on_success,
            on_failure,
        )
    }
}

/// Run the synchronous computation on the blocking pool.
///
/// A panicked worker comes back as a `JoinError` and is mapped to
/// [`ResolveError::Internal`], so the caller always receives a value.
async fn run_computation<C>(computation: C) -> Result<Location, ResolveError>
where
    C: FnOnce() -> Result<Location, ResolveError> + Send + 'static,
{
    tokio::task::spawn_blocking(computation)
        .await
        .map_err(|e| ResolveError::Internal(format!("resolution task panicked: {}", e)))?
}

/// Spawn a worker that awaits `outcome` and routes it into exactly one of
/// the two callbacks.
fn deliver<Fut, S, F>(outcome: Fut, on_success: S, on_failure: F) -> JoinHandle<()>
where
    Fut: Future<Output = Result<Location, ResolveError>> + Send + 'static,
    S: FnOnce(Location) + Send + 'static,
    F: FnOnce(ResolveError) + Send + 'static,
{
    tokio::spawn(async move {
        match outcome.await {
            Ok(location) => on_success(location),
            Err(error) => {
                debug!(kind = error.kind(), %error, "resolution failed");
                on_failure(error)
            }
        }
    })
}

/// Synchronous two-stage resolution (runs in spawn_blocking).
fn compute_location(
    transmissions: &[Transmission],
    directory: &BeaconDirectory,
    polygons: &[Arc<Polygon>],
    config: &ResolverConfig,
) -> Result<Location, ResolveError> {
    let estimate = estimate_position(transmissions, directory, config)?;

    let location = match match_region(estimate.position, polygons)? {
        RegionMatch::Contained { id } => Location {
            position: estimate.position,
            region_id: Some(id),
            confidence: Confidence::Contained,
            beacons_used: estimate.beacons_used,
        },
        RegionMatch::Nearest { id, distance } => {
            debug!(region = %id, distance, "no containing region, using nearest edge");
            Location {
                position: estimate.position,
                region_id: Some(id),
                confidence: Confidence::Nearby,
                beacons_used: estimate.beacons_used,
            }
        }
        RegionMatch::NoRegions => Location {
            position: estimate.position,
            region_id: None,
            confidence: Confidence::Unmatched,
            beacons_used: estimate.beacons_used,
        },
    };

    debug!(
        position = %location.position,
        region = ?location.region_id,
        confidence = %location.confidence,
        beacons = location.beacons_used,
        "resolved location"
    );
    Ok(location)
}
