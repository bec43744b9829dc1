//! Position estimation from transmissions (stage 1).

use tracing::debug;

use crate::beacon::{BeaconDirectory, Transmission};
use crate::geometry::Point;

use super::config::ResolverConfig;
use super::error::ResolveError;

/// A position estimate plus contribution metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Estimate {
    /// Weighted-average position.
    pub position: Point,
    /// Number of readings that contributed.
    pub beacons_used: usize,
}

/// Estimate a position as the inverse-signal weighted average of known
/// beacon positions.
///
/// Smaller signal means closer, so each reading's weight is the inverse of
/// its signal clamped to `config.signal_floor`; closer beacons dominate the
/// estimate. A reading contributes nothing when its beacon is unknown (or
/// has a corrupt survey position), when it is stale under `config.max_age`,
/// or when its signal is negative or non-finite — platform scanners report
/// negative values for "distance unknown", and inverting those would make
/// the least trustworthy reading the most influential. The computed weight
/// must itself be finite: a non-positive or NaN `signal_floor` cannot clamp
/// a zero signal, and such readings are dropped rather than inverted into
/// an infinite weight that would poison the averages. Skips are traced,
/// not errored.
///
/// Fails with [`ResolveError::UnresolvableBeacons`] when nothing
/// contributes.
pub(crate) fn estimate_position(
    transmissions: &[Transmission],
    directory: &BeaconDirectory,
    config: &ResolverConfig,
) -> Result<Estimate, ResolveError> {
    let mut weight_sum = 0.0;
    let mut x_sum = 0.0;
    let mut y_sum = 0.0;
    let mut used = 0usize;

    for reading in transmissions {
        if !reading.signal.is_finite() || reading.signal < 0.0 {
            debug!(
                beacon = %reading.beacon_id,
                signal = reading.signal,
                "skipping reading with unusable signal"
            );
            continue;
        }
        if let Some(max_age) = config.max_age {
            if reading.is_stale(max_age) {
                debug!(beacon = %reading.beacon_id, "skipping stale reading");
                continue;
            }
        }
        let Some(position) = directory.position_of(&reading.beacon_id) else {
            debug!(beacon = %reading.beacon_id, "skipping reading from unknown beacon");
            continue;
        };
        if !position.is_finite() {
            debug!(beacon = %reading.beacon_id, "skipping beacon with corrupt survey position");
            continue;
        }

        let weight = 1.0 / reading.signal.max(config.signal_floor);
        if !weight.is_finite() {
            debug!(
                beacon = %reading.beacon_id,
                signal = reading.signal,
                floor = config.signal_floor,
                "skipping reading with non-finite weight"
            );
            continue;
        }
        x_sum += position.x * weight;
        y_sum += position.y * weight;
        weight_sum += weight;
        used += 1;
    }

    if used == 0 {
        return Err(ResolveError::UnresolvableBeacons {
            supplied: transmissions.len(),
        });
    }

    Ok(Estimate {
        position: Point::new(x_sum / weight_sum, y_sum / weight_sum),
        beacons_used: used,
    })
}
