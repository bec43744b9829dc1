//! Resolver tuning parameters.

use std::time::Duration;

/// Configuration for the location resolver.
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Floor applied to signal values before inversion when computing
    /// estimation weights. A reading of 0.0 ("standing on the beacon")
    /// would otherwise produce an infinite weight. A floor that cannot
    /// clamp (zero, negative, or NaN) leaves such readings with a
    /// non-finite weight, and estimation drops them instead.
    /// Default: 0.1
    pub signal_floor: f64,

    /// Maximum accepted age for timestamped readings. Older readings are
    /// ignored during estimation, the same way readings from unknown
    /// beacons are. Readings without a timestamp always pass.
    /// `None` disables the filter.
    /// Default: None
    pub max_age: Option<Duration>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            signal_floor: 0.1,
            max_age: None,
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the signal floor.
    pub fn with_signal_floor(mut self, floor: f64) -> Self {
        self.signal_floor = floor;
        self
    }

    /// Builder-style setter for the maximum reading age.
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }
}
