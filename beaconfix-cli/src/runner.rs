//! CLI runner for common setup and operations.
//!
//! Encapsulates logging initialization so command handlers share one
//! startup path.

use tracing::info;

use beaconfix::logging::{default_log_file, init_logging, LoggingGuard};

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
}

impl CliRunner {
    /// Create a new CLI runner, initializing logging into `log_dir`.
    pub fn new(log_dir: &str) -> Result<Self, CliError> {
        let logging_guard = init_logging(log_dir, default_log_file())
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self { logging_guard })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("beaconfix v{}", beaconfix::VERSION);
        info!("beaconfix CLI: {} command", command);
    }
}
