//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use beaconfix::resolver::ResolveError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to start the async runtime
    Runtime(String),
    /// Failed to read an input file
    InputFile { path: String, error: std::io::Error },
    /// Failed to parse an input file as JSON
    InputParse {
        path: String,
        error: serde_json::Error,
    },
    /// Failed to render JSON output
    Render(String),
    /// Resolution failed
    Resolve(ResolveError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::InputParse { .. } => {
                eprintln!();
                eprintln!("Input files are JSON. Expected shapes:");
                eprintln!("  fences:   [{{\"id\": 1, \"name\": \"lobby\", \"vertices\": [[0,0],[4,0],[4,4],[0,4]]}}]");
                eprintln!("  beacons:  [{{\"id\": \"b-101\", \"position\": [2.0, 2.0]}}]");
                eprintln!("  readings: [{{\"beacon_id\": \"b-101\", \"signal\": 0.8}}]");
            }
            CliError::Resolve(ResolveError::UnresolvableBeacons { .. }) => {
                eprintln!();
                eprintln!("None of the readings matched a surveyed beacon. Check that:");
                eprintln!("  1. The beacons file covers this site");
                eprintln!("  2. Beacon ids in the readings match the survey exactly");
            }
            CliError::Resolve(ResolveError::InsufficientData) => {
                eprintln!();
                eprintln!("The readings file must contain at least one transmission.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Runtime(msg) => write!(f, "Failed to start async runtime: {}", msg),
            CliError::InputFile { path, error } => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            CliError::InputParse { path, error } => {
                write!(f, "Failed to parse '{}': {}", path, error)
            }
            CliError::Render(msg) => write!(f, "Failed to render output: {}", msg),
            CliError::Resolve(e) => write!(f, "Resolution failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InputFile { error, .. } => Some(error),
            CliError::InputParse { error, .. } => Some(error),
            CliError::Resolve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(e: ResolveError) -> Self {
        CliError::Resolve(e)
    }
}
