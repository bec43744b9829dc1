//! JSON input file loading.
//!
//! The CLI takes its world as three JSON files: fence polygons, surveyed
//! beacons, and the transmissions to resolve. Shapes mirror the library
//! types directly, so the files deserialize without adapter structs.

use serde::de::DeserializeOwned;
use std::fs;

use beaconfix::beacon::{Beacon, Transmission};
use beaconfix::geometry::Polygon;

use crate::error::CliError;

fn load_json<T: DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|error| CliError::InputFile {
        path: path.to_string(),
        error,
    })?;
    serde_json::from_str(&text).map_err(|error| CliError::InputParse {
        path: path.to_string(),
        error,
    })
}

/// Load fence polygons from a JSON file.
pub fn load_fences(path: &str) -> Result<Vec<Polygon>, CliError> {
    load_json(path)
}

/// Load the beacon survey from a JSON file.
pub fn load_beacons(path: &str) -> Result<Vec<Beacon>, CliError> {
    load_json(path)
}

/// Load the transmissions to resolve from a JSON file.
pub fn load_readings(path: &str) -> Result<Vec<Transmission>, CliError> {
    load_json(path)
}
