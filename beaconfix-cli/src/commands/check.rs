//! Check command - test a point against a fence file.
//!
//! Uses the same matching policy as resolution, so a `check` answer always
//! agrees with what `resolve` would report for an estimate at that point.

use std::sync::Arc;

use serde_json::json;

use beaconfix::geometry::Point;
use beaconfix::registry::PolygonRegistry;
use beaconfix::resolver::{match_region, RegionMatch};

use crate::error::CliError;
use crate::input;
use crate::runner::CliRunner;

/// Arguments for the check command.
pub struct CheckArgs {
    pub fences: String,
    pub x: f64,
    pub y: f64,
    pub json: bool,
    pub log_dir: String,
}

/// Run the check command.
pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(&args.log_dir)?;
    runner.log_startup("check");

    let fences = input::load_fences(&args.fences)?;
    let registry = Arc::new(PolygonRegistry::new());
    registry.insert_many(fences);

    let point = Point::new(args.x, args.y);
    let outcome = match_region(point, &registry.all())?;

    if args.json {
        let report = match outcome {
            RegionMatch::Contained { id } => json!({
                "position": point,
                "region_id": id,
                "contained": true,
            }),
            RegionMatch::Nearest { id, distance } => json!({
                "position": point,
                "region_id": id,
                "contained": false,
                "distance": distance,
            }),
            RegionMatch::NoRegions => json!({
                "position": point,
                "region_id": null,
                "contained": false,
            }),
        };
        let rendered =
            serde_json::to_string_pretty(&report).map_err(|e| CliError::Render(e.to_string()))?;
        println!("{}", rendered);
        return Ok(());
    }

    match outcome {
        RegionMatch::Contained { id } => {
            let name = registry
                .get(id)
                .and_then(|fence| fence.name().map(str::to_string));
            match name {
                Some(name) => println!("✓ {} is inside {} (region {})", point, name, id),
                None => println!("✓ {} is inside region {}", point, id),
            }
        }
        RegionMatch::Nearest { id, distance } => {
            println!(
                "✗ {} is outside every fence; nearest is region {} ({:.3} away)",
                point, id, distance
            );
        }
        RegionMatch::NoRegions => {
            println!("✗ {} contains no regions to check against", args.fences);
        }
    }

    Ok(())
}
