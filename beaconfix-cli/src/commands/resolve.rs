//! Resolve command - turn beacon readings into a located region.

use std::sync::Arc;
use std::time::Duration;

use beaconfix::beacon::BeaconDirectory;
use beaconfix::registry::PolygonRegistry;
use beaconfix::resolver::{Confidence, Location, LocationResolver, ResolverConfig};

use crate::error::CliError;
use crate::input;
use crate::runner::CliRunner;

/// Arguments for the resolve command.
pub struct ResolveArgs {
    pub fences: String,
    pub beacons: String,
    pub readings: String,
    pub json: bool,
    pub signal_floor: Option<f64>,
    pub max_age_secs: Option<u64>,
    pub log_dir: String,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(&args.log_dir)?;
    runner.log_startup("resolve");

    let fences = input::load_fences(&args.fences)?;
    let beacons = input::load_beacons(&args.beacons)?;
    let readings = input::load_readings(&args.readings)?;

    let registry = Arc::new(PolygonRegistry::new());
    registry.insert_many(fences);
    let directory = Arc::new(BeaconDirectory::new());
    directory.load(beacons);

    let mut config = ResolverConfig::new();
    if let Some(floor) = args.signal_floor {
        config = config.with_signal_floor(floor);
    }
    if let Some(secs) = args.max_age_secs {
        config = config.with_max_age(Duration::from_secs(secs));
    }

    if !args.json {
        println!("beaconfix v{}", beaconfix::VERSION);
        println!();
        println!("Fences:   {} ({} regions)", args.fences, registry.len());
        println!("Beacons:  {} ({} surveyed)", args.beacons, directory.len());
        println!("Readings: {} ({} transmissions)", args.readings, readings.len());
        println!();
    }

    let resolver = LocationResolver::with_config(Arc::clone(&registry), directory, config);
    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;
    let location = runtime.block_on(resolver.resolve(readings))?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&location)
            .map_err(|e| CliError::Render(e.to_string()))?;
        println!("{}", rendered);
    } else {
        print_location(&location, &registry);
    }

    Ok(())
}

/// Print the resolved location in banner form.
fn print_location(location: &Location, registry: &PolygonRegistry) {
    println!("✓ Position: {}", location.position);

    match location.region_id {
        Some(id) => {
            // Fence names are display sugar; the id is authoritative.
            let name = registry
                .get(id)
                .and_then(|fence| fence.name().map(str::to_string));
            match name {
                Some(name) => println!("  Region:   {} (region {})", name, id),
                None => println!("  Region:   region {}", id),
            }
        }
        None => println!("  Region:   none registered"),
    }

    let grade = match location.confidence {
        Confidence::Contained => "contained - the estimate is inside the region",
        Confidence::Nearby => "nearby - outside every fence, nearest boundary reported",
        Confidence::Unmatched => "unmatched - no fences to match against",
    };
    println!("  Confidence: {}", grade);
    println!("  Beacons:  {} reading(s) used", location.beacons_used);
}
