//! beaconfix CLI - Command-line interface
//!
//! This binary provides a command-line interface to the beaconfix library.

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod input;
mod runner;

use commands::{check, resolve};

#[derive(Parser)]
#[command(name = "beaconfix")]
#[command(about = "Resolve beacon readings into mapped regions", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory for log files
    #[arg(long, global = true, default_value = "logs")]
    log_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve beacon readings into a located region
    Resolve {
        /// JSON file with the fence polygons
        #[arg(long)]
        fences: String,

        /// JSON file with the surveyed beacons
        #[arg(long)]
        beacons: String,

        /// JSON file with the transmissions to resolve
        #[arg(long)]
        readings: String,

        /// Print the location as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Smallest signal measure used for inverse weighting
        #[arg(long)]
        signal_floor: Option<f64>,

        /// Ignore readings older than this many seconds
        #[arg(long)]
        max_age_secs: Option<u64>,
    },

    /// Check which fence contains a point
    Check {
        /// JSON file with the fence polygons
        #[arg(long)]
        fences: String,

        /// Point x coordinate
        #[arg(long)]
        x: f64,

        /// Point y coordinate
        #[arg(long)]
        y: f64,

        /// Print the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Resolve {
            fences,
            beacons,
            readings,
            json,
            signal_floor,
            max_age_secs,
        } => resolve::run(resolve::ResolveArgs {
            fences,
            beacons,
            readings,
            json,
            signal_floor,
            max_age_secs,
            log_dir: cli.log_dir,
        }),
        Command::Check {
            fences,
            x,
            y,
            json,
        } => check::run(check::CheckArgs {
            fences,
            x,
            y,
            json,
            log_dir: cli.log_dir,
        }),
    };

    if let Err(e) = result {
        e.exit();
    }
}
