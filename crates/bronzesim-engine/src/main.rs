//! The `bronzesim` binary.
//!
//! Loads a `.bronze` program (default `example.bronze`), builds the
//! simulator, and steps it day by day. Periodic reports and role-switch
//! lines go to stdout; diagnostics go to stderr via `tracing` so the
//! report stream stays byte-reproducible. Snapshot and map files are
//! written beside the working directory on their configured cadences.
//!
//! # Startup Sequence
//!
//! 1. Handle `-h`/`--help`
//! 2. Initialize structured logging (stderr)
//! 3. Read and parse the `.bronze` source
//! 4. Reject programs with no vocations
//! 5. Build the simulator and run the day loop
//! 6. Print the final report

mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bronzesim_core::{Simulator, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Days between periodic stdout reports.
const REPORT_EVERY_DAYS: u32 = 10;
/// ASCII map window width, in cells.
const MAP_WIDTH: u32 = 80;
/// ASCII map window height, in cells.
const MAP_HEIGHT: u32 = 40;

fn main() -> ExitCode {
    let mut args = std::env::args();
    let _argv0 = args.next();
    let first = args.next();

    if matches!(first.as_deref(), Some("-h" | "--help")) {
        println!("Usage: bronzesim [config.bronze]");
        return ExitCode::SUCCESS;
    }

    // Diagnostics go to stderr so stdout carries only the report stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let path = first.map_or_else(|| PathBuf::from("example.bronze"), PathBuf::from);
    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<(), EngineError> {
    let source = std::fs::read_to_string(path).map_err(|source| EngineError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    let config = bronzesim_dsl::parse_str(&source)?;
    if config.vocations.is_empty() {
        return Err(EngineError::NoVocations);
    }

    info!(
        seed = config.seed,
        days = config.days,
        agents = config.agent_count,
        settlements = config.settlement_count,
        cache_max = config.cache_max,
        "configuration loaded"
    );

    let mut sim = Simulator::new(&config);

    for _ in 0..config.days.max(0) {
        if let Some(line) = sim.step_day() {
            println!("{line}");
        }

        if sim.day.checked_rem(REPORT_EVERY_DAYS) == Some(0) {
            print!("{}", report(&sim));
        }

        if config.snapshot_every_days > 0
            && sim.day.checked_rem(config.snapshot_every_days.unsigned_abs()) == Some(0)
        {
            write_snapshot(&sim)?;
        }

        if config.map_every_days > 0
            && sim.day.checked_rem(config.map_every_days.unsigned_abs()) == Some(0)
        {
            write_map(&mut sim)?;
        }
    }

    print!("{}", report(&sim));
    info!(day = sim.day, alive = sim.alive_count(), "simulation complete");
    Ok(())
}

fn write_snapshot(sim: &Simulator) -> Result<(), EngineError> {
    let snapshot = bronzesim_core::Snapshot::collect(sim);
    let json = serde_json::to_string_pretty(&snapshot)?;
    let path = PathBuf::from(format!("snapshot_day{:05}.json", sim.day));
    std::fs::write(&path, json).map_err(|source| EngineError::WriteOutput { path, source })
}

fn write_map(sim: &mut Simulator) -> Result<(), EngineError> {
    let map = bronzesim_world::render_centered(&mut sim.cache, MAP_WIDTH, MAP_HEIGHT);
    let path = PathBuf::from(format!("map_day{:05}.txt", sim.day));
    std::fs::write(&path, map).map_err(|source| EngineError::WriteOutput { path, source })
}
