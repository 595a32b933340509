//! duel: headless two-car race on a procedurally generated track.
//!
//! A cautious and an aggressive lookahead driver share one fuzzy speed
//! controller and race until one completes `laps_to_win` laps or the tick
//! limit runs out.  Telemetry goes to CSV; progress goes to the log.
//!
//! ```text
//! duel [config.json]          # RUST_LOG=debug for per-decision logs
//! ```

mod config;

use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use duel_agent::HeuristicAgent;
use duel_core::SimRng;
use duel_fuzzy::SpeedController;
use duel_output::{CsvWriter, TelemetryObserver};
use duel_sim::{RaceBuilder, starting_grid};
use duel_track::OvalGenerator;
use duel_vehicle::Vehicle;

use config::DemoConfig;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    init_logging();

    // 1. Configuration.
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    config.race.validate()?;

    #[cfg(feature = "parallel")]
    if let Some(n) = config.race.num_threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }

    // 2. Track.
    let mut rng = SimRng::new(config.race.seed);
    let track = OvalGenerator::new(config.track.clone()).generate(&mut rng)?;
    info!(
        points = track.point_count(),
        length = format_args!("{:.1}", track.length()),
        width = track.width(),
        seed = config.race.seed,
        "track generated"
    );

    // 3. Racers on the start line.
    let grid = starting_grid(&track, 2);
    let [(p0, h0), (p1, h1)] = grid[..] else {
        bail!("starting grid has {} slots, expected 2", grid.len());
    };
    let cautious_car = Vehicle::new(p0, h0, config.vehicle)?;
    let aggressive_car = Vehicle::new(p1, h1, config.vehicle)?;

    let mut race = RaceBuilder::new(config.race.clone(), track, SpeedController::new()?)
        .racer("cautious", cautious_car, HeuristicAgent::named("cautious", config.cautious)?)
        .racer("aggressive", aggressive_car, HeuristicAgent::named("aggressive", config.aggressive)?)
        .build()?;

    // 4. Output.
    std::fs::create_dir_all(&config.output_dir)?;
    let writer = CsvWriter::new(&config.output_dir)?;
    let mut obs = TelemetryObserver::new(writer, &config.race);

    // 5. Run.
    let t0 = Instant::now();
    let outcome = race.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "telemetry incomplete");
    }

    // 6. Summary.
    let winner = outcome
        .winner
        .map_or("none", |id| race.racers[id.index()].name.as_str());
    info!(
        winner,
        ticks = outcome.final_tick.0,
        race_secs = format_args!("{:.2}", race.clock.elapsed_secs()),
        wall_ms = elapsed.as_millis() as u64,
        telemetry_rows = obs.rows_written(),
        output = %config.output_dir.display(),
        "race finished"
    );

    println!("{:<12} {:>5} {:>9} {:>9} {:>9}", "Racer", "Laps", "Speed", "Progress", "OnTrack");
    println!("{}", "-".repeat(48));
    for status in race.status() {
        let racer = &race.racers[status.id.index()];
        let info = status.vehicle.track_info(&race.track);
        println!(
            "{:<12} {:>5} {:>9.2} {:>9} {:>9}",
            racer.name,
            status.laps,
            status.vehicle.speed(),
            info.progress_index,
            if status.on_track { "yes" } else { "no" },
        );
    }

    Ok(())
}
