//! Runs the simulation without a window and logs periodic summaries.

use clap::Parser;
use gridlife::simulation::ecosystem::Simulation;
use gridlife::simulation::params::Params;
use gridlife::simulation::snapshot::PopulationSnapshot;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridlife-headless", author, version, about, long_about = None)]
struct Args {
    /// JSON parameter file; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value = "1000")]
    ticks: u64,

    /// Initial population, overriding the config
    #[arg(long)]
    creatures: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Log a summary every N ticks
    #[arg(long, default_value = "100")]
    report_every: u64,

    /// Save the evolved genomes here when done
    #[arg(long)]
    save: Option<PathBuf>,

    /// Seed the population from a saved snapshot instead of at random
    #[arg(long)]
    restore: Option<PathBuf>,

    /// Log every simulation event
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let mut params = match &args.config {
        Some(path) => Params::load_from_file(path)?,
        None => Params::default(),
    };
    if let Some(creatures) = args.creatures {
        params.initial_creatures = creatures;
    }
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    params.verbose |= args.verbose;

    let mut simulation = Simulation::new(params.clone())?;
    let seeded = match &args.restore {
        Some(path) => {
            let snapshot = PopulationSnapshot::load_from_file(path)?;
            log::info!(
                "restoring {} genomes saved at {} (tick {})",
                snapshot.genomes.len(),
                snapshot.saved_at,
                snapshot.tick
            );
            simulation.restore(&snapshot)?
        }
        None => simulation.spawn_random_creatures(params.initial_creatures)?,
    };
    log::info!(
        "{}x{} grid, {seeded} creatures, running {} ticks",
        params.width,
        params.height,
        args.ticks
    );

    let report_every = args.report_every.max(1);
    for _ in 0..args.ticks {
        let report = simulation.tick()?;

        if report.tick % report_every == 0 {
            let summary = simulation.summary();
            let census = simulation.census();
            log::info!(
                "tick {:>6}: creatures {:>5}, mean hp {:.2}, mean age {:.1}, mean colour {:.3}, births/tick {:.2}, deaths/tick {:.2}",
                report.tick,
                summary.population,
                summary.mean_hp,
                summary.mean_age,
                summary.mean_color,
                census.avg_births(),
                census.avg_deaths()
            );
        }

        if simulation.is_empty() {
            log::warn!("population died out at tick {}", report.tick);
            break;
        }
    }

    let totals = simulation.census().totals;
    log::info!(
        "finished after {} ticks: {} creatures, {} births, {} deaths, {} fights",
        simulation.ticks(),
        simulation.len(),
        totals.births(),
        totals.deaths(),
        totals.fights
    );

    if let Some(path) = &args.save {
        simulation.snapshot().save_to_file(path)?;
        log::info!("saved {} genomes to {}", simulation.len(), path.display());
    }

    Ok(())
}
