//! Application entry point for the particle swarm viewer.
//!
//! Parses the command line, loads an optional scenario file, and hands
//! control to [`Viewer`] from the `viewer` module.

mod scenario;
mod scheduler;
mod viewer;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use log::info;

use scenario::ScenarioConfig;
use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(about = "Particles pulled around by the pointer")]
struct Args {
    /// YAML scenario file; defaults are used for anything it leaves out.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Number of particles scattered on reset.
    #[arg(long)]
    particles: Option<usize>,

    /// Simulation tick length in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for particle placement and jitter.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut scenario = match &args.scenario {
        Some(path) => ScenarioConfig::load(path)?,
        None => ScenarioConfig::default(),
    };

    if let Some(particles) = args.particles {
        scenario.particles = particles;
    }
    if let Some(tick_ms) = args.tick_ms {
        scenario.tick_ms = tick_ms;
    }
    scenario.validate()?;

    Ok(scenario)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;
    info!(
        "starting with {} particles, {} ms tick",
        scenario.particles, scenario.tick_ms
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Particles",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(scenario, args.seed)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
