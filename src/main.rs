use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use orrery_core::SimConfig;
use orrery_physics::{diagnostics, vector};
use orrery_sim::{Universe, ViewState};

/// Headless N-body runner: load a scenario, advance it tick by tick, and
/// report where everything ended up.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "N-body gravity simulator")]
struct Args {
    /// YAML scenario file. Defaults to the stock Earth/Moon pair.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of ticks to run.
    #[arg(short, long, default_value_t = 2500)]
    ticks: u64,

    /// Tick duration override, parsed exactly like interactive input.
    #[arg(long)]
    tick_seconds: Option<String>,

    /// Randomized bodies to spawn before the run starts.
    #[arg(long, default_value_t = 0)]
    spawn: u64,

    /// Print a body report every N ticks (0 = only at the end).
    #[arg(long, default_value_t = 500)]
    report_every: u64,
}

fn load_scenario(path: &Path) -> Result<SimConfig> {
    let file =
        File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: SimConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(config)
}

/// Frame report. Takes the same state a rendering frontend would: the body
/// snapshot plus the view it draws with.
fn report(universe: &Universe, view: &ViewState) {
    let bodies = universe.bodies();
    let momentum = vector::norm(diagnostics::total_momentum(bodies));
    let energy = diagnostics::kinetic_energy(bodies);
    println!(
        "t = {:>14.0} s | {} bodies | zoom {:.2} | |p| = {:.3e} kg*m/s | KE = {:.3e} J",
        universe.elapsed,
        bodies.len(),
        view.zoom,
        momentum,
        energy
    );
    for body in bodies {
        println!(
            "  {:<12} {:.3e} kg at ({:+.4e}, {:+.4e}, {:+.4e}) m",
            body.name, body.mass, body.position[0], body.position[1], body.position[2]
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => SimConfig::default(),
    };

    let mut universe = Universe::from_config(config)?;
    if let Some(text) = &args.tick_seconds {
        universe.set_tick_seconds(text);
    }
    for _ in 0..args.spawn {
        universe.spawn_random();
    }

    info!(
        "Running {} bodies for {} ticks at {} s/tick",
        universe.bodies().len(),
        args.ticks,
        universe.tick_seconds()
    );

    let view = ViewState::default();
    let mut merges = 0;
    for _ in 0..args.ticks {
        merges += universe.tick()?.merges;
        debug!(
            "tick {}: {} bodies, {:.3e} simulated seconds",
            universe.ticks,
            universe.bodies().len(),
            universe.elapsed
        );
        if args.report_every > 0 && universe.ticks % args.report_every == 0 {
            report(&universe, &view);
        }
    }

    println!();
    println!(
        "Finished: {} ticks, {:.3e} simulated seconds, {} merges, {} bodies remain",
        universe.ticks,
        universe.elapsed,
        merges,
        universe.bodies().len()
    );
    report(&universe, &view);
    Ok(())
}
