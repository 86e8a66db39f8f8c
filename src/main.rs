//! Headless CLI driver for the ecosystem simulation.

use std::time::Instant;

use clap::Parser;

use ecosim::simulation::params::Params;
use ecosim::simulation::runner::Runner;

#[derive(Parser)]
#[command(name = "ecosim")]
#[command(version)]
#[command(about = "Neuroevolutionary predator/prey simulation")]
struct Cli {
    /// Number of ticks to simulate
    #[arg(short, long, default_value = "10000")]
    steps: u64,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Prey population size
    #[arg(long, default_value = "20")]
    prey: usize,

    /// Predator population size
    #[arg(long, default_value = "5")]
    predators: usize,

    /// World width
    #[arg(long, default_value = "800.0")]
    width: f32,

    /// World height
    #[arg(long, default_value = "600.0")]
    height: f32,

    /// Ticks in one generation before the populations evolve
    #[arg(long, default_value = "2000")]
    steps_per_generation: u32,

    /// Ticks between stats log lines (0 disables them)
    #[arg(long, default_value = "500")]
    stats_every: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let params = Params {
        box_width: cli.width,
        box_height: cli.height,
        n_prey: cli.prey,
        n_predators: cli.predators,
        steps_per_generation: cli.steps_per_generation,
        seed: cli.seed,
        ..Params::default()
    };
    params.validate()?;

    let mut runner = Runner::new(params);
    runner.start();

    let start = Instant::now();

    for i in 0..cli.steps {
        runner.tick();

        if cli.stats_every > 0 && i % cli.stats_every == 0 {
            let stats = runner.world().get_stats();
            log::info!(
                "step {}: generation={} prey alive={} fitness={:.2}; predators alive={} fitness={:.2}",
                i,
                stats.generation,
                stats.prey.alive,
                stats.prey.mean_fitness,
                stats.predators.alive,
                stats.predators.mean_fitness
            );
        }
    }

    let elapsed = start.elapsed();
    log::info!(
        "{} ticks in {:.2?} ({:.0} ticks/s)",
        cli.steps,
        elapsed,
        cli.steps as f64 / elapsed.as_secs_f64()
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&runner.world().get_stats())?
    );

    Ok(())
}
