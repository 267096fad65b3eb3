//! lifegrid CLI entry point.
//!
//! Renders Conway's Game of Life in the terminal. With a pattern file the
//! run stops after 50 generations by default; without one the built-in
//! glider runs until interrupted.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use lifegrid::arena::GridConfig;
use lifegrid::driver::{InitialPattern, RunConfig, Simulation};
use lifegrid::engine::EngineConfig;
use lifegrid::error::RunError;
use log::{error, info};

#[derive(Parser)]
#[command(name = "lifegrid")]
#[command(version)]
#[command(about = "Conway's Game of Life on a fixed-size grid, rendered as text")]
struct Cli {
    /// Pattern file: one line per row, '*' marks a live cell
    pattern: Option<PathBuf>,

    /// Number of generations to run [default: 50 with a pattern file, unbounded otherwise]
    #[arg(short, long)]
    generations: Option<u64>,

    /// Pause between generations, in milliseconds
    #[arg(short, long, default_value_t = 250)]
    delay_ms: u64,

    /// Grid width in cells
    #[arg(long, default_value_t = GridConfig::DEFAULT_WIDTH)]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = GridConfig::DEFAULT_HEIGHT)]
    height: u32,

    /// Worker threads per generation (0 = one per CPU)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Start from a random soup with this live-cell probability
    #[arg(long, conflicts_with = "pattern")]
    random_density: Option<f64>,

    /// Seed for the random soup
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Do not clear the terminal between frames
    #[arg(long)]
    no_clear: bool,

    /// Write the final generation as a pattern file
    #[arg(long)]
    save: Option<PathBuf>,
}

impl Cli {
    fn into_run_config(self) -> RunConfig {
        let initial = match (self.pattern, self.random_density) {
            (Some(path), _) => InitialPattern::File(path),
            (None, Some(density)) => InitialPattern::Random {
                density,
                seed: self.seed,
            },
            (None, None) => InitialPattern::Glider,
        };
        RunConfig {
            grid: GridConfig::new(self.width, self.height),
            engine: EngineConfig {
                workers: self.workers,
            },
            initial,
            generations: self.generations,
            frame_delay: Duration::from_millis(self.delay_ms),
            clear_screen: !self.no_clear,
            save_to: self.save,
        }
    }
}

fn run(config: RunConfig) -> Result<(), RunError> {
    let mut sim = Simulation::from_config(config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = sim.run(&mut out)?;
    info!(
        "finished after {} generations, population {}",
        summary.frames, summary.last.population
    );
    Ok(())
}

fn main() -> ExitCode {
    // Frames go to stdout; logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli.into_run_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("lifegrid: {e}");
            ExitCode::FAILURE
        }
    }
}
