//! The render/step/pace loop.
//!
//! [`Simulation`] owns a [`GridStore`] and an [`EvolutionEngine`]. Each
//! frame it optionally clears the terminal, renders the current
//! generation, steps once, and sleeps for the configured frame delay. A
//! run is either a fixed number of generations or unbounded.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use lifegrid_arena::{GridConfig, GridStore};
use lifegrid_core::CellReader;
use lifegrid_engine::{EngineConfig, EvolutionEngine, StepMetrics};
use log::{debug, info};

use crate::error::RunError;
use crate::render::{self, CLEAR_SCREEN};
use crate::source;

/// Where the first generation comes from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InitialPattern {
    /// The built-in glider.
    #[default]
    Glider,
    /// A pattern file (`'*'` marks a live cell).
    File(PathBuf),
    /// A seeded random soup.
    Random {
        /// Probability that a cell starts alive, in `[0, 1]`.
        density: f64,
        /// RNG seed; equal seeds give equal soups.
        seed: u64,
    },
}

impl fmt::Display for InitialPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glider => write!(f, "built-in glider"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Random { density, seed } => {
                write!(f, "random soup (density {density}, seed {seed})")
            }
        }
    }
}

/// Configuration for one run of the driver loop.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Fixed grid dimensions.
    pub grid: GridConfig,
    /// Engine worker settings.
    pub engine: EngineConfig,
    /// Source of the first generation.
    pub initial: InitialPattern,
    /// Number of generations to run. `None` = pattern-dependent default
    /// (see [`resolved_generations`](Self::resolved_generations)).
    pub generations: Option<u64>,
    /// Pause after each step. Default: 250 ms.
    pub frame_delay: Duration,
    /// Emit [`CLEAR_SCREEN`] before each frame. Default: `true`.
    pub clear_screen: bool,
    /// Write the final generation as pattern text to this path.
    pub save_to: Option<PathBuf>,
}

impl RunConfig {
    /// Generations run for a pattern file when none are requested.
    pub const DEFAULT_FILE_GENERATIONS: u64 = 50;

    /// Default pause between frames.
    pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(250);

    /// Generation limit for this run, `None` meaning unbounded.
    ///
    /// An explicit `generations` always wins. Otherwise a pattern file runs
    /// for [`DEFAULT_FILE_GENERATIONS`](Self::DEFAULT_FILE_GENERATIONS) and
    /// the glider or a random soup runs until the process is stopped.
    pub fn resolved_generations(&self) -> Option<u64> {
        match (self.generations, &self.initial) {
            (Some(n), _) => Some(n),
            (None, InitialPattern::File(_)) => Some(Self::DEFAULT_FILE_GENERATIONS),
            (None, _) => None,
        }
    }

    /// Check the loop policy.
    ///
    /// Returns `Err(RunError::UnboundedSave)` if `save_to` is set but the
    /// run has no generation limit, since the file would never be written.
    pub fn validate(&self) -> Result<(), RunError> {
        match (&self.save_to, self.resolved_generations()) {
            (Some(path), None) => Err(RunError::UnboundedSave { path: path.clone() }),
            _ => Ok(()),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            engine: EngineConfig::default(),
            initial: InitialPattern::default(),
            generations: None,
            frame_delay: Self::DEFAULT_FRAME_DELAY,
            clear_screen: true,
            save_to: None,
        }
    }
}

/// Outcome of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered (one per step).
    pub frames: u64,
    /// Metrics of the last step, or of the initial state if none ran.
    pub last: StepMetrics,
}

/// A grid store, an engine, and the loop policy that drives them.
pub struct Simulation {
    store: GridStore,
    engine: EvolutionEngine,
    config: RunConfig,
}

impl Simulation {
    /// Build the store and engine and load the initial pattern.
    ///
    /// Returns `Err(RunError::UnboundedSave)` if the config fails
    /// [`RunConfig::validate`], `Err(RunError::Grid)` for invalid
    /// dimensions or density, and `Err(RunError::Load)` if the pattern file
    /// cannot be read.
    pub fn from_config(config: RunConfig) -> Result<Self, RunError> {
        config.validate()?;
        let mut store = GridStore::new(config.grid)?;
        match &config.initial {
            InitialPattern::Glider => store.load_default_pattern(),
            InitialPattern::File(path) => store.load_pattern(&source::read_pattern(path)?),
            InitialPattern::Random { density, seed } => store.load_random(*density, *seed)?,
        }
        let engine = EvolutionEngine::new(config.engine.clone());

        let (width, height) = store.dimensions();
        info!(
            "initialized {width}x{height} grid from {}: {} live cells, {} worker(s)",
            config.initial,
            store.population(),
            engine.workers()
        );
        Ok(Self {
            store,
            engine,
            config,
        })
    }

    /// The grid store.
    pub fn store(&self) -> &GridStore {
        &self.store
    }

    /// Current generation rendered as bordered text.
    pub fn frame(&self) -> String {
        render::render(&self.store)
    }

    /// Advance one generation.
    pub fn step(&mut self) -> StepMetrics {
        let metrics = self.engine.step(&mut self.store);
        debug!(
            "generation {}: population {} (+{} -{})",
            metrics.generation, metrics.population, metrics.births, metrics.deaths
        );
        metrics
    }

    /// Run the loop, writing frames to `out`.
    ///
    /// Each iteration renders the current generation and then steps, so
    /// the first frame shows the initial pattern. Returns after the
    /// configured number of generations; with no limit it only returns on
    /// an output error.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary, RunError> {
        let limit = self.config.resolved_generations();
        let mut summary = RunSummary {
            frames: 0,
            last: StepMetrics {
                generation: self.store.generation(),
                population: self.store.population(),
                ..Default::default()
            },
        };

        while limit.map_or(true, |n| summary.frames < n) {
            if self.config.clear_screen {
                out.write_all(CLEAR_SCREEN.as_bytes())?;
            }
            out.write_all(self.frame().as_bytes())?;
            out.flush()?;

            summary.last = self.step();
            summary.frames += 1;

            if !self.config.frame_delay.is_zero() {
                thread::sleep(self.config.frame_delay);
            }
        }

        if let Some(path) = &self.config.save_to {
            fs::write(path, self.store.to_pattern())?;
            info!("saved generation {} to {}", self.store.generation(), path.display());
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_runs_default_to_fifty_generations() {
        let config = RunConfig {
            initial: InitialPattern::File("gun.txt".into()),
            ..Default::default()
        };
        assert_eq!(config.resolved_generations(), Some(50));
    }

    #[test]
    fn glider_and_soup_run_unbounded_by_default() {
        assert_eq!(RunConfig::default().resolved_generations(), None);
        let soup = RunConfig {
            initial: InitialPattern::Random {
                density: 0.3,
                seed: 1,
            },
            ..Default::default()
        };
        assert_eq!(soup.resolved_generations(), None);
    }

    #[test]
    fn explicit_generations_win() {
        let config = RunConfig {
            initial: InitialPattern::File("gun.txt".into()),
            generations: Some(3),
            ..Default::default()
        };
        assert_eq!(config.resolved_generations(), Some(3));
    }

    #[test]
    fn save_requires_a_generation_limit() {
        let unbounded = RunConfig {
            save_to: Some("out.txt".into()),
            ..Default::default()
        };
        assert!(matches!(
            unbounded.validate(),
            Err(RunError::UnboundedSave { path }) if path == PathBuf::from("out.txt")
        ));

        let limited = RunConfig {
            generations: Some(10),
            ..unbounded.clone()
        };
        assert!(limited.validate().is_ok());

        let from_file = RunConfig {
            initial: InitialPattern::File("gun.txt".into()),
            ..unbounded
        };
        assert!(from_file.validate().is_ok());
    }

    #[test]
    fn defaults_match_console_driver() {
        let config = RunConfig::default();
        assert_eq!(config.frame_delay, Duration::from_millis(250));
        assert!(config.clear_screen);
        assert_eq!(config.grid, GridConfig::new(39, 20));
    }

    #[test]
    fn initial_pattern_display() {
        assert_eq!(InitialPattern::Glider.to_string(), "built-in glider");
        assert_eq!(
            InitialPattern::Random {
                density: 0.5,
                seed: 9
            }
            .to_string(),
            "random soup (density 0.5, seed 9)"
        );
    }
}
