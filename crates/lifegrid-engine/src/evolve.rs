//! One generation transition.
//!
//! [`EvolutionEngine::step`] borrows the store through a
//! [`GenerationGuard`]: every cell's next state is computed from the
//! read-only snapshot of the current generation and written into the next
//! buffer, then the store commits. Since the snapshot and the next buffer
//! are disjoint, the result equals a simultaneous update of all cells
//! regardless of visiting order or worker count.

use std::time::Instant;

use lifegrid_arena::{GenerationGuard, GridStore, RowBand, Snapshot};
use lifegrid_core::{CellReader, CellState};
use log::trace;

use crate::config::EngineConfig;
use crate::metrics::StepMetrics;
use crate::neighbourhood;
use crate::rule;

/// Number of live neighbours of `(x, y)`, in `[0, 8]`.
pub fn count_live_neighbors<R: CellReader + ?Sized>(grid: &R, x: i32, y: i32) -> u8 {
    neighbourhood::live_count(grid, x, y)
}

/// State of `(x, y)` in the generation after the one `grid` shows.
pub fn next_state_for<R: CellReader + ?Sized>(grid: &R, x: i32, y: i32) -> CellState {
    rule::next_state(grid.read(x, y), count_live_neighbors(grid, x, y))
}

/// Per-band counts, merged after all workers finish.
#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    population: usize,
    births: usize,
    deaths: usize,
}

impl Tally {
    fn merge(self, other: Self) -> Self {
        Self {
            population: self.population + other.population,
            births: self.births + other.births,
            deaths: self.deaths + other.deaths,
        }
    }
}

/// Fill every cell of `band` from `current`.
fn fill_band(current: &Snapshot<'_>, band: &mut RowBand<'_>) -> Tally {
    let mut tally = Tally::default();
    for y in band.row_range() {
        let y = y as i32;
        for x in 0..band.width() as i32 {
            let before = current.read(x, y);
            let after = next_state_for(current, x, y);
            band.write(x, y, after);
            match (before, after) {
                (CellState::Dead, CellState::Alive) => tally.births += 1,
                (CellState::Alive, CellState::Dead) => tally.deaths += 1,
                _ => {}
            }
            if after.is_alive() {
                tally.population += 1;
            }
        }
    }
    tally
}

/// Stateless generation-transition engine.
///
/// Holds only its configuration; all cell state lives in the
/// [`GridStore`] passed to [`step`](Self::step).
#[derive(Clone, Debug)]
pub struct EvolutionEngine {
    workers: usize,
}

impl EvolutionEngine {
    /// Create an engine from its configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            workers: config.resolved_worker_count(),
        }
    }

    /// Resolved number of workers per step.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Advance `store` by exactly one generation.
    ///
    /// Writes every cell of the next buffer, then commits. Never fails on
    /// a well-formed store; there are no partial commits.
    pub fn step(&self, store: &mut GridStore) -> StepMetrics {
        let start = Instant::now();
        let (_, height) = store.dimensions();

        let tally = {
            let GenerationGuard { current, mut next } = store.begin_generation();
            let workers = self.workers.min(height as usize).max(1) as u32;
            if workers == 1 {
                next.bands_mut(height)
                    .map(|mut band| fill_band(&current, &mut band))
                    .fold(Tally::default(), Tally::merge)
            } else {
                let rows_per_band = height.div_ceil(workers);
                std::thread::scope(|s| {
                    let handles: Vec<_> = next
                        .bands_mut(rows_per_band)
                        .map(|mut band| s.spawn(move || fill_band(&current, &mut band)))
                        .collect();
                    handles
                        .into_iter()
                        .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                        .fold(Tally::default(), Tally::merge)
                })
            }
        };

        store.commit();

        let metrics = StepMetrics {
            generation: store.generation(),
            population: tally.population,
            births: tally.births,
            deaths: tally.deaths,
            total_us: start.elapsed().as_micros() as u64,
        };
        trace!(
            "generation {}: population {} (+{} -{}) in {}us",
            metrics.generation,
            metrics.population,
            metrics.births,
            metrics.deaths,
            metrics.total_us
        );
        metrics
    }

    /// Advance `store` by `n` generations and return the last step's metrics.
    ///
    /// With `n == 0` the store is untouched and the metrics describe the
    /// current generation with no births or deaths.
    pub fn step_n(&self, store: &mut GridStore, n: u64) -> StepMetrics {
        let mut metrics = StepMetrics {
            generation: store.generation(),
            population: store.population(),
            ..Default::default()
        };
        for _ in 0..n {
            metrics = self.step(store);
        }
        metrics
    }
}

impl Default for EvolutionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_arena::GridConfig;
    use lifegrid_core::Generation;

    fn store_with(width: u32, height: u32, cells: &[(i32, i32)]) -> GridStore {
        let mut store = GridStore::new(GridConfig::new(width, height)).unwrap();
        store.load_cells(cells.iter().copied());
        store
    }

    #[test]
    fn count_ignores_the_cell_itself() {
        let store = store_with(3, 3, &[(1, 1)]);
        assert_eq!(count_live_neighbors(&store, 1, 1), 0);
        assert_eq!(count_live_neighbors(&store, 0, 0), 1);
    }

    #[test]
    fn count_full_neighbourhood() {
        let all: Vec<_> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        let store = store_with(3, 3, &all);
        assert_eq!(count_live_neighbors(&store, 1, 1), 8);
        assert_eq!(count_live_neighbors(&store, 0, 0), 3);
        assert_eq!(count_live_neighbors(&store, 1, 0), 5);
    }

    #[test]
    fn next_state_for_applies_rule() {
        // Three in a row: the middle survives, the ends die, (1, 0) is born.
        let store = store_with(3, 3, &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(next_state_for(&store, 1, 1), CellState::Alive);
        assert_eq!(next_state_for(&store, 0, 1), CellState::Dead);
        assert_eq!(next_state_for(&store, 1, 0), CellState::Alive);
        assert_eq!(next_state_for(&store, 0, 0), CellState::Dead);
    }

    #[test]
    fn step_commits_and_reports() {
        let engine = EvolutionEngine::default();
        let mut store = store_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let m = engine.step(&mut store);
        assert_eq!(store.snapshot().live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(m.generation, Generation(1));
        assert_eq!(m.population, 3);
        assert_eq!((m.births, m.deaths), (2, 2));
        assert_eq!(store.generation(), Generation(1));
    }

    #[test]
    fn step_n_zero_is_a_no_op() {
        let engine = EvolutionEngine::default();
        let mut store = store_with(4, 4, &[(0, 0)]);
        let m = engine.step_n(&mut store, 0);
        assert_eq!(m.generation, Generation(0));
        assert_eq!(m.population, 1);
        assert_eq!(store.population(), 1);
    }

    #[test]
    fn more_workers_than_rows() {
        let engine = EvolutionEngine::new(EngineConfig::parallel(8));
        let mut store = store_with(4, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let m = engine.step(&mut store);
        assert_eq!(m.population, 4);
        assert!(m.is_still());
    }
}
