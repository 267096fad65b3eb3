//! Double-buffered grid store.
//!
//! [`GridStore`] owns two equally sized cell buffers. `current` is the
//! authoritative generation; `next` is scratch space for the generation
//! under construction. [`GridStore::commit`] swaps the two and clears the
//! new scratch buffer, so `next` is entirely dead at the start of every
//! generation.
//!
//! The lifecycle per generation is:
//! 1. `begin_generation()`: borrow `current` read-only and `next` writable
//! 2. the caller writes every cell of `next` through the guard
//! 3. `commit()`: swap buffers, clear `next`, advance the generation

use lifegrid_core::{CellReader, CellState, Generation};
use log::debug;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::pattern::{self, GLIDER};
use crate::read::{cell_index, Snapshot};
use crate::seed;
use crate::write::NextBuffer;

/// Split access to both buffers during one generation.
///
/// Created by [`GridStore::begin_generation()`] and dropped before
/// [`GridStore::commit()`]. Holding it borrows the whole store, so the
/// current generation cannot change while the next one is written.
#[must_use]
pub struct GenerationGuard<'a> {
    /// Read-only view of the current generation.
    pub current: Snapshot<'a>,
    /// Write access to the next generation.
    pub next: NextBuffer<'a>,
}

/// An all-dead buffer of `len` cells, failing instead of aborting when the
/// allocator refuses.
fn dead_buffer(len: usize) -> Result<Vec<CellState>, GridError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| GridError::AllocationFailed { cells: len })?;
    cells.resize(len, CellState::Dead);
    Ok(cells)
}

/// Fixed-size, double-buffered grid of cells.
///
/// # Buffer layout
///
/// ```text
/// current: Vec<CellState>  ←─── y * width + x, readable by everyone
/// next:    Vec<CellState>  ←─── y * width + x, written during a step
/// ```
///
/// The two buffers are separate allocations of identical length and are
/// swapped, never copied, on commit. Dimensions are fixed at construction.
#[derive(Clone, Debug)]
pub struct GridStore {
    width: u32,
    height: u32,
    current: Vec<CellState>,
    next: Vec<CellState>,
    generation: Generation,
}

impl GridStore {
    /// Create an all-dead store with the configured dimensions.
    ///
    /// Returns `Err(GridError)` if the config fails
    /// [`GridConfig::validate()`], or `Err(GridError::AllocationFailed)` if
    /// either buffer cannot be allocated.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let len = config.cell_count().ok_or(GridError::CellCountOverflow {
            width: config.width,
            height: config.height,
        })?;
        Ok(Self {
            width: config.width,
            height: config.height,
            current: dead_buffer(len)?,
            next: dead_buffer(len)?,
            generation: Generation(0),
        })
    }

    /// Fixed grid dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Generations committed since the last load.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// State of `(x, y)` in the current generation; `Dead` out of bounds.
    pub fn read(&self, x: i32, y: i32) -> CellState {
        match cell_index(x, y, self.width, self.height) {
            Some(i) => self.current[i],
            None => CellState::Dead,
        }
    }

    /// Set `(x, y)` in the next generation.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid. This is never used for
    /// boundary clipping; an out-of-range write is a logic bug.
    #[track_caller]
    pub fn write_next(&mut self, x: i32, y: i32, state: CellState) {
        NextBuffer::new(&mut self.next, self.width, self.height).write(x, y, state);
    }

    /// Promote `next` to `current` and reset `next` to all-dead.
    ///
    /// Cells of `next` that were never written during the generation are
    /// dead in the new current generation.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill(CellState::Dead);
        self.generation = self.generation.next();
    }

    /// Borrow the current generation read-only and the next one writable.
    pub fn begin_generation(&mut self) -> GenerationGuard<'_> {
        debug_assert!(
            self.next.iter().all(|c| !c.is_alive()),
            "next buffer must be dead at the start of a generation"
        );
        GenerationGuard {
            current: Snapshot::new(&self.current, self.width, self.height, self.generation),
            next: NextBuffer::new(&mut self.next, self.width, self.height),
        }
    }

    /// Read-only view of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.current, self.width, self.height, self.generation)
    }

    /// Initialize `current` from pattern text.
    ///
    /// Rows and columns outside the grid are ignored; everything not
    /// marked `'*'` is dead. Resets `next` and the generation counter.
    pub fn load_pattern(&mut self, source: &str) {
        let live = pattern::decode_into(source, self.width, self.height, &mut self.current);
        self.reset_next();
        debug!(
            "loaded pattern into {}x{} grid: {live} live cells",
            self.width, self.height
        );
    }

    /// Initialize `current` to the built-in glider; everything else dead.
    pub fn load_default_pattern(&mut self) {
        self.load_cells(GLIDER);
    }

    /// Initialize `current` so that exactly the listed cells are alive.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn load_cells(&mut self, cells: impl IntoIterator<Item = (i32, i32)>) {
        self.current.fill(CellState::Dead);
        for (x, y) in cells {
            if let Some(i) = cell_index(x, y, self.width, self.height) {
                self.current[i] = CellState::Alive;
            }
        }
        self.reset_next();
        debug!("loaded {} live cells", self.population());
    }

    /// Initialize `current` with a seeded random soup.
    ///
    /// Each cell is alive with probability `density`. Returns
    /// `Err(GridError::InvalidDensity)` and leaves the store untouched if
    /// `density` is NaN or outside `[0, 1]`.
    pub fn load_random(&mut self, density: f64, seed: u64) -> Result<(), GridError> {
        seed::check_density(density)?;
        let live = seed::fill_random(&mut self.current, density, seed);
        self.reset_next();
        debug!("loaded random soup (density {density}, seed {seed}): {live} live cells");
        Ok(())
    }

    /// Current generation as pattern text (see [`pattern::encode`]).
    pub fn to_pattern(&self) -> String {
        pattern::encode(&self.current, self.width)
    }

    fn reset_next(&mut self) {
        self.next.fill(CellState::Dead);
        self.generation = Generation(0);
    }
}

impl CellReader for GridStore {
    fn dimensions(&self) -> (u32, u32) {
        GridStore::dimensions(self)
    }

    fn read(&self, x: i32, y: i32) -> CellState {
        GridStore::read(self, x, y)
    }

    fn population(&self) -> usize {
        self.current.iter().filter(|c| c.is_alive()).count()
    }
}
