//! Reusable pattern fixtures.
//!
//! - [`BLOCK`]: still life.
//! - [`BLINKER`]: period-2 oscillator (vertical phase).
//! - [`GLIDER`]: re-exported default glider, translates `(+1, +1)` every 4 steps.

use std::collections::BTreeSet;

use lifegrid_arena::{GridConfig, GridStore};
use lifegrid_core::CellReader;

pub use lifegrid_arena::GLIDER;

/// 2x2 still life.
pub const BLOCK: [(i32, i32); 4] = [(1, 1), (2, 1), (1, 2), (2, 2)];

/// Vertical blinker centred on `(2, 2)`.
pub const BLINKER: [(i32, i32); 3] = [(2, 1), (2, 2), (2, 3)];

/// Horizontal phase of [`BLINKER`].
pub const BLINKER_HORIZONTAL: [(i32, i32); 3] = [(1, 2), (2, 2), (3, 2)];

/// A store of the given size with exactly `cells` alive.
pub fn store_with(width: u32, height: u32, cells: &[(i32, i32)]) -> GridStore {
    let mut store = GridStore::new(GridConfig::new(width, height))
        .unwrap_or_else(|e| panic!("fixture grid {width}x{height}: {e}"));
    store.load_cells(cells.iter().copied());
    store
}

/// Live cells of any grid as an ordered set.
pub fn live_set<R: CellReader + ?Sized>(grid: &R) -> BTreeSet<(i32, i32)> {
    grid.live_cells().into_iter().collect()
}

/// `cells` shifted by `(dx, dy)`.
pub fn translated(cells: &[(i32, i32)], dx: i32, dy: i32) -> BTreeSet<(i32, i32)> {
    cells.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}

/// Fixture cells as an ordered set.
pub fn set_of(cells: &[(i32, i32)]) -> BTreeSet<(i32, i32)> {
    cells.iter().copied().collect()
}
