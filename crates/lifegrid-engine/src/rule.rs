//! The B3/S23 transition table.

use lifegrid_core::CellState;

/// State of a cell in the next generation.
///
/// A live cell with 2 or 3 live neighbours survives; a dead cell with
/// exactly 3 is born; everything else is dead.
pub fn next_state(current: CellState, live_neighbours: u8) -> CellState {
    match (current, live_neighbours) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
