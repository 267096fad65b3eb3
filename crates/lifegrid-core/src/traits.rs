//! Core abstraction trait for reading a grid.

use crate::cell::CellState;

/// Bounded, read-only access to a two-dimensional grid of cells.
///
/// Implemented by the grid store and its snapshots. Consumers such as
/// neighbour counting and text rendering are generic over this trait so
/// they never depend on how the cells are stored.
///
/// Coordinates are signed: `x` grows to the right, `y` grows downward.
/// Reading outside `[0, width) x [0, height)` is not an error and yields
/// [`CellState::Dead`] (fixed dead boundary, no wraparound).
pub trait CellReader {
    /// Fixed grid dimensions as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// State of the cell at `(x, y)`; `Dead` for any out-of-bounds coordinate.
    fn read(&self, x: i32, y: i32) -> CellState;

    /// Number of live cells.
    fn population(&self) -> usize {
        let (w, h) = self.dimensions();
        let mut count = 0;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                if self.read(x, y).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Coordinates of every live cell in row-major order.
    fn live_cells(&self) -> Vec<(i32, i32)> {
        let (w, h) = self.dimensions();
        let mut out = Vec::new();
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                if self.read(x, y).is_alive() {
                    out.push((x, y));
                }
            }
        }
        out
    }
}
