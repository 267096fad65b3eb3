//! Moore neighbourhood on a grid with a dead fixed boundary.

use lifegrid_core::CellReader;
use smallvec::SmallVec;

/// All 8 offsets at Chebyshev distance 1: W, E, N, S, NW, NE, SW, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// In-bounds neighbours of `(x, y)` on a `width x height` grid.
///
/// Out-of-bounds neighbours are omitted, never wrapped: corners have 3,
/// edges 5, interior cells 8.
pub fn neighbours(x: i32, y: i32, width: u32, height: u32) -> SmallVec<[(i32, i32); 8]> {
    let mut result = SmallVec::new();
    for (dx, dy) in MOORE_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if nx >= 0 && ny >= 0 && (nx as u32) < width && (ny as u32) < height {
            result.push((nx, ny));
        }
    }
    result
}

/// Number of live cells among the in-bounds Moore neighbours of `(x, y)`.
///
/// Only coordinates inside the grid are read; missing neighbours past the
/// edge count as dead.
pub fn live_count<R: CellReader + ?Sized>(grid: &R, x: i32, y: i32) -> u8 {
    let (width, height) = grid.dimensions();
    neighbours(x, y, width, height)
        .into_iter()
        .filter(|&(nx, ny)| grid.read(nx, ny).is_alive())
        .count() as u8
}
