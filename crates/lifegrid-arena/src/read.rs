//! Read-only view of the current generation.
//!
//! [`Snapshot`] borrows the `current` buffer of a [`crate::GridStore`] and
//! implements [`CellReader`]. It is what the evolution engine reads while
//! it fills the next buffer, and what renderers read between steps.

use lifegrid_core::{CellReader, CellState, Generation};

/// Flat index of `(x, y)` in a row-major buffer, or `None` if out of bounds.
pub(crate) fn cell_index(x: i32, y: i32, width: u32, height: u32) -> Option<usize> {
    if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
        return None;
    }
    Some(y as usize * width as usize + x as usize)
}

/// A read-only view of one committed generation.
///
/// # Lifetime
///
/// `'a` is the borrow of the `GridStore`. While a snapshot is alive the
/// store cannot commit, so the view never changes underneath its reader.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    cells: &'a [CellState],
    width: u32,
    height: u32,
    generation: Generation,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(
        cells: &'a [CellState],
        width: u32,
        height: u32,
        generation: Generation,
    ) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            cells,
            width,
            height,
            generation,
        }
    }

    /// Generation this view belongs to.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The whole buffer in row-major order (`y * width + x`).
    pub fn cells(&self) -> &'a [CellState] {
        self.cells
    }
}

impl CellReader for Snapshot<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn read(&self, x: i32, y: i32) -> CellState {
        match cell_index(x, y, self.width, self.height) {
            Some(i) => self.cells[i],
            None => CellState::Dead,
        }
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_index_row_major() {
        assert_eq!(cell_index(0, 0, 4, 3), Some(0));
        assert_eq!(cell_index(3, 0, 4, 3), Some(3));
        assert_eq!(cell_index(0, 1, 4, 3), Some(4));
        assert_eq!(cell_index(3, 2, 4, 3), Some(11));
    }

    #[test]
    fn cell_index_out_of_bounds() {
        assert_eq!(cell_index(-1, 0, 4, 3), None);
        assert_eq!(cell_index(0, -1, 4, 3), None);
        assert_eq!(cell_index(4, 0, 4, 3), None);
        assert_eq!(cell_index(0, 3, 4, 3), None);
        assert_eq!(cell_index(i32::MIN, i32::MAX, 4, 3), None);
    }

    #[test]
    fn snapshot_reads() {
        let mut cells = vec![CellState::Dead; 6];
        cells[4] = CellState::Alive; // (1, 1) on a 3x2 grid
        let snap = Snapshot::new(&cells, 3, 2, Generation(7));
        assert_eq!(snap.read(1, 1), CellState::Alive);
        assert_eq!(snap.read(1, 0), CellState::Dead);
        assert_eq!(snap.read(3, 1), CellState::Dead);
        assert_eq!(snap.population(), 1);
        assert_eq!(snap.live_cells(), vec![(1, 1)]);
        assert_eq!(snap.generation(), Generation(7));
    }
}
