//! Mutable access to the next buffer while a generation is being built.
//!
//! [`NextBuffer`] is handed out by
//! [`GridStore::begin_generation()`](crate::GridStore::begin_generation)
//! and dropped before `commit()`. For parallel stepping it splits into
//! [`RowBand`]s, each owning a disjoint run of whole rows.

use lifegrid_core::CellState;

use crate::read::cell_index;

#[cold]
#[track_caller]
fn out_of_bounds(x: i32, y: i32, width: u32, height: u32) -> ! {
    panic!("write_next: coordinates ({x}, {y}) are outside the {width}x{height} grid")
}

/// Write access to the `next` buffer of a store for a single generation.
pub struct NextBuffer<'a> {
    cells: &'a mut [CellState],
    width: u32,
    height: u32,
}

impl<'a> NextBuffer<'a> {
    pub(crate) fn new(cells: &'a mut [CellState], width: u32, height: u32) -> Self {
        Self {
            cells,
            width,
            height,
        }
    }

    /// Set the cell at `(x, y)` in the next generation.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid. Callers only ever iterate
    /// valid coordinates, so reaching this is a logic bug.
    #[track_caller]
    pub fn write(&mut self, x: i32, y: i32, state: CellState) {
        match cell_index(x, y, self.width, self.height) {
            Some(i) => self.cells[i] = state,
            None => out_of_bounds(x, y, self.width, self.height),
        }
    }

    /// Split into bands of at most `rows_per_band` consecutive rows.
    ///
    /// Bands never overlap, so they can be filled from different threads.
    ///
    /// # Panics
    ///
    /// Panics if `rows_per_band` is 0.
    pub fn bands_mut(&mut self, rows_per_band: u32) -> impl Iterator<Item = RowBand<'_>> + '_ {
        assert!(rows_per_band > 0, "rows_per_band must be positive");
        let width = self.width;
        let height = self.height;
        let chunk = rows_per_band as usize * width as usize;
        self.cells
            .chunks_mut(chunk)
            .enumerate()
            .map(move |(i, cells)| RowBand {
                first_row: i as u32 * rows_per_band,
                rows: (cells.len() / width as usize) as u32,
                cells,
                width,
                height,
            })
    }
}

/// A contiguous run of whole rows of the next buffer.
///
/// Coordinates passed to [`RowBand::write`] are grid-global; writing a row
/// owned by another band is the same invariant violation as writing
/// outside the grid.
pub struct RowBand<'a> {
    cells: &'a mut [CellState],
    first_row: u32,
    rows: u32,
    width: u32,
    height: u32,
}

impl RowBand<'_> {
    /// Global row indices covered by this band.
    pub fn row_range(&self) -> std::ops::Range<u32> {
        self.first_row..self.first_row + self.rows
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the cell at grid-global `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid or outside this band.
    #[track_caller]
    pub fn write(&mut self, x: i32, y: i32, state: CellState) {
        let in_band = y >= 0 && self.row_range().contains(&(y as u32));
        let local = if in_band {
            cell_index(x, y - self.first_row as i32, self.width, self.rows)
        } else {
            None
        };
        match local {
            Some(i) => self.cells[i] = state,
            None => out_of_bounds(x, y, self.width, self.height),
        }
    }
}
