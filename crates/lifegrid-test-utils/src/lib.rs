//! Test utilities and mock types for lifegrid development.
//!
//! Provides a [`MockGrid`] implementation of [`CellReader`] and the
//! pattern fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::collections::BTreeSet;

use lifegrid_core::{CellReader, CellState};

/// Mock implementation of [`CellReader`].
///
/// Backed by a set of live coordinates. Counts every read and, when built
/// with [`strict`](MockGrid::strict), panics on reads outside the grid so
/// tests can prove a consumer never looks past the boundary.
pub struct MockGrid {
    width: u32,
    height: u32,
    live: BTreeSet<(i32, i32)>,
    strict: bool,
    reads: Cell<usize>,
}

impl MockGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            live: BTreeSet::new(),
            strict: false,
            reads: Cell::new(0),
        }
    }

    /// Panic on any out-of-bounds read.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Mark cells alive. Coordinates outside the grid are kept, but are
    /// never visible through `read`.
    pub fn with_live(mut self, cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        self.live.extend(cells);
        self
    }

    /// Number of `read` calls so far.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

impl CellReader for MockGrid {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn read(&self, x: i32, y: i32) -> CellState {
        self.reads.set(self.reads.get() + 1);
        if !self.in_bounds(x, y) {
            assert!(!self.strict, "out-of-bounds read at ({x}, {y})");
            return CellState::Dead;
        }
        CellState::from_bool(self.live.contains(&(x, y)))
    }
}
