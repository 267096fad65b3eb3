//! Grid-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from grid construction and bulk initialization.
///
/// Out-of-bounds writes are not represented here: they are invariant
/// violations and panic.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `width * height` does not fit in `usize`.
    CellCountOverflow {
        /// The configured width.
        width: u32,
        /// The configured height.
        height: u32,
    },
    /// The allocator could not provide the cell buffers.
    AllocationFailed {
        /// Cells requested per buffer.
        cells: usize,
    },
    /// Random fill density is NaN or outside `[0, 1]`.
    InvalidDensity {
        /// The rejected density.
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "cell count {width}x{height} overflows usize")
            }
            Self::AllocationFailed { cells } => {
                write!(f, "could not allocate buffers for {cells} cells")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for GridError {}
