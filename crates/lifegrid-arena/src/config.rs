//! Grid configuration parameters.

use crate::error::GridError;

/// Fixed dimensions of a grid.
///
/// Validated at construction; the dimensions of a store never change
/// afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns. Default: 39.
    pub width: u32,
    /// Number of rows. Default: 20.
    pub height: u32,
}

impl GridConfig {
    /// Default width, sized so a bordered render fits an 80-column console.
    pub const DEFAULT_WIDTH: u32 = 39;

    /// Default height.
    pub const DEFAULT_HEIGHT: u32 = 20;

    /// Coordinates are `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a config with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells, or `None` if it does not fit in `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Check the structural invariants of the config.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// and `Err(GridError::CellCountOverflow)` if the product overflows.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        if self.cell_count().is_none() {
            return Err(GridError::CellCountOverflow {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_console_size() {
        let config = GridConfig::default();
        assert_eq!((config.width, config.height), (39, 20));
        assert_eq!(config.cell_count(), Some(780));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(GridConfig::new(0, 5).validate(), Err(GridError::EmptyGrid));
        assert_eq!(GridConfig::new(5, 0).validate(), Err(GridError::EmptyGrid));
    }

    #[test]
    fn dimension_above_i32_max_rejected() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridConfig::new(big, 1).validate(),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            GridConfig::new(1, big).validate(),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }
}
