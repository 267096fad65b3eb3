//! Deterministic random soups.
//!
//! Uses a ChaCha8 RNG seeded directly from the caller's seed, so identical
//! seeds produce bit-identical grids on every platform.

use lifegrid_core::CellState;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::GridError;

/// Reject densities that `gen_bool` cannot accept.
pub(crate) fn check_density(density: f64) -> Result<(), GridError> {
    if density.is_nan() || !(0.0..=1.0).contains(&density) {
        return Err(GridError::InvalidDensity { value: density });
    }
    Ok(())
}

/// Overwrite every cell, each alive with probability `density`.
pub(crate) fn fill_random(cells: &mut [CellState], density: f64, seed: u64) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut live = 0;
    for cell in cells.iter_mut() {
        *cell = CellState::from_bool(rng.gen_bool(density));
        if cell.is_alive() {
            live += 1;
        }
    }
    live
}
