//! Benchmark profiles for the lifegrid cellular automaton.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), 35% random soup
//! - [`stress_profile`]: 1000x1000 grid (1M cells), same density

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_arena::{GridConfig, GridStore};

/// Live-cell probability used by all profiles.
pub const SOUP_DENSITY: f64 = 0.35;

fn soup(width: u32, height: u32, seed: u64) -> GridStore {
    let mut store = GridStore::new(GridConfig::new(width, height))
        .unwrap_or_else(|e| panic!("benchmark grid {width}x{height}: {e}"));
    store
        .load_random(SOUP_DENSITY, seed)
        .unwrap_or_else(|e| panic!("benchmark soup: {e}"));
    store
}

/// 100x100 soup.
pub fn reference_profile(seed: u64) -> GridStore {
    soup(100, 100, seed)
}

/// 1000x1000 soup, 100x the reference cell count.
pub fn stress_profile(seed: u64) -> GridStore {
    soup(1000, 1000, seed)
}
