//! lifegrid: Conway's Game of Life on a fixed-size grid, rendered as text.
//!
//! This is the top-level facade crate. It re-exports the public API of the
//! sub-crates and adds the collaborators around the automaton: the text
//! renderer, the pattern file source, and the driver loop used by the
//! `lifegrid` binary.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! let mut store = GridStore::new(GridConfig::new(8, 8)).unwrap();
//! store.load_default_pattern();
//!
//! let engine = EvolutionEngine::default();
//! engine.step_n(&mut store, 4);
//!
//! // Four steps later the glider has moved one cell down and right.
//! assert_eq!(store.read(4, 2), CellState::Alive);
//! print!("{}", lifegrid::render::render(&store));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifegrid-core` | `CellState`, `Generation`, `CellReader` |
//! | [`arena`] | `lifegrid-arena` | `GridStore`, snapshots, pattern format |
//! | [`engine`] | `lifegrid-engine` | `EvolutionEngine`, rule, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`lifegrid-core`).
pub use lifegrid_core as types;

/// Double-buffered grid storage (`lifegrid-arena`).
pub use lifegrid_arena as arena;

/// Generation-transition engine (`lifegrid-engine`).
pub use lifegrid_engine as engine;

pub mod driver;
pub mod error;
pub mod render;
pub mod source;

/// Common imports for typical lifegrid usage.
///
/// ```rust
/// use lifegrid::prelude::*;
/// ```
pub mod prelude {
    pub use lifegrid_arena::{GridConfig, GridError, GridStore, Snapshot};
    pub use lifegrid_core::{CellReader, CellState, Generation};
    pub use lifegrid_engine::{EngineConfig, EvolutionEngine, StepMetrics};

    pub use crate::driver::{InitialPattern, RunConfig, Simulation};
    pub use crate::error::{LoadError, RunError};
}
