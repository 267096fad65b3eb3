//! Core types and traits for the lifegrid cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell state, the generation counter, and the [`CellReader`] trait
//! through which the evolution engine and renderers observe a grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod id;
pub mod traits;

pub use cell::CellState;
pub use id::Generation;
pub use traits::CellReader;
