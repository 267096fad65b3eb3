//! Double-buffered grid storage for the lifegrid cellular automaton.
//!
//! # Architecture
//!
//! The store keeps two equally sized cell buffers that never alias:
//!
//! ```text
//! GridStore
//! ├── current: Vec<CellState>  ←─── authoritative, read through Snapshot
//! └── next:    Vec<CellState>  ←─── scratch, written through NextBuffer
//! ```
//!
//! A generation is built in three phases:
//! 1. `begin_generation()`: split borrow: read-only [`Snapshot`] of
//!    `current` plus a writable [`NextBuffer`] over `next`
//! 2. every cell of `next` is written from values read out of the snapshot
//! 3. `commit()`: `next` becomes `current`, the old `current` is cleared
//!    and becomes the next scratch buffer
//!
//! Because the guard borrows `current` immutably, no write during a
//! generation can be observed by a read in the same generation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pattern;
pub mod pingpong;
pub mod read;
mod seed;
pub mod write;

pub use config::GridConfig;
pub use error::GridError;
pub use pattern::GLIDER;
pub use pingpong::{GenerationGuard, GridStore};
pub use read::Snapshot;
pub use write::{NextBuffer, RowBand};
