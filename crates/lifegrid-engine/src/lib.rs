//! Generation-transition engine for the lifegrid cellular automaton.
//!
//! [`EvolutionEngine::step`] computes one generation: every cell of the
//! next buffer is derived from a read-only snapshot of the current one
//! (B3/S23 over the Moore neighbourhood, dead fixed boundary), then the
//! store commits. The engine keeps no state between steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod evolve;
pub mod metrics;
pub mod neighbourhood;
pub mod rule;

pub use config::EngineConfig;
pub use evolve::{count_live_neighbors, next_state_for, EvolutionEngine};
pub use metrics::StepMetrics;
