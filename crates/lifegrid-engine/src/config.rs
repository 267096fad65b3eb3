//! Engine configuration.

use log::warn;

/// Configuration for [`EvolutionEngine`](crate::EvolutionEngine).
///
/// The reference design is single-threaded. With more than one worker the
/// next buffer is split into bands of whole rows that are filled on scoped
/// threads; the result is identical to the sequential path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of worker threads per step. `None` = sequential,
    /// `Some(0)` = auto-detect (`available_parallelism`).
    pub workers: Option<usize>,
}

impl EngineConfig {
    /// Upper bound on explicit worker counts.
    pub const MAX_WORKERS: usize = 64;

    /// Sequential stepping on the calling thread.
    pub fn sequential() -> Self {
        Self { workers: None }
    }

    /// Row-parallel stepping with `workers` threads (0 = auto-detect).
    pub fn parallel(workers: usize) -> Self {
        Self {
            workers: Some(workers),
        }
    }

    /// Resolve the actual worker count.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.workers {
            None => 1,
            Some(0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .clamp(1, Self::MAX_WORKERS),
            Some(n) => {
                let clamped = n.min(Self::MAX_WORKERS);
                if clamped != n {
                    warn!("worker count {n} clamped to {clamped}");
                }
                clamped
            }
        }
    }
}
