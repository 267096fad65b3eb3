//! Per-step metrics for the evolution engine.

use lifegrid_core::Generation;

/// Counts and timing collected during a single step.
///
/// `births` and `deaths` compare the committed generation with the one it
/// replaced; `population` is the live count after the commit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Generation that is current after the step.
    pub generation: Generation,
    /// Live cells after the step.
    pub population: usize,
    /// Dead cells that became alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
}

impl StepMetrics {
    /// Net population change over the step.
    pub fn delta(&self) -> i64 {
        self.births as i64 - self.deaths as i64
    }

    /// `true` if no cell changed state.
    pub fn is_still(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}
