//! Strongly-typed generation counter.

use std::fmt;

/// Number of generations committed since the grid was last initialized.
///
/// Loading a pattern resets the counter to `Generation(0)`; every commit
/// advances it by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation immediately after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
