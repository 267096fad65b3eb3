//! Errors from the collaborators around the automaton.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use lifegrid_arena::GridError;

/// Failure to obtain a pattern source.
#[derive(Debug)]
pub enum LoadError {
    /// The pattern file could not be opened or read.
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not open file {} for reading: {source}", path.display())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Errors from building or running a [`Simulation`](crate::driver::Simulation).
#[derive(Debug)]
pub enum RunError {
    /// The initial pattern could not be loaded.
    Load(LoadError),
    /// The grid configuration or seed parameters are invalid.
    Grid(GridError),
    /// A save path was given for a run that never finishes.
    UnboundedSave {
        /// The requested save path.
        path: PathBuf,
    },
    /// Writing a frame or saving the final pattern failed.
    Output(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "{e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::UnboundedSave { path } => write!(
                f,
                "cannot save to {}: the run has no generation limit",
                path.display()
            ),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::UnboundedSave { .. } => None,
            Self::Output(e) => Some(e),
        }
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<GridError> for RunError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}
