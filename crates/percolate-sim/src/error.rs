//! Errors from the simulation driver.

use percolate_core::LatticeError;
use std::error::Error;
use std::fmt;

/// Errors from model construction, parameter changes, and sweeps.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// A lattice operation rejected its input.
    Lattice(LatticeError),
    /// A configuration value failed validation.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
    /// A sweep worker thread panicked.
    WorkerPanicked,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice error: {e}"),
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::WorkerPanicked => write!(f, "sweep worker panicked"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for SimError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}
