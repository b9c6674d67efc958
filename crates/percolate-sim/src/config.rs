//! Model configuration.

use crate::error::SimError;
use percolate_core::LatticeError;
use percolate_lattice::LatticeGraph;

/// Settings for a [`Percolation`](crate::Percolation) model.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Lattice side length, in `[1, LatticeGraph::MAX_SIZE]`.
    pub size: u32,
    /// Independent bond probability, in `[0, 1]`.
    pub probability: f64,
    /// Seed for the model's ChaCha8 RNG.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 25,
            probability: 0.5,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Check every field without building anything.
    pub fn validate(&self) -> Result<(), SimError> {
        validate_size(self.size)?;
        validate_probability(self.probability)?;
        Ok(())
    }
}

pub(crate) fn validate_size(size: u32) -> Result<(), SimError> {
    if size == 0 || size > LatticeGraph::MAX_SIZE {
        return Err(LatticeError::InvalidSize {
            size,
            max: LatticeGraph::MAX_SIZE,
        }
        .into());
    }
    Ok(())
}

pub(crate) fn validate_probability(probability: f64) -> Result<(), SimError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(LatticeError::InvalidProbability { value: probability }.into());
    }
    Ok(())
}
