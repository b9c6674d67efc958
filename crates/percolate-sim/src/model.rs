//! The stateful percolation model.

use crate::config::{validate_probability, SimConfig};
use crate::error::SimError;
use percolate_core::{Cluster, ClusterMembers};
use percolate_lattice::LatticeGraph;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// A lattice regenerated from a seeded RNG whenever its size or bond
/// probability changes.
///
/// The RNG is seeded once at construction and advanced by every
/// regeneration, so a model replaying the same sequence of setting
/// changes from the same seed reproduces every lattice exactly.
#[derive(Debug)]
pub struct Percolation {
    config: SimConfig,
    lattice: LatticeGraph,
    rng: ChaCha8Rng,
}

impl Percolation {
    /// Build and populate a lattice from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate_sim::{Percolation, SimConfig};
    ///
    /// let model = Percolation::new(SimConfig {
    ///     size: 10,
    ///     probability: 1.0,
    ///     seed: 3,
    /// })
    /// .unwrap();
    /// assert_eq!(model.largest_cluster().length, 100);
    /// ```
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut lattice = LatticeGraph::new(config.size)?;
        let added = lattice.generate_edges(config.probability, &mut rng)?;
        info!(
            size = config.size,
            probability = config.probability,
            seed = config.seed,
            bonds = added,
            "percolation model created"
        );
        Ok(Self {
            config,
            lattice,
            rng,
        })
    }

    /// Current settings.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Current lattice side length.
    pub fn size(&self) -> u32 {
        self.config.size
    }

    /// Current bond probability.
    pub fn probability(&self) -> f64 {
        self.config.probability
    }

    /// The current lattice.
    pub fn lattice(&self) -> &LatticeGraph {
        &self.lattice
    }

    /// Switch to a `size x size` lattice populated at the current
    /// probability.
    ///
    /// Returns `Ok(false)` without touching anything if `size` is
    /// unchanged. On error the model is unchanged.
    pub fn set_size(&mut self, size: u32) -> Result<bool, SimError> {
        if size == self.config.size {
            return Ok(false);
        }
        let mut lattice = LatticeGraph::new(size)?;
        let added = lattice.generate_edges(self.config.probability, &mut self.rng)?;
        debug!(from = self.config.size, to = size, bonds = added, "lattice resized");
        self.lattice = lattice;
        self.config.size = size;
        Ok(true)
    }

    /// Repopulate the lattice at bond probability `probability`.
    ///
    /// Returns `Ok(false)` without touching anything if `probability` is
    /// unchanged. On error the model is unchanged.
    pub fn set_probability(&mut self, probability: f64) -> Result<bool, SimError> {
        if probability == self.config.probability {
            return Ok(false);
        }
        validate_probability(probability)?;
        self.config.probability = probability;
        self.regenerate()?;
        let largest = self.largest_cluster();
        info!(
            probability,
            length = largest.length,
            start = %largest.starting_node,
            "largest cluster after probability change"
        );
        Ok(true)
    }

    /// Clear the lattice and draw a fresh bond set at the current settings.
    ///
    /// Returns the number of bonds drawn.
    pub fn regenerate(&mut self) -> Result<usize, SimError> {
        validate_probability(self.config.probability)?;
        self.lattice.clear_edges();
        let added = self
            .lattice
            .generate_edges(self.config.probability, &mut self.rng)?;
        debug!(
            size = self.config.size,
            probability = self.config.probability,
            bonds = added,
            "lattice regenerated"
        );
        Ok(added)
    }

    /// The largest cluster of the current lattice.
    pub fn largest_cluster(&self) -> Cluster {
        self.lattice.find_largest_cluster()
    }

    /// Every cell and bond of the largest cluster.
    pub fn largest_cluster_members(&self) -> Result<ClusterMembers, SimError> {
        let cluster = self.largest_cluster();
        Ok(self.lattice.cluster_members(&cluster)?)
    }
}
