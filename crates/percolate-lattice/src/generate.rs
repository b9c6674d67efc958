//! Random bond generation.
//!
//! Randomness is always supplied by the caller, so seeding a generator
//! such as `ChaCha8Rng` reproduces the exact bond set.

use crate::lattice::LatticeGraph;
use percolate_core::LatticeError;
use rand::Rng;
use tracing::debug;

impl LatticeGraph {
    /// Add each possible bond independently with probability `probability`.
    ///
    /// Cells are visited in row-major order. For each cell one uniform
    /// `[0, 1)` draw decides its right bond (skipped in the last column),
    /// then a second draw decides its down bond (skipped in the last row).
    /// A bond is added iff its draw is below `probability`, so `0.0` adds
    /// nothing and `1.0` completes the lattice.
    ///
    /// Existing bonds are kept; call [`clear_edges`](Self::clear_edges)
    /// first to regenerate from scratch. Returns the number of bonds added.
    ///
    /// Fails with `InvalidProbability`, leaving the lattice unchanged, if
    /// `probability` is NaN or outside `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate_lattice::LatticeGraph;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut lattice = LatticeGraph::new(8).unwrap();
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// lattice.generate_edges(1.0, &mut rng).unwrap();
    /// assert_eq!(lattice.edge_count(), 2 * 8 * 7);
    /// assert_eq!(lattice.find_largest_cluster().length, 64);
    /// ```
    pub fn generate_edges<R>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<usize, LatticeError>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&probability) {
            return Err(LatticeError::InvalidProbability { value: probability });
        }
        let n = self.size() as usize;
        let mut added = 0;
        for row in 0..n {
            for col in 0..n {
                let index = row * n + col;
                if col + 1 < n
                    && rng.random::<f64>() < probability
                    && self.insert_canonical(index, index + 1)
                {
                    added += 1;
                }
                if row + 1 < n
                    && rng.random::<f64>() < probability
                    && self.insert_canonical(index, index + n)
                {
                    added += 1;
                }
            }
        }
        debug!(
            size = self.size(),
            probability,
            added,
            total = self.edge_count(),
            "generated bonds"
        );
        Ok(added)
    }
}
