//! Benchmark profiles for the Percolate workspace.
//!
//! - [`reference_lattice`]: 256x256 lattice (~65K cells) near the bond
//!   percolation threshold
//! - [`stress_lattice`]: 1024x1024 lattice (~1M cells) at the same probability
//! - [`reference_sweep`]: a small multi-worker probability sweep

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use percolate_lattice::LatticeGraph;
use percolate_sim::SweepConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Bond percolation threshold of the infinite square lattice.
pub const CRITICAL_PROBABILITY: f64 = 0.5;

/// Build a `size x size` lattice populated at `probability` from `seed`.
pub fn populated_lattice(size: u32, probability: f64, seed: u64) -> LatticeGraph {
    let mut lattice = LatticeGraph::new(size).unwrap();
    lattice
        .generate_edges(probability, &mut ChaCha8Rng::seed_from_u64(seed))
        .unwrap();
    lattice
}

/// 256x256 lattice at the critical probability.
pub fn reference_lattice(seed: u64) -> LatticeGraph {
    populated_lattice(256, CRITICAL_PROBABILITY, seed)
}

/// 1024x1024 lattice at the critical probability.
pub fn stress_lattice(seed: u64) -> LatticeGraph {
    populated_lattice(1024, CRITICAL_PROBABILITY, seed)
}

/// 64x64 sweep over 11 probabilities, 4 trials each, on 4 workers.
pub fn reference_sweep(seed: u64) -> SweepConfig {
    let mut cfg = SweepConfig::linspace(64, 11, 4);
    cfg.seed = seed;
    cfg.workers = 4;
    cfg
}
