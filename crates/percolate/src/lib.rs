//! Percolate: bond percolation on square lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Percolate sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use percolate::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // A 32x32 lattice with every bond present with probability 0.6.
//! let mut lattice = LatticeGraph::new(32).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! lattice.generate_edges(0.6, &mut rng).unwrap();
//!
//! let largest = lattice.find_largest_cluster();
//! let members = lattice.cluster_members(&largest).unwrap();
//! assert_eq!(members.vertices.len(), largest.length);
//!
//! // The same thing through the stateful model.
//! let mut model = Percolation::new(SimConfig { size: 32, probability: 0.6, seed: 42 }).unwrap();
//! model.set_probability(1.0).unwrap();
//! assert_eq!(model.largest_cluster().length, 32 * 32);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `percolate-core` | Cells, bonds, cluster descriptors, errors |
//! | [`lattice`] | `percolate-lattice` | `LatticeGraph` and cluster discovery |
//! | [`sim`] | `percolate-sim` | Seeded model and probability sweeps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`percolate-core`).
pub use percolate_core as types;

/// The lattice graph and cluster discovery (`percolate-lattice`).
pub use percolate_lattice as lattice;

/// Seeded percolation model and probability sweeps (`percolate-sim`).
///
/// Run a sweep with [`sim::sweep::run`].
pub use percolate_sim as sim;

/// Common imports for typical Percolate usage.
///
/// ```rust
/// use percolate::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use percolate_core::{Bond, Cell, Cluster, ClusterMembers};

    // Errors
    pub use percolate_core::LatticeError;
    pub use percolate_sim::SimError;

    // Lattice
    pub use percolate_lattice::LatticeGraph;

    // Simulation
    pub use percolate_sim::{Percolation, SimConfig, SweepConfig, SweepPoint};
}
