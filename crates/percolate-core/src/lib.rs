//! Core types and errors for the Percolate workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types that cross crate boundaries: lattice cells, bonds,
//! cluster descriptors, and the lattice error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod cluster;
pub mod error;

pub use cell::{Bond, Cell};
pub use cluster::{Cluster, ClusterMembers};
pub use error::LatticeError;
