//! Square-lattice bond graph for percolation experiments.
//!
//! [`LatticeGraph`] owns an `N x N` set of cells and the set of present
//! nearest-neighbour bonds between them. It supports bond insertion and
//! query, random bond generation from an injected RNG, and cluster
//! (connected-component) discovery including the largest-cluster search
//! and extraction of a cluster's member cells and bonds.
//!
//! ```
//! use percolate_core::Cell;
//! use percolate_lattice::LatticeGraph;
//!
//! let mut lattice = LatticeGraph::new(3).unwrap();
//! lattice.add_edge(Cell::new(0, 0), Cell::new(0, 1)).unwrap();
//! lattice.add_edge(Cell::new(0, 1), Cell::new(0, 2)).unwrap();
//!
//! let largest = lattice.find_largest_cluster();
//! assert_eq!(largest.length, 3);
//! assert_eq!(largest.starting_node, Cell::new(0, 0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generate;
pub mod lattice;
pub mod traverse;
mod visited;

#[cfg(test)]
pub(crate) mod compliance;

pub use lattice::LatticeGraph;
