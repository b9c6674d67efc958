//! Error types for lattice construction, mutation, and queries.

use crate::cell::Cell;
use std::error::Error;
use std::fmt;

/// Errors arising from lattice operations.
///
/// Every fallible lattice operation validates its inputs before touching
/// state, so an `Err` always means the lattice is unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum LatticeError {
    /// The requested lattice size is zero or exceeds the supported maximum.
    InvalidSize {
        /// The rejected size.
        size: u32,
        /// Largest accepted size.
        max: u32,
    },
    /// A bond probability outside `[0, 1]`, or NaN.
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },
    /// A cell lies outside the `size x size` lattice.
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Side length of the lattice.
        size: u32,
    },
    /// A vertex index lies outside `[0, size²)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of cells in the lattice.
        cell_count: usize,
    },
    /// Two cells that are not nearest neighbours were passed as a bond.
    NotAdjacent {
        /// First endpoint.
        a: Cell,
        /// Second endpoint.
        b: Cell,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => {
                write!(f, "lattice size {size} outside [1, {max}]")
            }
            Self::InvalidProbability { value } => {
                write!(f, "probability {value} outside [0, 1]")
            }
            Self::OutOfBounds { cell, size } => {
                write!(f, "cell {cell} out of bounds: [0, {size}) x [0, {size})")
            }
            Self::IndexOutOfBounds { index, cell_count } => {
                write!(f, "vertex index {index} out of bounds: [0, {cell_count})")
            }
            Self::NotAdjacent { a, b } => {
                write!(f, "cells {a} and {b} are not lattice neighbours")
            }
        }
    }
}

impl Error for LatticeError {}
