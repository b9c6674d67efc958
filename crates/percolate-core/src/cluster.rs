//! Cluster descriptors and materialised cluster membership.

use crate::cell::{Bond, Cell};

/// Summary of a connected component discovered on a lattice.
///
/// `starting_node` is the cell the discovering traversal began from. Any
/// member could serve; full membership is re-derived on demand by
/// traversing again from this cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cluster {
    /// Number of cells in the component. Always at least 1.
    pub length: usize,
    /// A cell belonging to the component.
    pub starting_node: Cell,
}

/// Every vertex and bond of one cluster, as an independent snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterMembers {
    /// Member cells, in traversal order.
    pub vertices: Vec<Cell>,
    /// Member bonds, each reported exactly once.
    pub edges: Vec<Bond>,
}

impl ClusterMembers {
    /// Number of member cells.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for members produced by a lattice traversal, which
    /// includes at least the starting cell.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
