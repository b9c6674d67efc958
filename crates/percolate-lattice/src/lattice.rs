//! The lattice graph: cells, canonical bond storage, and bond queries.

use percolate_core::{Bond, Cell, LatticeError};
use smallvec::SmallVec;

/// Adjacency entry of one vertex. Only bonds to larger indices are stored,
/// and a cell has at most two such neighbours (right and down).
pub(crate) type AdjEntry = SmallVec<[usize; 2]>;

/// An `N x N` square lattice with a set of present nearest-neighbour bonds.
///
/// Cell `(row, col)` has vertex index `row * N + col`. A bond between
/// indices `a` and `b` is stored once, in the adjacency entry of
/// `min(a, b)`. Insertion deduplicates, so each present bond is stored
/// exactly once.
///
/// The size is fixed for the lifetime of the graph; build a new graph to
/// change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeGraph {
    size: u32,
    pub(crate) adjacency: Vec<AdjEntry>,
    edge_count: usize,
}

impl LatticeGraph {
    /// Largest supported side length. `MAX_SIZE²` fits in a 32-bit `usize`.
    pub const MAX_SIZE: u32 = u16::MAX as u32;

    /// Create a `size x size` lattice with no bonds.
    ///
    /// Returns `Err(LatticeError::InvalidSize)` if `size` is 0 or exceeds
    /// [`MAX_SIZE`](Self::MAX_SIZE).
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate_lattice::LatticeGraph;
    ///
    /// let lattice = LatticeGraph::new(16).unwrap();
    /// assert_eq!(lattice.cell_count(), 256);
    /// assert_eq!(lattice.edge_count(), 0);
    /// assert!(LatticeGraph::new(0).is_err());
    /// ```
    pub fn new(size: u32) -> Result<Self, LatticeError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(LatticeError::InvalidSize {
                size,
                max: Self::MAX_SIZE,
            });
        }
        let cells = (size as usize) * (size as usize);
        Ok(Self {
            size,
            adjacency: vec![AdjEntry::new(); cells],
            edge_count: 0,
        })
    }

    /// Side length of the lattice.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells, `size²`.
    pub fn cell_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct bonds currently present.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertex index of `cell`, `row * size + col`.
    pub fn cell_to_index(&self, cell: Cell) -> Result<usize, LatticeError> {
        self.check_bounds(cell)?;
        Ok(self.index_of(cell))
    }

    /// Cell at vertex index `index`, `(index / size, index % size)`.
    pub fn index_to_cell(&self, index: usize) -> Result<Cell, LatticeError> {
        if index >= self.cell_count() {
            return Err(LatticeError::IndexOutOfBounds {
                index,
                cell_count: self.cell_count(),
            });
        }
        Ok(self.cell_at(index))
    }

    /// Record a bond between two adjacent cells.
    ///
    /// Returns `Ok(true)` if the bond was newly added and `Ok(false)` if it
    /// was already present. Fails without mutation if either cell is out of
    /// bounds or the cells are not nearest neighbours.
    pub fn add_edge(&mut self, a: Cell, b: Cell) -> Result<bool, LatticeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        if !a.is_adjacent(b) {
            return Err(LatticeError::NotAdjacent { a, b });
        }
        let (ia, ib) = (self.index_of(a), self.index_of(b));
        Ok(self.insert_canonical(ia.min(ib), ia.max(ib)))
    }

    /// Returns `true` if a bond between `a` and `b` has been added.
    ///
    /// Symmetric in its arguments. Non-adjacent pairs are never bonded and
    /// return `Ok(false)`.
    pub fn has_edge(&self, a: Cell, b: Cell) -> Result<bool, LatticeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        let (ia, ib) = (self.index_of(a), self.index_of(b));
        Ok(self.has_canonical(ia.min(ib), ia.max(ib)))
    }

    /// Every present bond, each exactly once.
    ///
    /// Cells are visited in row-major order; for each cell the bond to the
    /// right neighbour is reported before the bond to the cell below.
    pub fn edges(&self) -> Vec<Bond> {
        let n = self.size as usize;
        let mut out = Vec::with_capacity(self.edge_count);
        for (index, entry) in self.adjacency.iter().enumerate() {
            if entry.is_empty() {
                continue;
            }
            let cell = self.cell_at(index);
            if entry.contains(&(index + 1)) {
                out.push(Bond {
                    low: cell,
                    high: Cell::new(cell.row, cell.col + 1),
                });
            }
            if entry.contains(&(index + n)) {
                out.push(Bond {
                    low: cell,
                    high: Cell::new(cell.row + 1, cell.col),
                });
            }
        }
        out
    }

    /// Remove every bond. The lattice size is unchanged.
    pub fn clear_edges(&mut self) {
        self.adjacency.iter_mut().for_each(SmallVec::clear);
        self.edge_count = 0;
    }

    /// Cells joined to `cell` by a present bond, in down, up, right, left
    /// order.
    pub fn neighbours(&self, cell: Cell) -> Result<SmallVec<[Cell; 4]>, LatticeError> {
        self.check_bounds(cell)?;
        Ok(self
            .bonded_neighbours(self.index_of(cell))
            .into_iter()
            .map(|i| self.cell_at(i))
            .collect())
    }

    // ── internal index helpers ──────────────────────────────────

    pub(crate) fn check_bounds(&self, cell: Cell) -> Result<(), LatticeError> {
        if cell.row >= self.size || cell.col >= self.size {
            return Err(LatticeError::OutOfBounds {
                cell,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Index of an in-bounds cell.
    pub(crate) fn index_of(&self, cell: Cell) -> usize {
        (cell.row as usize) * (self.size as usize) + (cell.col as usize)
    }

    /// Cell of an in-range index.
    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        let n = self.size as usize;
        Cell::new((index / n) as u32, (index % n) as u32)
    }

    /// Push `high` into the entry of `low` unless already present.
    pub(crate) fn insert_canonical(&mut self, low: usize, high: usize) -> bool {
        let entry = &mut self.adjacency[low];
        if entry.contains(&high) {
            return false;
        }
        entry.push(high);
        self.edge_count += 1;
        true
    }

    fn has_canonical(&self, low: usize, high: usize) -> bool {
        self.adjacency[low].contains(&high)
    }

    /// Indices bonded to the in-range vertex `index`, in down, up, right,
    /// left order.
    pub(crate) fn bonded_neighbours(&self, index: usize) -> SmallVec<[usize; 4]> {
        let n = self.size as usize;
        let (row, col) = (index / n, index % n);
        let mut out = SmallVec::new();
        if row + 1 < n && self.has_canonical(index, index + n) {
            out.push(index + n);
        }
        if row > 0 && self.has_canonical(index - n, index) {
            out.push(index - n);
        }
        if col + 1 < n && self.has_canonical(index, index + 1) {
            out.push(index + 1);
        }
        if col > 0 && self.has_canonical(index - 1, index) {
            out.push(index - 1);
        }
        out
    }
}
