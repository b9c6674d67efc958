//! Lattice cells and the bonds between them.

use std::fmt;

/// A cell of a square lattice, addressed by `(row, col)`.
///
/// Cells carry no knowledge of the lattice they belong to; bounds are
/// checked by the lattice operations that accept them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: u32,
    /// Column index, counted from the left.
    pub col: u32,
}

impl Cell {
    /// Construct a cell from a row and column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns `true` if `self` and `other` differ by exactly one step
    /// along exactly one axis.
    ///
    /// ```
    /// use percolate_core::Cell;
    ///
    /// assert!(Cell::new(2, 3).is_adjacent(Cell::new(2, 4)));
    /// assert!(!Cell::new(2, 3).is_adjacent(Cell::new(3, 4)));
    /// assert!(!Cell::new(2, 3).is_adjacent(Cell::new(2, 3)));
    /// ```
    pub fn is_adjacent(self, other: Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An undirected bond between two lattice-adjacent cells.
///
/// `low` is always the endpoint with the smaller row-major index, which
/// in a square lattice means `high` lies directly right of or directly
/// below `low`. Constructing through [`Bond::new`] enforces the ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bond {
    /// Endpoint with the smaller row-major index.
    pub low: Cell,
    /// Endpoint with the larger row-major index.
    pub high: Cell,
}

impl Bond {
    /// Construct a bond, ordering the endpoints so that `low < high` in
    /// row-major order.
    ///
    /// Row-major order on cells coincides with vertex-index order for
    /// every lattice size, so no size is needed here.
    pub fn new(a: Cell, b: Cell) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The bond as an `(i1, j1, i2, j2)` tuple, low endpoint first.
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.low.row, self.low.col, self.high.row, self.high.col)
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
