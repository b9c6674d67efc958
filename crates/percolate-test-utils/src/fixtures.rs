//! Lattice builders with known cluster structure.
//!
//! - [`path_row`] — a horizontal path along one row.
//! - [`snake`] — a boustrophedon path covering the first `len` cells.
//! - [`snake_from_bottom`] — the same path mirrored to start at the bottom row.
//! - [`full_lattice`] — every bond present.
//! - [`seeded`] — a random lattice from a fixed ChaCha8 seed.

use percolate_core::Cell;
use percolate_lattice::LatticeGraph;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Cell `k` of the boustrophedon order: even rows left to right, odd rows
/// right to left.
pub fn snake_cell(size: u32, k: usize) -> Cell {
    let n = size as usize;
    let row = k / n;
    let col = if row % 2 == 0 { k % n } else { n - 1 - k % n };
    Cell::new(row as u32, col as u32)
}

/// A `size x size` lattice whose only bonds join `(row, from..=to)`.
pub fn path_row(size: u32, row: u32, from: u32, to: u32) -> LatticeGraph {
    let mut g = LatticeGraph::new(size).unwrap();
    for col in from..to {
        g.add_edge(Cell::new(row, col), Cell::new(row, col + 1))
            .unwrap();
    }
    g
}

/// One cluster of `len` cells snaking down from `(0, 0)`; every other cell
/// is isolated.
pub fn snake(size: u32, len: usize) -> LatticeGraph {
    let mut g = LatticeGraph::new(size).unwrap();
    for k in 1..len {
        g.add_edge(snake_cell(size, k - 1), snake_cell(size, k))
            .unwrap();
    }
    g
}

/// Like [`snake`], mirrored vertically so the cluster starts in the
/// bottom row and row-major scans reach it last.
pub fn snake_from_bottom(size: u32, len: usize) -> LatticeGraph {
    let mirror = |c: Cell| Cell::new(size - 1 - c.row, c.col);
    let mut g = LatticeGraph::new(size).unwrap();
    for k in 1..len {
        g.add_edge(
            mirror(snake_cell(size, k - 1)),
            mirror(snake_cell(size, k)),
        )
        .unwrap();
    }
    g
}

/// Every nearest-neighbour bond present.
pub fn full_lattice(size: u32) -> LatticeGraph {
    seeded(size, 1.0, 0)
}

/// Random lattice at probability `p` drawn from `ChaCha8Rng::seed_from_u64(seed)`.
pub fn seeded(size: u32, p: f64, seed: u64) -> LatticeGraph {
    let mut g = LatticeGraph::new(size).unwrap();
    g.generate_edges(p, &mut ChaCha8Rng::seed_from_u64(seed))
        .unwrap();
    g
}
