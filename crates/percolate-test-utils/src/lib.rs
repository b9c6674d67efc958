//! Test utilities for Percolate development.
//!
//! Provides lattice builders for known cluster shapes ([`fixtures`]) and
//! assertions that check a lattice's cluster answers against a brute-force
//! reference.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::{HashSet, VecDeque};

use percolate_core::{Bond, Cell};
use percolate_lattice::LatticeGraph;

/// Cells reachable from `start`, found by breadth-first search over
/// `has_edge` rather than the lattice's own traversal.
pub fn reachable_by_bfs(g: &LatticeGraph, start: Cell) -> HashSet<Cell> {
    let n = g.size();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        let mut candidates = Vec::with_capacity(4);
        if cell.row + 1 < n {
            candidates.push(Cell::new(cell.row + 1, cell.col));
        }
        if cell.row > 0 {
            candidates.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.col + 1 < n {
            candidates.push(Cell::new(cell.row, cell.col + 1));
        }
        if cell.col > 0 {
            candidates.push(Cell::new(cell.row, cell.col - 1));
        }
        for next in candidates {
            if g.has_edge(cell, next).unwrap() && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Largest component size, computed by repeated BFS over every cell.
pub fn brute_force_largest(g: &LatticeGraph) -> usize {
    let mut assigned: HashSet<Cell> = HashSet::new();
    let mut best = 0;
    for index in 0..g.cell_count() {
        let cell = g.index_to_cell(index).unwrap();
        if assigned.contains(&cell) {
            continue;
        }
        let component = reachable_by_bfs(g, cell);
        best = best.max(component.len());
        assigned.extend(component);
    }
    best
}

/// Assert that `find_largest_cluster` and `cluster_members` agree with
/// the brute-force reference.
pub fn assert_largest_cluster_matches_reference(g: &LatticeGraph) {
    let cluster = g.find_largest_cluster();
    assert_eq!(
        cluster.length,
        brute_force_largest(g),
        "largest cluster disagrees with brute force"
    );

    let members = g.cluster_members(&cluster).unwrap();
    let expected = reachable_by_bfs(g, cluster.starting_node);
    let got: HashSet<Cell> = members.vertices.iter().copied().collect();
    assert_eq!(got, expected, "member vertices differ from BFS reach");
    assert_eq!(members.vertices.len(), cluster.length);

    let bonds: HashSet<Bond> = members.edges.iter().copied().collect();
    assert_eq!(bonds.len(), members.edges.len(), "duplicate member bond");
    for bond in &members.edges {
        assert!(bond.low < bond.high);
        assert!(expected.contains(&bond.low) && expected.contains(&bond.high));
    }
}

/// If `left` and `right` differ as sets, panic listing the elements only
/// on each side.
pub fn assert_same_elements<T>(left: &[T], right: &[T])
where
    T: Clone + std::hash::Hash + Eq + std::fmt::Debug,
{
    let l: HashSet<T> = left.iter().cloned().collect();
    let r: HashSet<T> = right.iter().cloned().collect();
    if l != r {
        let left_only: Vec<_> = l.difference(&r).collect();
        let right_only: Vec<_> = r.difference(&l).collect();
        panic!("left has only {left_only:?}, right has only {right_only:?}");
    }
}
