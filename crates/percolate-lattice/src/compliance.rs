//! Lattice invariant checks shared by the test modules.
//!
//! Each helper asserts one structural invariant of a [`LatticeGraph`]
//! against whatever bond set the caller has built.

use crate::lattice::LatticeGraph;
use percolate_core::{Bond, Cell};
use std::collections::HashSet;

/// Assert `cell_to_index` and `index_to_cell` are mutual inverses.
pub fn assert_index_bijection(g: &LatticeGraph) {
    for index in 0..g.cell_count() {
        let cell = g.index_to_cell(index).unwrap();
        assert_eq!(
            g.cell_to_index(cell).unwrap(),
            index,
            "index {index} -> {cell} does not map back"
        );
    }
}

/// Assert `edges()` matches `edge_count()`, contains only adjacent
/// ordered pairs, and has no duplicates.
pub fn assert_edges_canonical(g: &LatticeGraph) {
    let edges = g.edges();
    assert_eq!(edges.len(), g.edge_count(), "edge count mismatch");
    let unique: HashSet<Bond> = edges.iter().copied().collect();
    assert_eq!(unique.len(), edges.len(), "duplicate bonds in edges()");
    for bond in &edges {
        assert!(bond.low < bond.high, "bond {bond} not low-first");
        assert!(bond.low.is_adjacent(bond.high), "bond {bond} not adjacent");
        assert!(g.has_edge(bond.low, bond.high).unwrap());
        assert!(g.has_edge(bond.high, bond.low).unwrap());
    }
}

/// Assert `neighbours` is symmetric and agrees with `has_edge`.
pub fn assert_neighbours_symmetric(g: &LatticeGraph) {
    for index in 0..g.cell_count() {
        let cell = g.index_to_cell(index).unwrap();
        for nb in g.neighbours(cell).unwrap() {
            assert!(g.has_edge(cell, nb).unwrap());
            assert!(
                g.neighbours(nb).unwrap().contains(&cell),
                "{nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert the component census partitions the lattice and the largest
/// cluster agrees with the exhaustive maximum.
pub fn assert_census_consistent(g: &LatticeGraph) {
    let sizes = g.component_sizes();
    assert_eq!(sizes.iter().sum::<usize>(), g.cell_count());
    let largest = g.find_largest_cluster();
    assert_eq!(Some(&largest.length), sizes.iter().max());
    assert_eq!(
        g.component_size(largest.starting_node).unwrap(),
        largest.length
    );
}

/// Assert the members of the largest cluster are exactly the cells
/// reachable from its starting node, with every internal bond once.
pub fn assert_members_consistent(g: &LatticeGraph) {
    let cluster = g.find_largest_cluster();
    let members = g.cluster_members(&cluster).unwrap();
    assert_eq!(members.vertices.len(), cluster.length);
    assert_eq!(members.vertices.first(), Some(&cluster.starting_node));

    let vertex_set: HashSet<Cell> = members.vertices.iter().copied().collect();
    assert_eq!(vertex_set.len(), members.vertices.len(), "duplicate vertex");

    let expected: HashSet<Bond> = g
        .edges()
        .into_iter()
        .filter(|b| vertex_set.contains(&b.low))
        .collect();
    let got: HashSet<Bond> = members.edges.iter().copied().collect();
    assert_eq!(got.len(), members.edges.len(), "duplicate member bond");
    assert_eq!(got, expected);
}

/// Run every compliance check.
pub fn run_full_compliance(g: &LatticeGraph) {
    assert_index_bijection(g);
    assert_edges_canonical(g);
    assert_neighbours_symmetric(g);
    assert_census_consistent(g);
    assert_members_consistent(g);
}
