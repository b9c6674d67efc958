//! Cluster discovery over present bonds.
//!
//! All traversals are iterative depth-first searches with an explicit
//! stack of pending vertex indices, so a single cluster snaking through
//! the whole lattice costs heap memory rather than call-stack depth.
//! Each public query allocates its own visited bitmap and therefore
//! takes `&self`.

use crate::lattice::LatticeGraph;
use crate::visited::VisitedSet;
use percolate_core::{Bond, Cell, Cluster, ClusterMembers, LatticeError};
use tracing::trace;

impl LatticeGraph {
    /// Depth-first traversal from `start` over present bonds.
    ///
    /// Marks every reached vertex in `visited` and calls `visit(vertex,
    /// bonded_neighbours)` once per vertex, in pre-order. Returns the
    /// number of vertices reached. `start` must be in range; if it is
    /// already marked nothing is visited and 0 is returned.
    fn traverse<F>(&self, start: usize, visited: &mut VisitedSet, mut visit: F) -> usize
    where
        F: FnMut(usize, &[usize]),
    {
        if !visited.insert(start) {
            return 0;
        }
        let mut stack = vec![start];
        let mut count = 0;
        while let Some(vertex) = stack.pop() {
            count += 1;
            let neighbours = self.bonded_neighbours(vertex);
            visit(vertex, &neighbours);
            // Reversed so the first neighbour is explored first.
            for &next in neighbours.iter().rev() {
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }
        count
    }

    /// Number of cells in the cluster containing `cell`, including `cell`.
    pub fn component_size(&self, cell: Cell) -> Result<usize, LatticeError> {
        self.check_bounds(cell)?;
        let mut visited = VisitedSet::new(self.cell_count());
        Ok(self.traverse(self.index_of(cell), &mut visited, |_, _| {}))
    }

    /// Find the largest cluster on the lattice.
    ///
    /// Cells are scanned in row-major order and each unvisited cell seeds
    /// a traversal. A strictly larger cluster replaces the current best,
    /// so ties keep the first found. A cluster holding more than half of
    /// all cells cannot be beaten by any disjoint cluster, so the scan
    /// stops as soon as one is found.
    ///
    /// With no bonds every cell is its own cluster and the result is
    /// `{ length: 1, starting_node: (0, 0) }`.
    pub fn find_largest_cluster(&self) -> Cluster {
        let total = self.cell_count();
        let mut visited = VisitedSet::new(total);
        let mut best = Cluster {
            length: 0,
            starting_node: Cell::new(0, 0),
        };
        for start in 0..total {
            let length = self.traverse(start, &mut visited, |_, _| {});
            if length > best.length {
                best = Cluster {
                    length,
                    starting_node: self.cell_at(start),
                };
                if length > total / 2 {
                    trace!(
                        length,
                        total,
                        start = %best.starting_node,
                        "majority cluster found, stopping scan"
                    );
                    return best;
                }
            }
        }
        best
    }

    /// Sizes of every cluster, in the row-major order of their first cell.
    ///
    /// Unlike [`find_largest_cluster`](Self::find_largest_cluster) this
    /// always scans the whole lattice. The sizes sum to `size²`.
    pub fn component_sizes(&self) -> Vec<usize> {
        let total = self.cell_count();
        let mut visited = VisitedSet::new(total);
        let mut sizes = Vec::new();
        for start in 0..total {
            let length = self.traverse(start, &mut visited, |_, _| {});
            if length > 0 {
                sizes.push(length);
            }
        }
        sizes
    }

    /// Materialise every cell and bond of `cluster`.
    ///
    /// Traverses again from `cluster.starting_node`. Vertices are returned
    /// in traversal order, starting node first. A bond is recorded only
    /// when stepping from its lower-index endpoint to the higher one, so
    /// each internal bond appears exactly once, low endpoint first.
    ///
    /// `cluster.length` is not consulted; the result reflects the current
    /// bond set.
    pub fn cluster_members(&self, cluster: &Cluster) -> Result<ClusterMembers, LatticeError> {
        self.check_bounds(cluster.starting_node)?;
        let mut visited = VisitedSet::new(self.cell_count());
        let mut members = ClusterMembers::default();
        self.traverse(
            self.index_of(cluster.starting_node),
            &mut visited,
            |vertex, neighbours| {
                let cell = self.cell_at(vertex);
                members.vertices.push(cell);
                for &next in neighbours {
                    if vertex < next {
                        members.edges.push(Bond {
                            low: cell,
                            high: self.cell_at(next),
                        });
                    }
                }
            },
        );
        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use crate::compliance;
    use crate::lattice::LatticeGraph;
    use percolate_core::{Bond, Cell, Cluster, LatticeError};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn c(row: u32, col: u32) -> Cell {
        Cell::new(row, col)
    }

    fn connect_row(g: &mut LatticeGraph, row: u32, from: u32, to: u32) {
        for col in from..to {
            g.add_edge(c(row, col), c(row, col + 1)).unwrap();
        }
    }

    #[test]
    fn three_cell_path_scenario() {
        let mut g = LatticeGraph::new(3).unwrap();
        g.add_edge(c(0, 0), c(0, 1)).unwrap();
        g.add_edge(c(0, 1), c(0, 2)).unwrap();

        let cluster = g.find_largest_cluster();
        assert_eq!(
            cluster,
            Cluster {
                length: 3,
                starting_node: c(0, 0)
            }
        );

        let members = g.cluster_members(&cluster).unwrap();
        let vertices: HashSet<_> = members.vertices.iter().copied().collect();
        assert_eq!(vertices, HashSet::from([c(0, 0), c(0, 1), c(0, 2)]));
        let edges: HashSet<_> = members.edges.iter().map(Bond::as_tuple).collect();
        assert_eq!(edges, HashSet::from([(0, 0, 0, 1), (0, 1, 0, 2)]));
    }

    #[test]
    fn empty_lattice_yields_origin_singleton() {
        let g = LatticeGraph::new(2).unwrap();
        assert_eq!(
            g.find_largest_cluster(),
            Cluster {
                length: 1,
                starting_node: c(0, 0)
            }
        );
        assert_eq!(g.component_sizes(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn single_cell_lattice_cluster() {
        let g = LatticeGraph::new(1).unwrap();
        let cluster = g.find_largest_cluster();
        assert_eq!(cluster.length, 1);
        let members = g.cluster_members(&cluster).unwrap();
        assert_eq!(members.vertices, vec![c(0, 0)]);
        assert!(members.edges.is_empty());
    }

    #[test]
    fn ties_keep_first_found() {
        let mut g = LatticeGraph::new(4).unwrap();
        connect_row(&mut g, 1, 0, 2);
        connect_row(&mut g, 3, 1, 3);
        let cluster = g.find_largest_cluster();
        assert_eq!(cluster.length, 3);
        assert_eq!(cluster.starting_node, c(1, 0));
    }

    #[test]
    fn later_larger_cluster_wins() {
        let mut g = LatticeGraph::new(4).unwrap();
        g.add_edge(c(0, 0), c(0, 1)).unwrap();
        connect_row(&mut g, 2, 0, 3);
        let cluster = g.find_largest_cluster();
        assert_eq!(cluster.length, 4);
        assert_eq!(cluster.starting_node, c(2, 0));
    }

    #[test]
    fn majority_cluster_found_late() {
        // 4x4: rows 2 and 3 fully joined (8 cells) plus (1,3) = 9 > 16 / 2.
        let mut g = LatticeGraph::new(4).unwrap();
        connect_row(&mut g, 2, 0, 3);
        connect_row(&mut g, 3, 0, 3);
        for col in 0..4 {
            g.add_edge(c(2, col), c(3, col)).unwrap();
        }
        g.add_edge(c(1, 3), c(2, 3)).unwrap();
        let cluster = g.find_largest_cluster();
        assert_eq!(cluster.length, 9);
        assert_eq!(cluster.starting_node, c(1, 3));
        assert_eq!(g.cluster_members(&cluster).unwrap().len(), 9);
    }

    #[test]
    fn majority_cluster_found_early() {
        // 3x3: first row plus (1,0) and (1,1) = 5 > 9 / 2.
        let mut g = LatticeGraph::new(3).unwrap();
        connect_row(&mut g, 0, 0, 2);
        g.add_edge(c(0, 0), c(1, 0)).unwrap();
        g.add_edge(c(1, 0), c(1, 1)).unwrap();
        g.add_edge(c(2, 1), c(2, 2)).unwrap();
        let cluster = g.find_largest_cluster();
        assert_eq!(
            cluster,
            Cluster {
                length: 5,
                starting_node: c(0, 0)
            }
        );
    }

    #[test]
    fn exactly_half_does_not_stop_scan() {
        // 2x2 with one bond per row: two clusters of 2 = half each, so the
        // first is kept and the scan completes.
        let mut g = LatticeGraph::new(2).unwrap();
        g.add_edge(c(0, 0), c(0, 1)).unwrap();
        g.add_edge(c(1, 0), c(1, 1)).unwrap();
        let cluster = g.find_largest_cluster();
        assert_eq!(cluster.length, 2);
        assert_eq!(cluster.starting_node, c(0, 0));
        assert_eq!(g.component_sizes(), vec![2, 2]);
    }

    #[test]
    fn component_size_counts_reachable_cells() {
        let mut g = LatticeGraph::new(3).unwrap();
        g.add_edge(c(1, 1), c(1, 2)).unwrap();
        g.add_edge(c(1, 2), c(2, 2)).unwrap();
        assert_eq!(g.component_size(c(2, 2)).unwrap(), 3);
        assert_eq!(g.component_size(c(0, 0)).unwrap(), 1);
        assert!(matches!(
            g.component_size(c(3, 0)),
            Err(LatticeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn cluster_members_records_cycle_bonds_once() {
        let mut g = LatticeGraph::new(2).unwrap();
        g.add_edge(c(0, 0), c(0, 1)).unwrap();
        g.add_edge(c(0, 1), c(1, 1)).unwrap();
        g.add_edge(c(1, 1), c(1, 0)).unwrap();
        g.add_edge(c(1, 0), c(0, 0)).unwrap();
        let cluster = g.find_largest_cluster();
        let members = g.cluster_members(&cluster).unwrap();
        assert_eq!(members.vertices.len(), 4);
        assert_eq!(members.edges.len(), 4);
        let mut got = members.edges.clone();
        got.sort();
        assert_eq!(got, g.edges());
    }

    #[test]
    fn cluster_members_rejects_out_of_bounds_start() {
        let g = LatticeGraph::new(2).unwrap();
        let bogus = Cluster {
            length: 1,
            starting_node: c(0, 2),
        };
        assert!(matches!(
            g.cluster_members(&bogus),
            Err(LatticeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn members_are_a_snapshot() {
        let mut g = LatticeGraph::new(3).unwrap();
        g.add_edge(c(0, 0), c(0, 1)).unwrap();
        let cluster = g.find_largest_cluster();
        let members = g.cluster_members(&cluster).unwrap();
        g.clear_edges();
        assert_eq!(cluster.length, 2);
        assert_eq!(members.vertices.len(), 2);
        assert_eq!(members.edges.len(), 1);
    }

    #[test]
    fn serpentine_cluster_spans_large_lattice() {
        let n = 1000u32;
        let mut g = LatticeGraph::new(n).unwrap();
        for row in 0..n {
            connect_row(&mut g, row, 0, n - 1);
            if row + 1 < n {
                let col = if row % 2 == 0 { n - 1 } else { 0 };
                g.add_edge(c(row, col), c(row + 1, col)).unwrap();
            }
        }
        let total = (n as usize) * (n as usize);
        let cluster = g.find_largest_cluster();
        assert_eq!(cluster.length, total);
        let members = g.cluster_members(&cluster).unwrap();
        assert_eq!(members.vertices.len(), total);
        assert_eq!(members.edges.len(), total - 1);
    }

    fn arb_lattice() -> impl Strategy<Value = LatticeGraph> {
        (1u32..9).prop_flat_map(|size| {
            let slots = (2 * size * (size - 1)) as usize;
            proptest::collection::vec(any::<bool>(), slots).prop_map(move |mask| {
                let mut g = LatticeGraph::new(size).unwrap();
                let mut bits = mask.into_iter();
                for row in 0..size {
                    for col in 0..size {
                        if col + 1 < size && bits.next().unwrap_or(false) {
                            g.add_edge(c(row, col), c(row, col + 1)).unwrap();
                        }
                        if row + 1 < size && bits.next().unwrap_or(false) {
                            g.add_edge(c(row, col), c(row + 1, col)).unwrap();
                        }
                    }
                }
                g
            })
        })
    }

    proptest! {
        #[test]
        fn arbitrary_lattices_are_compliant(g in arb_lattice()) {
            compliance::run_full_compliance(&g);
        }

        #[test]
        fn largest_cluster_bounded_by_cell_count(g in arb_lattice()) {
            let cluster = g.find_largest_cluster();
            prop_assert!(cluster.length >= 1);
            prop_assert!(cluster.length <= g.cell_count());
        }

        #[test]
        fn members_reachable_via_recorded_bonds(g in arb_lattice()) {
            let cluster = g.find_largest_cluster();
            let members = g.cluster_members(&cluster).unwrap();
            // Every vertex after the first must be bonded to an earlier one.
            let mut seen = HashSet::from([members.vertices[0]]);
            for &v in &members.vertices[1..] {
                let nbs = g.neighbours(v).unwrap();
                prop_assert!(nbs.iter().any(|nb| seen.contains(nb)));
                seen.insert(v);
            }
        }
    }
}
