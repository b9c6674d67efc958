//! Bitmap of visited vertices used by a single traversal.

/// A fixed-capacity set of vertex indices, one bit per vertex.
///
/// Each traversal allocates its own `VisitedSet`, so two traversals
/// never observe each other's markers and the lattice itself stays
/// immutable during queries.
#[derive(Clone, Debug)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// An all-unvisited set covering indices `0..len`.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Mark `index`. Returns `true` if it was not already marked.
    ///
    /// Indices beyond the capacity are ignored and return `false`.
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let word = &mut self.words[index / 64];
        let bit = 1u64 << (index % 64);
        if *word & bit != 0 {
            return false;
        }
        *word |= bit;
        true
    }
}
