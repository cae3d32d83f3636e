use crate::idx::Idx;

/// An edge record that belongs to a `next`-linked cycle
pub(crate) trait LinkedEdge: Sized {
    fn next(&self) -> Idx<Self>;
}

/// Walks a cycle: yields `first`, then its successors, and stops before `first` comes around again.
///
/// The sequence is finite as long as the cycle is well formed. It carries no visited set; callers
/// which must detect corrupted cycles track what they have seen themselves.
pub(crate) struct EdgeLoop<'a, E: LinkedEdge> {
    edges: Option<&'a [E]>,
    first: Idx<E>,
    cur: Idx<E>,
}

impl<'a, E: LinkedEdge> EdgeLoop<'a, E> {
    pub fn new(edges: &'a [E], first: Idx<E>) -> Self {
        Self {
            edges: Some(edges),
            first,
            cur: first,
        }
    }
}

impl<'a, E: LinkedEdge> Iterator for EdgeLoop<'a, E> {
    type Item = Idx<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges?;
        let cur = self.cur;
        self.cur = edges[cur].next();
        if self.cur == self.first {
            self.edges = None;
        }
        Some(cur)
    }
}
