use std::cmp;

use crate::{Double2, idx::Idx, sweep_graph::SweepEdge};

/// A boundary edge currently crossed by the sweep line, ordered left to right.
///
/// `from` always precedes `to` in the sweep order. A point query (`edge == None`) is a single point,
/// and every stored edge strictly left of that point compares less than it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveEdge {
    pub edge: Option<Idx<SweepEdge>>,
    from: Double2,
    to: Double2,
}

impl ActiveEdge {
    pub fn new(edge: Idx<SweepEdge>, a: Double2, b: Double2) -> Self {
        let (from, to) = if a.precedes(&b) { (a, b) } else { (b, a) };
        Self {
            edge: Some(edge),
            from,
            to,
        }
    }

    pub fn point(p: Double2) -> Self {
        Self {
            edge: None,
            from: p,
            to: p,
        }
    }

    fn same_segment(&self, other: &Self) -> bool {
        (self.from == other.from && self.to == other.to) || (self.from == other.to && self.to == other.from)
    }

    // Judges `other` by the side of `self`'s line its endpoints fall on
    fn side_of(&self, other: &Self) -> Option<cmp::Ordering> {
        let dir = self.to - self.from;
        let s0 = dir.cross(other.from - self.from);
        let s1 = dir.cross(other.to - self.from);
        // A negative cross product puts the point right of an edge heading along the sweep
        if s0 <= 0. && s1 <= 0. && (s0 < 0. || s1 < 0.) {
            Some(cmp::Ordering::Less)
        } else if s0 >= 0. && s1 >= 0. && (s0 > 0. || s1 > 0.) {
            Some(cmp::Ordering::Greater)
        } else {
            None
        }
    }
}

impl PartialEq for ActiveEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == cmp::Ordering::Equal
    }
}

impl Eq for ActiveEdge { }

impl PartialOrd for ActiveEdge {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ActiveEdge {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        if self.edge.is_some() && self.edge == other.edge {
            return cmp::Ordering::Equal;
        }
        if self.edge.is_some() && other.edge.is_some() && self.same_segment(other) {
            return cmp::Ordering::Equal;
        }
        self.side_of(other)
            .or_else(|| other.side_of(self).map(cmp::Ordering::reverse))
            .unwrap_or_else(|| self.edge.cmp(&other.edge))
    }
}
