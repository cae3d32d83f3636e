use std::{cmp, collections::VecDeque};

use smallvec::{SmallVec, smallvec};

use crate::{Double2, Triangle, TriangleWinding, VertexType, double2::signed_area2};

type ChainVertex = (Double2, VertexType);

/// `true` if `points` has exactly one local minimum and one local maximum in the sweep order
pub fn is_monotone(points: &[Double2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let (mut minima, mut maxima) = (0, 0);
    for i in 0..n {
        let v = points[i];
        let p = points[(i + n - 1) % n];
        let q = points[(i + 1) % n];
        match (p.precedes(&v), q.precedes(&v)) {
            (false, false) => minima += 1,
            (true, true) => maxima += 1,
            _ => {}
        }
    }
    minima == 1 && maxima == 1
}

/// Triangulates one y-monotone polygon.
///
/// The triangles are produced lazily. Each one is wound like `polygon`, so their signed areas add up
/// to the polygon's. Collinear triples are not filtered here. To walk the triangles again, call
/// this function again.
pub fn triangulate_monotone(polygon: &[Double2]) -> MonotoneTriangles {
    MonotoneTriangles::new(polygon)
}

pub struct MonotoneTriangles {
    // Every vertex in sweep order, the first and last being the two extremes
    merged: SmallVec<[ChainVertex; 16]>,
    next_index: usize,
    stack: SmallVec<[ChainVertex; 16]>,
    pending: VecDeque<Triangle>,
    winding: TriangleWinding,
}

impl MonotoneTriangles {
    fn new(polygon: &[Double2]) -> Self {
        let winding = if signed_area2(polygon) < 0. {
            TriangleWinding::Clockwise
        } else {
            TriangleWinding::Counterclockwise
        };
        let mut triangles = Self {
            merged: SmallVec::new(),
            next_index: 0,
            stack: SmallVec::new(),
            pending: VecDeque::new(),
            winding,
        };

        match polygon.len() {
            0..=2 => {}
            3 => triangles.pending.push_back(Triangle::new(polygon[0], polygon[1], polygon[2])),
            _ => {
                triangles.merged = merge_chains(polygon, winding);
                triangles.stack = smallvec![triangles.merged[0], triangles.merged[1]];
                triangles.next_index = 2;
            }
        }

        triangles
    }

    fn emit(&mut self, a: Double2, b: Double2, c: Double2) {
        self.pending.push_back(self.winding.apply(Triangle::new(a, b, c)));
    }

    // Processes one more vertex. Returns `false` once the end vertex has closed the stack.
    fn advance(&mut self) -> bool {
        let len = self.merged.len();
        if self.next_index + 1 < len {
            let u = self.merged[self.next_index];
            self.next_index += 1;
            if self.stack.last().map(|s| s.1) != Some(u.1) {
                self.connect_opposite(u);
            } else {
                self.connect_same(u);
            }
            true
        } else if self.next_index + 1 == len {
            let (end, _) = self.merged[self.next_index];
            self.next_index += 1;
            let stack = std::mem::take(&mut self.stack);
            for pair in stack.windows(2) {
                self.emit(end, pair[0].0, pair[1].0);
            }
            true
        } else {
            false
        }
    }

    // `u` sees every vertex on the stack across the polygon
    fn connect_opposite(&mut self, u: ChainVertex) {
        let stack = std::mem::take(&mut self.stack);
        for pair in stack.windows(2) {
            self.emit(u.0, pair[0].0, pair[1].0);
        }
        if let Some(&top) = stack.last() {
            self.stack.push(top);
        }
        self.stack.push(u);
    }

    // Cut ears off the stack for as long as the diagonal from `u` stays strictly inside.
    // Collinear entries stay on the stack until the opposite chain or the end vertex fans them.
    fn connect_same(&mut self, u: ChainVertex) {
        let Some(mut last) = self.stack.pop() else {
            self.stack.push(u);
            return;
        };
        while let Some(&top) = self.stack.last() {
            let cross = (last.0 - top.0).cross(u.0 - last.0);
            let inside = match u.1 {
                VertexType::RegularLeft => cross < 0.,
                _ => cross > 0.,
            };
            if !inside {
                break;
            }
            self.emit(top.0, last.0, u.0);
            last = top;
            self.stack.pop();
        }
        self.stack.push(last);
        self.stack.push(u);
    }
}

impl Iterator for MonotoneTriangles {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(triangle) = self.pending.pop_front() {
                return Some(triangle);
            }
            if !self.advance() {
                return None;
            }
        }
    }
}

// Splits the boundary at its extremes and merges both chains back in sweep order
fn merge_chains(polygon: &[Double2], winding: TriangleWinding) -> SmallVec<[ChainVertex; 16]> {
    let n = polygon.len();
    let by_sweep = |&i: &usize, &j: &usize| polygon[i].canonical_cmp(&polygon[j]).then(i.cmp(&j));
    let begin = (0..n).min_by(by_sweep).unwrap_or(0);
    let end = (0..n).max_by(by_sweep).unwrap_or(0);

    // Walking forward from the minimum runs up the east side of a counterclockwise polygon
    let (forward, backward) = match winding {
        TriangleWinding::Counterclockwise => (VertexType::RegularRight, VertexType::RegularLeft),
        TriangleWinding::Clockwise => (VertexType::RegularLeft, VertexType::RegularRight),
    };

    let mut chain_a: SmallVec<[ChainVertex; 16]> = SmallVec::new();
    let mut i = (begin + 1) % n;
    while i != end {
        chain_a.push((polygon[i], forward));
        i = (i + 1) % n;
    }
    let mut chain_b: SmallVec<[ChainVertex; 16]> = SmallVec::new();
    let mut i = (begin + n - 1) % n;
    while i != end {
        chain_b.push((polygon[i], backward));
        i = (i + n - 1) % n;
    }

    let mut merged: SmallVec<[ChainVertex; 16]> = SmallVec::with_capacity(n);
    merged.push((polygon[begin], backward));
    let (mut a, mut b) = (chain_a.into_iter().peekable(), chain_b.into_iter().peekable());
    loop {
        let take_a = match (a.peek(), b.peek()) {
            (Some(va), Some(vb)) => va.0.canonical_cmp(&vb.0) != cmp::Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_a { a.next() } else { b.next() };
        merged.extend(next);
    }
    merged.push((polygon[end], forward));
    merged
}
