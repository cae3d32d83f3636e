use std::fmt::{self, Write};

use crate::{Double2, FillRule, dcel::DcelEdge, edge_loop::EdgeLoop, idx::{Idx, IdxDisplay}};

/// One planar region of a [Dcel](crate::Dcel), bounded by one or more edge cycles.
///
/// Every edge of every contour has the face on its left (y-up), so a bounded face lists its outer
/// boundary counterclockwise and its holes clockwise. The methods take the edge arena of the
/// owning DCEL.
#[derive(Debug, Clone)]
pub struct Face {
    /// One edge of each boundary cycle
    pub contours: Vec<Idx<DcelEdge>>,
    /// Accumulated winding of the region, set by [Dcel::assign_fill_numbers](crate::Dcel::assign_fill_numbers)
    pub fill_number: isize,
    pub is_outer: bool,
}

impl IdxDisplay for Face {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "f{}", idx)
    }
}

impl Face {
    pub(crate) fn new() -> Self {
        Self {
            contours: Vec::new(),
            fill_number: 0,
            is_outer: false,
        }
    }

    pub(crate) fn outer() -> Self {
        Self {
            contours: Vec::new(),
            fill_number: 0,
            is_outer: true,
        }
    }

    pub(crate) fn edges<'a>(&'a self, edges: &'a [DcelEdge]) -> impl Iterator<Item=Idx<DcelEdge>> + 'a {
        self.contours.iter().flat_map(move |&c| EdgeLoop::new(edges, c))
    }

    /// Twice the signed area enclosed by the boundary
    pub fn winding(&self, edges: &[DcelEdge]) -> f64 {
        self.edges(edges)
            .map(|ei| {
                let e = &edges[ei];
                e.from.cross(e.to)
            })
            .sum()
    }

    /// Horizontal ray parity test.
    ///
    /// Edges separating two copies of this same face are skipped and horizontal edges never count.
    /// A crossing counts when the point's `y` lies in the half-open span of the edge (closed at the
    /// lower endpoint), so a vertex shared by two edges is counted once. The outer face starts
    /// inside, which inverts its parity.
    pub fn contains_vertex(&self, edges: &[DcelEdge], point: Double2) -> bool {
        let mut contains = self.is_outer;

        for ei in self.edges(edges) {
            let e = &edges[ei];
            if e.face == edges[e.twin].face {
                continue;
            }

            let (lo, hi) = if e.from.y < e.to.y { (e.from, e.to) } else { (e.to, e.from) };
            if lo.y == hi.y || point.y < lo.y || point.y >= hi.y {
                continue;
            }

            let t = (point.y - lo.y) / (hi.y - lo.y);
            let x = lo.x + t * (hi.x - lo.x);
            if x >= point.x {
                contains = !contains;
            }
        }

        contains
    }

    /// `M x y L x y ... Z` for each contour. Meant for diagnostics, not a stable format.
    pub fn path_commands(&self, edges: &[DcelEdge]) -> String {
        let mut commands = String::new();
        for &c in &self.contours {
            for (i, ei) in EdgeLoop::new(edges, c).enumerate() {
                let from = edges[ei].from;
                let command = if i == 0 { 'M' } else { 'L' };
                // Writing to a String cannot fail
                let _ = write!(commands, "{} {} {} ", command, from.x, from.y);
            }
            commands.push_str("Z ");
        }
        commands.truncate(commands.trim_end().len());
        commands
    }

    /// The boundary cycles as point lists, with the interior on their left (y-up)
    pub fn contour_points(&self, edges: &[DcelEdge]) -> Vec<Vec<Double2>> {
        self.contours.iter()
            .map(|&c| EdgeLoop::new(edges, c).map(|ei| edges[ei].from).collect())
            .collect()
    }

    pub fn is_filled(&self, rule: FillRule) -> bool {
        match rule {
            FillRule::EvenOdd => self.fill_number % 2 != 0,
            FillRule::NonZero => self.fill_number != 0,
        }
    }
}
