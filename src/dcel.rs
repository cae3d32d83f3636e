use std::{collections::VecDeque, fmt};

use crate::{Double2, Face, FillRule, double2::signed_area2, edge_loop::{EdgeLoop, LinkedEdge}, idx::{Idx, IdxDisplay, IdxSet, SliceExt, VecExt}, simplify::simplify_contour};

/// A directed half of a boundary segment
#[derive(Debug, Clone)]
pub struct DcelEdge {
    pub from: Double2,
    pub to: Double2,
    pub twin: Idx<DcelEdge>,
    pub next: Idx<DcelEdge>,
    pub prev: Idx<DcelEdge>,
    /// The face on the left of this edge (y-up)
    pub face: Idx<Face>,
    /// How many input contours run along this edge in its direction
    pub canonicity: isize,
}

impl IdxDisplay for DcelEdge {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "d{}", idx)
    }
}

impl LinkedEdge for DcelEdge {
    fn next(&self) -> Idx<Self> {
        self.next
    }
}

/// A planar subdivision built from pairwise non-crossing simple contours.
///
/// Face 0 is the unbounded outer face. Every other face is bounded by exactly one counterclockwise
/// cycle plus the clockwise cycles of the contours nested directly inside it.
#[derive(Debug, Clone)]
pub struct Dcel {
    edges: Vec<DcelEdge>,
    faces: Vec<Face>,
}

impl Dcel {
    pub const OUTER_FACE: usize = 0;

    /// Builds the faces of `contours`.
    ///
    /// The contours must be simple and must neither cross nor touch one another. Each contour is
    /// simplified first; contours left with fewer than 3 points are skipped. Fill numbers are not
    /// assigned until [assign_fill_numbers](Self::assign_fill_numbers) is called.
    pub fn from_contours(contours: &[Vec<Double2>]) -> Self {
        let mut dcel = Self {
            edges: Vec::new(),
            faces: vec![Face::outer()],
        };

        let mut simplified: Vec<(f64, Vec<Double2>)> = contours.iter()
            .map(|c| simplify_contour(c))
            .filter(|c| c.len() >= 3)
            .map(|c| (signed_area2(&c), c))
            .collect();
        // Containers enclose more area than anything nested inside them
        simplified.sort_by(|(a, _), (b, _)| b.abs().total_cmp(&a.abs()));

        for (area2, contour) in simplified {
            dcel.add_contour(&contour, area2 > 0.);
        }

        log::debug!("DCEL with {} edges, {} faces", dcel.edges.len(), dcel.faces.len());
        dcel
    }

    fn add_contour(&mut self, contour: &[Double2], counterclockwise: bool) {
        let container = self.face_containing(contour[0]);
        let n = contour.len();
        let base = self.edges.len();
        let original = |i: usize| Idx::<DcelEdge>::new(base + 2 * (i % n));
        let reverse = |i: usize| Idx::<DcelEdge>::new(base + 2 * (i % n) + 1);

        for i in 0..n {
            let (a, b) = (contour[i], contour[(i + 1) % n]);
            self.edges.push(DcelEdge {
                from: a,
                to: b,
                twin: reverse(i),
                next: original(i + 1),
                prev: original(i + n - 1),
                face: Idx::new(Self::OUTER_FACE),
                canonicity: 1,
            });
            self.edges.push(DcelEdge {
                from: b,
                to: a,
                twin: original(i),
                next: reverse(i + n - 1),
                prev: reverse(i + 1),
                face: Idx::new(Self::OUTER_FACE),
                canonicity: 0,
            });
        }

        let (inner, outer) = if counterclockwise { (original(0), reverse(0)) } else { (reverse(0), original(0)) };
        let face = self.faces.push_get_index(Face::new());
        self.faces[face].contours.push(inner);
        self.assign_face(inner, face);
        self.faces[container].contours.push(outer);
        self.assign_face(outer, container);
    }

    fn assign_face(&mut self, first: Idx<DcelEdge>, face: Idx<Face>) {
        let cycle: Vec<_> = EdgeLoop::new(&self.edges, first).collect();
        for ei in cycle {
            self.edges[ei].face = face;
        }
    }

    fn face_containing(&self, point: Double2) -> Idx<Face> {
        self.faces.iter_index()
            .skip(1)
            .find(|&fi| self.faces[fi].contains_vertex(&self.edges, point))
            .unwrap_or_else(|| Idx::new(Self::OUTER_FACE))
    }

    /// Propagates winding numbers from the outer face, which has fill number 0.
    ///
    /// Crossing edge `e` into the face of its twin `t` changes the fill number by
    /// `canonicity(t) - canonicity(e)`.
    pub fn assign_fill_numbers(&mut self) {
        let mut assigned = IdxSet::with_len(self.faces.len());
        let mut queue = VecDeque::new();

        let outer = Idx::new(Self::OUTER_FACE);
        self.faces[outer].fill_number = 0;
        assigned.insert(outer);
        queue.push_back(outer);

        while let Some(face) = queue.pop_front() {
            let crossings: Vec<(Idx<Face>, isize)> = self.faces[face].edges(&self.edges)
                .map(|ei| {
                    let e = &self.edges[ei];
                    let t = &self.edges[e.twin];
                    (t.face, t.canonicity - e.canonicity)
                })
                .collect();

            for (twin_face, change) in crossings {
                if !assigned.insert(twin_face) {
                    continue;
                }
                self.faces[twin_face].fill_number = self.faces[face].fill_number + change;
                queue.push_back(twin_face);
            }
        }
    }

    pub fn edges(&self) -> &[DcelEdge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, fi: Idx<Face>) -> &Face {
        &self.faces[fi]
    }

    pub fn outer_face(&self) -> &Face {
        &self.faces[Idx::new(Self::OUTER_FACE)]
    }

    /// The face containing `point`, if it lies in a bounded one
    pub fn locate(&self, point: Double2) -> Option<Idx<Face>> {
        let fi = self.face_containing(point);
        if fi.usize() == Self::OUTER_FACE { None } else { Some(fi) }
    }

    pub fn filled_faces(&self, rule: FillRule) -> impl Iterator<Item=&Face> + '_ {
        self.faces.iter().filter(move |f| f.is_filled(rule))
    }

    #[cfg(feature = "debugging")]
    pub fn as_text_tree(&self) -> text_trees::TreeNode<String> {
        let faces = self.faces.iter_index().map(|fi| {
            let face = &self.faces[fi];
            let label = format!("{} fill {}{}", fi, face.fill_number, if face.is_outer { " (outer)" } else { "" });
            let contours = face.contours.iter().map(|&c| {
                let points: Vec<String> = EdgeLoop::new(&self.edges, c).map(|ei| self.edges[ei].from.to_string()).collect();
                text_trees::TreeNode::new(points.join(" "))
            });
            text_trees::TreeNode::with_child_nodes(label, contours)
        });
        text_trees::TreeNode::with_child_nodes("DCEL".to_string(), faces)
    }
}
