use std::{cmp, collections::BTreeMap, fmt, ops::Bound};

use crate::{Double2, errors::InternalError, edge_loop::{EdgeLoop, LinkedEdge}, idx::{Idx, IdxDisplay, IdxSet, SliceExt, VecExt}};

/// How a vertex meets the sweep line, derived from its neighbours along the contour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexType {
    /// Both neighbours come later in the sweep and the interior angle is convex
    Start,
    /// Both neighbours came earlier in the sweep and the interior angle is convex
    End,
    /// Both neighbours come later in the sweep and the interior angle is reflex
    Split,
    /// Both neighbours came earlier in the sweep and the interior angle is reflex
    Merge,
    /// On a descending boundary with the interior to its right
    RegularLeft,
    /// On an ascending boundary with the interior to its left
    RegularRight,
}

/// Exact polar order of a direction, counterclockwise from `+x`
#[derive(Debug, Clone, Copy)]
pub(crate) struct AngleKey(Double2);

impl AngleKey {
    fn half(&self) -> u8 {
        if self.0.y > 0. || (self.0.y == 0. && self.0.x > 0.) { 0 } else { 1 }
    }
}

impl PartialEq for AngleKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == cmp::Ordering::Equal
    }
}

impl Eq for AngleKey { }

impl PartialOrd for AngleKey {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AngleKey {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.half().cmp(&other.half()).then_with(|| {
            let cross = self.0.cross(other.0);
            if cross > 0. {
                cmp::Ordering::Less
            } else if cross < 0. {
                cmp::Ordering::Greater
            } else {
                cmp::Ordering::Equal
            }
        })
    }
}

#[derive(Debug)]
pub(crate) struct SweepVertex {
    pub position: Double2,
    pub kind: VertexType,
    // The contour edges leaving and entering this vertex; diagonals never replace these
    pub outgoing_edge: Idx<SweepEdge>,
    pub incoming_edge: Idx<SweepEdge>,
    // Every edge at this vertex, keyed by the direction pointing away from the vertex
    outgoing: BTreeMap<AngleKey, Idx<SweepEdge>>,
    incoming: BTreeMap<AngleKey, Idx<SweepEdge>>,
}

impl IdxDisplay for SweepVertex {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "v{}", idx)
    }
}

#[derive(Debug)]
pub(crate) struct SweepEdge {
    pub from: Idx<SweepVertex>,
    pub to: Idx<SweepVertex>,
    pub next: Idx<SweepEdge>,
    pub prev: Idx<SweepEdge>,
    pub twin: Option<Idx<SweepEdge>>,
    pub helper: Option<Idx<SweepVertex>>,
}

impl IdxDisplay for SweepEdge {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "e{}", idx)
    }
}

impl LinkedEdge for SweepEdge {
    fn next(&self) -> Idx<Self> {
        self.next
    }
}

/// The vertex/edge arena swept by the monotone partitioner.
///
/// Contours are supplied with their interior on the left in y-up orientation (outer boundaries
/// counterclockwise, holes clockwise) and wired in reverse, so that along every cycle the interior
/// lies to the left in the y-down space the sweep order is defined in.
#[derive(Debug, Default)]
pub(crate) struct SweepGraph {
    pub vertices: Vec<SweepVertex>,
    pub edges: Vec<SweepEdge>,
}

impl SweepGraph {
    pub fn new(contours: &[Vec<Double2>]) -> Self {
        let mut graph = Self::default();
        for contour in contours.iter().filter(|c| c.len() >= 3) {
            graph.add_contour(contour);
        }
        graph.classify();
        graph
    }

    fn add_contour(&mut self, contour: &[Double2]) {
        let n = contour.len();
        let base_v = self.vertices.len();
        let base_e = self.edges.len();
        let position = |i: usize| contour[n - 1 - i];

        for i in 0..n {
            let p = position((i + n - 1) % n);
            let v = position(i);
            let next = position((i + 1) % n);
            let outgoing_edge = Idx::new(base_e + i);
            let incoming_edge = Idx::new(base_e + (i + n - 1) % n);
            self.vertices.push(SweepVertex {
                position: v,
                kind: VertexType::RegularLeft,
                outgoing_edge,
                incoming_edge,
                outgoing: BTreeMap::from([(AngleKey(next - v), outgoing_edge)]),
                incoming: BTreeMap::from([(AngleKey(p - v), incoming_edge)]),
            });
        }

        for i in 0..n {
            self.edges.push(SweepEdge {
                from: Idx::new(base_v + i),
                to: Idx::new(base_v + (i + 1) % n),
                next: Idx::new(base_e + (i + 1) % n),
                prev: Idx::new(base_e + (i + n - 1) % n),
                twin: None,
                helper: None,
            });
        }
    }

    fn classify(&mut self) {
        for vi in self.vertices.iter_index() {
            let kind = self.vertex_type(vi);
            self.vertices[vi].kind = kind;
        }
    }

    fn vertex_type(&self, vi: Idx<SweepVertex>) -> VertexType {
        let vertex = &self.vertices[vi];
        let v = vertex.position;
        let p = self.vertices[self.edges[vertex.incoming_edge].from].position;
        let n = self.vertices[self.edges[vertex.outgoing_edge].to].position;

        // Cycles run clockwise in y-up terms here, so a convex corner turns right
        let convex = (v - p).cross(n - v) < 0.;
        match (p.precedes(&v), n.precedes(&v)) {
            (false, false) => if convex { VertexType::Start } else { VertexType::Split },
            (true, true) => if convex { VertexType::End } else { VertexType::Merge },
            (true, false) => VertexType::RegularLeft,
            (false, true) => VertexType::RegularRight,
        }
    }

    pub fn position(&self, vi: Idx<SweepVertex>) -> Double2 {
        self.vertices[vi].position
    }

    /// Splits the face containing the segment `v`-`w` with a new twin pair of edges.
    pub fn insert_diagonal(&mut self, v: Idx<SweepVertex>, w: Idx<SweepVertex>) -> Result<(), InternalError> {
        if v == w {
            return Err(InternalError::new(format!("Diagonal from {} to itself", v)));
        }

        let dir = self.position(w) - self.position(v);
        let key_v = AngleKey(dir);
        let key_w = AngleKey(-dir);

        if let Some(&e) = self.vertices[v].outgoing.get(&key_v) {
            return if self.edges[e].to == w {
                log::trace!("diagonal {} -> {} already present as {}", v, w, e);
                Ok(())
            } else {
                Err(InternalError::new(format!("Diagonal {} -> {} overlaps edge {}", v, w, e)))
            };
        }
        if let Some(&e) = self.vertices[v].incoming.get(&key_v) {
            return Err(InternalError::new(format!("Diagonal {} -> {} overlaps edge {}", v, w, e)));
        }

        let (in_v, out_v) = self.wedge(v, key_v)?;
        let (in_w, out_w) = self.wedge(w, key_w)?;

        let d = self.edges.next_index();
        let t = Idx::new(d.usize() + 1);
        self.edges.push(SweepEdge {
            from: v,
            to: w,
            next: out_w,
            prev: in_v,
            twin: Some(t),
            helper: None,
        });
        self.edges.push(SweepEdge {
            from: w,
            to: v,
            next: out_v,
            prev: in_w,
            twin: Some(d),
            helper: None,
        });

        self.edges[in_v].next = d;
        self.edges[out_w].prev = d;
        self.edges[in_w].next = t;
        self.edges[out_v].prev = t;

        self.vertices[v].outgoing.insert(key_v, d);
        self.vertices[v].incoming.insert(key_v, t);
        self.vertices[w].outgoing.insert(key_w, t);
        self.vertices[w].incoming.insert(key_w, d);

        log::trace!("diagonal {} -> {} as {}/{}", v, w, d, t);

        // Joining a hole to its surrounding boundary leaves both halves on one cycle
        self.check_cycle(d)?;
        self.check_cycle(t)
    }

    // The consecutive incoming/outgoing pair of one face that a new edge in direction `key` splits
    fn wedge(&self, vi: Idx<SweepVertex>, key: AngleKey) -> Result<(Idx<SweepEdge>, Idx<SweepEdge>), InternalError> {
        let vertex = &self.vertices[vi];
        let out = vertex.outgoing.range((Bound::Excluded(key), Bound::Unbounded)).next()
            .or_else(|| vertex.outgoing.iter().next())
            .map(|(_, &e)| e);
        let inc = vertex.incoming.range(..key).next_back()
            .or_else(|| vertex.incoming.iter().next_back())
            .map(|(_, &e)| e);

        match (inc, out) {
            (Some(inc), Some(out)) if self.edges[inc].next == out => Ok((inc, out)),
            (Some(inc), Some(out)) => Err(InternalError::new(format!("Edges {} and {} around {} do not bound a single face", inc, out, vi))),
            _ => Err(InternalError::new(format!("Vertex {} has no edges", vi))),
        }
    }

    // The cycle through `start` must close without revisiting an edge
    fn check_cycle(&self, start: Idx<SweepEdge>) -> Result<(), InternalError> {
        let mut visited = IdxSet::with_len(self.edges.len());
        let mut e = start;
        loop {
            if !visited.insert(e) {
                return Err(InternalError::new(format!("Cycle through {} revisits edge {}", start, e)));
            }
            e = self.edges[e].next;
            if e == start {
                return Ok(());
            }
        }
    }

    pub fn edge_loop(&self, first: Idx<SweepEdge>) -> EdgeLoop<'_, SweepEdge> {
        EdgeLoop::new(&self.edges, first)
    }

    /// Every cycle of the graph, as points with the interior on the left in y-up orientation
    pub fn cycles(&self) -> Result<Vec<Vec<Double2>>, InternalError> {
        let mut claimed = IdxSet::with_len(self.edges.len());
        let mut cycles = Vec::new();

        for start in self.edges.iter_index() {
            if claimed.contains(start) {
                continue;
            }
            let mut points = Vec::new();
            for e in self.edge_loop(start) {
                if !claimed.insert(e) {
                    return Err(InternalError::new(format!("Edge {} is claimed by two cycles", e)));
                }
                points.push(self.position(self.edges[e].from));
            }
            points.reverse();
            cycles.push(points);
        }

        Ok(cycles)
    }
}
