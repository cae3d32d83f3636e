use std::collections::BTreeSet;

use zot::Zot;

use crate::{Double2, TriangulationError, VertexType, active_edges::ActiveEdge, errors::InternalError, idx::{Idx, SliceExt}, simplify::simplify_contour, sweep_graph::{SweepEdge, SweepGraph, SweepVertex}};

#[derive(Debug, Clone, Copy)]
struct Diagonal {
    from: Idx<SweepVertex>,
    to: Idx<SweepVertex>,
}

impl Diagonal {
    fn new(from: Idx<SweepVertex>, to: Idx<SweepVertex>) -> Self {
        Self { from, to }
    }
}

/// Splits a set of simple, pairwise disjoint contours into y-monotone polygons.
///
/// Contours must have their interior on the left in y-up orientation: outer boundaries
/// counterclockwise, holes clockwise (the order in which [Face::contour_points](crate::Face::contour_points)
/// reports them). Each contour is simplified first; contours left with fewer than 3 points are skipped.
pub struct MonotonePartition {
    graph: SweepGraph,
    active: BTreeSet<ActiveEdge>,
}

impl MonotonePartition {
    pub fn new(contours: &[Vec<Double2>]) -> Self {
        let simplified: Vec<Vec<Double2>> = contours.iter().map(|c| simplify_contour(c)).collect();
        Self {
            graph: SweepGraph::new(&simplified),
            active: BTreeSet::new(),
        }
    }

    /// Every vertex (after simplification) with its classification
    pub fn vertex_types(&self) -> impl Iterator<Item=(Double2, VertexType)> + '_ {
        self.graph.vertices.iter().map(|v| (v.position, v.kind))
    }

    /// Runs the sweep and returns the monotone pieces, each counterclockwise (y-up).
    pub fn partition(mut self) -> Result<Vec<Vec<Double2>>, TriangulationError> {
        let mut order: Vec<Idx<SweepVertex>> = self.graph.vertices.iter_index().collect();
        order.sort_by(|&a, &b| self.graph.position(a).canonical_cmp(&self.graph.position(b)));

        let mut diagonal_count = 0;
        for vi in order {
            log::trace!("sweep {} {} {:?}", vi, self.graph.position(vi), self.graph.vertices[vi].kind);

            match self.handle_vertex(vi)? {
                Zot::Zero => {}
                Zot::One(d) => {
                    self.graph.insert_diagonal(d.from, d.to)?;
                    diagonal_count += 1;
                }
                Zot::Two(d0, d1) => {
                    self.graph.insert_diagonal(d0.from, d0.to)?;
                    self.graph.insert_diagonal(d1.from, d1.to)?;
                    diagonal_count += 2;
                }
            }
        }

        if !self.active.is_empty() {
            return Err(TriangulationError::internal(format!("{} edges still active after the sweep", self.active.len())));
        }

        let pieces = self.graph.cycles()?;
        log::debug!("{} vertices, {} diagonals, {} monotone pieces", self.graph.vertices.len(), diagonal_count, pieces.len());
        Ok(pieces)
    }

    fn handle_vertex(&mut self, vi: Idx<SweepVertex>) -> Result<Zot<Diagonal>, InternalError> {
        let vertex = &self.graph.vertices[vi];
        let (kind, outgoing, incoming) = (vertex.kind, vertex.outgoing_edge, vertex.incoming_edge);

        Ok(match kind {
            VertexType::Start => {
                self.activate(outgoing, vi)?;
                Zot::Zero
            }
            VertexType::End => {
                let d = self.merge_helper_diagonal(vi, incoming)?;
                self.deactivate(incoming)?;
                Zot::from_options(d, None)
            }
            VertexType::Split => {
                let left = self.edge_left_of(vi)?;
                let helper = self.helper(left)?;
                self.graph.edges[left].helper = Some(vi);
                self.activate(outgoing, vi)?;
                Zot::One(Diagonal::new(vi, helper))
            }
            VertexType::Merge => {
                let d0 = self.merge_helper_diagonal(vi, incoming)?;
                self.deactivate(incoming)?;
                let left = self.edge_left_of(vi)?;
                let d1 = self.merge_helper_diagonal(vi, left)?;
                self.graph.edges[left].helper = Some(vi);
                Zot::from_options(d0, d1)
            }
            VertexType::RegularLeft => {
                let d = self.merge_helper_diagonal(vi, incoming)?;
                self.deactivate(incoming)?;
                self.activate(outgoing, vi)?;
                Zot::from_options(d, None)
            }
            VertexType::RegularRight => {
                let left = self.edge_left_of(vi)?;
                let d = self.merge_helper_diagonal(vi, left)?;
                self.graph.edges[left].helper = Some(vi);
                Zot::from_options(d, None)
            }
        })
    }

    fn active_key(&self, ei: Idx<SweepEdge>) -> ActiveEdge {
        let e = &self.graph.edges[ei];
        ActiveEdge::new(ei, self.graph.position(e.from), self.graph.position(e.to))
    }

    fn activate(&mut self, ei: Idx<SweepEdge>, helper: Idx<SweepVertex>) -> Result<(), InternalError> {
        self.graph.edges[ei].helper = Some(helper);
        if self.active.insert(self.active_key(ei)) {
            Ok(())
        } else {
            Err(InternalError::new(format!("Edge {} is already active", ei)))
        }
    }

    fn deactivate(&mut self, ei: Idx<SweepEdge>) -> Result<(), InternalError> {
        if self.active.remove(&self.active_key(ei)) {
            Ok(())
        } else {
            Err(InternalError::new(format!("Edge {} is not active", ei)))
        }
    }

    fn helper(&self, ei: Idx<SweepEdge>) -> Result<Idx<SweepVertex>, InternalError> {
        self.graph.edges[ei].helper.ok_or_else(|| InternalError::new(format!("Edge {} has no helper", ei)))
    }

    // The diagonal owed to a merge vertex still waiting as the helper of `ei`
    fn merge_helper_diagonal(&self, vi: Idx<SweepVertex>, ei: Idx<SweepEdge>) -> Result<Option<Diagonal>, InternalError> {
        let helper = self.helper(ei)?;
        Ok(if self.graph.vertices[helper].kind == VertexType::Merge {
            Some(Diagonal::new(vi, helper))
        } else {
            None
        })
    }

    fn edge_left_of(&self, vi: Idx<SweepVertex>) -> Result<Idx<SweepEdge>, InternalError> {
        let query = ActiveEdge::point(self.graph.position(vi));
        self.active.range(..query).next_back()
            .and_then(|ae| ae.edge)
            .ok_or_else(|| InternalError::new(format!("No active edge left of {} {}", vi, self.graph.position(vi))))
    }
}
