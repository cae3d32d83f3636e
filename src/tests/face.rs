use crate::{Dcel, DcelEdge, Double2, Face, FillRule, idx::Idx};

use super::util::polygon;

fn p(x: f64, y: f64) -> Double2 {
    Double2::new(x, y)
}

#[test]
fn square_face() {
    let dcel = Dcel::from_contours(&[polygon::square()]);
    let face = &dcel.faces()[1];
    assert!(!face.is_outer);
    assert!(face.contains_vertex(dcel.edges(), p(0.5, 0.5)));
    assert!(!face.contains_vertex(dcel.edges(), p(2., 0.5)));
    assert!(!face.contains_vertex(dcel.edges(), p(0.5, -1.)));
    assert!(!face.contains_vertex(dcel.edges(), p(-0.5, 0.5)));
}

#[test]
fn outer_face_is_inverted() {
    let dcel = Dcel::from_contours(&[polygon::square()]);
    let outer = dcel.outer_face();
    assert!(outer.is_outer);
    assert!(!outer.contains_vertex(dcel.edges(), p(0.5, 0.5)));
    assert!(outer.contains_vertex(dcel.edges(), p(2., 0.5)));
    assert!(outer.contains_vertex(dcel.edges(), p(-3., -3.)));
}

#[test]
fn winding() {
    let dcel = Dcel::from_contours(&[polygon::square()]);
    assert_eq!(dcel.faces()[1].winding(dcel.edges()), 2.);
    assert_eq!(dcel.outer_face().winding(dcel.edges()), -2.);
}

#[test]
fn winding_with_hole() {
    let dcel = Dcel::from_contours(&[polygon::square_at(0., 0., 3.), polygon::square_at(1., 1., 1.)]);
    assert_eq!(dcel.faces()[1].winding(dcel.edges()), 2. * (9. - 1.));
}

#[test]
fn path_commands() {
    let dcel = Dcel::from_contours(&[polygon::square()]);
    assert_eq!(dcel.faces()[1].path_commands(dcel.edges()), "M 0 0 L 1 0 L 1 1 L 0 1 Z");
    assert_eq!(dcel.outer_face().path_commands(dcel.edges()), "M 1 0 L 0 0 L 0 1 L 1 1 Z");
}

#[test]
fn contour_points_with_hole() {
    let mut hole = polygon::square_at(1., 1., 1.);
    hole.reverse();
    let mut dcel = Dcel::from_contours(&[polygon::square_at(0., 0., 3.), hole.clone()]);
    dcel.assign_fill_numbers();

    let frame = &dcel.faces()[1];
    assert_eq!(frame.contour_points(dcel.edges()), vec![polygon::square_at(0., 0., 3.), hole]);
    assert_eq!(frame.fill_number, 1);
    assert!(frame.contains_vertex(dcel.edges(), p(0.5, 1.5)));
    assert!(!frame.contains_vertex(dcel.edges(), p(1.5, 1.5)));

    let inside = &dcel.faces()[2];
    assert_eq!(inside.contour_points(dcel.edges()), vec![vec![p(2., 2.), p(1., 2.), p(1., 1.), p(2., 1.)]]);
    assert_eq!(inside.fill_number, 0);
    assert!(!inside.is_filled(FillRule::EvenOdd));
    assert!(!inside.is_filled(FillRule::NonZero));
}

#[test]
fn fill_rule_selection() {
    let mut face = Face::new();
    for (fill, even_odd, non_zero) in [(0, false, false), (1, true, true), (2, false, true), (-1, true, true), (-2, false, true)] {
        face.fill_number = fill;
        assert_eq!(face.is_filled(FillRule::EvenOdd), even_odd, "fill {}", fill);
        assert_eq!(face.is_filled(FillRule::NonZero), non_zero, "fill {}", fill);
    }
}

/// One bounded face whose boundary doubles back along a slit.
///
/// The slit edges are twins of each other. Every other edge gets a twin in the outer face.
fn slit_arena() -> (Vec<DcelEdge>, Face) {
    let cycle = [p(0., 0.), p(2., 0.), p(2., 1.), p(1., 1.5), p(2., 1.), p(2., 2.), p(0., 2.)];
    let n = cycle.len();
    let mut edges = Vec::with_capacity(2 * n);
    for i in 0..n {
        let twin = match i {
            2 => 3,
            3 => 2,
            _ => n + i,
        };
        edges.push(DcelEdge {
            from: cycle[i],
            to: cycle[(i + 1) % n],
            twin: Idx::new(twin),
            next: Idx::new((i + 1) % n),
            prev: Idx::new((i + n - 1) % n),
            face: Idx::new(1),
            canonicity: 1,
        });
    }
    for i in 0..n {
        edges.push(DcelEdge {
            from: cycle[(i + 1) % n],
            to: cycle[i],
            twin: Idx::new(i),
            next: Idx::new(n + i),
            prev: Idx::new(n + i),
            face: Idx::new(Dcel::OUTER_FACE),
            canonicity: 0,
        });
    }

    let mut face = Face::new();
    face.contours.push(Idx::new(0));
    (edges, face)
}

#[test]
fn slit_is_ignored() {
    let (edges, face) = slit_arena();
    assert!(face.contains_vertex(&edges, p(0.5, 1.2)));
    assert!(face.contains_vertex(&edges, p(1.5, 1.2)));
    assert!(!face.contains_vertex(&edges, p(3., 1.2)));
    assert!(!face.contains_vertex(&edges, p(-1., 1.2)));
}

#[test]
fn slit_winding() {
    let (edges, face) = slit_arena();
    // The slit's two sides cancel
    assert_eq!(face.winding(&edges), 8.);
    assert_eq!(face.contour_points(&edges)[0].len(), 7);
}

#[test]
fn ray_through_vertex_counts_once() {
    let diamond = vec![p(0., -1.), p(1., 0.), p(0., 1.), p(-1., 0.)];
    let dcel = Dcel::from_contours(&[diamond]);
    let face = &dcel.faces()[1];
    // The ray from here passes exactly through the vertex (1, 0)
    assert!(face.contains_vertex(dcel.edges(), p(0., 0.)));
    assert!(!face.contains_vertex(dcel.edges(), p(-2., 0.)));
    // Touching only the top vertex
    assert!(!face.contains_vertex(dcel.edges(), p(-1., 1.)));
}
