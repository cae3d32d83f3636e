use crate::{Double2, FillRule, Triangle, TriangleWinding, Triangulate, TriangulationOptions, signed_area, triangulate, triangulate_with};

use super::util::{self, polygon};

#[test]
fn triangulate_all() {
    for p in polygon::all() {
        let triangles = p.triangulate().expect("Triangulation failed");
        assert_eq!(triangles.len(), p.len() - 2, "{:?}", p);
        assert!(triangles.iter().all(|t| !t.is_degenerate()));
        assert!(util::area_eq(util::total_area(&triangles), signed_area(&p).abs()), "{:?}", p);
    }
}

#[test]
fn unit_square() {
    let triangles = triangulate(&[polygon::square()]).expect("Triangulation failed");
    assert_eq!(triangles.len(), 2);
    assert_eq!(util::total_area(&triangles), 1.);
}

#[test]
fn unit_square_f32() {
    let triangles = polygon::square_f32().triangulate().expect("Triangulation failed");
    assert_eq!(triangles.len(), 2);
    assert_eq!(util::total_area(&triangles), 1.);
}

#[test]
fn single_triangle() {
    let p = polygon::triangle();
    let triangles = triangulate(&[p.clone()]).expect("Triangulation failed");
    assert_eq!(triangles.len(), 1);
    let mut points = triangles[0].points().to_vec();
    let mut expected = p;
    points.sort_by(Double2::canonical_cmp);
    expected.sort_by(Double2::canonical_cmp);
    assert_eq!(points, expected);
}

#[test]
fn l_shape() {
    let triangles = triangulate(&[polygon::l_shape()]).expect("Triangulation failed");
    assert_eq!(triangles.len(), 4);
    assert_eq!(util::total_area(&triangles), 3.);
}

#[test]
fn clockwise_input() {
    let mut p = polygon::comb();
    p.reverse();
    let triangles = p.triangulate().expect("Triangulation failed");
    assert_eq!(triangles.len(), p.len() - 2);
    assert!(util::area_eq(util::total_area(&triangles), -signed_area(&p)));
}

#[test]
fn triangulate_hollow() {
    let triangles = polygon::nested_squares().triangulate().expect("Triangulation failed");
    // 8 vertices around 1 hole
    assert_eq!(triangles.len(), 8);
    assert_eq!(util::total_area(&triangles), 8.);
    for t in &triangles {
        let [a, b, c] = t.points();
        let centroid = (a + b + c) / 3.;
        let in_hole = centroid.x > 1. && centroid.x < 2. && centroid.y > 1. && centroid.y < 2.;
        assert!(!in_hole, "{} covers the hole", t);
    }
}

#[test]
fn hollow_frame_f32() {
    let p = vec![
        vec![[0f32, 0f32], [0., 1.], [1., 1.], [1., 0.]],
        vec![[0.25, 0.25], [0.25, 0.75], [0.75, 0.75], [0.75, 0.25]],
    ];
    let triangles = p.triangulate().expect("Triangulation failed");
    assert_eq!(triangles.len(), 8);
    assert!(util::area_eq(util::total_area(&triangles), 0.75));
}

#[test]
fn fill_rules() {
    // Both squares run counterclockwise, so the inner one winds twice
    let contours = polygon::nested_squares();

    let even_odd = triangulate_with(&contours, &TriangulationOptions::new().fill_rule(FillRule::EvenOdd)).expect("Triangulation failed");
    assert_eq!(util::total_area(&even_odd), 8.);

    let non_zero = triangulate_with(&contours, &TriangulationOptions::new().fill_rule(FillRule::NonZero)).expect("Triangulation failed");
    assert_eq!(util::total_area(&non_zero), 9.);
    assert_eq!(non_zero.len(), 8 + 2);
}

#[test]
fn reversed_hole_non_zero() {
    let mut hole = polygon::square_at(1., 1., 1.);
    hole.reverse();
    let contours = vec![polygon::square_at(0., 0., 3.), hole];

    let triangles = triangulate_with(&contours, &TriangulationOptions::new().fill_rule(FillRule::NonZero)).expect("Triangulation failed");
    assert_eq!(util::total_area(&triangles), 8.);
}

#[test]
fn island_in_hole() {
    let contours = vec![polygon::square_at(0., 0., 5.), polygon::square_at(1., 1., 3.), polygon::square_at(2., 2., 1.)];
    let triangles = triangulate(&contours).expect("Triangulation failed");
    assert_eq!(util::total_area(&triangles), 25. - 9. + 1.);
}

#[test]
fn disjoint_contours() {
    let contours = vec![polygon::square(), polygon::square_at(2., 0., 1.), polygon::l_shape().iter().map(|&p| p + Double2::new(0., 5.)).collect()];
    let triangles = triangulate(&contours).expect("Triangulation failed");
    assert_eq!(triangles.len(), 2 + 2 + 4);
    assert_eq!(util::total_area(&triangles), 5.);
}

#[test]
fn winding_option() {
    let p = vec![polygon::star()];

    let ccw = triangulate_with(&p, &TriangulationOptions::new().winding(TriangleWinding::Counterclockwise)).expect("Triangulation failed");
    assert!(ccw.iter().all(|t| t.signed_area() > 0.));

    let cw = triangulate_with(&p, &TriangulationOptions::new().winding(TriangleWinding::Clockwise)).expect("Triangulation failed");
    assert!(cw.iter().all(|t| t.signed_area() < 0.));
    assert_eq!(util::canonical_triangles(&ccw), util::canonical_triangles(&cw));
}

#[test]
fn degenerate_contours_are_skipped() {
    let contours = vec![
        vec![Double2::new(0., 0.), Double2::new(1., 1.)],
        vec![Double2::new(0., 0.), Double2::new(1., 1.), Double2::new(2., 2.)],
        vec![],
    ];
    let triangles: Vec<Triangle> = triangulate(&contours).expect("Triangulation failed");
    assert!(triangles.is_empty());
}

#[test]
fn repeated_and_collinear_points() {
    let p = vec![
        Double2::new(0., 0.), Double2::new(0., 0.), Double2::new(1., 0.), Double2::new(2., 0.),
        Double2::new(2., 2.), Double2::new(0., 2.), Double2::new(0., 1.), Double2::new(0., 0.),
    ];
    let triangles = p.triangulate().expect("Triangulation failed");
    assert_eq!(triangles.len(), 2);
    assert_eq!(util::total_area(&triangles), 4.);
}

#[test]
fn deterministic() {
    let contours = vec![polygon::comb(), polygon::square_at(10., 10., 2.)];
    let a = triangulate(&contours).expect("Triangulation failed");
    let b = triangulate(&contours).expect("Triangulation failed");
    assert_eq!(util::canonical_triangles(&a), util::canonical_triangles(&b));
}

#[test]
fn regular_polygons() {
    for n in 3..=200 {
        let p = polygon::regular_polygon(n, 100.);
        let triangles = p.triangulate().expect("Triangulation failed");
        assert_eq!(triangles.len(), n - 2, "n = {}", n);
        assert!(util::area_eq(util::total_area(&triangles), signed_area(&p)), "n = {}", n);
    }
}
