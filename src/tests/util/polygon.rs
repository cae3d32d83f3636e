use crate::Double2;

use super::VTest;

fn points(coords: &[(f64, f64)]) -> Vec<Double2> {
    coords.iter().map(|&p| p.into()).collect()
}

/// The unit square, counterclockwise
pub fn square() -> Vec<Double2> {
    points(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)])
}

pub fn square_f32() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (0.0, 1.0).into(),
        (1.0, 1.0).into(),
        (1.0, 0.0).into(),
    ]
}

/// An axis-aligned square with its lower left corner at `(x, y)`, counterclockwise
pub fn square_at(x: f64, y: f64, size: f64) -> Vec<Double2> {
    points(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

pub fn triangle() -> Vec<Double2> {
    points(&[(0., 0.), (4., 0.), (1., 3.)])
}

/// Eight points, four of them reflex, counterclockwise
pub fn star() -> Vec<Double2> {
    points(&[
        (1.0, 0.0),
        (2.0, 2.0),
        (0.0, 1.0),
        (-2.0, 2.0),
        (-1.0, 0.0),
        (-2.0, -2.0),
        (0.0, -1.0),
        (2.0, -2.0),
    ])
}

/// Needs one diagonal at its reflex corner `(1, 1)`
pub fn l_shape() -> Vec<Double2> {
    points(&[(0., 0.), (2., 0.), (2., 1.), (1., 1.), (1., 2.), (0., 2.)])
}

pub fn half_frame() -> Vec<Double2> {
    points(&[(0., 0.), (0.05, 0.05), (0.95, 0.05), (0.95, 0.95), (1., 1.), (1., 0.)])
}

/// Teeth pointing both ways along the sweep, so it has split and merge vertices
pub fn comb() -> Vec<Double2> {
    points(&[
        (0., 0.), (1., 2.), (2., 0.), (3., 2.), (4., 0.), (5., 2.), (6., 0.),
        (6., 5.), (5., 3.), (4., 5.), (3., 3.), (2., 5.), (1., 3.), (0., 5.),
    ])
}

/// Crosses itself at `(1, 1)`
pub fn figure_eight() -> Vec<Double2> {
    points(&[(0., 0.), (2., 2.), (2., 0.), (0., 2.)])
}

/// A 3x3 square with a 1x1 hole, both counterclockwise
pub fn nested_squares() -> Vec<Vec<Double2>> {
    vec![square_at(0., 0., 3.), square_at(1., 1., 1.)]
}

pub fn regular_polygon(n: usize, radius: f64) -> Vec<Double2> {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
            let (y, x) = theta.sin_cos();
            Double2::new(x * radius, y * radius)
        })
        .collect()
}

/// Every simple, hole-free fixture
pub fn all() -> Vec<Vec<Double2>> {
    vec![square(), triangle(), star(), l_shape(), half_frame(), comb()]
}
