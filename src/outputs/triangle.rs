use std::fmt;

use crate::Double2;

/// Three points of the output mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle(pub [Double2; 3]);

impl Triangle {
    pub fn new(a: Double2, b: Double2, c: Double2) -> Self {
        Self([a, b, c])
    }

    pub fn points(&self) -> [Double2; 3] {
        self.0
    }

    /// Positive when counterclockwise (y-up)
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.0;
        (b - a).cross(c - a) / 2.
    }

    /// `true` if the three points are collinear
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.0;
        (b - a).cross(c - a) == 0.
    }

    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.0;
        Self([a, c, b])
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}
