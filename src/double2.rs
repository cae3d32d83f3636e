use std::{cmp, fmt, ops};

use num_traits::Zero;
use ordered_float::OrderedFloat;

/// A two-dimensional point or vector with `f64` coordinates.
///
/// All comparisons are exact; no tolerance is applied anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Double2 {
    pub x: f64,
    pub y: f64,
}

impl Double2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle in radians, in `(-pi, pi]`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The sweep order: by `y`, then by `x`.
    ///
    /// In the y-down space of vector graphics this reads top-to-bottom, left-to-right.
    pub fn canonical_key(self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.y), OrderedFloat(self.x))
    }

    pub fn canonical_cmp(&self, other: &Self) -> cmp::Ordering {
        self.canonical_key().cmp(&other.canonical_key())
    }

    /// `true` if `self` comes strictly before `other` in the sweep order
    pub fn precedes(&self, other: &Self) -> bool {
        self.canonical_cmp(other) == cmp::Ordering::Less
    }
}

impl fmt::Display for Double2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl ops::Add for Double2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub for Double2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Neg for Double2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl ops::Mul<f64> for Double2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl ops::Div<f64> for Double2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Zero for Double2 {
    fn zero() -> Self {
        Self::new(0., 0.)
    }

    fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0.
    }
}

impl From<[f64; 2]> for Double2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Double2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Double2> for [f64; 2] {
    fn from(p: Double2) -> Self {
        [p.x, p.y]
    }
}

/// Twice the signed area of a closed polygon. Positive when counterclockwise (y-up).
pub fn signed_area2(points: &[Double2]) -> f64 {
    let n = points.len();
    (0..n).map(|i| points[i].cross(points[(i + 1) % n])).sum()
}

/// The signed area of a closed polygon. Positive when counterclockwise (y-up).
pub fn signed_area(points: &[Double2]) -> f64 {
    signed_area2(points) / 2.
}
