use std::fmt::Debug;

use num_traits::{ToPrimitive, real::Real};

use crate::Double2;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
/// Coordinates are converted to `f64` before decomposition.
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// `None` if a coordinate is not representable as a finite `f64`
pub(crate) fn to_double2<V: Vertex + ?Sized>(v: &V) -> Option<Double2> {
    let p = Double2::new(v.x().to_f64()?, v.y().to_f64()?);
    if p.is_finite() { Some(p) } else { None }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

impl Vertex for Double2 {
    type Coordinate = f64;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.y
    }
}
