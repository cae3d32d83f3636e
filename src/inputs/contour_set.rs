use crate::{Double2, Triangle, TriangulationError, TriangulationOptions, errors::InvalidGeometry};

use super::vertex::{Vertex, to_double2};

/// One or more closed contours.
///
/// Each contour lists its points in order without repeating the first one. Orientation is free:
/// the direction of each contour only matters to [FillRule::NonZero](crate::FillRule::NonZero).
pub trait ContourSet {
    /// The type of vertices of the contours
    type Vertex: Vertex;

    /// Provides the number of contours.
    fn contour_count(&self) -> usize;

    /// The points of contour `index`, `0 <= index < contour_count()`
    fn contour(&self, index: usize) -> &[Self::Vertex];

    /// Converts every point to [Double2], rejecting coordinates that are not finite.
    fn to_contours(&self) -> Result<Vec<Vec<Double2>>, TriangulationError> {
        (0..self.contour_count())
            .map(|ci| {
                self.contour(ci).iter()
                    .enumerate()
                    .map(|(vi, v)| to_double2(v).ok_or_else(|| TriangulationError::from(InvalidGeometry::NonFiniteCoordinate { contour: ci, vertex: vi })))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }
}

impl<V: Vertex> ContourSet for Vec<V> {
    type Vertex = V;

    fn contour_count(&self) -> usize {
        1
    }

    fn contour(&self, _index: usize) -> &[Self::Vertex] {
        self
    }
}

impl<V: Vertex> ContourSet for [V] {
    type Vertex = V;

    fn contour_count(&self) -> usize {
        1
    }

    fn contour(&self, _index: usize) -> &[Self::Vertex] {
        self
    }
}

impl<V: Vertex> ContourSet for Vec<Vec<V>> {
    type Vertex = V;

    fn contour_count(&self) -> usize {
        self.len()
    }

    fn contour(&self, index: usize) -> &[Self::Vertex] {
        &self[index]
    }
}

impl<V: Vertex> ContourSet for [Vec<V>] {
    type Vertex = V;

    fn contour_count(&self) -> usize {
        self.len()
    }

    fn contour(&self, index: usize) -> &[Self::Vertex] {
        &self[index]
    }
}

/// `Triangulate` provides the decomposition entry points to implementers of [ContourSet].
///
/// This trait is sealed and is not intended to be manually implemented.
pub trait Triangulate: private::Sealed {
    /// Triangulates the filled region with the default [TriangulationOptions].
    fn triangulate(&self) -> Result<Vec<Triangle>, TriangulationError>;

    /// Triangulates the filled region.
    ///
    /// Triangles are non-degenerate and wound according to `options`. Their order across monotone
    /// pieces is unspecified.
    fn triangulate_with(&self, options: &TriangulationOptions) -> Result<Vec<Triangle>, TriangulationError>;

    /// Splits the contours into y-monotone polygons without triangulating them.
    ///
    /// The contours are taken as given, so outer boundaries must be counterclockwise and holes
    /// clockwise (y-up). No fill rule is applied.
    fn partition_monotone(&self) -> Result<Vec<Vec<Double2>>, TriangulationError>;
}

impl<C: ContourSet + ?Sized> Triangulate for C {
    #[inline]
    fn triangulate(&self) -> Result<Vec<Triangle>, TriangulationError> {
        crate::triangulate(&self.to_contours()?)
    }

    #[inline]
    fn triangulate_with(&self, options: &TriangulationOptions) -> Result<Vec<Triangle>, TriangulationError> {
        crate::triangulate_with(&self.to_contours()?, options)
    }

    #[inline]
    fn partition_monotone(&self) -> Result<Vec<Vec<Double2>>, TriangulationError> {
        crate::partition_monotone(&self.to_contours()?)
    }
}

mod private {
    pub trait Sealed { }

    impl<C: super::ContourSet + ?Sized> Sealed for C { }
}
