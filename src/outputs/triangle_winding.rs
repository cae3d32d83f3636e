use crate::Triangle;

/// The order the vertices in a triangle are listed in (y-up orientation)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum TriangleWinding {
    #[default]
    Counterclockwise,
    Clockwise,
}

impl TriangleWinding {
    /// Reorders `triangle` so it is wound in this direction. Degenerate triangles are returned as-is.
    pub fn apply(self, triangle: Triangle) -> Triangle {
        let area = triangle.signed_area();
        let flip = match self {
            TriangleWinding::Counterclockwise => area < 0.,
            TriangleWinding::Clockwise => area > 0.,
        };
        if flip { triangle.reversed() } else { triangle }
    }
}
