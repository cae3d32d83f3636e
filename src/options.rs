use crate::TriangleWinding;

/// Decides which faces of the planar subdivision are filled
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum FillRule {
    /// Filled where the fill number is odd. Nested contours alternate between filled and empty
    /// regardless of their direction.
    #[default]
    EvenOdd,
    /// Filled where the fill number is not zero. A contour running against its container cuts a
    /// hole; one running with it does not.
    NonZero,
}

/// When to run the all-pairs self-intersection check before decomposing
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Validation {
    /// Never check. Self-intersecting input gives unspecified triangles or an internal error.
    Never,
    /// Check only when `debug_assertions` are enabled
    #[default]
    DebugOnly,
    Always,
}

impl Validation {
    pub fn is_enabled(self) -> bool {
        match self {
            Validation::Never => false,
            Validation::DebugOnly => cfg!(debug_assertions),
            Validation::Always => true,
        }
    }
}

/// Settings for [triangulate_with](crate::triangulate_with)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct TriangulationOptions {
    pub fill_rule: FillRule,
    pub winding: TriangleWinding,
    pub validation: Validation,
}

impl TriangulationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rule(self, fill_rule: FillRule) -> Self {
        Self { fill_rule, ..self }
    }

    pub fn winding(self, winding: TriangleWinding) -> Self {
        Self { winding, ..self }
    }

    pub fn validation(self, validation: Validation) -> Self {
        Self { validation, ..self }
    }
}
