use std::{error, fmt};

use backtrace::Backtrace;

/// Describes why a set of contours was rejected before decomposition
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidGeometry {
    /// Two edges of the contour set cross or touch somewhere other than a shared vertex
    SelfIntersecting,
    /// A coordinate was NaN, infinite, or could not be represented as an `f64`
    NonFiniteCoordinate {
        /// The index of the contour within the contour set
        contour: usize,
        /// The index of the vertex within the contour
        vertex: usize,
    },
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfIntersecting => write!(f, "Contour set is self-intersecting"),
            Self::NonFiniteCoordinate { contour, vertex } => write!(f, "Vertex {} of contour {} has a non-finite coordinate", vertex, contour),
        }
    }
}

impl error::Error for InvalidGeometry { }

/// A decomposition invariant was broken. This is a bug signal, never a recoverable condition.
#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred during decomposition or triangulation
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// The provided contours violate the input contract
    InvalidInputGeometry(InvalidGeometry),
    /// The sweep graph became inconsistent (a cycle revisits an edge, an edge was claimed twice, ...).
    /// No partial output is produced.
    InternalError(InternalError),
}

impl TriangulationError {
    #[cold]
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl From<InvalidGeometry> for TriangulationError {
    fn from(e: InvalidGeometry) -> Self {
        Self::InvalidInputGeometry(e)
    }
}

impl From<InternalError> for TriangulationError {
    fn from(e: InternalError) -> Self {
        Self::InternalError(e)
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputGeometry(error) => fmt::Display::fmt(error, f),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidInputGeometry(error) => Some(error),
            Self::InternalError(error) => Some(error),
        }
    }
}
