//! Triangulation of flattened vector path contours.
//!
//! Contours are resolved into the faces of a planar subdivision, each filled face is split into
//! y-monotone polygons by a sweep line, and each monotone polygon is triangulated with a
//! two-chain stack walk.
//!
//! ```
//! use pathfill::Triangulate;
//!
//! let square = vec![[0., 0.], [1., 0.], [1., 1.], [0., 1.]];
//! let triangles = square.triangulate().unwrap();
//! assert_eq!(triangles.len(), 2);
//!
//! let area: f64 = triangles.iter().map(|t| t.signed_area()).sum();
//! assert_eq!(area, 1.);
//! ```

mod idx;
mod double2;
mod math;
mod simplify;
mod intersection;
mod edge_loop;
mod sweep_graph;
mod active_edges;
mod partition;
mod monotone;
mod face;
mod dcel;
mod options;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{TriangulationError, InvalidGeometry, InternalError};
pub use idx::Idx;
pub use double2::{Double2, signed_area};
pub use math::{orientation, point_on_segment, segments_intersect, segments_intersect_away_from_endpoints};
pub use simplify::simplify_contour;
pub use intersection::has_self_intersections;
pub use sweep_graph::VertexType;
pub use partition::MonotonePartition;
pub use monotone::{triangulate_monotone, is_monotone, MonotoneTriangles};
pub use face::Face;
pub use dcel::{Dcel, DcelEdge};
pub use options::{TriangulationOptions, FillRule, Validation};

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;

/// Triangulates the filled region of `contours` with the default [TriangulationOptions].
pub fn triangulate(contours: &[Vec<Double2>]) -> Result<Vec<Triangle>, TriangulationError> {
    triangulate_with(contours, &TriangulationOptions::default())
}

/// Triangulates the filled region of `contours`.
///
/// Contours are closed and may be listed in either direction. They must be simple and must not
/// touch each other; how that is enforced depends on `options.validation`.
pub fn triangulate_with(contours: &[Vec<Double2>], options: &TriangulationOptions) -> Result<Vec<Triangle>, TriangulationError> {
    let contours = prepare(contours, options.validation)?;

    #[cfg(feature = "debugging")]
    let svg_context = debug::svg::SvgContext::from_env(&contours);
    #[cfg(feature = "debugging")]
    {
        if let Some(svg_context) = &svg_context {
            svg_context.output("contours", debug::svg::SvgOutputLevel::MajorSteps, &debug::svg::ContoursSvg(&contours));
        }
    }

    let mut dcel = Dcel::from_contours(&contours);
    dcel.assign_fill_numbers();
    #[cfg(feature = "debugging")]
    log::trace!("{}", dcel.as_text_tree());

    let mut pieces = Vec::new();
    for face in dcel.filled_faces(options.fill_rule) {
        let face_pieces = MonotonePartition::new(&face.contour_points(dcel.edges())).partition()?;
        log::trace!("face with fill number {} split into {} pieces", face.fill_number, face_pieces.len());
        pieces.extend(face_pieces);
    }

    let mut degenerate = 0;
    let mut triangles = Vec::new();
    for piece in &pieces {
        for triangle in triangulate_monotone(piece) {
            if triangle.is_degenerate() {
                degenerate += 1;
            } else {
                triangles.push(options.winding.apply(triangle));
            }
        }
    }
    log::debug!("{} monotone pieces, {} triangles ({} degenerate dropped)", pieces.len(), triangles.len(), degenerate);

    #[cfg(feature = "debugging")]
    {
        if let Some(svg_context) = &svg_context {
            svg_context.output("pieces", debug::svg::SvgOutputLevel::MajorSteps, &debug::svg::PiecesSvg(&pieces));
            svg_context.output("triangles", debug::svg::SvgOutputLevel::ResultOnly, &debug::svg::TrianglesSvg(&triangles));
        }
    }

    Ok(triangles)
}

/// Splits `contours` into y-monotone polygons, counterclockwise (y-up).
///
/// Unlike [triangulate], no fill rule is applied: outer boundaries must already be
/// counterclockwise and holes clockwise. The self-intersection check follows
/// [Validation::default].
pub fn partition_monotone(contours: &[Vec<Double2>]) -> Result<Vec<Vec<Double2>>, TriangulationError> {
    let contours = prepare(contours, Validation::default())?;
    MonotonePartition::new(&contours).partition()
}

// Rejects non-finite points, drops contours without area, and runs the configured validation
fn prepare(contours: &[Vec<Double2>], validation: Validation) -> Result<Vec<Vec<Double2>>, TriangulationError> {
    for (ci, contour) in contours.iter().enumerate() {
        if let Some(vi) = contour.iter().position(|p| !p.is_finite()) {
            return Err(InvalidGeometry::NonFiniteCoordinate { contour: ci, vertex: vi }.into());
        }
    }

    let simplified: Vec<Vec<Double2>> = contours.iter()
        .map(|c| simplify_contour(c))
        .filter(|c| c.len() >= 3)
        .collect();

    if validation.is_enabled() && has_self_intersections(&simplified) {
        log::warn!("rejecting self-intersecting contour set");
        return Err(InvalidGeometry::SelfIntersecting.into());
    }
    Ok(simplified)
}
