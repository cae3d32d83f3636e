//! Diagnostic output, enabled by the `debugging` feature.
//!
//! Set `PATHFILL_SVG_OUTPUT_PATH` to an existing directory to get SVG snapshots of each
//! triangulation: the input contours, the monotone pieces and the resulting triangles.
//! `PATHFILL_SVG_OUTPUT_LEVEL=1` keeps only the triangles, `0` disables the snapshots, and
//! `PATHFILL_SVG_HIDE_LABELS` drops the vertex numbers.

pub(crate) mod env;
pub(crate) mod svg;
