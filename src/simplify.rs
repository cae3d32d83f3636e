use crate::{Double2, math::is_collinear};

/// Removes repeated points and collapses runs of exactly collinear points of a closed contour.
///
/// Cyclic order is preserved. The result may have fewer than 3 points, in which case the
/// contour encloses no area and should be skipped.
pub fn simplify_contour(points: &[Double2]) -> Vec<Double2> {
    let mut out: Vec<Double2> = Vec::with_capacity(points.len());

    for &p in points {
        if out.last() == Some(&p) {
            continue;
        }
        while out.len() >= 2 && is_collinear(out[out.len() - 2], out[out.len() - 1], p) {
            out.pop();
        }
        // A spike that folds back onto the previous point collapses into it
        if out.last() != Some(&p) {
            out.push(p);
        }
    }

    // The loop above never looks across the seam between the last and first points
    loop {
        let len = out.len();
        if len >= 2 && out[0] == out[len - 1] {
            out.pop();
        } else if len >= 3 && is_collinear(out[len - 2], out[len - 1], out[0]) {
            out.pop();
        } else if len >= 3 && is_collinear(out[len - 1], out[0], out[1]) {
            out.remove(0);
        } else {
            break;
        }
    }

    out
}
