use crate::{Double2, math::{segments_intersect, segments_intersect_away_from_endpoints}};

/// Checks every pair of edges among all `contours` for an intersection. O(n²).
///
/// Edges which follow one another along a contour may only meet at their shared vertex.
/// Any other pair, including edges from two different contours, may not meet at all.
/// Contours with fewer than 3 points are ignored.
pub fn has_self_intersections(contours: &[Vec<Double2>]) -> bool {
    let edges: Vec<(usize, usize, Double2, Double2)> = contours.iter()
        .enumerate()
        .filter(|(_, c)| c.len() >= 3)
        .flat_map(|(ci, c)| (0..c.len()).map(move |i| (ci, i, c[i], c[(i + 1) % c.len()])))
        .collect();

    for (i, &(ci, ei, a, b)) in edges.iter().enumerate() {
        for &(cj, ej, c, d) in &edges[i + 1..] {
            let adjacent = ci == cj && {
                let len = contours[ci].len();
                (ei + 1) % len == ej || (ej + 1) % len == ei
            };
            let hit = if adjacent {
                segments_intersect_away_from_endpoints(a, b, c, d)
            } else {
                segments_intersect(a, b, c, d)
            };
            if hit {
                log::debug!("edge {} of contour {} intersects edge {} of contour {}", ei, ci, ej, cj);
                return true;
            }
        }
    }
    false
}
