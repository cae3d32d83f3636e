pub mod polygon;
mod vtest;

pub use vtest::VTest;

use crate::Triangle;

pub fn total_area(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(|t| t.signed_area()).sum()
}

/// Equal up to the rounding of summing many small areas
pub fn area_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.)
}

/// The triangles as a sortable multiset of coordinates
pub fn canonical_triangles(triangles: &[Triangle]) -> Vec<[(u64, u64); 3]> {
    let mut out: Vec<_> = triangles.iter()
        .map(|t| {
            let mut ps = t.points().map(|p| (p.x.to_bits(), p.y.to_bits()));
            ps.sort_unstable();
            ps
        })
        .collect();
    out.sort_unstable();
    out
}
