use std::cmp;

use crate::Double2;

/// Sign of the turn `a -> b -> c`: `Greater` for a left turn (counterclockwise, y-up),
/// `Less` for a right turn, `Equal` when collinear.
pub fn orientation(a: Double2, b: Double2, c: Double2) -> cmp::Ordering {
    let cross = (b - a).cross(c - a);
    if cross > 0. {
        cmp::Ordering::Greater
    } else if cross < 0. {
        cmp::Ordering::Less
    } else {
        cmp::Ordering::Equal
    }
}

pub(crate) fn is_collinear(a: Double2, b: Double2, c: Double2) -> bool {
    (b - a).cross(c - b) == 0.
}

/// `true` if `p` lies on the closed segment `a`-`b`
pub fn point_on_segment(p: Double2, a: Double2, b: Double2) -> bool {
    orientation(a, b, p) == cmp::Ordering::Equal && in_box(p, a, b)
}

// Only meaningful for a `p` collinear with `a`-`b`
fn in_box(p: Double2, a: Double2, b: Double2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// `true` if the closed segments `a`-`b` and `c`-`d` share at least one point
pub fn segments_intersect(a: Double2, b: Double2, c: Double2, d: Double2) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 && o1 != cmp::Ordering::Equal && o2 != cmp::Ordering::Equal && o3 != cmp::Ordering::Equal && o4 != cmp::Ordering::Equal {
        return true;
    }

    (o1 == cmp::Ordering::Equal && in_box(c, a, b)) ||
    (o2 == cmp::Ordering::Equal && in_box(d, a, b)) ||
    (o3 == cmp::Ordering::Equal && in_box(a, c, d)) ||
    (o4 == cmp::Ordering::Equal && in_box(b, c, d))
}

/// `true` if the segments `a`-`b` and `c`-`d` share a point other than a shared endpoint.
///
/// Edges that are adjacent along a contour always meet at their common vertex; this only reports
/// a proper crossing, an endpoint of one segment lying on the other (when that endpoint is not
/// shared), or a collinear overlap of positive length.
pub fn segments_intersect_away_from_endpoints(a: Double2, b: Double2, c: Double2, d: Double2) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 == cmp::Ordering::Equal && o2 == cmp::Ordering::Equal {
        return collinear_overlap(a, b, c, d) > 0.;
    }

    if o1 != o2 && o3 != o4 && o1 != cmp::Ordering::Equal && o2 != cmp::Ordering::Equal && o3 != cmp::Ordering::Equal && o4 != cmp::Ordering::Equal {
        return true;
    }

    let shared = |p: Double2| p == a || p == b;
    let shared_cd = |p: Double2| p == c || p == d;
    (o1 == cmp::Ordering::Equal && !shared(c) && in_box(c, a, b)) ||
    (o2 == cmp::Ordering::Equal && !shared(d) && in_box(d, a, b)) ||
    (o3 == cmp::Ordering::Equal && !shared_cd(a) && in_box(a, c, d)) ||
    (o4 == cmp::Ordering::Equal && !shared_cd(b) && in_box(b, c, d))
}

// Length of the overlap of two collinear segments, projected onto their dominant axis
fn collinear_overlap(a: Double2, b: Double2, c: Double2, d: Double2) -> f64 {
    let axis = |p: Double2| if (b.x - a.x).abs() >= (b.y - a.y).abs() { p.x } else { p.y };
    let (ab_min, ab_max) = min_max(axis(a), axis(b));
    let (cd_min, cd_max) = min_max(axis(c), axis(d));
    ab_max.min(cd_max) - ab_min.max(cd_min)
}

fn min_max(p: f64, q: f64) -> (f64, f64) {
    if p <= q { (p, q) } else { (q, p) }
}
