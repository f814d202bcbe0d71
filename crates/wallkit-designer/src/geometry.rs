//! Vector and segment primitives used by the topology index and the wall
//! outline builder.
//!
//! Every function here is total: coincident points and parallel lines return
//! a documented fallback instead of NaN or an error.

use crate::model::Point;

/// Two points closer than this have no usable direction.
pub const DEGENERATE_EPSILON: f64 = 1e-4;

/// Lines whose unit directions have a cross product below this are parallel.
pub const PARALLEL_EPSILON: f64 = 0.01;

pub fn distance(a: &Point, b: &Point) -> f64 {
    a.distance_to(b)
}

/// Unit direction from `a` to `b`, or `(0, 0)` when they coincide.
pub fn normalize(a: &Point, b: &Point) -> Point {
    let d = *b - *a;
    let len = d.length();
    if len < DEGENERATE_EPSILON {
        return Point::ORIGIN;
    }
    Point::new(d.x / len, d.y / len)
}

/// Normalizes a free vector, `(0, 0)` when it is too short.
pub fn normalize_vector(v: &Point) -> Point {
    normalize(&Point::ORIGIN, v)
}

/// Vector of length `width / 2` perpendicular to `a -> b` (counter-clockwise
/// side). Adding and subtracting it from the centerline gives the two long
/// edges of a wall.
pub fn perpendicular_offset(a: &Point, b: &Point, width: f64) -> Point {
    normalize(a, b).perp() * (width / 2.0)
}

/// Intersection of the infinite lines `p1 + t*d1` and `p2 + s*d2`.
///
/// Returns `None` when the directions are within [`PARALLEL_EPSILON`] of
/// parallel; callers fall back to a midpoint.
pub fn line_intersection(p1: &Point, d1: &Point, p2: &Point, d2: &Point) -> Option<Point> {
    let cross = d1.cross(d2);
    if cross.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (*p2 - *p1).cross(d2) / cross;
    Some(*p1 + *d1 * t)
}

/// Projection of a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    pub point: Point,
    /// Parameter along the segment, clamped to `[0, 1]`.
    pub t: f64,
    pub distance: f64,
}

/// Clamped projection of `p` onto segment `a - b`. A zero-length segment
/// projects everything onto `a` with `t = 0`.
pub fn closest_point_on_segment(a: &Point, b: &Point, p: &Point) -> SegmentProjection {
    let ab = *b - *a;
    let len_sq = ab.dot(&ab);
    let t = if len_sq < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        0.0
    } else {
        ((*p - *a).dot(&ab) / len_sq).clamp(0.0, 1.0)
    };
    let point = *a + ab * t;
    SegmentProjection {
        point,
        t,
        distance: point.distance_to(p),
    }
}

/// True when `a` and `b` lie within `tolerance` of each other.
pub fn points_coincide(a: &Point, b: &Point, tolerance: f64) -> bool {
    a.distance_to(b) < tolerance
}

/// Even-odd point containment test (ray casting). The ring may be open or
/// closed.
pub fn point_in_polygon(p: &Point, ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (ring[i], ring[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pj.x + (p.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace area, positive for counter-clockwise rings.
pub fn signed_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, p) in ring.iter().enumerate() {
        let q = ring[(i + 1) % ring.len()];
        sum += p.cross(&q);
    }
    sum / 2.0
}

/// Principal axis a segment can be snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Returns the axis `a -> b` lies within `threshold_degrees` of, if any.
/// Degenerate segments align with nothing.
pub fn nearly_aligned_axis(a: &Point, b: &Point, threshold_degrees: f64) -> Option<Axis> {
    let d = *b - *a;
    if d.length() < DEGENERATE_EPSILON {
        return None;
    }
    // Angle to the x axis folded into [0, 90].
    let angle = d.y.atan2(d.x).to_degrees().abs();
    let from_horizontal = angle.min(180.0 - angle);
    if from_horizontal < threshold_degrees {
        Some(Axis::Horizontal)
    } else if (90.0 - from_horizontal) < threshold_degrees {
        Some(Axis::Vertical)
    } else {
        None
    }
}

/// Moves `b` so that `a -> b` is exactly parallel to `axis`.
pub fn align_to_axis(a: &Point, b: &Point, axis: Axis) -> Point {
    match axis {
        Axis::Horizontal => Point::new(b.x, a.y),
        Axis::Vertical => Point::new(a.x, b.y),
    }
}
