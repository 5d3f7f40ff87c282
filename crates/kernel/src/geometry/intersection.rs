use super::plane::Plane;
use super::point::Point3d;
use super::segment::Segment3d;
use crate::Tolerance;

/// Closest points between the lines carrying two segments.
#[derive(Debug, Clone, Copy)]
pub struct LineLineClosest {
    pub point1: Point3d,
    pub t1: f64,
    pub point2: Point3d,
    pub t2: f64,
    pub distance: f64,
}

// ─── Segment-Segment Intersection ───────────────────────────────────────────

/// Find the closest points between the infinite lines through `s1` and `s2`.
/// Returns `None` if either segment is degenerate or the lines are parallel.
pub fn line_line_closest(s1: &Segment3d, s2: &Segment3d, tol: &Tolerance) -> Option<LineLineClosest> {
    let u = s1.direction();
    let v = s2.direction();
    let w = s1.start - s2.start;
    let a = u.dot(&u);
    let b = u.dot(&v);
    let c = v.dot(&v);
    let d = u.dot(&w);
    let e = v.dot(&w);

    if a < 1e-30 || c < 1e-30 || u.is_parallel_to(&v, tol.angular) {
        return None;
    }
    let denom = a * c - b * b;

    let t1 = (b * e - c * d) / denom;
    let t2 = (a * e - b * d) / denom;

    let point1 = s1.point_at(t1);
    let point2 = s2.point_at(t2);
    let distance = point1.distance_to(&point2);

    Some(LineLineClosest {
        point1,
        t1,
        point2,
        t2,
        distance,
    })
}

/// Intersect two 3D segments.
///
/// Segments are skew in general; they meet only if the common perpendicular
/// is no longer than the coincidence tolerance and both parameters fall in
/// [0, 1]. Parallel and collinear segments report no intersection.
pub fn segment_segment_intersection(s1: &Segment3d, s2: &Segment3d, tol: &Tolerance) -> Option<Point3d> {
    let closest = line_line_closest(s1, s2, tol)?;
    if closest.distance > tol.coincidence
        || !tol.in_unit_interval(closest.t1)
        || !tol.in_unit_interval(closest.t2)
    {
        return None;
    }
    Some(s1.point_at(closest.t1.clamp(0.0, 1.0)))
}

// ─── Segment-Plane Crossing ─────────────────────────────────────────────────

/// Point where `segment` crosses `plane`.
///
/// Returns `None` when both endpoints lie strictly on the same side, or when
/// the segment lies in the plane (no single crossing point).
pub fn segment_plane_crossing(segment: &Segment3d, plane: &Plane, tol: &Tolerance) -> Option<Point3d> {
    let d0 = plane.distance_to_point(&segment.start);
    let d1 = plane.distance_to_point(&segment.end);
    let eps = tol.coincidence;

    if (d0 > eps && d1 > eps) || (d0 < -eps && d1 < -eps) {
        return None;
    }
    if (d0 - d1).abs() <= eps {
        return None; // lies in the plane
    }
    let t = (d0 / (d0 - d1)).clamp(0.0, 1.0);
    Some(segment.point_at(t))
}
