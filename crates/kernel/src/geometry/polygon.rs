//! Helpers over closed polygons given as vertex slices.

use super::plane::Plane;
use super::point::Point3d;
use super::segment::Segment3d;
use crate::Tolerance;

/// Edges of a closed polygon, the last one wrapping back to the first vertex.
pub fn edges(vertices: &[Point3d]) -> impl Iterator<Item = Segment3d> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment3d::new(vertices[i], vertices[(i + 1) % n]))
}

/// Whether `point` lies on or inside a convex planar polygon.
///
/// `plane` must be the polygon's own plane with its normal following the
/// winding (as built by [`Plane::from_polygon`]). The point must be within
/// the coincidence tolerance of the plane and not farther than that outside
/// any edge.
pub fn contains_point(vertices: &[Point3d], plane: &Plane, point: &Point3d, tol: &Tolerance) -> bool {
    if plane.distance_to_point(point).abs() > tol.coincidence {
        return false;
    }
    edges(vertices).all(|edge| {
        let d = edge.direction();
        let len = d.length();
        if len < 1e-15 {
            return true;
        }
        // Signed distance to the edge line, positive towards the interior.
        let inward = plane.normal.cross(&d).dot(&(*point - edge.start)) / len;
        inward >= -tol.coincidence
    })
}
