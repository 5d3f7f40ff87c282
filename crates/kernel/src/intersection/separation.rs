//! Exact 3D separating-axis test for two convex planar polygons.

use super::Interval;
use crate::Tolerance;
use crate::geometry::plane::Plane;
use crate::geometry::point::Point3d;
use crate::geometry::polygon::edges;
use crate::geometry::vector::Vec3;

/// Axes contributed by a single polygon: for each edge, the face-consistent
/// normal (edge x next edge) and the edge's in-plane normal.
fn polygon_axes(vertices: &[Point3d], axes: &mut Vec<Vec3>) {
    let n = vertices.len();
    let plane_normal = Plane::from_polygon(vertices).map(|plane| plane.normal);
    for i in 0..n {
        let edge = vertices[(i + 1) % n] - vertices[i];
        let next = vertices[(i + 2) % n] - vertices[(i + 1) % n];
        if let Some(face) = edge.cross(&next).normalized() {
            axes.push(face);
        }
        if let Some(side) = plane_normal.and_then(|normal| normal.cross(&edge).normalized()) {
            axes.push(side);
        }
    }
}

/// Every candidate separating axis for the pair, `p`'s first.
fn candidate_axes(p: &[Point3d], q: &[Point3d]) -> Vec<Vec3> {
    let mut axes = Vec::with_capacity(3 * (p.len() + q.len()) + p.len() * q.len());
    polygon_axes(p, &mut axes);
    polygon_axes(q, &mut axes);
    for ep in edges(p) {
        for eq in edges(q) {
            if let Some(axis) = ep.direction().cross(&eq.direction()).normalized() {
                axes.push(axis);
            }
        }
    }
    axes
}

fn interval_on(vertices: &[Point3d], axis: &Vec3) -> Interval {
    Interval::of(vertices.iter().map(|v| v.to_vec3().dot(axis)))
}

/// An axis along which the two polygons are apart by more than the
/// coincidence tolerance, if one exists.
pub fn separating_axis(p: &[Point3d], q: &[Point3d], tol: &Tolerance) -> Option<Vec3> {
    candidate_axes(p, q)
        .into_iter()
        .find(|axis| interval_on(p, axis).is_separated_from(&interval_on(q, axis), tol.coincidence))
}

/// Whether a separating plane exists between `p` and `q`.
pub fn are_separated(p: &[Point3d], q: &[Point3d], tol: &Tolerance) -> bool {
    separating_axis(p, q, tol).is_some()
}
