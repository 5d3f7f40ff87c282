//! Boundary classification of trace endpoints.

use crate::Tolerance;
use crate::fracture::TraceKind;
use crate::geometry::point::Point3d;
use crate::geometry::polygon::edges;

/// Whether `point` lies on one of the polygon's edges: within the
/// coincidence tolerance of the edge's line, with its projection inside the
/// edge.
pub fn is_on_boundary(point: &Point3d, vertices: &[Point3d], tol: &Tolerance) -> bool {
    edges(vertices).any(|edge| match (edge.line_distance_to(point), edge.parameter_of(point)) {
        (Some(distance), Some(t)) => distance <= tol.coincidence && tol.in_unit_interval(t),
        _ => false,
    })
}

/// Classify a trace relative to one fracture: passing when both endpoints
/// lie on that fracture's own boundary, tip otherwise.
pub fn classify_trace(p1: &Point3d, p2: &Point3d, vertices: &[Point3d], tol: &Tolerance) -> TraceKind {
    if is_on_boundary(p1, vertices, tol) && is_on_boundary(p2, vertices, tol) {
        TraceKind::Passing
    } else {
        TraceKind::Tip
    }
}
