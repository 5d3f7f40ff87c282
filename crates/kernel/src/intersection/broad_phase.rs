//! Projected 2D overlap filter.
//!
//! A 3D intersection implies overlapping shadows on every coordinate plane,
//! so a single disjoint shadow rules a pair out before the exact test runs.

use tracing::trace;

use super::Interval;
use crate::Tolerance;
use crate::geometry::point::{Point2d, Point3d};
use crate::geometry::projection::{ProjectionPlane, project_polygon};
use crate::geometry::vector::Vec2;

/// Unit normals of a 2D polygon's edges. Zero-length edges (a fracture seen
/// edge-on collapses to a segment) contribute no axis.
fn edge_normals(polygon: &[Point2d]) -> impl Iterator<Item = Vec2> + '_ {
    let n = polygon.len();
    (0..n).filter_map(move |i| (polygon[(i + 1) % n] - polygon[i]).perp().normalized())
}

fn interval_on(polygon: &[Point2d], axis: &Vec2) -> Interval {
    Interval::of(polygon.iter().map(|p| p.to_vec2().dot(axis)))
}

/// 2D separating-axis test over the edge normals of both polygons.
///
/// Returns `true` when the projections overlap on every axis.
pub fn polygons_overlap_2d(a: &[Point2d], b: &[Point2d], tol: &Tolerance) -> bool {
    edge_normals(a).chain(edge_normals(b)).all(|axis| {
        !interval_on(a, &axis).is_separated_from(&interval_on(b, &axis), tol.coincidence)
    })
}

/// The first coordinate plane on which the shadows of `p` and `q` are
/// disjoint, if any.
pub fn first_separating_projection(p: &[Point3d], q: &[Point3d], tol: &Tolerance) -> Option<ProjectionPlane> {
    ProjectionPlane::ALL.into_iter().find(|&plane| {
        let overlap = polygons_overlap_2d(&project_polygon(p, plane), &project_polygon(q, plane), tol);
        if !overlap {
            trace!(%plane, "shadows disjoint");
        }
        !overlap
    })
}

/// Whether the shadows of `p` and `q` overlap on all three coordinate planes.
pub fn projections_overlap(p: &[Point3d], q: &[Point3d], tol: &Tolerance) -> bool {
    first_separating_projection(p, q, tol).is_none()
}
