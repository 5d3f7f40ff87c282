//! Trace extraction from two intersecting fractures.

use super::classify::classify_trace;
use crate::Tolerance;
use crate::error::{DegeneratePair, DegenerateReason};
use crate::fracture::{Fracture, Trace, TraceId};
use crate::geometry::intersection::{segment_plane_crossing, segment_segment_intersection};
use crate::geometry::plane::Plane;
use crate::geometry::point::Point3d;
use crate::geometry::polygon::{contains_point, edges};

/// Hands out trace ids in discovery order. Ids are never reused within a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceIdCounter {
    next: TraceId,
}

impl TraceIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: TraceId) -> Self {
        Self { next: first }
    }

    /// The id the next trace will receive.
    pub fn peek(&self) -> TraceId {
        self.next
    }

    fn take(&mut self) -> TraceId {
        let id = self.next;
        self.next += 1;
        id
    }
}

fn push_unique(points: &mut Vec<Point3d>, candidate: Point3d, tol: &Tolerance) {
    if !points.iter().any(|p| tol.points_coincident(p, &candidate)) {
        points.push(candidate);
    }
}

/// Points of `a`'s boundary that touch polygon `b`, in edge order.
///
/// Per edge of `a`: its start vertex if it lies in `b`, its intersections
/// with `b`'s edges, and, unless the polygons are coplanar, the point where it
/// pierces `b`'s plane inside `b`.
fn gather_contacts(a: &[Point3d], b: &[Point3d], b_plane: &Plane, tol: &Tolerance, points: &mut Vec<Point3d>) {
    let coplanar = a
        .iter()
        .all(|v| b_plane.distance_to_point(v).abs() <= tol.coincidence);

    for edge in edges(a) {
        if contains_point(b, b_plane, &edge.start, tol) {
            push_unique(points, edge.start, tol);
        }
        for other in edges(b) {
            if let Some(hit) = segment_segment_intersection(&edge, &other, tol) {
                push_unique(points, hit, tol);
            }
        }
        if !coplanar {
            if let Some(hit) = segment_plane_crossing(&edge, b_plane, tol) {
                if contains_point(b, b_plane, &hit, tol) {
                    push_unique(points, hit, tol);
                }
            }
        }
    }
}

/// Distinct contact points between two polygons: `p`'s edges against `q`
/// first, then `q`'s edges against `p`.
pub fn contact_points(p: &[Point3d], p_plane: &Plane, q: &[Point3d], q_plane: &Plane, tol: &Tolerance) -> Vec<Point3d> {
    let mut points = Vec::new();
    gather_contacts(p, q, q_plane, tol, &mut points);
    gather_contacts(q, p, p_plane, tol, &mut points);
    points
}

/// Build the trace of two fractures already known to intersect.
///
/// The first two distinct contact points become the endpoints and the trace
/// takes the next id from `ids`. When fewer than two points exist (the
/// fractures only touch) the pair is reported as degenerate and no id is
/// consumed.
pub fn extract_trace(
    first: &Fracture,
    second: &Fracture,
    ids: &mut TraceIdCounter,
    tol: &Tolerance,
) -> Result<Trace, DegeneratePair> {
    let degenerate = |reason| DegeneratePair {
        first: first.id(),
        second: second.id(),
        reason,
    };
    let first_plane = first
        .plane()
        .ok_or_else(|| degenerate(DegenerateReason::DegeneratePolygon { id: first.id() }))?;
    let second_plane = second
        .plane()
        .ok_or_else(|| degenerate(DegenerateReason::DegeneratePolygon { id: second.id() }))?;

    let points = contact_points(first.vertices(), &first_plane, second.vertices(), &second_plane, tol);
    let (p1, p2) = match points.as_slice() {
        [a, b, ..] => (*a, *b),
        _ => {
            return Err(degenerate(DegenerateReason::InsufficientContactPoints {
                found: points.len(),
            }));
        }
    };

    let kinds = (
        classify_trace(&p1, &p2, first.vertices(), tol),
        classify_trace(&p1, &p2, second.vertices(), tol),
    );
    Ok(Trace::new(ids.take(), (first.id(), second.id()), (p1, p2), kinds))
}
