//! Assertion helpers with diagnostic output.
//!
//! Every failure carries the caller's context string plus expected and
//! actual values.

use dfn_kernel::geometry::point::Point3d;
use dfn_kernel::{FractureId, NetworkIntersections, Trace, TraceKind};

use crate::helpers::HarnessError;

fn failed(ctx: &str, detail: String) -> HarnessError {
    HarnessError::AssertionFailed {
        detail: format!("[{}] {}", ctx, detail),
    }
}

/// Assert two points coincide within `tol`.
pub fn assert_point_near(actual: &Point3d, expected: &Point3d, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    let distance = actual.distance_to(expected);
    if distance <= tol {
        Ok(())
    } else {
        Err(failed(
            ctx,
            format!("expected {}, got {} (distance {:.3e}, tol {:.1e})", expected, actual, distance, tol),
        ))
    }
}

/// Assert a trace runs between `a` and `b`, in either direction.
pub fn assert_trace_endpoints(
    trace: &Trace,
    a: &Point3d,
    b: &Point3d,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let (p1, p2) = trace.endpoints();
    let forward = p1.distance_to(a) <= tol && p2.distance_to(b) <= tol;
    let backward = p1.distance_to(b) <= tol && p2.distance_to(a) <= tol;
    if forward || backward {
        Ok(())
    } else {
        Err(failed(
            ctx,
            format!("trace {} runs {} -> {}, expected {} -> {}", trace.id(), p1, p2, a, b),
        ))
    }
}

/// Assert the classification of a trace relative to one of its fractures.
pub fn assert_trace_kind(trace: &Trace, fracture: FractureId, expected: TraceKind, ctx: &str) -> Result<(), HarnessError> {
    match trace.kind_for(fracture) {
        Some(kind) if kind == expected => Ok(()),
        Some(kind) => Err(failed(
            ctx,
            format!("trace {} is {} for fracture {}, expected {}", trace.id(), kind, fracture, expected),
        )),
        None => Err(failed(
            ctx,
            format!("trace {} does not belong to fracture {}", trace.id(), fracture),
        )),
    }
}

/// Assert trace lengths are non-increasing.
pub fn assert_sorted_desc(traces: &[Trace], ctx: &str) -> Result<(), HarnessError> {
    match traces.windows(2).position(|w| w[0].length() < w[1].length()) {
        None => Ok(()),
        Some(i) => Err(failed(
            ctx,
            format!(
                "trace {} (length {}) precedes longer trace {} (length {})",
                traces[i].id(),
                traces[i].length(),
                traces[i + 1].id(),
                traces[i + 1].length()
            ),
        )),
    }
}

/// Assert the neighbours of `fracture`, in discovery order.
pub fn assert_adjacency(
    intersections: &NetworkIntersections,
    fracture: FractureId,
    expected: &[FractureId],
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = intersections.neighbours(fracture);
    if actual == expected {
        Ok(())
    } else {
        Err(failed(
            ctx,
            format!("fracture {} neighbours: expected {:?}, got {:?}", fracture, expected, actual),
        ))
    }
}
