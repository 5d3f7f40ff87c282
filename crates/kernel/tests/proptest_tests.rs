//! Property-based tests for fracture network invariants using the `proptest` crate.

use proptest::prelude::*;

use dfn_kernel::geometry::point::Point3d;
use dfn_kernel::geometry::vector::Vec3;
use dfn_kernel::intersection::{classify_trace, is_on_boundary};
use dfn_kernel::{
    Fracture, FractureSet, IntersectionConfig, IntersectionEngine, RunState, Tolerance, Trace, TraceKind,
    intersects, sort_traces,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Rectangle center inside a small box so that random pairs often meet.
fn arb_center() -> impl Strategy<Value = (f64, f64, f64)> {
    (-2.0f64..2.0, -2.0f64..2.0, -2.0f64..2.0)
}

/// Half extents of a rectangle, bounded away from zero.
fn arb_half_extents() -> impl Strategy<Value = (f64, f64)> {
    (0.2f64..2.0, 0.2f64..2.0)
}

/// Polar and azimuthal angles of the rectangle's normal.
fn arb_orientation() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..std::f64::consts::PI, -std::f64::consts::PI..std::f64::consts::PI)
}

type RectParams = ((f64, f64, f64), (f64, f64), (f64, f64));

fn arb_rect() -> impl Strategy<Value = RectParams> {
    (arb_center(), arb_half_extents(), arb_orientation())
}

/// Planar rectangle with the given center, half extents and normal angles.
fn rectangle(((cx, cy, cz), (a, b), (theta, phi)): RectParams) -> Vec<Point3d> {
    let normal = Vec3::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos());
    let helper = if normal.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let u = normal.cross(&helper).normalized().unwrap();
    let v = normal.cross(&u);
    let c = Point3d::new(cx, cy, cz);
    vec![
        c + u * (-a) + v * (-b),
        c + u * a + v * (-b),
        c + u * a + v * b,
        c + u * (-a) + v * b,
    ]
}

fn network(rects: Vec<RectParams>) -> FractureSet {
    FractureSet::from_fractures(
        rects
            .into_iter()
            .enumerate()
            .map(|(i, r)| Fracture::new(i as u32, rectangle(r)).unwrap()),
    )
    .unwrap()
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// 1. Intersection symmetry: intersects(P, Q) == intersects(Q, P)
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn intersects_is_symmetric(p in arb_rect(), q in arb_rect()) {
        let tol = Tolerance::default();
        let p = rectangle(p);
        let q = rectangle(q);
        prop_assert_eq!(intersects(&p, &q, &tol), intersects(&q, &p, &tol));
    }
}

// ---------------------------------------------------------------------------
// 2. Deduplication completeness: n fractures yield n(n-1)/2 registry entries
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn registry_holds_every_pair_once(rects in prop::collection::vec(arb_rect(), 1..8)) {
        let n = rects.len();
        let mut set = network(rects);
        let mut state = RunState::new();
        let engine = IntersectionEngine::default();

        let first = engine.compute(&mut set, &mut state);
        prop_assert_eq!(state.pairs.len(), n * (n - 1) / 2);
        prop_assert_eq!(first.stats.evaluated, n * (n - 1) / 2);

        let again = engine.compute(&mut set, &mut state);
        prop_assert!(again.traces.is_empty());
        prop_assert_eq!(state.pairs.len(), n * (n - 1) / 2);
    }
}

// ---------------------------------------------------------------------------
// 3. Trace consistency: length, classification, adjacency, plane membership
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn traces_are_consistent(rects in prop::collection::vec(arb_rect(), 2..6)) {
        let tol = Tolerance::default();
        let mut set = network(rects);
        let result = IntersectionEngine::new(IntersectionConfig::default())
            .compute(&mut set, &mut RunState::new());

        for trace in &result.traces {
            let (p1, p2) = trace.endpoints();
            prop_assert!((trace.length() - p1.distance_to(&p2)).abs() < TOL);
            prop_assert!(trace.length() > tol.coincidence);

            let (a, b) = trace.fractures();
            prop_assert!(result.neighbours(a).contains(&b));
            prop_assert!(result.neighbours(b).contains(&a));

            for id in [a, b] {
                let fracture = set.get(id).unwrap();
                let kind = trace.kind_for(id).unwrap();
                prop_assert_eq!(kind, classify_trace(&p1, &p2, fracture.vertices(), &tol));
                let both_on_boundary = is_on_boundary(&p1, fracture.vertices(), &tol)
                    && is_on_boundary(&p2, fracture.vertices(), &tol);
                prop_assert_eq!(kind == TraceKind::Passing, both_on_boundary);

                let plane = fracture.plane().unwrap();
                prop_assert!(plane.distance_to_point(&p1).abs() < TOL);
                prop_assert!(plane.distance_to_point(&p2).abs() < TOL);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Sort postcondition: lengths are non-increasing after sort_traces
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sorted_lengths_non_increasing(lengths in prop::collection::vec(0.0f64..100.0, 0..40)) {
        let mut traces: Vec<Trace> = lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| Trace::new(
                i as u32,
                (0, 1),
                (Point3d::ORIGIN, Point3d::new(len, 0.0, 0.0)),
                (TraceKind::Tip, TraceKind::Tip),
            ))
            .collect();
        sort_traces(&mut traces);
        for window in traces.windows(2) {
            prop_assert!(window[0].length() >= window[1].length());
        }
        prop_assert_eq!(traces.len(), lengths.len());
    }
}
