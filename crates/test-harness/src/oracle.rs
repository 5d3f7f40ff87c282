//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics,
//! so a test can collect every failure in one pass.

use dfn_kernel::intersection::{classify_trace, is_on_boundary};
use dfn_kernel::{intersects, FractureSet, NetworkIntersections, PairRegistry, Tolerance, Trace, TraceKind};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Trace Oracles ───────────────────────────────────────────────────────────

/// Each trace's stored length equals the distance between its endpoints.
pub fn check_length_consistency(traces: &[Trace], tol: &Tolerance) -> OracleVerdict {
    let mut worst = 0.0f64;
    let mut offenders = Vec::new();
    for trace in traces {
        let (p1, p2) = trace.endpoints();
        let error = (trace.length() - p1.distance_to(&p2)).abs();
        worst = worst.max(error);
        if error > tol.coincidence {
            offenders.push(trace.id());
        }
    }

    if offenders.is_empty() {
        OracleVerdict::pass_val(
            "length_consistency",
            format!("{} traces, max error {:.2e}", traces.len(), worst),
            worst,
        )
    } else {
        OracleVerdict::fail_val(
            "length_consistency",
            format!("traces {:?} disagree with their endpoints", offenders),
            worst,
        )
    }
}

/// Lengths are non-increasing.
pub fn check_sorted_desc(traces: &[Trace]) -> OracleVerdict {
    let inversions = traces
        .windows(2)
        .filter(|w| w[0].length() < w[1].length())
        .count();
    if inversions == 0 {
        OracleVerdict::pass("sorted_desc", format!("{} traces in order", traces.len()))
    } else {
        OracleVerdict::fail("sorted_desc", format!("{} adjacent inversions", inversions))
    }
}

/// A trace is passing for a fracture exactly when both endpoints lie on
/// that fracture's boundary.
pub fn check_classification_consistency(set: &FractureSet, tol: &Tolerance) -> OracleVerdict {
    let mut mismatches = Vec::new();
    for trace in set.traces() {
        let (p1, p2) = trace.endpoints();
        let (a, b) = trace.fractures();
        for id in [a, b] {
            let Some(fracture) = set.get(id) else {
                mismatches.push(format!("trace {} references unknown fracture {}", trace.id(), id));
                continue;
            };
            let vertices = fracture.vertices();
            let on_boundary = is_on_boundary(&p1, vertices, tol) && is_on_boundary(&p2, vertices, tol);
            let stored = trace.kind_for(id);
            let expected = classify_trace(&p1, &p2, vertices, tol);
            if stored != Some(expected) || (expected == TraceKind::Passing) != on_boundary {
                mismatches.push(format!("trace {} on fracture {}: stored {:?}", trace.id(), id, stored));
            }
        }
    }

    if mismatches.is_empty() {
        OracleVerdict::pass(
            "classification_consistency",
            format!("{} traces classified consistently", set.traces().len()),
        )
    } else {
        OracleVerdict::fail("classification_consistency", mismatches.join("; "))
    }
}

/// Both endpoints of every trace lie in both parent planes.
pub fn check_traces_in_planes(set: &FractureSet, tol: &Tolerance) -> OracleVerdict {
    let slack = 10.0 * tol.coincidence;
    let mut worst = 0.0f64;
    let mut offenders = Vec::new();
    for trace in set.traces() {
        let (p1, p2) = trace.endpoints();
        let (a, b) = trace.fractures();
        for plane in [a, b].into_iter().filter_map(|id| set.get(id)).filter_map(|f| f.plane()) {
            let d = plane.distance_to_point(&p1).abs().max(plane.distance_to_point(&p2).abs());
            worst = worst.max(d);
            if d > slack {
                offenders.push(trace.id());
            }
        }
    }

    if offenders.is_empty() {
        OracleVerdict::pass_val("traces_in_planes", format!("max plane distance {:.2e}", worst), worst)
    } else {
        OracleVerdict::fail_val(
            "traces_in_planes",
            format!("traces {:?} leave a parent plane", offenders),
            worst,
        )
    }
}

// ── Network Oracles ─────────────────────────────────────────────────────────

/// `intersects(P, Q) == intersects(Q, P)` for every pair of the set.
pub fn check_intersection_symmetry(set: &FractureSet, tol: &Tolerance) -> OracleVerdict {
    let fractures = set.fractures();
    let mut asymmetric = Vec::new();
    let mut intersecting = 0usize;
    for (i, p) in fractures.iter().enumerate() {
        for q in &fractures[i + 1..] {
            let pq = intersects(p.vertices(), q.vertices(), tol);
            let qp = intersects(q.vertices(), p.vertices(), tol);
            if pq != qp {
                asymmetric.push((p.id(), q.id()));
            }
            if pq {
                intersecting += 1;
            }
        }
    }

    if asymmetric.is_empty() {
        OracleVerdict::pass_val(
            "intersection_symmetry",
            format!("{} intersecting pairs, all symmetric", intersecting),
            intersecting as f64,
        )
    } else {
        OracleVerdict::fail("intersection_symmetry", format!("asymmetric pairs {:?}", asymmetric))
    }
}

/// After a full run over `fracture_count` fractures the registry holds every
/// unordered pair exactly once.
pub fn check_dedup_completeness(registry: &PairRegistry, fracture_count: usize) -> OracleVerdict {
    let expected = fracture_count * fracture_count.saturating_sub(1) / 2;
    let actual = registry.len();
    let canonical = registry.iter().all(|pair| pair.low() < pair.high());

    if actual == expected && canonical {
        OracleVerdict::pass_val(
            "dedup_completeness",
            format!("{} pairs registered", actual),
            actual as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "dedup_completeness",
            format!("expected {} canonical pairs, got {} (canonical: {})", expected, actual, canonical),
            actual as f64,
        )
    }
}

/// If `b` is listed under `a`, `a` is listed under `b`.
pub fn check_adjacency_symmetric(intersections: &NetworkIntersections) -> OracleVerdict {
    let mut one_sided = Vec::new();
    for (&a, neighbours) in &intersections.adjacency {
        for &b in neighbours {
            if !intersections.neighbours(b).contains(&a) {
                one_sided.push((a, b));
            }
        }
    }
    if one_sided.is_empty() {
        OracleVerdict::pass(
            "adjacency_symmetric",
            format!("{} fractures with neighbours", intersections.adjacency.len()),
        )
    } else {
        OracleVerdict::fail("adjacency_symmetric", format!("one-sided links {:?}", one_sided))
    }
}

/// Run every oracle that holds right after a complete run.
pub fn run_all(
    set: &FractureSet,
    intersections: &NetworkIntersections,
    registry: &PairRegistry,
    tol: &Tolerance,
) -> Vec<OracleVerdict> {
    vec![
        check_length_consistency(set.traces(), tol),
        check_classification_consistency(set, tol),
        check_traces_in_planes(set, tol),
        check_intersection_symmetry(set, tol),
        check_dedup_completeness(registry, set.len()),
        check_adjacency_symmetric(intersections),
    ]
}
