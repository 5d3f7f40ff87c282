//! Pairwise fracture intersection: separation tests, trace extraction and
//! boundary classification.
//!
//! A pair goes through three stages, cheapest first:
//! - [`broad_phase`]: 2D separating-axis test on the three coordinate-plane
//!   shadows. Any disjoint shadow proves the polygons are apart.
//! - [`separation`]: exact 3D separating-axis test.
//! - [`trace`]: contact points and the resulting [`Trace`](crate::Trace),
//!   classified per fracture by [`classify`].

pub mod broad_phase;
pub mod classify;
pub mod separation;
pub mod trace;

pub use broad_phase::{first_separating_projection, polygons_overlap_2d, projections_overlap};
pub use classify::{classify_trace, is_on_boundary};
pub use separation::{are_separated, separating_axis};
pub use trace::{TraceIdCounter, contact_points, extract_trace};

use crate::Tolerance;
use crate::geometry::point::Point3d;

/// Closed range of projections of a polygon on an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Smallest interval containing every value.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, v| Self {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    }

    /// Whether the intervals are disjoint by more than `eps`.
    pub fn is_separated_from(&self, other: &Interval, eps: f64) -> bool {
        self.max < other.min - eps || other.max < self.min - eps
    }
}

/// Whether two fracture polygons intersect: every coordinate-plane shadow
/// overlaps and no 3D separating axis exists. Symmetric in its arguments.
pub fn intersects(p: &[Point3d], q: &[Point3d], tol: &Tolerance) -> bool {
    projections_overlap(p, q, tol) && !are_separated(p, q, tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point3d> {
        vec![
            Point3d::new(x0, y0, 0.0),
            Point3d::new(x1, y0, 0.0),
            Point3d::new(x1, y1, 0.0),
            Point3d::new(x0, y1, 0.0),
        ]
    }

    #[test]
    fn test_interval_separation() {
        let a = Interval::of([0.0, 1.0, 0.5]);
        assert_eq!(a, Interval { min: 0.0, max: 1.0 });
        assert!(a.is_separated_from(&Interval::of([2.0, 3.0]), 1e-9));
        assert!(!a.is_separated_from(&Interval::of([1.0, 3.0]), 1e-9));
        assert!(!a.is_separated_from(&Interval::of([1.0 + 1e-12, 3.0]), 1e-9));
    }

    #[test]
    fn test_far_apart_squares_do_not_intersect() {
        let tol = Tolerance::default();
        let p = rect(0.0, 0.0, 1.0, 1.0);
        let q = rect(3.0, 0.0, 4.0, 1.0);
        assert!(!intersects(&p, &q, &tol));
        assert!(!intersects(&q, &p, &tol));
    }

    #[test]
    fn test_overlapping_squares_intersect() {
        let tol = Tolerance::default();
        let p = rect(0.0, 0.0, 2.0, 1.0);
        let q = rect(1.0, -1.0, 3.0, 2.0);
        assert!(intersects(&p, &q, &tol));
        assert!(intersects(&q, &p, &tol));
    }

    #[test]
    fn test_perpendicular_crossing_fractures_intersect() {
        let tol = Tolerance::default();
        let horizontal = rect(0.0, 0.0, 1.0, 1.0);
        let vertical = vec![
            Point3d::new(0.5, -0.5, -0.5),
            Point3d::new(0.5, 1.5, -0.5),
            Point3d::new(0.5, 1.5, 0.5),
            Point3d::new(0.5, -0.5, 0.5),
        ];
        assert!(intersects(&horizontal, &vertical, &tol));
    }

    #[test]
    fn test_parallel_offset_fractures_do_not_intersect() {
        let tol = Tolerance::default();
        let low = rect(0.0, 0.0, 1.0, 1.0);
        let high: Vec<Point3d> = low.iter().map(|v| Point3d::new(v.x, v.y, 0.25)).collect();
        assert!(!intersects(&low, &high, &tol));
    }
}
