pub mod aggregate;
pub mod config;
pub mod error;
pub mod fracture;
pub mod geometry;
pub mod intersection;
pub mod network;

// Re-export the main entry points at crate root for convenience.
pub use aggregate::{FractureTraces, group_traces, sort_traces, sorted_traces};
pub use config::IntersectionConfig;
pub use error::{DegeneratePair, DegenerateReason, FractureError};
pub use fracture::{Fracture, FractureId, FractureSet, Trace, TraceId, TraceKind};
pub use intersection::intersects;
pub use network::{
    FracturePair, IntersectionEngine, NetworkIntersections, PairOutcome, PairRegistry, RunState,
    RunStats, compute_intersections,
};

/// Tolerance configuration for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Points closer than this are considered coincident. Also used as the
    /// separation slack for interval and plane-side tests.
    pub coincidence: f64,
    /// Slack on segment parameters when checking they lie in [0, 1].
    pub parametric: f64,
    /// Sine of the angle below which two directions are treated as parallel.
    pub angular: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            coincidence: 1e-9,
            parametric: 1e-9,
            angular: 1e-12,
        }
    }
}

impl Tolerance {
    /// Tolerance with the same value for distances and parameters.
    pub fn uniform(epsilon: f64) -> Self {
        Self {
            coincidence: epsilon,
            parametric: epsilon,
            ..Self::default()
        }
    }

    pub fn points_coincident(&self, a: &geometry::point::Point3d, b: &geometry::point::Point3d) -> bool {
        a.distance_to(b) <= self.coincidence
    }

    /// Whether `t` lies in [0, 1] up to the parametric slack.
    pub fn in_unit_interval(&self, t: f64) -> bool {
        t >= -self.parametric && t <= 1.0 + self.parametric
    }
}
