//! NetworkBuilder — fluent API for scripting fracture networks in tests.
//!
//! Drives the real engine with a run state that persists across calls, so
//! adding fractures and computing again only evaluates the new pairs.

use dfn_kernel::geometry::point::Point3d;
use dfn_kernel::{
    sort_traces, Fracture, FractureId, FractureSet, IntersectionConfig, IntersectionEngine, NetworkIntersections,
    RunState, Tolerance, Trace, TraceKind,
};

use crate::assertions;
use crate::helpers::{self, HarnessError};
use crate::oracle::{self, OracleVerdict};
use crate::report::NetworkSummary;

/// A fluent builder for constructing and verifying fracture networks.
pub struct NetworkBuilder {
    set: FractureSet,
    config: IntersectionConfig,
    state: RunState,
    last: Option<NetworkIntersections>,
    history: Vec<String>,
    auto_check: bool,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkBuilder {
    /// Empty network with the default configuration.
    pub fn new() -> Self {
        Self::from_set(FractureSet::new())
    }

    /// Start from an existing fracture set.
    pub fn from_set(set: FractureSet) -> Self {
        Self {
            set,
            config: IntersectionConfig::default(),
            state: RunState::new(),
            last: None,
            history: Vec::new(),
            auto_check: false,
        }
    }

    /// Start from DFN text.
    pub fn from_text(text: &str) -> Result<Self, HarnessError> {
        Ok(Self::from_set(dfn_format::parse_fractures(text)?))
    }

    /// The three-fracture reference network.
    pub fn fr3() -> Result<Self, HarnessError> {
        Ok(Self::from_set(helpers::fr3()?))
    }

    pub fn with_config(mut self, config: IntersectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_tolerance(self, epsilon: f64) -> Self {
        self.with_config(IntersectionConfig::with_tolerance(epsilon))
    }

    /// Enable auto-checking: after every compute, run all oracles and fail
    /// on the first violation.
    pub fn with_auto_check(mut self) -> Self {
        self.auto_check = true;
        self
    }

    // ── Building ────────────────────────────────────────────────────────

    pub fn add_polygon(&mut self, id: FractureId, vertices: Vec<Point3d>) -> Result<&mut Self, HarnessError> {
        self.set.insert(Fracture::new(id, vertices)?)?;
        self.history.push(format!("add {}", id));
        Ok(self)
    }

    pub fn add_fracture(&mut self, id: FractureId, coords: &[[f64; 3]]) -> Result<&mut Self, HarnessError> {
        self.add_polygon(id, helpers::polygon(coords))
    }

    // ── Running ─────────────────────────────────────────────────────────

    /// Intersect every pair not yet evaluated.
    pub fn compute(&mut self) -> Result<&NetworkIntersections, HarnessError> {
        let engine = IntersectionEngine::new(self.config);
        let result = engine.compute(&mut self.set, &mut self.state);
        self.history.push(format!(
            "compute: {} evaluated, {} traces",
            result.stats.evaluated,
            result.traces.len()
        ));

        if self.auto_check {
            let verdicts = oracle::run_all(&self.set, &result, &self.state.pairs, &self.config.tolerance);
            if let Some(failure) = verdicts.into_iter().find(|v| !v.passed) {
                return Err(HarnessError::OracleFailure {
                    oracle: failure.oracle_name,
                    detail: failure.detail,
                });
            }
        }
        Ok(self.last.insert(result))
    }

    /// Sort the set's traces by descending length.
    pub fn sort(&mut self) -> &mut Self {
        sort_traces(self.set.traces_mut());
        self.history.push("sort".to_string());
        self
    }

    // ── Access ──────────────────────────────────────────────────────────

    pub fn set(&self) -> &FractureSet {
        &self.set
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.config.tolerance
    }

    pub fn traces(&self) -> &[Trace] {
        self.set.traces()
    }

    /// Result of the latest compute.
    pub fn last(&self) -> Result<&NetworkIntersections, HarnessError> {
        self.last.as_ref().ok_or(HarnessError::NotComputed)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The trace joining two fractures, in either order.
    pub fn trace_between(&self, a: FractureId, b: FractureId) -> Result<&Trace, HarnessError> {
        self.set
            .traces()
            .iter()
            .find(|t| t.involves(a) && t.involves(b))
            .ok_or(HarnessError::TraceNotFound { first: a, second: b })
    }

    // ── Inline Assertions ───────────────────────────────────────────────

    pub fn assert_trace_count(&self, expected: usize) -> Result<(), HarnessError> {
        let actual = self.set.traces().len();
        if actual == expected {
            Ok(())
        } else {
            Err(HarnessError::AssertionFailed {
                detail: format!("expected {} traces, got {}\n{}", expected, actual, self.report().to_text()),
            })
        }
    }

    pub fn assert_adjacency(&self, fracture: FractureId, expected: &[FractureId]) -> Result<(), HarnessError> {
        assertions::assert_adjacency(self.last()?, fracture, expected, "network")
    }

    /// Assert the trace between `a` and `b` has the given endpoints (in
    /// either order) and classifications.
    pub fn assert_trace(
        &self,
        (a, kind_a): (FractureId, TraceKind),
        (b, kind_b): (FractureId, TraceKind),
        endpoints: (Point3d, Point3d),
    ) -> Result<(), HarnessError> {
        let trace = self.trace_between(a, b)?;
        let ctx = format!("trace {}-{}", a, b);
        let tol = 10.0 * self.config.tolerance.coincidence;
        assertions::assert_trace_endpoints(trace, &endpoints.0, &endpoints.1, tol, &ctx)?;
        assertions::assert_trace_kind(trace, a, kind_a, &ctx)?;
        assertions::assert_trace_kind(trace, b, kind_b, &ctx)
    }

    // ── Verification ────────────────────────────────────────────────────

    pub fn run_oracles(&self) -> Result<Vec<OracleVerdict>, HarnessError> {
        Ok(oracle::run_all(
            &self.set,
            self.last()?,
            &self.state.pairs,
            &self.config.tolerance,
        ))
    }

    /// Text summary of the current network; oracles are included once the
    /// network has been computed.
    pub fn report(&self) -> NetworkSummary {
        let empty = NetworkIntersections::default();
        let last = self.last.as_ref().unwrap_or(&empty);
        let verdicts = match &self.last {
            Some(result) => oracle::run_all(&self.set, result, &self.state.pairs, &self.config.tolerance),
            None => Vec::new(),
        };
        NetworkSummary::new(&self.set, last, verdicts)
    }

    pub fn trace_list_text(&self) -> String {
        dfn_format::format_trace_list(self.set.traces())
    }

    pub fn fracture_report_text(&self) -> String {
        dfn_format::format_fracture_report(self.set.traces())
    }
}
