//! All-pairs intersection of a fracture network.
//!
//! Pairs are visited in import order (i < j) so ids and adjacency lists are
//! deterministic. Which pairs were already evaluated and which trace id comes
//! next live in a [`RunState`] owned by the caller.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, instrument, warn};

use crate::config::IntersectionConfig;
use crate::error::DegeneratePair;
use crate::fracture::{Fracture, FractureId, FractureSet, Trace};
use crate::geometry::projection::ProjectionPlane;
use crate::intersection::{TraceIdCounter, are_separated, extract_trace, first_separating_projection};

/// Unordered pair of fracture ids, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FracturePair {
    low: FractureId,
    high: FractureId,
}

impl FracturePair {
    pub fn new(a: FractureId, b: FractureId) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> FractureId {
        self.low
    }

    pub fn high(&self) -> FractureId {
        self.high
    }
}

/// Pairs already evaluated in the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairRegistry {
    visited: BTreeSet<FracturePair>,
}

impl PairRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, a: FractureId, b: FractureId) -> bool {
        self.visited.contains(&FracturePair::new(a, b))
    }

    /// Record a pair. Returns `false` if it was already present.
    pub fn mark_visited(&mut self, a: FractureId, b: FractureId) -> bool {
        self.visited.insert(FracturePair::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Visited pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &FracturePair> {
        self.visited.iter()
    }
}

/// Mutable state of one intersection run. Start a fresh value for each
/// independent network; reusing it makes repeated runs skip finished pairs.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub pairs: PairRegistry,
    pub trace_ids: TraceIdCounter,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of evaluating one pair of fractures.
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    /// The shadows on this coordinate plane are disjoint.
    SeparatedInProjection(ProjectionPlane),
    /// A 3D separating axis exists.
    Separated,
    Traced(Trace),
    /// The fractures intersect but form no trace segment.
    Degenerate(DegeneratePair),
}

impl PairOutcome {
    /// Whether the two fractures touch, i.e. belong in each other's
    /// adjacency lists.
    pub fn is_intersecting(&self) -> bool {
        matches!(self, PairOutcome::Traced(_) | PairOutcome::Degenerate(_))
    }
}

/// Counters for one call to [`IntersectionEngine::compute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Pairs evaluated in this call.
    pub evaluated: usize,
    /// Pairs skipped because the run state had already seen them.
    pub skipped: usize,
    pub rejected_broad: usize,
    pub rejected_exact: usize,
}

/// What one call to [`IntersectionEngine::compute`] found.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkIntersections {
    /// For each fracture, the fractures it intersects in discovery order.
    /// Fractures with no neighbours have no entry.
    pub adjacency: BTreeMap<FractureId, Vec<FractureId>>,
    /// Traces created in this call, in id order.
    pub traces: Vec<Trace>,
    pub degenerate: Vec<DegeneratePair>,
    pub stats: RunStats,
}

impl NetworkIntersections {
    pub fn neighbours(&self, id: FractureId) -> &[FractureId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn link(&mut self, a: FractureId, b: FractureId) {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }
}

/// Runs pairwise intersection over a fracture set.
#[derive(Debug, Clone, Default)]
pub struct IntersectionEngine {
    config: IntersectionConfig,
}

impl IntersectionEngine {
    pub fn new(config: IntersectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntersectionConfig {
        &self.config
    }

    /// Evaluate a single pair. Trace ids are drawn from `ids` only when a
    /// trace is produced.
    pub fn evaluate_pair(&self, first: &Fracture, second: &Fracture, ids: &mut TraceIdCounter) -> PairOutcome {
        let tol = &self.config.tolerance;
        if let Some(plane) = first_separating_projection(first.vertices(), second.vertices(), tol) {
            return PairOutcome::SeparatedInProjection(plane);
        }
        if are_separated(first.vertices(), second.vertices(), tol) {
            return PairOutcome::Separated;
        }
        match extract_trace(first, second, ids, tol) {
            Ok(trace) => PairOutcome::Traced(trace),
            Err(pair) => PairOutcome::Degenerate(pair),
        }
    }

    /// Intersect every unvisited pair of `set`, append the new traces to it
    /// and report what was found.
    #[instrument(skip(self, set, state), fields(fractures = set.len()))]
    pub fn compute(&self, set: &mut FractureSet, state: &mut RunState) -> NetworkIntersections {
        let mut result = NetworkIntersections::default();
        let fractures = set.fractures();

        for (i, first) in fractures.iter().enumerate() {
            for second in &fractures[i + 1..] {
                let (a, b) = (first.id(), second.id());
                if state.pairs.contains(a, b) {
                    result.stats.skipped += 1;
                    continue;
                }

                let outcome = self.evaluate_pair(first, second, &mut state.trace_ids);
                result.stats.evaluated += 1;
                if outcome.is_intersecting() {
                    result.link(a, b);
                }
                match outcome {
                    PairOutcome::SeparatedInProjection(plane) => {
                        debug!(a, b, %plane, "rejected by projection");
                        result.stats.rejected_broad += 1;
                    }
                    PairOutcome::Separated => {
                        debug!(a, b, "rejected by separating axis");
                        result.stats.rejected_exact += 1;
                    }
                    PairOutcome::Traced(trace) => {
                        debug!(a, b, trace = trace.id(), length = trace.length(), "trace found");
                        result.traces.push(trace);
                    }
                    PairOutcome::Degenerate(pair) => {
                        warn!(%pair, "degenerate intersection");
                        result.degenerate.push(pair);
                    }
                }
                state.pairs.mark_visited(a, b);
            }
        }

        for trace in &result.traces {
            set.push_trace(*trace);
        }

        info!(
            evaluated = result.stats.evaluated,
            skipped = result.stats.skipped,
            traces = result.traces.len(),
            degenerate = result.degenerate.len(),
            "intersection run complete"
        );
        result
    }
}

/// Intersect a whole network with a fresh run state.
pub fn compute_intersections(set: &mut FractureSet, config: IntersectionConfig) -> NetworkIntersections {
    IntersectionEngine::new(config).compute(set, &mut RunState::new())
}
