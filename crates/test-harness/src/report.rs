//! Structured text network reports for reading in test failures.

use dfn_kernel::{group_traces, FractureId, FractureSet, NetworkIntersections, TraceKind};

use crate::oracle::OracleVerdict;

/// One line per trace.
#[derive(Debug, Clone)]
pub struct TraceEntry {
    pub id: u32,
    pub fractures: (FractureId, FractureId),
    pub length: f64,
    pub kinds: (TraceKind, TraceKind),
}

/// Passing and tip counts of one fracture.
#[derive(Debug, Clone)]
pub struct FractureEntry {
    pub id: FractureId,
    pub vertex_count: usize,
    pub passing: usize,
    pub tips: usize,
}

/// A complete network summary with all sections.
#[derive(Debug, Clone)]
pub struct NetworkSummary {
    pub fractures: Vec<FractureEntry>,
    pub adjacency: Vec<(FractureId, Vec<FractureId>)>,
    pub traces: Vec<TraceEntry>,
    pub degenerate: Vec<String>,
    pub oracle_results: Vec<OracleVerdict>,
}

impl NetworkSummary {
    pub fn new(set: &FractureSet, intersections: &NetworkIntersections, oracle_results: Vec<OracleVerdict>) -> Self {
        let groups = group_traces(set.traces());
        let fractures = set
            .fractures()
            .iter()
            .map(|f| {
                let (passing, tips) = groups
                    .get(&f.id())
                    .map(|g| (g.passing.len(), g.tips.len()))
                    .unwrap_or((0, 0));
                FractureEntry {
                    id: f.id(),
                    vertex_count: f.vertex_count(),
                    passing,
                    tips,
                }
            })
            .collect();
        let traces = set
            .traces()
            .iter()
            .map(|t| {
                let (a, b) = t.fractures();
                TraceEntry {
                    id: t.id(),
                    fractures: (a, b),
                    length: t.length(),
                    kinds: (
                        t.kind_for(a).unwrap_or(TraceKind::Tip),
                        t.kind_for(b).unwrap_or(TraceKind::Tip),
                    ),
                }
            })
            .collect();

        Self {
            fractures,
            adjacency: intersections
                .adjacency
                .iter()
                .map(|(&id, neighbours)| (id, neighbours.clone()))
                .collect(),
            traces,
            degenerate: intersections.degenerate.iter().map(|d| d.to_string()).collect(),
            oracle_results,
        }
    }

    /// Format the summary as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Fracture Network Report ===\n\n");

        out.push_str(&format!("Fractures ({}):\n", self.fractures.len()));
        for entry in &self.fractures {
            out.push_str(&format!(
                "  [{}] {} vertices, {} passing, {} tips\n",
                entry.id, entry.vertex_count, entry.passing, entry.tips,
            ));
        }

        out.push_str(&format!("\nAdjacency ({} fractures):\n", self.adjacency.len()));
        for (id, neighbours) in &self.adjacency {
            out.push_str(&format!("  {} -> {:?}\n", id, neighbours));
        }

        out.push_str(&format!("\nTraces ({}):\n", self.traces.len()));
        for trace in &self.traces {
            out.push_str(&format!(
                "  #{} {}-{} length {:.6} ({}/{})\n",
                trace.id, trace.fractures.0, trace.fractures.1, trace.length, trace.kinds.0, trace.kinds.1,
            ));
        }

        if self.degenerate.is_empty() {
            out.push_str("\nDegenerate pairs: none\n");
        } else {
            out.push_str(&format!("\nDegenerate pairs ({}):\n", self.degenerate.len()));
            for line in &self.degenerate {
                out.push_str(&format!("  {}\n", line));
            }
        }

        if !self.oracle_results.is_empty() {
            let passed = self.oracle_results.iter().filter(|v| v.passed).count();
            out.push_str(&format!("\nOracles ({}/{} passed):\n", passed, self.oracle_results.len()));
            for verdict in &self.oracle_results {
                let status = if verdict.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{}] {}: {}\n", status, verdict.oracle_name, verdict.detail));
            }
        }
        out
    }
}
