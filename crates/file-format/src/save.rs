use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use dfn_kernel::{group_traces, DegeneratePair, FractureId, FractureSet, NetworkIntersections, Trace};
use serde::Serialize;
use tracing::debug;

use crate::errors::WriteError;

/// The JSON summary of one network run.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkReport<'a> {
    pub fractures: usize,
    pub adjacency: &'a BTreeMap<FractureId, Vec<FractureId>>,
    pub traces: &'a [Trace],
    pub degenerate: &'a [DegeneratePair],
}

/// Trace list: one line per trace with both parents and both endpoints.
pub fn format_trace_list(traces: &[Trace]) -> String {
    let mut out = String::new();
    out.push_str("# Number of Traces\n");
    out.push_str(&format!("{}\n", traces.len()));
    out.push_str("# TraceId; FractureId1; FractureId2; X1; Y1; Z1; X2; Y2; Z2\n");
    for trace in traces {
        let (f1, f2) = trace.fractures();
        let (p1, p2) = trace.endpoints();
        out.push_str(&format!(
            "{}; {}; {}; {:.16e}; {:.16e}; {:.16e}; {:.16e}; {:.16e}; {:.16e}\n",
            trace.id(),
            f1,
            f2,
            p1.x,
            p1.y,
            p1.z,
            p2.x,
            p2.y,
            p2.z
        ));
    }
    out
}

/// Per-fracture report in ascending fracture id: passing traces first, then
/// tips, each by descending length. Fractures without traces are omitted.
pub fn format_fracture_report(traces: &[Trace]) -> String {
    let mut out = String::new();
    for (id, group) in group_traces(traces) {
        out.push_str("# FractureId; NumTraces\n");
        out.push_str(&format!("{}; {}\n", id, group.len()));
        out.push_str("# TraceId; Tips; Length\n");
        for (trace, kind) in group.iter() {
            out.push_str(&format!("{}; {}; {:.16e}\n", trace.id(), kind.is_tip(), trace.length()));
        }
    }
    out
}

pub fn write_trace_list(path: impl AsRef<Path>, traces: &[Trace]) -> Result<(), WriteError> {
    let path = path.as_ref();
    fs::write(path, format_trace_list(traces))?;
    debug!(path = %path.display(), traces = traces.len(), "trace list written");
    Ok(())
}

pub fn write_fracture_report(path: impl AsRef<Path>, traces: &[Trace]) -> Result<(), WriteError> {
    let path = path.as_ref();
    fs::write(path, format_fracture_report(traces))?;
    debug!(path = %path.display(), "fracture report written");
    Ok(())
}

/// Serialize a run summary to pretty-printed JSON. Traces are taken from the
/// set, so they reflect any sorting applied after the run.
pub fn report_to_json(set: &FractureSet, intersections: &NetworkIntersections) -> Result<String, WriteError> {
    let report = NetworkReport {
        fractures: set.len(),
        adjacency: &intersections.adjacency,
        traces: set.traces(),
        degenerate: &intersections.degenerate,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
