//! Ordering and per-fracture grouping of traces.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::fracture::{FractureId, Trace, TraceKind};

/// Sort traces by descending length. The sort is stable, so traces of equal
/// length keep their relative order.
pub fn sort_traces(traces: &mut [Trace]) {
    traces.sort_by(|a, b| b.length().total_cmp(&a.length()));
}

/// Sorted copy of `traces`; see [`sort_traces`].
pub fn sorted_traces(traces: &[Trace]) -> Vec<Trace> {
    let mut sorted = traces.to_vec();
    sort_traces(&mut sorted);
    sorted
}

/// Traces of one fracture, split by their classification for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FractureTraces {
    pub fracture: FractureId,
    pub passing: Vec<Trace>,
    pub tips: Vec<Trace>,
}

impl FractureTraces {
    fn new(fracture: FractureId) -> Self {
        Self {
            fracture,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.passing.len() + self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passing.is_empty() && self.tips.is_empty()
    }

    /// Passing traces first, then tips, each paired with its kind.
    pub fn iter(&self) -> impl Iterator<Item = (&Trace, TraceKind)> {
        self.passing
            .iter()
            .map(|t| (t, TraceKind::Passing))
            .chain(self.tips.iter().map(|t| (t, TraceKind::Tip)))
    }
}

/// Group traces under both of their parent fractures, each group sorted by
/// descending length. Fractures without traces are absent.
pub fn group_traces(traces: &[Trace]) -> BTreeMap<FractureId, FractureTraces> {
    let mut groups: BTreeMap<FractureId, FractureTraces> = BTreeMap::new();
    for trace in traces {
        let (first, second) = trace.fractures();
        for id in [first, second] {
            let group = groups.entry(id).or_insert_with(|| FractureTraces::new(id));
            match trace.kind_for(id) {
                Some(TraceKind::Passing) => group.passing.push(*trace),
                Some(TraceKind::Tip) => group.tips.push(*trace),
                None => {}
            }
        }
    }
    for group in groups.values_mut() {
        sort_traces(&mut group.passing);
        sort_traces(&mut group.tips);
    }
    groups
}
