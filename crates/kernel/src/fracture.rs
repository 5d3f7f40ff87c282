//! The fracture store: polygons of one network and the traces found on them.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::error::FractureError;
use crate::geometry::plane::Plane;
use crate::geometry::point::Point3d;

pub type FractureId = u32;
pub type TraceId = u32;

/// A planar convex polygon in 3D.
///
/// Vertices are listed in a consistent winding order. Coplanarity and
/// convexity are the importer's responsibility and are not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fracture {
    id: FractureId,
    vertices: Vec<Point3d>,
}

impl Fracture {
    pub fn new(id: FractureId, vertices: Vec<Point3d>) -> Result<Self, FractureError> {
        if vertices.len() < 3 {
            return Err(FractureError::TooFewVertices {
                id,
                count: vertices.len(),
            });
        }
        if let Some(vertex) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(FractureError::NonFiniteVertex { id, vertex });
        }
        Ok(Self { id, vertices })
    }

    pub fn id(&self) -> FractureId {
        self.id
    }

    pub fn vertices(&self) -> &[Point3d] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The fracture's plane, or `None` if the polygon has no area.
    pub fn plane(&self) -> Option<Plane> {
        Plane::from_polygon(&self.vertices)
    }
}

/// How a trace relates to one of its two parent fractures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    /// Both endpoints lie on the fracture's boundary.
    Passing,
    /// At least one endpoint lies off the fracture's boundary.
    Tip,
}

impl TraceKind {
    pub fn is_tip(self) -> bool {
        self == TraceKind::Tip
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceKind::Passing => f.write_str("passing"),
            TraceKind::Tip => f.write_str("tip"),
        }
    }
}

/// The intersection segment of two fractures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trace {
    id: TraceId,
    first: FractureId,
    second: FractureId,
    p1: Point3d,
    p2: Point3d,
    length: f64,
    first_kind: TraceKind,
    second_kind: TraceKind,
}

impl Trace {
    /// Build a trace; the length is derived from the endpoints.
    pub fn new(
        id: TraceId,
        (first, second): (FractureId, FractureId),
        (p1, p2): (Point3d, Point3d),
        (first_kind, second_kind): (TraceKind, TraceKind),
    ) -> Self {
        debug_assert_ne!(first, second, "a trace joins two distinct fractures");
        Self {
            id,
            first,
            second,
            p1,
            p2,
            length: p1.distance_to(&p2),
            first_kind,
            second_kind,
        }
    }

    pub fn id(&self) -> TraceId {
        self.id
    }

    /// The two parent fracture ids, in evaluation order.
    pub fn fractures(&self) -> (FractureId, FractureId) {
        (self.first, self.second)
    }

    pub fn endpoints(&self) -> (Point3d, Point3d) {
        (self.p1, self.p2)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn involves(&self, fracture: FractureId) -> bool {
        self.first == fracture || self.second == fracture
    }

    /// Classification relative to `fracture`, or `None` if the trace does
    /// not belong to it.
    pub fn kind_for(&self, fracture: FractureId) -> Option<TraceKind> {
        if fracture == self.first {
            Some(self.first_kind)
        } else if fracture == self.second {
            Some(self.second_kind)
        } else {
            None
        }
    }
}

/// All fractures of one network plus the traces computed on them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FractureSet {
    fractures: Vec<Fracture>,
    #[serde(skip)]
    index: HashMap<FractureId, usize>,
    traces: Vec<Trace>,
}

impl FractureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fractures: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            traces: Vec::new(),
        }
    }

    /// Build a set from fractures, rejecting duplicate ids.
    pub fn from_fractures(fractures: impl IntoIterator<Item = Fracture>) -> Result<Self, FractureError> {
        let mut set = Self::new();
        for fracture in fractures {
            set.insert(fracture)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, fracture: Fracture) -> Result<(), FractureError> {
        if self.index.contains_key(&fracture.id()) {
            return Err(FractureError::DuplicateId(fracture.id()));
        }
        self.index.insert(fracture.id(), self.fractures.len());
        self.fractures.push(fracture);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fractures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractures.is_empty()
    }

    /// Fractures in import order.
    pub fn fractures(&self) -> &[Fracture] {
        &self.fractures
    }

    pub fn ids(&self) -> impl Iterator<Item = FractureId> + '_ {
        self.fractures.iter().map(Fracture::id)
    }

    pub fn get(&self, id: FractureId) -> Option<&Fracture> {
        self.index.get(&id).map(|&i| &self.fractures[i])
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Mutable access for reordering; traces themselves stay immutable.
    pub fn traces_mut(&mut self) -> &mut [Trace] {
        &mut self.traces
    }

    pub(crate) fn push_trace(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    /// Drop all fractures and traces so the set can be reused for another file.
    pub fn clear(&mut self) {
        self.fractures.clear();
        self.index.clear();
        self.traces.clear();
    }
}
