use serde::Serialize;

use crate::fracture::FractureId;

/// Errors raised when building a fracture or inserting it into a set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FractureError {
    #[error("fracture {id} has {count} vertices, at least 3 are required")]
    TooFewVertices { id: FractureId, count: usize },

    #[error("fracture {id} has a non-finite coordinate at vertex {vertex}")]
    NonFiniteVertex { id: FractureId, vertex: usize },

    #[error("duplicate fracture id {0}")]
    DuplicateId(FractureId),
}

/// Why a pair of intersecting fractures produced no trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DegenerateReason {
    /// Fewer than two distinct contact points were found.
    InsufficientContactPoints { found: usize },
    /// One of the polygons has no area, so it has no plane.
    DegeneratePolygon { id: FractureId },
}

/// Recoverable outcome of trace extraction: the pair intersects but no
/// trace segment could be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("fractures {first} and {second} form no trace: {reason}")]
pub struct DegeneratePair {
    pub first: FractureId,
    pub second: FractureId,
    pub reason: DegenerateReason,
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateReason::InsufficientContactPoints { found } => {
                write!(f, "only {found} distinct contact point(s)")
            }
            DegenerateReason::DegeneratePolygon { id } => {
                write!(f, "fracture {id} has no plane")
            }
        }
    }
}
