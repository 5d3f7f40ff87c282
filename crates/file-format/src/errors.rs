use std::path::PathBuf;

use dfn_kernel::{FractureError, FractureId};

/// Errors while reading a fracture file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing fracture count")]
    MissingCount,

    #[error("line {line}: invalid fracture count {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("the file declares no fractures")]
    NoFractures,

    #[error("line {line}: expected `<id>; <num_vertices>`, found {content:?}")]
    MalformedHeader { line: usize, content: String },

    #[error("line {line}: expected {expected} coordinates, found {found}")]
    ShortVertexRow { line: usize, expected: usize, found: usize },

    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidCoordinate { line: usize, value: String },

    #[error("unexpected end of file while reading vertices of fracture {fracture}")]
    UnexpectedEof { fracture: FractureId },

    #[error("declared {declared} fractures but found {found}")]
    CountMismatch { declared: usize, found: usize },

    #[error(transparent)]
    Fracture(#[from] FractureError),
}

/// Errors while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
