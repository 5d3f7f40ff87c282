//! Helper functions: error type, polygon builders, fixture data.

use dfn_format::LoadError;
use dfn_kernel::geometry::point::Point3d;
use dfn_kernel::{Fracture, FractureError, FractureId, FractureSet};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("no trace between fractures {first} and {second}")]
    TraceNotFound { first: FractureId, second: FractureId },

    #[error("network has not been computed yet")]
    NotComputed,

    #[error(transparent)]
    Fracture(#[from] FractureError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

// ── Polygon Builders ────────────────────────────────────────────────────────

/// Vertices from coordinate triples.
pub fn polygon(coords: &[[f64; 3]]) -> Vec<Point3d> {
    coords.iter().copied().map(Point3d::from_array).collect()
}

/// Fracture from coordinate triples.
pub fn fracture(id: FractureId, coords: &[[f64; 3]]) -> Result<Fracture, HarnessError> {
    Ok(Fracture::new(id, polygon(coords))?)
}

/// Axis-aligned rectangle in the plane `z = z`.
pub fn rect_xy(x0: f64, y0: f64, x1: f64, y1: f64, z: f64) -> Vec<Point3d> {
    polygon(&[[x0, y0, z], [x1, y0, z], [x1, y1, z], [x0, y1, z]])
}

/// Axis-aligned rectangle in the plane `x = x`.
pub fn rect_yz(x: f64, y0: f64, y1: f64, z0: f64, z1: f64) -> Vec<Point3d> {
    polygon(&[[x, y0, z0], [x, y0, z1], [x, y1, z1], [x, y1, z0]])
}

/// Axis-aligned rectangle in the plane `y = y`.
pub fn rect_xz(y: f64, x0: f64, x1: f64, z0: f64, z1: f64) -> Vec<Point3d> {
    polygon(&[[x0, y, z0], [x1, y, z0], [x1, y, z1], [x0, y, z1]])
}

/// Square `[x0, x0 + size] x [y0, y0 + size]` in the plane `z = 0`.
pub fn unit_square_at(x0: f64, y0: f64, size: f64) -> Vec<Point3d> {
    rect_xy(x0, y0, x0 + size, y0 + size, 0.0)
}

// ── Fixtures ────────────────────────────────────────────────────────────────

/// The three-fracture reference network: a horizontal unit square, a wall
/// cutting clean through it at x = 0.8, and a wall at y = 0.5 that ends
/// inside it.
pub const FR3_DATA: &str = "\
# Number of Fractures
3
# FractureId; NumVertices
0; 4
# Vertices
0.0000000000000000e+00; 1.0000000000000000e+00; 1.0000000000000000e+00; 0.0000000000000000e+00
0.0000000000000000e+00; 0.0000000000000000e+00; 1.0000000000000000e+00; 1.0000000000000000e+00
0.0000000000000000e+00; 0.0000000000000000e+00; 0.0000000000000000e+00; 0.0000000000000000e+00
# FractureId; NumVertices
1; 4
# Vertices
8.0000000000000004e-01; 8.0000000000000004e-01; 8.0000000000000004e-01; 8.0000000000000004e-01
0.0000000000000000e+00; 0.0000000000000000e+00; 1.0000000000000000e+00; 1.0000000000000000e+00
-1.0000000000000001e-01; 2.9999999999999999e-01; 2.9999999999999999e-01; -1.0000000000000001e-01
# FractureId; NumVertices
2; 4
# Vertices
-2.3777799999999999e-01; 3.1618370000000001e-01; 3.1618370000000001e-01; -2.3777799999999999e-01
5.0000000000000000e-01; 5.0000000000000000e-01; 5.0000000000000000e-01; 5.0000000000000000e-01
-3.4444000000000002e-01; -3.4444000000000002e-01; 4.5283889999999999e-01; 4.5283889999999999e-01
";

/// Parse [`FR3_DATA`].
pub fn fr3() -> Result<FractureSet, HarnessError> {
    Ok(dfn_format::parse_fractures(FR3_DATA)?)
}

/// A grid of `n x n` unit squares in z = 0 with gaps of `gap`, crossed by a
/// single long wall along y = 0.5 through the first row. Ids are assigned row
/// by row, the wall last.
pub fn grid_with_wall(n: usize, gap: f64) -> Result<FractureSet, HarnessError> {
    let mut set = FractureSet::with_capacity(n * n + 1);
    let pitch = 1.0 + gap;
    let mut id = 0;
    for row in 0..n {
        for col in 0..n {
            let square = unit_square_at(col as f64 * pitch, row as f64 * pitch, 1.0);
            set.insert(Fracture::new(id, square)?)?;
            id += 1;
        }
    }
    let length = n as f64 * pitch;
    set.insert(Fracture::new(id, rect_xz(0.5, -0.5, length, -0.5, 0.5))?)?;
    Ok(set)
}
