use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::{Point2d, Point3d};

/// One of the three coordinate planes a polygon can be projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionPlane {
    /// Drops z: (x, y).
    Xy,
    /// Drops x: (y, z).
    Yz,
    /// Drops y: (z, x).
    Zx,
}

impl ProjectionPlane {
    pub const ALL: [ProjectionPlane; 3] = [ProjectionPlane::Xy, ProjectionPlane::Yz, ProjectionPlane::Zx];

    pub fn project(self, p: &Point3d) -> Point2d {
        match self {
            ProjectionPlane::Xy => Point2d::new(p.x, p.y),
            ProjectionPlane::Yz => Point2d::new(p.y, p.z),
            ProjectionPlane::Zx => Point2d::new(p.z, p.x),
        }
    }
}

impl fmt::Display for ProjectionPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectionPlane::Xy => "XY",
            ProjectionPlane::Yz => "YZ",
            ProjectionPlane::Zx => "ZX",
        };
        f.write_str(name)
    }
}

/// Project every vertex of a polygon onto `plane`, keeping vertex order.
pub fn project_polygon(vertices: &[Point3d], plane: ProjectionPlane) -> Vec<Point2d> {
    vertices.iter().map(|v| plane.project(v)).collect()
}
