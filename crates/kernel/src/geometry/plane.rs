use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;

/// An infinite plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3d,
    pub normal: Vec3,
}

impl Plane {
    /// Build a plane from a point and a (not necessarily unit) normal.
    /// Returns `None` for a zero normal.
    pub fn new(origin: Point3d, normal: Vec3) -> Option<Self> {
        Some(Self {
            origin,
            normal: normal.normalized()?,
        })
    }

    pub fn xy() -> Self {
        Self {
            origin: Point3d::ORIGIN,
            normal: Vec3::Z,
        }
    }

    /// Best-fit plane of a closed polygon using Newell's method.
    ///
    /// The normal follows the polygon winding (right-hand rule). Returns
    /// `None` when the polygon has no area.
    pub fn from_polygon(vertices: &[Point3d]) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let mut normal = Vec3::ZERO;
        let mut centroid = Vec3::ZERO;
        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
            centroid = centroid + a.to_vec3();
        }
        let centroid = centroid / vertices.len() as f64;
        Self::new(Point3d::new(centroid.x, centroid.y, centroid.z), normal)
    }

    /// Signed distance from the plane, positive on the normal side.
    pub fn distance_to_point(&self, p: &Point3d) -> f64 {
        (*p - self.origin).dot(&self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point3d> {
        vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(1.0, 1.0, 0.0),
            Point3d::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_plane_distance() {
        let p = Plane::xy();
        let pt = Point3d::new(1.0, 2.0, 5.0);
        assert!((p.distance_to_point(&pt) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_newell_follows_winding() {
        let plane = Plane::from_polygon(&unit_square()).unwrap();
        assert!((plane.normal.z - 1.0).abs() < 1e-12);

        let mut reversed = unit_square();
        reversed.reverse();
        let plane = Plane::from_polygon(&reversed).unwrap();
        assert!((plane.normal.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_polygon_has_no_plane() {
        let line = vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(2.0, 0.0, 0.0),
        ];
        assert!(Plane::from_polygon(&line).is_none());
    }
}
