use super::point::Point3d;
use super::vector::Vec3;

/// A bounded line segment, parameterized as `start + t * (end - start)`
/// for `t` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3d {
    pub start: Point3d,
    pub end: Point3d,
}

impl Segment3d {
    pub fn new(start: Point3d, end: Point3d) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn point_at(&self, t: f64) -> Point3d {
        self.start.lerp(&self.end, t)
    }

    /// Parameter of the orthogonal projection of `p` onto the segment's line.
    /// Returns `None` for a zero-length segment.
    pub fn parameter_of(&self, p: &Point3d) -> Option<f64> {
        let d = self.direction();
        let len_sq = d.length_squared();
        if len_sq < 1e-30 {
            return None;
        }
        Some((*p - self.start).dot(&d) / len_sq)
    }

    /// Distance from `p` to the infinite line through the segment.
    pub fn line_distance_to(&self, p: &Point3d) -> Option<f64> {
        let d = self.direction();
        let len = d.length();
        if len < 1e-15 {
            return None;
        }
        Some((*p - self.start).cross(&d).length() / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_and_distance() {
        let s = Segment3d::new(Point3d::ORIGIN, Point3d::new(4.0, 0.0, 0.0));
        let p = Point3d::new(1.0, 3.0, 0.0);
        assert!((s.parameter_of(&p).unwrap() - 0.25).abs() < 1e-12);
        assert!((s.line_distance_to(&p).unwrap() - 3.0).abs() < 1e-12);
        assert!((s.length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_segment() {
        let s = Segment3d::new(Point3d::ORIGIN, Point3d::ORIGIN);
        assert!(s.parameter_of(&Point3d::new(1.0, 0.0, 0.0)).is_none());
        assert!(s.line_distance_to(&Point3d::new(1.0, 0.0, 0.0)).is_none());
    }
}
