pub mod intersection;
pub mod plane;
pub mod point;
pub mod polygon;
pub mod projection;
pub mod segment;
pub mod vector;
