//! Basic geometry primitives for camera path evaluation.

mod line3;
mod point3;

pub use line3::Line3;
pub use point3::Point3;

/// Calculates the Euclidean distance between two 3D points.
pub fn distance3(a: Point3, b: Point3) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2) + (b.z - a.z).powi(2)).sqrt()
}

/// Linear interpolation between two points.
pub fn lerp3(a: Point3, b: Point3, alpha: f64) -> Point3 {
    a.lerp(b, alpha)
}
