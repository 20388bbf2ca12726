//! Basic 3D line types used throughout the crate.

use super::Point3;

/// Representation of a 3D line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    pub start: Point3,
    pub end: Point3,
}

impl Line3 {
    /// Creates a new line segment.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Unit direction from start to end, zero for a collapsed segment.
    pub fn direction(&self) -> Point3 {
        (self.end - self.start).normalize()
    }
}
