use crate::intersection::line_intersect;
use nalgebra::{Point2, Vector2};

/// A struct representing a line segment in 2D space.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2 {
    /// The starting point of the segment.
    pub a: Point2<f32>,
    /// The ending point of the segment.
    pub b: Point2<f32>,
}

impl Segment2 {
    /// Creates a new `Segment2` with the given starting and ending points.
    ///
    /// # Arguments
    ///
    /// * `a` - The starting point of the segment.
    /// * `b` - The ending point of the segment.
    pub fn new(a: Point2<f32>, b: Point2<f32>) -> Self {
        Self { a, b }
    }

    pub fn dir(&self) -> Vector2<f32> {
        self.b - self.a
    }

    /// The point where this segment crosses `other`, if any.
    ///
    /// Parallel and collinear segments never report an intersection, even when they overlap.
    pub fn intersection(&self, other: &Segment2) -> Option<Point2<f32>> {
        line_intersect(self.a, self.b, other.a, other.b)
    }
}
