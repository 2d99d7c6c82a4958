use crate::primitive::bounds::intervals_overlap;
use crate::primitive::quad::Quad2;
use nalgebra::{Point2, Vector2};

/// An axis-aligned rectangle given by its corner `(x, y)` and size `(w, h)`.
///
/// Negative sizes are not rejected; the tests below then see an empty interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn min(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    pub fn max(&self) -> Point2<f32> {
        Point2::new(self.x + self.w, self.y + self.h)
    }

    pub fn translated(&self, offset: Vector2<f32>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Whether `p` lies inside or on the border.
    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn contains_point_offset(&self, p: Point2<f32>, offset: Vector2<f32>) -> bool {
        self.contains_point(p + offset)
    }

    /// Whether the rectangles overlap on both axes. Touching borders count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        intervals_overlap(self.x, self.x + self.w, other.x, other.x + other.w)
            && intervals_overlap(self.y, self.y + self.h, other.y, other.y + other.h)
    }

    pub fn overlaps_offset(&self, other: &Rect, offset: Vector2<f32>) -> bool {
        self.overlaps(&other.translated(offset))
    }
}

/// The axis-aligned extent of the quad's four corners.
impl From<Quad2> for Rect {
    fn from(q: Quad2) -> Self {
        let min = q.a.inf(&q.b).inf(&q.c).inf(&q.d);
        let max = q.a.sup(&q.b).sup(&q.c).sup(&q.d);
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

pub fn quad_to_rect(q: Quad2) -> Rect {
    Rect::from(q)
}
