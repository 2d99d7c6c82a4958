use crate::intersection::ray_boundary_hit;
use crate::primitive::hit::Hit2;
use crate::primitive::ray::Ray2;
use crate::primitive::rect::Rect;
use crate::primitive::segment::Segment2;
use crate::primitive::triangle2::Triangle2;
use nalgebra::{Point2, Vector2};

/// A general quadrilateral with corners `a, b, c, d` in winding order.
///
/// Quads built from a [`Rect`] wind bottom-left, bottom-right, top-right, top-left.
/// Containment and overlap split the quad along `a-c` into two triangles, which is
/// exact for convex quads and for concave ones whose reflex corner is `a` or `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad2 {
    pub a: Point2<f32>,
    pub b: Point2<f32>,
    pub c: Point2<f32>,
    pub d: Point2<f32>,
}

impl Quad2 {
    pub fn new(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>, d: Point2<f32>) -> Self {
        Self { a, b, c, d }
    }

    pub fn vertices(&self) -> [Point2<f32>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn edges(&self) -> [Segment2; 4] {
        [
            Segment2::new(self.a, self.b),
            Segment2::new(self.b, self.c),
            Segment2::new(self.c, self.d),
            Segment2::new(self.d, self.a),
        ]
    }

    /// The two triangles `(a, b, c)` and `(a, c, d)`.
    pub fn triangles(&self) -> [Triangle2; 2] {
        [
            Triangle2::new(self.a, self.b, self.c),
            Triangle2::new(self.a, self.c, self.d),
        ]
    }

    pub fn centroid(&self) -> Point2<f32> {
        Point2::from((self.a.coords + self.b.coords + self.c.coords + self.d.coords) / 4.0)
    }

    pub fn translated(&self, offset: Vector2<f32>) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset, self.d + offset)
    }

    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        self.triangles().iter().any(|t| t.contains_point(p))
    }

    pub fn contains_point_offset(&self, p: Point2<f32>, offset: Vector2<f32>) -> bool {
        self.contains_point(p + offset)
    }

    pub fn overlaps(&self, other: &Quad2) -> bool {
        let theirs = other.triangles();
        self.triangles()
            .iter()
            .any(|mine| theirs.iter().any(|t| mine.overlaps(t)))
    }

    pub fn overlaps_offset(&self, other: &Quad2, offset: Vector2<f32>) -> bool {
        self.overlaps(&other.translated(offset))
    }

    /// Nearest crossing of the ray with the quad's outline (convex quads).
    ///
    /// The internal `a-c` diagonal is not a surface; only the four sides are tested.
    pub fn hit(&self, ray: &Ray2) -> Option<Hit2> {
        self.hit_range(ray, f32::INFINITY)
    }

    pub fn hit_range(&self, ray: &Ray2, max: f32) -> Option<Hit2> {
        ray_boundary_hit(ray, &self.edges(), self.centroid(), max)
    }
}

/// Corners of the rectangle, counter-clockwise from `(x, y)`.
impl From<Rect> for Quad2 {
    fn from(r: Rect) -> Self {
        Quad2::new(
            Point2::new(r.x, r.y),
            Point2::new(r.x + r.w, r.y),
            Point2::new(r.x + r.w, r.y + r.h),
            Point2::new(r.x, r.y + r.h),
        )
    }
}

pub fn rect_to_quad(r: Rect) -> Quad2 {
    Quad2::from(r)
}
