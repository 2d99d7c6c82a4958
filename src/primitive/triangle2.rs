use crate::intersection::ray_boundary_hit;
use crate::primitive::hit::Hit2;
use crate::primitive::ray::Ray2;
use crate::primitive::segment::Segment2;
use crate::primitive::triangle::TriangleEdge;
use crate::tolerance::BARYCENTRIC_EPSILON;
use nalgebra::{Point2, Vector2, Vector3};

/// A triangle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle2 {
    pub a: Point2<f32>,
    pub b: Point2<f32>,
    pub c: Point2<f32>,
}

impl Triangle2 {
    pub fn new(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Point2<f32>; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edge(&self, edge: TriangleEdge) -> Segment2 {
        match edge {
            TriangleEdge::EdgeAB => Segment2::new(self.a, self.b),
            TriangleEdge::EdgeBC => Segment2::new(self.b, self.c),
            TriangleEdge::EdgeCA => Segment2::new(self.c, self.a),
        }
    }

    pub fn edges(&self) -> [Segment2; 3] {
        [
            Segment2::new(self.a, self.b),
            Segment2::new(self.b, self.c),
            Segment2::new(self.c, self.a),
        ]
    }

    /// Twice the signed area; positive for counter-clockwise winding.
    pub fn signed_double_area(&self) -> f32 {
        (self.b - self.a).perp(&(self.c - self.a))
    }

    pub fn translated(&self, offset: Vector2<f32>) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }

    /// Barycentric weights of `p` with respect to `a`, `b` and `c`.
    ///
    /// Each weight is the area of the sub-triangle opposite its vertex divided by the
    /// whole area. Degenerate triangles yield non-finite weights.
    pub fn barycentric(&self, p: Point2<f32>) -> Vector3<f32> {
        let area = self.signed_double_area();
        let (pa, pb, pc) = (self.a - p, self.b - p, self.c - p);

        Vector3::new(pb.perp(&pc) / area, pc.perp(&pa) / area, pa.perp(&pb) / area)
    }

    /// Whether `p` lies inside or on the boundary of the triangle.
    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        let weights = self.barycentric(p);
        let in_range = weights
            .iter()
            .all(|w| (-BARYCENTRIC_EPSILON..=1.0 + BARYCENTRIC_EPSILON).contains(w));

        in_range && (weights.sum() - 1.0).abs() <= BARYCENTRIC_EPSILON
    }

    pub fn contains_point_offset(&self, p: Point2<f32>, offset: Vector2<f32>) -> bool {
        self.contains_point(p + offset)
    }

    /// Whether the two triangles share any point.
    ///
    /// True when a vertex of either lies in the other, or when any pair of edges cross.
    pub fn overlaps(&self, other: &Triangle2) -> bool {
        other.vertices().iter().any(|p| self.contains_point(*p))
            || self.vertices().iter().any(|p| other.contains_point(*p))
            || self.edges().iter().any(|e| {
                other
                    .edges()
                    .iter()
                    .any(|f| e.intersection(f).is_some())
            })
    }

    pub fn overlaps_offset(&self, other: &Triangle2, offset: Vector2<f32>) -> bool {
        self.overlaps(&other.translated(offset))
    }

    /// Nearest crossing of the ray with the triangle's boundary.
    ///
    /// In the plane a ray meets a triangle along its edges, so each edge is solved
    /// against the ray and the smallest `t >= 0` wins. The normal is the unit outward
    /// normal of the edge that was hit. A ray starting inside reports where it leaves.
    pub fn hit(&self, ray: &Ray2) -> Option<Hit2> {
        self.hit_range(ray, f32::INFINITY)
    }

    /// [`Triangle2::hit`], rejecting hits with `t` beyond `max`.
    pub fn hit_range(&self, ray: &Ray2, max: f32) -> Option<Hit2> {
        ray_boundary_hit(ray, &self.edges(), self.centroid(), max)
    }

    pub fn centroid(&self) -> Point2<f32> {
        Point2::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}
