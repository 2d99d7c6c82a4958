use crate::primitive::hit::Hit3;
use crate::primitive::ray::Ray3;
use crate::tolerance::DETERMINANT_EPSILON;
use nalgebra::{Point3, Unit, Vector3};
#[cfg(test)]
use proptest_derive::Arbitrary;

/// Enum to designate one of the triangle edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum TriangleEdge {
    EdgeAB,
    EdgeBC,
    EdgeCA,
}

/// Which ray parameters a triangle hit test will accept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TBounds {
    /// `t > 0`.
    Positive,
    /// `0 < t < closest`: only hits nearer than one already found.
    Closer(f32),
    /// `t_min <= t <= t_max`.
    Within(f32, f32),
}

impl TBounds {
    #[inline]
    pub fn admits(self, t: f32) -> bool {
        match self {
            TBounds::Positive => t > 0.0,
            TBounds::Closer(closest) => t > 0.0 && t < closest,
            TBounds::Within(t_min, t_max) => (t_min..=t_max).contains(&t),
        }
    }
}

/// A ray/triangle intersection with its barycentric position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Ray parameter of the hit.
    pub t: f32,
    /// Weight of vertex `b`.
    pub u: f32,
    /// Weight of vertex `c`.
    pub v: f32,
}

impl TriangleHit {
    /// Weights of `a`, `b` and `c`, summing to one.
    pub fn barycentric(&self) -> [f32; 3] {
        [1.0 - self.u - self.v, self.u, self.v]
    }
}

/// A triangle in 3D space defined by three points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// The first vertex of the triangle.
    pub a: Point3<f32>,
    /// The second vertex of the triangle.
    pub b: Point3<f32>,
    /// The third vertex of the triangle.
    pub c: Point3<f32>,
}

impl Triangle {
    pub fn new(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self { a, b, c }
    }

    /// `(b - a) × (c - a)`; its length is twice the area.
    pub fn raw_normal(&self) -> Vector3<f32> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// The unit normal, following the right-hand rule over `a, b, c`.
    pub fn normal(&self) -> Vector3<f32> {
        self.unit_normal().into_inner()
    }

    pub fn unit_normal(&self) -> Unit<Vector3<f32>> {
        Unit::new_normalize(self.raw_normal())
    }

    pub fn vertices(&self) -> [Point3<f32>; 3] {
        [self.a, self.b, self.c]
    }

    /// Möller–Trumbore ray/triangle intersection.
    ///
    /// Rays parallel to the triangle's plane never hit; the determinant is compared
    /// against [`DETERMINANT_EPSILON`] scaled by `|e1| |e2| |dir|`. The `t` check runs
    /// before the second barycentric test, so tight [`TBounds::Closer`] bounds bail out early.
    pub fn intersect(&self, ray: &Ray3, bounds: TBounds) -> Option<TriangleHit> {
        let e1 = self.b - self.a;
        let e2 = self.c - self.a;

        let h = ray.dir.cross(&e2);
        let det = e1.dot(&h);
        if det.abs() <= DETERMINANT_EPSILON * e1.norm() * e2.norm() * ray.dir.norm() {
            log::trace!("ray parallel to triangle plane (det {det})");
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin - self.a;
        let u = inv_det * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&e1);
        let t = inv_det * e2.dot(&q);
        if !bounds.admits(t) {
            return None;
        }

        let v = inv_det * ray.dir.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        Some(TriangleHit { t, u, v })
    }

    /// Hit test accepting any `t > 0`. The hit normal is [`Triangle::normal`].
    pub fn hit(&self, ray: &Ray3) -> Option<Hit3> {
        self.hit_within(ray, TBounds::Positive)
    }

    /// Hit test that only accepts hits nearer than `closest`.
    ///
    /// Meant for scanning many triangles while tracking the nearest hit.
    pub fn hit_fast(&self, ray: &Ray3, closest: f32) -> Option<Hit3> {
        self.hit_within(ray, TBounds::Closer(closest))
    }

    /// Hit test accepting `t` in `[t_min, t_max]`.
    pub fn hit_range(&self, ray: &Ray3, t_min: f32, t_max: f32) -> Option<Hit3> {
        self.hit_within(ray, TBounds::Within(t_min, t_max))
    }

    fn hit_within(&self, ray: &Ray3, bounds: TBounds) -> Option<Hit3> {
        self.intersect(ray, bounds)
            .map(|hit| Hit3::new(hit.t, self.normal()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::proptest::{arbitrary_triangle, arbitrary_unit_vector3};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn ray_from_above_hits_with_valid_weights() {
        let ray = Ray3::new(Point3::new(0.2, 0.2, 1.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = unit_triangle().intersect(&ray, TBounds::Positive).unwrap();

        assert_relative_eq!(hit.t, 1.0);
        let weights = hit.barycentric();
        assert!(weights.iter().all(|w| *w >= 0.0));
        assert_relative_eq!(weights.iter().sum::<f32>(), 1.0);
        assert_relative_eq!(weights[1], 0.2);
        assert_relative_eq!(weights[2], 0.2);

        let hit = unit_triangle().hit(&ray).unwrap();
        assert_relative_eq!(hit.normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn ray_outside_triangle_misses() {
        let ray = Ray3::new(Point3::new(5.0, 5.0, 1.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(unit_triangle().hit(&ray).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray3::new(Point3::new(-1.0, 0.2, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(unit_triangle().hit(&ray).is_none());
    }

    #[test]
    fn triangle_behind_ray_misses() {
        let ray = Ray3::new(Point3::new(0.2, 0.2, 1.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit_triangle().hit(&ray).is_none());
    }

    #[test]
    fn fast_and_range_variants_bound_t() {
        let tri = unit_triangle();
        let ray = Ray3::new(Point3::new(0.2, 0.2, 2.0), Vector3::new(0.0, 0.0, -1.0));

        assert!(tri.hit_fast(&ray, f32::INFINITY).is_some());
        assert!(tri.hit_fast(&ray, 2.5).is_some());
        assert!(tri.hit_fast(&ray, 2.0).is_none());
        assert!(tri.hit_fast(&ray, 1.0).is_none());

        assert!(tri.hit_range(&ray, 0.0, 2.0).is_some());
        assert!(tri.hit_range(&ray, 2.0, 3.0).is_some());
        assert!(tri.hit_range(&ray, 0.0, 1.5).is_none());
        assert!(tri.hit_range(&ray, 2.5, 3.0).is_none());
    }

    #[test]
    fn normal_follows_winding() {
        let tri = unit_triangle();
        assert_eq!(tri.normal(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(tri.raw_normal().norm(), 1.0);

        let flipped = Triangle::new(tri.a, tri.c, tri.b);
        assert_eq!(flipped.normal(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn tiny_triangle_is_not_mistaken_for_parallel() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2e-4, 0.0, 0.0),
            Point3::new(0.0, 2e-4, 0.0),
        );
        let ray = Ray3::new(Point3::new(4e-5, 4e-5, 1.0), Vector3::new(0.0, 0.0, -1.0));

        let hit = tri.hit(&ray).expect("face-on ray through the interior");
        assert_relative_eq!(hit.t, 1.0, epsilon = 1e-5);
        assert_relative_eq!(hit.normal, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn collinear_triangle_never_hits() {
        let flat = Triangle::new(
            Point3::origin(),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        let ray = Ray3::new(Point3::new(1.0, 1.0, 3.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(flat.hit(&ray).is_none());
    }

    proptest! {
        #[test]
        fn ray_aimed_at_interior_point_hits_it(
            triangle in arbitrary_triangle().prop_filter("well shaped", |t| {
                let (ab, ac) = (t.b - t.a, t.c - t.a);
                let double_area = t.raw_normal().norm();
                double_area > 2.0 && double_area > 0.2 * ab.norm() * ac.norm()
            }),
            (x, y) in (0.0f32..=1.0, 0.0f32..=1.0),
            tilt in arbitrary_unit_vector3(),
            flip in any::<bool>(),
        ) {
            // Fold into the lower half of the unit square, then keep clear of the
            // edges where rounding decides the outcome.
            let (x, y) = if x + y > 1.0 { (1.0 - x, 1.0 - y) } else { (x, y) };
            let (wb, wc) = (0.05 + 0.85 * x, 0.05 + 0.85 * y);
            let wa = 1.0 - wb - wc;

            // Never grazing: the direction stays within ~70 degrees of the normal.
            let n = if flip { -triangle.normal() } else { triangle.normal() };
            let dir = (n + tilt.into_inner() * 0.5).normalize();

            let target = Point3::from(
                triangle.a.coords * wa + triangle.b.coords * wb + triangle.c.coords * wc,
            );
            let ray = Ray3::new(target - dir * 10.0, dir);

            let hit = triangle
                .intersect(&ray, TBounds::Positive)
                .expect("aimed inside the triangle");
            prop_assert!((hit.t - 10.0).abs() < 5e-2);
            let [ha, hb, hc] = hit.barycentric();
            prop_assert!((ha - wa).abs() < 2e-2);
            prop_assert!((hb - wb).abs() < 2e-2);
            prop_assert!((hc - wc).abs() < 2e-2);
        }
    }
}
