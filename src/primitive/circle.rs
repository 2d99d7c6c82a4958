use crate::error::GeometryError;
use crate::primitive::hit::Hit2;
use crate::primitive::ray::Ray2;
use nalgebra::{distance, Point2, Vector2};

/// A circle in 2D space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub pos: Point2<f32>,
    /// Expected to be non-negative; [`Circle::new`] does not check.
    pub radius: f32,
}

impl Circle {
    pub fn new(pos: Point2<f32>, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Like [`Circle::new`], but rejects a negative radius.
    pub fn try_new(pos: Point2<f32>, radius: f32) -> Result<Self, GeometryError> {
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius));
        }
        Ok(Self::new(pos, radius))
    }

    pub fn translated(&self, offset: Vector2<f32>) -> Self {
        Self::new(self.pos + offset, self.radius)
    }

    /// Whether `p` lies inside or on the circle.
    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        distance(&self.pos, &p) <= self.radius
    }

    /// [`Circle::contains_point`] with `p` moved by `offset` first.
    pub fn contains_point_offset(&self, p: Point2<f32>, offset: Vector2<f32>) -> bool {
        self.contains_point(p + offset)
    }

    /// Whether the two circles touch or intersect.
    pub fn overlaps(&self, other: &Circle) -> bool {
        distance(&self.pos, &other.pos) <= self.radius + other.radius
    }

    /// [`Circle::overlaps`] with `other` moved by `offset` first.
    ///
    /// Useful for testing a predicted position without building a new circle.
    pub fn overlaps_offset(&self, other: &Circle, offset: Vector2<f32>) -> bool {
        self.overlaps(&other.translated(offset))
    }

    /// Intersects a ray with the circle's boundary.
    ///
    /// Reports the nearest crossing with `t >= 0`; a ray starting inside reports
    /// where it leaves. The normal points away from the center.
    pub fn hit(&self, ray: &Ray2) -> Option<Hit2> {
        let oc = ray.origin - self.pos;
        let a = ray.dir.norm_squared();
        let half_b = oc.dot(&ray.dir);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = nearest_root(a, half_b, discriminant)?;
        let normal = (ray.at(t) - self.pos) / self.radius;
        Some(Hit2::new(t, normal))
    }
}

/// Smallest non-negative root of `a t² + 2 half_b t + c`, given its discriminant.
pub(crate) fn nearest_root(a: f32, half_b: f32, discriminant: f32) -> Option<f32> {
    let sqrt_disc = discriminant.sqrt();
    let near = (-half_b - sqrt_disc) / a;
    let far = (-half_b + sqrt_disc) / a;

    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}
