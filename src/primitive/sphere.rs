use crate::error::GeometryError;
use crate::primitive::circle::nearest_root;
use crate::primitive::hit::Hit3;
use crate::primitive::ray::Ray3;
use nalgebra::{distance, Point3, Vector3};

/// A sphere in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    pub pos: Point3<f32>,
    /// Expected to be non-negative; [`Sphere::new`] does not check.
    pub radius: f32,
}

impl Sphere {
    pub fn new(pos: Point3<f32>, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Like [`Sphere::new`], but rejects a negative radius.
    pub fn try_new(pos: Point3<f32>, radius: f32) -> Result<Self, GeometryError> {
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius));
        }
        Ok(Self::new(pos, radius))
    }

    pub fn translated(&self, offset: Vector3<f32>) -> Self {
        Self::new(self.pos + offset, self.radius)
    }

    pub fn contains_point(&self, p: Point3<f32>) -> bool {
        distance(&self.pos, &p) <= self.radius
    }

    pub fn contains_point_offset(&self, p: Point3<f32>, offset: Vector3<f32>) -> bool {
        self.contains_point(p + offset)
    }

    pub fn overlaps(&self, other: &Sphere) -> bool {
        distance(&self.pos, &other.pos) <= self.radius + other.radius
    }

    pub fn overlaps_offset(&self, other: &Sphere, offset: Vector3<f32>) -> bool {
        self.overlaps(&other.translated(offset))
    }

    /// Intersect a ray with the sphere.
    ///
    /// Solves `|origin + t dir - pos|² = radius²` and keeps the smallest root with
    /// `t >= 0`. The normal is `(hit - pos) / radius`, i.e. outward and unit length.
    pub fn hit(&self, ray: &Ray3) -> Option<Hit3> {
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
        Some(Hit3::new(t, normal))
    }
}
