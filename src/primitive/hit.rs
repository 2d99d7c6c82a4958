use crate::primitive::ray::{Ray2, Ray3};
use nalgebra::{Point2, Point3, Vector2, Vector3};

/// The result of a successful 2D ray query.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit2 {
    /// Ray parameter of the intersection; never negative.
    pub t: f32,
    /// Surface normal at the intersection, unit length where defined.
    pub normal: Vector2<f32>,
}

impl Hit2 {
    pub fn new(t: f32, normal: Vector2<f32>) -> Self {
        Self { t, normal }
    }

    /// The intersection point on `ray`.
    pub fn point(&self, ray: &Ray2) -> Point2<f32> {
        ray.at(self.t)
    }
}

/// The result of a successful 3D ray query.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit3 {
    /// Ray parameter of the intersection; never negative.
    pub t: f32,
    /// Surface normal at the intersection, unit length where defined.
    pub normal: Vector3<f32>,
}

impl Hit3 {
    pub fn new(t: f32, normal: Vector3<f32>) -> Self {
        Self { t, normal }
    }

    /// The intersection point on `ray`.
    pub fn point(&self, ray: &Ray3) -> Point3<f32> {
        ray.at(self.t)
    }
}
