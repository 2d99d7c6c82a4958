use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Evaluate `origin + dir * t` for any ray type with `origin` and `dir` fields.
///
/// Expands inline at the call site; equivalent to [`Ray2::at`] / [`Ray3::at`].
#[macro_export]
macro_rules! ray_at {
    ($ray:expr, $t:expr) => {
        $ray.origin + $ray.dir * $t
    };
}

/// A ray in 2D space, defined by an origin point and a direction.
///
/// The direction is not required to be normalized; `t` is measured in multiples of it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray2 {
    pub origin: Point2<f32>,
    pub dir: Vector2<f32>,
}

impl Ray2 {
    pub fn new(origin: Point2<f32>, dir: Vector2<f32>) -> Self {
        Self { origin, dir }
    }

    /// Returns the point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Point2<f32> {
        ray_at!(self, t)
    }
}

/// A ray in 3D space, defined by an origin point and a direction.
///
/// The direction is not required to be normalized; `t` is measured in multiples of it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray3 {
    pub origin: Point3<f32>,
    pub dir: Vector3<f32>,
}

impl Ray3 {
    /// Creates a new `Ray3` from an origin point and a direction vector.
    ///
    /// # Parameters
    /// - `origin`: The origin point of the ray.
    /// - `dir`: The direction vector of the ray.
    pub fn new(origin: Point3<f32>, dir: Vector3<f32>) -> Self {
        Self { origin, dir }
    }

    /// Returns the point at parameter `t` along the ray.
    ///
    /// # Parameters
    /// - `t`: The ray parameter, in multiples of `dir`.
    #[inline]
    pub fn at(&self, t: f32) -> Point3<f32> {
        ray_at!(self, t)
    }
}
