use crate::error::GeometryError;
use crate::primitive::bounds::{extent_of, extents_overlap};
use crate::primitive::hit::Hit3;
use crate::primitive::ray::Ray3;
use crate::primitive::triangle::Triangle;
use nalgebra::{center, Point3, Vector3};

/// Axis-Aligned Bounding Box (AABB) structure.
///
/// Expected to satisfy `min <= max` on every axis; [`Aabb::new`] does not check,
/// [`Aabb::try_new`] does.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum point of the AABB.
    pub min: Point3<f32>,
    /// Maximum point of the AABB.
    pub max: Point3<f32>,
}

/// Where a ray crosses the slabs of an [`Aabb`].
struct SlabCrossing {
    t: f32,
    axis: usize,
    /// Sign of the outward normal along `axis`.
    sign: f32,
}

impl Aabb {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Like [`Aabb::new`], but rejects a `min` exceeding `max` on any axis.
    pub fn try_new(min: Point3<f32>, max: Point3<f32>) -> Result<Self, GeometryError> {
        match (0..3).find(|&axis| min[axis] > max[axis]) {
            Some(axis) => Err(GeometryError::InvertedBounds { axis }),
            None => Ok(Self::new(min, max)),
        }
    }

    /// The tightest box around the triangle's three corners.
    pub fn from_triangle(triangle: &Triangle) -> Self {
        let [a, b, c] = triangle.vertices();
        Self::new(a.inf(&b).inf(&c), a.sup(&b).sup(&c))
    }

    /// Creates an AABB that encompasses all the given points.
    ///
    /// # Arguments
    ///
    /// * `points` - The mesh vertices to be enclosed.
    ///
    /// # Errors
    ///
    /// [`GeometryError::EmptyPointSet`] when `points` is empty.
    pub fn from_mesh(points: &[Point3<f32>]) -> Result<Self, GeometryError> {
        let Some((min, max)) = extent_of(points.iter().copied()) else {
            log::debug!("refusing to bound an empty mesh");
            return Err(GeometryError::EmptyPointSet);
        };
        Ok(Self::new(min, max))
    }

    /// Calculates the center point of the AABB.
    pub fn center(&self) -> Point3<f32> {
        center(&self.min, &self.max)
    }

    /// Compute the half-extents of the AABB.
    pub fn half_extents(&self) -> Vector3<f32> {
        (self.max - self.min) / 2.0
    }

    /// Create a version inflated by a given amount.
    pub fn inflated(&self, amount: f32) -> Self {
        let delta = Vector3::repeat(amount);
        Self::new(self.min - delta, self.max + delta)
    }

    /// Moves both corners by `offset`.
    pub fn translated(&self, offset: Vector3<f32>) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    pub fn contains_point(&self, p: Point3<f32>) -> bool {
        (0..3).all(|i| (self.min[i]..=self.max[i]).contains(&p[i]))
    }

    /// Separating-axis test: the boxes overlap iff their intervals overlap on all
    /// three axes. Touching faces count as overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        extents_overlap((&self.min, &self.max), (&other.min, &other.max))
    }

    pub fn overlaps_offset(&self, other: &Aabb, offset: Vector3<f32>) -> bool {
        self.overlaps(&other.translated(offset))
    }

    /// Ray/box intersection by the slab method.
    ///
    /// Reports the entry point and the outward normal of the face the ray entered
    /// through last. A ray starting inside reports where it leaves instead.
    pub fn hit(&self, ray: &Ray3) -> Option<Hit3> {
        let crossing = self.slab_crossing(ray)?;
        let mut normal = Vector3::zeros();
        normal[crossing.axis] = crossing.sign;
        Some(Hit3::new(crossing.t, normal))
    }

    /// [`Aabb::hit`] without the normal, for occlusion and visibility queries.
    pub fn hit_fast(&self, ray: &Ray3) -> Option<f32> {
        self.slab_crossing(ray).map(|crossing| crossing.t)
    }

    fn slab_crossing(&self, ray: &Ray3) -> Option<SlabCrossing> {
        let mut enter = SlabCrossing {
            t: f32::NEG_INFINITY,
            axis: 0,
            sign: -1.0,
        };
        let mut exit = SlabCrossing {
            t: f32::INFINITY,
            axis: 0,
            sign: 1.0,
        };

        for axis in 0..3 {
            // Axis-parallel rays give infinite slab bounds, which the comparisons absorb.
            let inv = 1.0 / ray.dir[axis];
            let mut near = (self.min[axis] - ray.origin[axis]) * inv;
            let mut far = (self.max[axis] - ray.origin[axis]) * inv;
            if inv < 0.0 {
                std::mem::swap(&mut near, &mut far);
            }

            let outward = if inv < 0.0 { 1.0 } else { -1.0 };
            if near > enter.t {
                enter = SlabCrossing {
                    t: near,
                    axis,
                    sign: outward,
                };
            }
            if far < exit.t {
                exit = SlabCrossing {
                    t: far,
                    axis,
                    sign: -outward,
                };
            }
        }

        if enter.t > exit.t || exit.t < 0.0 {
            return None;
        }

        let crossing = if enter.t >= 0.0 { enter } else { exit };
        crossing.t.is_finite().then_some(crossing)
    }
}
