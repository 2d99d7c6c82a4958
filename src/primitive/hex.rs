use crate::error::GeometryError;
use crate::primitive::aabb::Aabb;
use crate::primitive::hit::Hit3;
use crate::primitive::ray::Ray3;
use nalgebra::{Point3, Vector3};

/// An axis-aligned rectangular prism given by its center and full extents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    /// Full width, height and depth. Expected to be non-negative.
    pub dimension: Vector3<f32>,
    /// Center of the prism.
    pub position: Point3<f32>,
}

impl Hex {
    pub fn new(dimension: Vector3<f32>, position: Point3<f32>) -> Self {
        Self { dimension, position }
    }

    /// Like [`Hex::new`], but rejects negative extents.
    pub fn try_new(dimension: Vector3<f32>, position: Point3<f32>) -> Result<Self, GeometryError> {
        match (0..3).find(|&axis| dimension[axis] < 0.0) {
            Some(axis) => Err(GeometryError::NegativeExtent {
                axis,
                value: dimension[axis],
            }),
            None => Ok(Self::new(dimension, position)),
        }
    }

    pub fn to_aabb(&self) -> Aabb {
        let half = self.dimension / 2.0;
        Aabb::new(self.position - half, self.position + half)
    }

    pub fn translated(&self, offset: Vector3<f32>) -> Self {
        Self::new(self.dimension, self.position + offset)
    }

    pub fn contains_point(&self, p: Point3<f32>) -> bool {
        self.to_aabb().contains_point(p)
    }

    /// Same separating-axis test as [`Aabb::overlaps`], on each prism's extent.
    pub fn overlaps(&self, other: &Hex) -> bool {
        self.to_aabb().overlaps(&other.to_aabb())
    }

    pub fn overlaps_offset(&self, other: &Hex, offset: Vector3<f32>) -> bool {
        self.overlaps(&other.translated(offset))
    }

    pub fn hit(&self, ray: &Ray3) -> Option<Hit3> {
        self.to_aabb().hit(ray)
    }
}

impl From<Aabb> for Hex {
    fn from(aabb: Aabb) -> Self {
        Hex::new(aabb.max - aabb.min, aabb.center())
    }
}
