use crate::primitive::aabb::Aabb;
use crate::primitive::circle::Circle;
use crate::primitive::hex::Hex;
use crate::primitive::rect::Rect;
use crate::primitive::sphere::Sphere;
use crate::primitive::triangle::Triangle;
use crate::primitive::triangle2::Triangle2;
use nalgebra::{Point2, Point3, Unit, Vector2, Vector3};
use proptest::prelude::*;

/// A Strategy to generate f32 values within the range [-50.0, 50.0],
/// though it is set up to be likely to produce zeros, round numbers, and edge cases.
pub fn scalar_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
            Just(std::f32::consts::PI),
            Just(-std::f32::consts::PI),
        ],
        -50.0f32..=50.0,
    ]
}

/// Strictly positive sizes, for radii and extents.
pub fn size_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.5), Just(1.0), Just(10.0), 0.5f32..=20.0]
}

pub fn arbitrary_vector2() -> impl Strategy<Value = Vector2<f32>> {
    (scalar_strategy(), scalar_strategy()).prop_map(|(x, y)| Vector2::new(x, y))
}

pub fn arbitrary_vector3() -> impl Strategy<Value = Vector3<f32>> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

pub fn arbitrary_unit_vector3() -> impl Strategy<Value = Unit<Vector3<f32>>> {
    arbitrary_vector3()
        .prop_filter("Non-zero vector", |v| v.norm() > 0.0001)
        .prop_map(Unit::new_normalize)
}

pub fn arbitrary_point2() -> impl Strategy<Value = Point2<f32>> {
    arbitrary_vector2().prop_map(Point2::from)
}

pub fn arbitrary_point3() -> impl Strategy<Value = Point3<f32>> {
    arbitrary_vector3().prop_map(Point3::from)
}

pub fn arbitrary_triangle() -> impl Strategy<Value = Triangle> {
    (arbitrary_point3(), arbitrary_point3(), arbitrary_point3())
        .prop_map(|(a, b, c)| Triangle::new(a, b, c))
}

pub fn arbitrary_triangle2() -> impl Strategy<Value = Triangle2> {
    (arbitrary_point2(), arbitrary_point2(), arbitrary_point2())
        .prop_map(|(a, b, c)| Triangle2::new(a, b, c))
}

pub fn arbitrary_circle() -> impl Strategy<Value = Circle> {
    (arbitrary_point2(), size_strategy()).prop_map(|(pos, radius)| Circle::new(pos, radius))
}

pub fn arbitrary_sphere() -> impl Strategy<Value = Sphere> {
    (arbitrary_point3(), size_strategy()).prop_map(|(pos, radius)| Sphere::new(pos, radius))
}

pub fn arbitrary_rect() -> impl Strategy<Value = Rect> {
    (arbitrary_point2(), size_strategy(), size_strategy())
        .prop_map(|(corner, w, h)| Rect::new(corner.x, corner.y, w, h))
}

pub fn arbitrary_aabb() -> impl Strategy<Value = Aabb> {
    (arbitrary_point3(), size_strategy(), size_strategy(), size_strategy())
        .prop_map(|(min, w, h, d)| Aabb::new(min, min + Vector3::new(w, h, d)))
}

pub fn arbitrary_hex() -> impl Strategy<Value = Hex> {
    (size_strategy(), size_strategy(), size_strategy(), arbitrary_point3())
        .prop_map(|(w, h, d, position)| Hex::new(Vector3::new(w, h, d), position))
}
