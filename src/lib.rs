//! Primitive 2D and 3D shapes with ray-hit and overlap queries.
//!
//! Everything here is closed-form `f32` math over small value types. Queries never
//! fail: overlap tests answer `bool`, hit tests answer `Option`. Degenerate input
//! (zero-length directions, collinear triangles) is the caller's to avoid.

pub mod error;
pub mod intersection;
pub mod primitive;
pub mod tolerance;

#[cfg(test)]
pub mod proptest;

// Re-export commonly used types
pub use error::GeometryError;
pub use intersection::{closest_triangle_hit, line_intersect};
pub use primitive::aabb::Aabb;
pub use primitive::circle::Circle;
pub use primitive::hex::Hex;
pub use primitive::hit::{Hit2, Hit3};
pub use primitive::quad::{rect_to_quad, Quad2};
pub use primitive::ray::{Ray2, Ray3};
pub use primitive::rect::{quad_to_rect, Rect};
pub use primitive::segment::Segment2;
pub use primitive::sphere::Sphere;
pub use primitive::triangle::{TBounds, Triangle, TriangleEdge, TriangleHit};
pub use primitive::triangle2::Triangle2;
pub use primitive::vector_utils::{rand_vec2, rand_vec3, random_signed, reflect, refract};
