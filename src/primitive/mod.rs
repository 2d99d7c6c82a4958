//! This module contains the primitive geometry types.
//!
//! We define primitive geometry as any geometry of O(1) complexity: circles and spheres,
//! triangles, quads and rectangles, boxes, and the rays and hits used to query them.
//! Every type is a small `Copy` value with no identity of its own.
pub mod aabb;
pub mod bounds;
pub mod circle;
pub mod hex;
pub mod hit;
pub mod quad;
pub mod ray;
pub mod rect;
pub mod segment;
pub mod sphere;
pub mod triangle;
pub mod triangle2;
pub mod vector_utils;
