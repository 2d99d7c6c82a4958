//! Numeric tolerances used by the intersection routines.
//!
//! All arithmetic in this crate is `f32`, so these are sized for single precision.

/// Relative tolerance for treating a determinant as zero (parallel lines, rays
/// parallel to a triangle plane). Callers scale it by the product of the lengths
/// of the vectors the determinant is built from.
pub const DETERMINANT_EPSILON: f32 = 1.0e-7;

/// Slack allowed on barycentric weights when testing point containment.
pub const BARYCENTRIC_EPSILON: f32 = 1.0e-5;
