use thiserror::Error;

/// Errors raised by the few constructors that validate their input.
///
/// Geometric queries never fail; they answer `false` or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A bounding box was requested for zero points.
    #[error("cannot bound an empty point set")]
    EmptyPointSet,
    /// A box minimum exceeds its maximum on the given axis.
    #[error("invalid box: min > max on axis {axis}")]
    InvertedBounds { axis: usize },
    /// A circle or sphere was given a negative radius.
    #[error("negative radius: {0}")]
    NegativeRadius(f32),
    /// A hexahedron was given a negative extent on the given axis.
    #[error("negative extent on axis {axis}: {value}")]
    NegativeExtent { axis: usize, value: f32 },
}
