use nalgebra::{SVector, Vector2, Vector3};
use rand::Rng;

/// Reflect `v` about the surface normal `n`: `v - 2 (v·n) n`.
///
/// Works in any dimension. `n` must already be unit length; it is not normalized here.
///
/// # Parameters
/// - `v`: The incoming vector.
/// - `n`: The unit surface normal.
///
/// # Returns
/// The mirrored vector.
pub fn reflect<const D: usize>(v: &SVector<f32, D>, n: &SVector<f32, D>) -> SVector<f32, D> {
    v - n * (2.0 * v.dot(n))
}

/// Refract `v` through a surface with unit normal `n` using Snell's law.
///
/// `eta` is the ratio of refractive indices (incident over transmitted).
///
/// # Returns
/// `None` on total internal reflection, i.e. when `1 - eta² (1 - (v·n)²) <= 0`.
/// Otherwise `eta (v - n (v·n)) - n sqrt(discriminant)`.
pub fn refract<const D: usize>(
    v: &SVector<f32, D>,
    n: &SVector<f32, D>,
    eta: f32,
) -> Option<SVector<f32, D>> {
    let dt = v.dot(n);
    let discriminant = 1.0 - eta * eta * (1.0 - dt * dt);

    if discriminant <= 0.0 {
        log::trace!("total internal reflection (discriminant {discriminant})");
        return None;
    }

    Some((v - n * dt) * eta - n * discriminant.sqrt())
}

/// Draw a vector whose components are each uniform in `[-1, 1]`.
///
/// Note that this samples the cube, not the sphere: the result is not normalized,
/// and directions towards the cube's corners are over-represented. It is meant as
/// a cheap jitter, not a uniformly distributed direction.
pub fn random_signed<const D: usize, R: Rng + ?Sized>(rng: &mut R) -> SVector<f32, D> {
    SVector::<f32, D>::from_fn(|_, _| rng.random_range(-1.0..=1.0))
}

/// [`random_signed`] in 2D using the thread-local generator.
pub fn rand_vec2() -> Vector2<f32> {
    random_signed(&mut rand::rng())
}

/// [`random_signed`] in 3D using the thread-local generator.
pub fn rand_vec3() -> Vector3<f32> {
    random_signed(&mut rand::rng())
}
