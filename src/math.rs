//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in the upper left of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from 9 values. Each row of arguments holds the
/// contribution of one input component to the three outputs, which is the
/// transpose of how the matrices are usually published.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Normalize a hue in degrees into the range `[0..360)`. A `NaN` hue is
/// powerless and stays `NaN`.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::zero);
    let hue = hue % full;
    if hue < T::zero() {
        hue + full
    } else {
        hue
    }
}

/// Raise to a power while keeping the sign of the base, so that negative
/// values mirror the curve for positive values.
pub fn spow<T: Float>(base: T, exponent: T) -> T {
    base.signum() * base.abs().powf(exponent)
}
