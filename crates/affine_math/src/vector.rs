//! 2D vector and point helpers.

use crate::error::MathError;
use crate::matrix::Matrix3;

/// A 2D point or vector as `[x, y]`.
pub type Point2 = [f64; 2];

/// Vectors at or below this length normalise to zero.
const NORMALIZE_EPSILON: f64 = 0.00001;

/// Dot product of `(x1, y1)` and `(x2, y2)`.
#[must_use]
pub fn dot(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * x2 + y1 * y2
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[must_use]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

/// Scale `(x, y)` onto the unit circle.
///
/// Vectors no longer than `1e-5` return `[0.0, 0.0]` instead of blowing up.
#[must_use]
pub fn normalize(x: f64, y: f64) -> Point2 {
    let len = distance(0.0, 0.0, x, y);
    if len > NORMALIZE_EPSILON {
        [x / len, y / len]
    } else {
        [0.0, 0.0]
    }
}

/// Reflect the incident vector `(ix, iy)` about a surface with normal
/// `(nx, ny)`, i.e. `I - 2 * dot(N, I) * N`.
///
/// The normal is used as given; pass a unit vector.
#[must_use]
pub fn reflect(ix: f64, iy: f64, nx: f64, ny: f64) -> Point2 {
    let d = dot(nx, ny, ix, iy);
    [ix - 2.0 * d * nx, iy - 2.0 * d * ny]
}

/// Transform the point `v` by `m`, including the homogeneous divide.
///
/// For affine matrices the divisor is exactly 1. A zero divisor yields
/// non-finite coordinates.
#[must_use]
pub fn transform_point(m: &Matrix3, v: Point2) -> Point2 {
    let [v0, v1] = v;
    let d = v0 * m[2] + v1 * m[5] + m[8];
    [
        (v0 * m[0] + v1 * m[3] + m[6]) / d,
        (v0 * m[1] + v1 * m[4] + m[7]) / d,
    ]
}

/// Copy a 2-element slice into a [`Point2`].
///
/// # Errors
///
/// Returns [`MathError::Length`] if the slice does not hold exactly 2 values.
pub fn point_from_slice(values: &[f64]) -> Result<Point2, MathError> {
    Point2::try_from(values).map_err(|_| MathError::Length {
        expected: 2,
        actual: values.len(),
    })
}
