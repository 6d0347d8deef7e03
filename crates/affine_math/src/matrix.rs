//! 3x3 matrix builders and combinators.
//!
//! A [`Matrix3`] is stored row-major. Points are row vectors, so a point
//! `(x, y, 1)` is transformed as `p * M` and the translation lives in the
//! last row:
//!
//! ```text
//! | m[0] m[1] m[2] |     | a  b  0 |
//! | m[3] m[4] m[5] |  =  | c  d  0 |
//! | m[6] m[7] m[8] |     | tx ty 1 |
//! ```
//!
//! ## Composition order
//!
//! [`multiply(a, b)`](multiply) returns the product `b * a`, so the result
//! applies `b` to a point first and `a` second. The combinators
//! ([`translate`], [`rotate`], [`scale`], [`project`]) therefore read like a
//! chain from the outermost space inwards:
//!
//! ```rust
//! use affine_math::{projection, rotate, translate};
//!
//! // Points are rotated, then translated, then projected to clip space.
//! let m = projection(640.0, 480.0);
//! let m = translate(&m, 100.0, 50.0);
//! let m = rotate(&m, 0.25);
//! # let _ = m;
//! ```

use tracing::{debug, trace};

use crate::error::MathError;

/// A 3x3 matrix in row-major order, indexed as `m[row * 3 + col]`.
pub type Matrix3 = [f64; 9];

/// The multiplicative identity.
#[must_use]
pub fn identity() -> Matrix3 {
    [
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]
}

/// A translation by `(tx, ty)`.
#[must_use]
pub fn translation(tx: f64, ty: f64) -> Matrix3 {
    [
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        tx, ty, 1.0,
    ]
}

/// A rotation by `angle_in_radians`.
#[must_use]
pub fn rotation(angle_in_radians: f64) -> Matrix3 {
    let c = angle_in_radians.cos();
    let s = angle_in_radians.sin();
    [
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    ]
}

/// A scale by `(sx, sy)`.
#[must_use]
pub fn scaling(sx: f64, sy: f64) -> Matrix3 {
    [
        sx, 0.0, 0.0, //
        0.0, sy, 0.0, //
        0.0, 0.0, 1.0,
    ]
}

/// Map pixel coordinates to clip space.
///
/// The pixel origin is the top-left corner with Y growing downwards; clip
/// space spans `[-1, 1]` on both axes with Y growing upwards. A zero `width`
/// or `height` yields non-finite scale factors.
#[must_use]
pub fn projection(width: f64, height: f64) -> Matrix3 {
    // Flips Y so 0 is at the top.
    [
        2.0 / width, 0.0, 0.0, //
        0.0, -2.0 / height, 0.0, //
        -1.0, 1.0, 1.0,
    ]
}

/// Multiply two matrices, returning `b * a`.
///
/// The result transforms a point by `b` first and then by `a`. Swapping the
/// operands changes the meaning for any pair that does not commute.
#[must_use]
pub fn multiply(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = *a;
    let [b00, b01, b02, b10, b11, b12, b20, b21, b22] = *b;

    [
        b00 * a00 + b01 * a10 + b02 * a20,
        b00 * a01 + b01 * a11 + b02 * a21,
        b00 * a02 + b01 * a12 + b02 * a22,
        b10 * a00 + b11 * a10 + b12 * a20,
        b10 * a01 + b11 * a11 + b12 * a21,
        b10 * a02 + b11 * a12 + b12 * a22,
        b20 * a00 + b21 * a10 + b22 * a20,
        b20 * a01 + b21 * a11 + b22 * a21,
        b20 * a02 + b21 * a12 + b22 * a22,
    ]
}

/// `multiply(m, translation(tx, ty))`.
#[must_use]
pub fn translate(m: &Matrix3, tx: f64, ty: f64) -> Matrix3 {
    multiply(m, &translation(tx, ty))
}

/// `multiply(m, rotation(angle_in_radians))`.
#[must_use]
pub fn rotate(m: &Matrix3, angle_in_radians: f64) -> Matrix3 {
    multiply(m, &rotation(angle_in_radians))
}

/// `multiply(m, scaling(sx, sy))`.
#[must_use]
pub fn scale(m: &Matrix3, sx: f64, sy: f64) -> Matrix3 {
    multiply(m, &scaling(sx, sy))
}

/// `multiply(m, projection(width, height))`.
#[must_use]
pub fn project(m: &Matrix3, width: f64, height: f64) -> Matrix3 {
    multiply(m, &projection(width, height))
}

/// Cofactors of the first column, shared by [`determinant`] and [`inverse`].
fn first_column_cofactors(m: &Matrix3) -> (f64, f64, f64) {
    let t00 = m[4] * m[8] - m[5] * m[7];
    let t10 = m[1] * m[8] - m[2] * m[7];
    let t20 = m[1] * m[5] - m[2] * m[4];
    (t00, t10, t20)
}

/// Expand along the first column using precomputed cofactors.
fn expand_first_column(m: &Matrix3, (t00, t10, t20): (f64, f64, f64)) -> f64 {
    m[0] * t00 - m[3] * t10 + m[6] * t20
}

/// Determinant by cofactor expansion along the first column.
#[must_use]
pub fn determinant(m: &Matrix3) -> f64 {
    expand_first_column(m, first_column_cofactors(m))
}

/// Invert a matrix via its adjugate.
///
/// A singular matrix is not reported: the reciprocal of a zero determinant
/// is infinite and every component of the result comes out as `±inf` or
/// `NaN`. Use [`try_inverse`] to get an error instead.
#[must_use]
pub fn inverse(m: &Matrix3) -> Matrix3 {
    let cofactors = first_column_cofactors(m);
    let det = expand_first_column(m, cofactors);
    if det == 0.0 {
        trace!(determinant = det, "inverting a singular matrix");
    }
    let d = 1.0 / det;
    let (t00, t10, t20) = cofactors;

    [
        d * t00,
        -d * t10,
        d * t20,
        -d * (m[3] * m[8] - m[5] * m[6]),
        d * (m[0] * m[8] - m[2] * m[6]),
        -d * (m[0] * m[5] - m[2] * m[3]),
        d * (m[3] * m[7] - m[4] * m[6]),
        -d * (m[0] * m[7] - m[1] * m[6]),
        d * (m[0] * m[4] - m[1] * m[3]),
    ]
}

/// Invert a matrix, rejecting singular input.
///
/// On success the result is bit-identical to [`inverse`].
///
/// # Errors
///
/// Returns [`MathError::Singular`] if the determinant is zero or not finite.
pub fn try_inverse(m: &Matrix3) -> Result<Matrix3, MathError> {
    let det = determinant(m);
    if det == 0.0 || !det.is_finite() {
        debug!(determinant = det, "refusing to invert singular matrix");
        return Err(MathError::Singular { determinant: det });
    }
    Ok(inverse(m))
}

/// Copy a 9-element slice into a [`Matrix3`].
///
/// # Errors
///
/// Returns [`MathError::Length`] if the slice does not hold exactly 9 values.
pub fn matrix_from_slice(values: &[f64]) -> Result<Matrix3, MathError> {
    Matrix3::try_from(values).map_err(|_| MathError::Length {
        expected: 9,
        actual: values.len(),
    })
}
