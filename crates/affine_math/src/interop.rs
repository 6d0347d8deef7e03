//! Conversions to and from [`glam`]'s `f64` types.
//!
//! glam stores matrices column-major and treats points as column vectors.
//! A row-major, row-vector [`Matrix3`] has exactly the same flat layout as
//! glam's column array for the same transform, so these conversions copy
//! values without transposing.

use glam::{DMat3, DVec2};

use crate::matrix::Matrix3;
use crate::vector::Point2;

/// Reinterpret a [`Matrix3`] as a glam matrix describing the same transform.
#[must_use]
pub fn to_dmat3(m: &Matrix3) -> DMat3 {
    DMat3::from_cols_array(m)
}

/// Flatten a glam matrix into a [`Matrix3`].
#[must_use]
pub fn from_dmat3(m: &DMat3) -> Matrix3 {
    m.to_cols_array()
}

/// Convert a [`Point2`] into a glam vector.
#[must_use]
pub fn to_dvec2(p: Point2) -> DVec2 {
    DVec2::from_array(p)
}

/// Convert a glam vector into a [`Point2`].
#[must_use]
pub fn from_dvec2(v: DVec2) -> Point2 {
    v.to_array()
}
