//! # affine_math
//!
//! 2D affine geometry on flat 3x3 matrices. A [`Matrix3`] is a `[f64; 9]` in
//! row-major order (index `row * 3 + col`) and points are transformed as
//! homogeneous row vectors `(x, y, 1)`.
//!
//! This crate provides:
//!
//! - [`matrix`] — builders, combinators, determinant and inversion.
//! - [`vector`] — dot product, distance, normalisation, reflection and
//!   point transformation.
//! - [`angle`] — radian/degree conversion.
//! - [`transform`] — the [`Transform2D`] position/rotation/scale value.
//! - [`interop`] — zero-cost conversion to and from [`glam`] `f64` types.
//! - [`error`] — errors for the checked entry points.
//!
//! Nothing here panics on degenerate input. A singular matrix, a zero
//! homogeneous divisor or a zero-sized projection simply produce non-finite
//! components, the way plain IEEE-754 arithmetic does.
//!
//! ## Usage
//!
//! ```rust
//! use affine_math::{projection, rotate, transform_point, translate};
//!
//! let m = projection(400.0, 300.0);
//! let m = translate(&m, 200.0, 150.0);
//! let m = rotate(&m, 0.0);
//!
//! let clip = transform_point(&m, [0.0, 0.0]);
//! // The canvas centre lands on the clip-space origin.
//! assert!(clip[0].abs() < 1e-12 && clip[1].abs() < 1e-12);
//! ```

pub mod angle;
pub mod error;
pub mod interop;
pub mod matrix;
pub mod transform;
pub mod vector;

// Re-export glam's double-precision types used by the interop layer.
pub use glam::{DMat3, DVec2};

pub use angle::{deg_to_rad, rad_to_deg};
pub use error::MathError;
pub use interop::{from_dmat3, from_dvec2, to_dmat3, to_dvec2};
pub use matrix::{
    Matrix3, determinant, identity, inverse, matrix_from_slice, multiply, project, projection,
    rotate, rotation, scale, scaling, translate, translation, try_inverse,
};
pub use transform::Transform2D;
pub use vector::{Point2, distance, dot, normalize, point_from_slice, reflect, transform_point};
