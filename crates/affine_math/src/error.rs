//! Error types for the checked entry points.
//!
//! The core arithmetic never fails; these are only returned by
//! [`try_inverse`](crate::matrix::try_inverse) and the slice conversions.

/// Errors that can occur when a caller asks for a checked result.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// The matrix has a zero or non-finite determinant and cannot be inverted.
    #[error("matrix is singular (determinant = {determinant})")]
    Singular { determinant: f64 },

    /// A slice did not have the element count of the target type.
    #[error("expected {expected} elements, got {actual}")]
    Length { expected: usize, actual: usize },
}
