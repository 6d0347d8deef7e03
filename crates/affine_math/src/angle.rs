//! Angle unit conversion.

use std::f64::consts::PI;

/// Convert radians to degrees.
#[must_use]
pub fn rad_to_deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/// Convert degrees to radians.
#[must_use]
pub fn deg_to_rad(d: f64) -> f64 {
    d * PI / 180.0
}
