//! Canvas and placement configuration for the demo.

use affine_math::{Matrix3, Transform2D, deg_to_rad, multiply, projection};

/// Canvas size plus the placement applied to points before projection.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Scale, rotation and translation in pixel space.
    pub placement: Transform2D,
}

impl CanvasConfig {
    /// Create a config for a `width` x `height` canvas with no placement.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            placement: Transform2D::IDENTITY,
        }
    }

    #[must_use]
    pub fn with_translation(mut self, tx: f64, ty: f64) -> Self {
        self.placement.position = [tx, ty];
        self
    }

    #[must_use]
    pub fn with_angle_degrees(mut self, angle: f64) -> Self {
        self.placement.rotation = deg_to_rad(angle);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.placement.scale = [sx, sy];
        self
    }

    /// Reject canvas sizes that would make the projection non-finite.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0.0 || !value.is_finite() {
                anyhow::bail!("canvas {name} must be finite and non-zero, got {value}");
            }
        }
        Ok(())
    }

    /// The full pixel-to-clip-space matrix: placement first, then projection.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        multiply(
            &projection(self.width, self.height),
            &self.placement.to_matrix(),
        )
    }
}

#[cfg(test)]
mod tests {
    use affine_math::transform_point;
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_validate() {
        assert!(CanvasConfig::new(640.0, 480.0).validate().is_ok());
        assert!(CanvasConfig::new(0.0, 480.0).validate().is_err());
        assert!(CanvasConfig::new(640.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_plain_canvas_maps_corners() {
        let m = CanvasConfig::new(100.0, 200.0).matrix();
        assert_eq!(transform_point(&m, [0.0, 0.0]), [-1.0, 1.0]);
        assert_eq!(transform_point(&m, [100.0, 200.0]), [1.0, -1.0]);
    }

    #[test]
    fn test_centred_placement() {
        let m = CanvasConfig::new(200.0, 200.0)
            .with_translation(100.0, 100.0)
            .with_angle_degrees(90.0)
            .with_scale(2.0, 2.0)
            .matrix();
        // (10, 0) -> (20, 0) -> (0, -20) -> (100, 80) -> (0, 0.2).
        let p = transform_point(&m, [10.0, 0.0]);
        assert_abs_diff_eq!(p[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_builders_fill_placement() {
        let config = CanvasConfig::new(320.0, 240.0)
            .with_translation(4.0, -6.0)
            .with_angle_degrees(180.0)
            .with_scale(0.5, 2.0);
        assert_eq!(config.placement.position, [4.0, -6.0]);
        assert_eq!(config.placement.rotation, deg_to_rad(180.0));
        assert_eq!(config.placement.scale, [0.5, 2.0]);

        // The placement is applied in pixel space before the projection.
        let pixel = config.placement.transform_point([10.0, 3.0]);
        let direct = transform_point(&projection(320.0, 240.0), pixel);
        let p = transform_point(&config.matrix(), [10.0, 3.0]);
        assert_abs_diff_eq!(p[0], direct[0], epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], direct[1], epsilon = 1e-12);
    }
}
