//! Algebraic properties checked through the public API.

use std::f64::consts::PI;

use affine_math::{
    MathError, Matrix3, deg_to_rad, distance, identity, inverse, multiply, normalize, project,
    projection, rad_to_deg, reflect, rotate, rotation, scale, scaling, transform_point, translate,
    translation, try_inverse,
};
use approx::{assert_abs_diff_eq, assert_relative_eq};

fn samples() -> Vec<Matrix3> {
    vec![
        translation(12.0, -7.5),
        rotation(0.9),
        scaling(-2.0, 0.125),
        projection(1920.0, 1080.0),
        scale(&rotate(&translate(&projection(800.0, 600.0), 400.0, 300.0), -0.4), 3.0, 3.0),
        [2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0],
    ]
}

fn assert_matrix_near(got: &Matrix3, want: &Matrix3) {
    for (g, w) in got.iter().zip(want) {
        assert_abs_diff_eq!(*g, *w, epsilon = 1e-9);
    }
}

#[test]
fn test_identity_is_neutral() {
    for m in samples() {
        assert_eq!(multiply(&identity(), &m), m);
        assert_eq!(multiply(&m, &identity()), m);
    }
}

#[test]
fn test_inverse_undoes_matrix() {
    for m in samples() {
        assert_matrix_near(&multiply(&inverse(&m), &m), &identity());
        assert_eq!(try_inverse(&m), Ok(inverse(&m)));
    }
}

#[test]
fn test_singular_inverse_is_silent() {
    let m = [1.0, 2.0, 0.0, 2.0, 4.0, 0.0, 3.0, 5.0, 1.0];
    assert!(inverse(&m).iter().all(|v| !v.is_finite()));
    assert!(matches!(try_inverse(&m), Err(MathError::Singular { .. })));
}

#[test]
fn test_identity_leaves_points_alone() {
    for p in [[0.0, 0.0], [1.0, -1.0], [1e6, -3.25]] {
        assert_eq!(transform_point(&identity(), p), p);
    }
}

#[test]
fn test_distance_properties() {
    assert_eq!(distance(4.0, -9.0, 4.0, -9.0), 0.0);
    assert_eq!(distance(1.0, 2.0, -3.0, 5.0), distance(-3.0, 5.0, 1.0, 2.0));
    assert_eq!(distance(1.0, 2.0, -3.0, 5.0), 5.0);
}

#[test]
fn test_normalize_properties() {
    assert_eq!(normalize(0.0, 0.0), [0.0, 0.0]);
    for (x, y) in [(1.0, 1.0), (-3.0, 0.5), (0.0, -42.0), (0.0001, 0.0)] {
        let [nx, ny] = normalize(x, y);
        assert_relative_eq!(distance(0.0, 0.0, nx, ny), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_angle_round_trip() {
    for d in [-180.0, -1.0, 0.0, 45.0, 90.0, 270.0, 1234.5] {
        assert_relative_eq!(rad_to_deg(deg_to_rad(d)), d, max_relative = 1e-12);
    }
    assert_relative_eq!(deg_to_rad(90.0), PI / 2.0);
}

#[test]
fn test_translation_moves_origin() {
    assert_eq!(transform_point(&translation(5.0, 7.0), [0.0, 0.0]), [5.0, 7.0]);
}

#[test]
fn test_quarter_turn() {
    let p = transform_point(&rotation(PI / 2.0), [1.0, 0.0]);
    assert_abs_diff_eq!(p[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p[1], -1.0, epsilon = 1e-12);

    // The inverse rotation turns it back.
    let q = transform_point(&rotation(-PI / 2.0), p);
    assert_abs_diff_eq!(q[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(q[1], 0.0, epsilon = 1e-12);
}

#[test]
fn test_projection_corners() {
    let m = projection(100.0, 200.0);
    assert_eq!(transform_point(&m, [0.0, 0.0]), [-1.0, 1.0]);
    assert_eq!(transform_point(&m, [100.0, 200.0]), [1.0, -1.0]);
}

#[test]
fn test_project_combinator() {
    // The projection runs first, then clip space is doubled.
    let m = project(&scaling(2.0, 2.0), 100.0, 200.0);
    assert_eq!(transform_point(&m, [0.0, 0.0]), [-2.0, 2.0]);

    let p = transform_point(&m, [100.0, 200.0]);
    assert_abs_diff_eq!(p[0], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p[1], -2.0, epsilon = 1e-12);
}

#[test]
fn test_reflect_off_horizontal_surface() {
    assert_eq!(reflect(1.0, -1.0, 0.0, 1.0), [1.0, 1.0]);
}

#[test]
fn test_inputs_are_not_mutated() {
    let m = rotation(0.5);
    let copy = m;
    let _ = translate(&m, 1.0, 1.0);
    let _ = inverse(&m);
    let _ = transform_point(&m, [2.0, 3.0]);
    assert_eq!(m, copy);
}
