#![allow(clippy::float_cmp)]

use super::*;

// --- Square containers ---

#[test]
fn square_container_is_identity() {
    assert_eq!(scale_for_container(100.0, 100.0, 640.0, 480.0), Some((1.0, 1.0)));
}

#[test]
fn square_container_ignores_image_shape() {
    assert_eq!(scale_for_container(32.0, 32.0, 1.0, 9999.0), Some((1.0, 1.0)));
}

#[test]
fn degenerate_square_is_identity() {
    // Zero-by-zero container still takes the square branch.
    assert_eq!(scale_for_container(0.0, 0.0, 64.0, 64.0), Some((1.0, 1.0)));
}

#[test]
fn square_container_skips_the_divisor_guard() {
    // The guard only applies where a division actually happens.
    assert_eq!(scale_for_container(50.0, 50.0, 0.0, 0.0), Some((1.0, 1.0)));
}

// --- Portrait containers ---

#[test]
fn portrait_scales_by_image_width() {
    // min(100, 200) / 50 = 2
    assert_eq!(scale_for_container(100.0, 200.0, 50.0, 80.0), Some((2.0, 2.0)));
}

#[test]
fn portrait_axes_are_equal() {
    let (x, y) = scale_for_container(30.0, 90.0, 7.0, 11.0).unwrap();
    assert_eq!(x, y);
}

#[test]
fn portrait_uses_smaller_container_dimension() {
    // min is the width for a portrait container.
    assert_eq!(scale_for_container(10.0, 1000.0, 5.0, 123.0), Some((2.0, 2.0)));
}

#[test]
fn portrait_ignores_image_height() {
    let a = scale_for_container(100.0, 200.0, 50.0, 1.0);
    let b = scale_for_container(100.0, 200.0, 50.0, 500.0);
    assert_eq!(a, b);
}

#[test]
fn portrait_can_downscale() {
    // min(40, 80) / 100 = 0.4
    assert_eq!(scale_for_container(40.0, 80.0, 100.0, 100.0), Some((0.4, 0.4)));
}

// --- Landscape containers ---

#[test]
fn landscape_scales_by_image_height() {
    // min(200, 100) / 25 = 4
    assert_eq!(scale_for_container(200.0, 100.0, 50.0, 25.0), Some((4.0, 4.0)));
}

#[test]
fn landscape_axes_are_equal() {
    let (x, y) = scale_for_container(90.0, 30.0, 7.0, 11.0).unwrap();
    assert_eq!(x, y);
}

#[test]
fn landscape_ignores_image_width() {
    let a = scale_for_container(200.0, 100.0, 1.0, 25.0);
    let b = scale_for_container(200.0, 100.0, 9999.0, 25.0);
    assert_eq!(a, b);
}

// --- Divisor guard ---

#[test]
fn portrait_zero_image_width_has_no_scale() {
    assert_eq!(scale_for_container(100.0, 200.0, 0.0, 50.0), None);
}

#[test]
fn landscape_zero_image_height_has_no_scale() {
    assert_eq!(scale_for_container(200.0, 100.0, 50.0, 0.0), None);
}

#[test]
fn negative_image_dimension_has_no_scale() {
    assert_eq!(scale_for_container(100.0, 200.0, -4.0, 50.0), None);
}

#[test]
fn nan_image_dimension_has_no_scale() {
    assert_eq!(scale_for_container(100.0, 200.0, f64::NAN, 50.0), None);
}

#[test]
fn infinite_image_dimension_has_no_scale() {
    assert_eq!(scale_for_container(200.0, 100.0, 50.0, f64::INFINITY), None);
}

#[test]
fn zero_off_divisor_dimension_is_fine() {
    // Landscape divides by height; a zero width is not consulted.
    assert_eq!(scale_for_container(200.0, 100.0, 0.0, 25.0), Some((4.0, 4.0)));
}
