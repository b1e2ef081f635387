//! Fit-scale computation for placing an image inside a container.
//!
//! The scaling rule is deliberately shape-driven rather than a general
//! aspect-fit: square containers are never rescaled, portrait containers
//! scale against the image width, landscape containers against the image
//! height. Both axes always receive the same factor, so the image is never
//! distorted.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Uniform `(x, y)` scale factors for drawing an image inside a container.
///
/// Returns `None` when the relevant image dimension is zero or non-finite
/// (e.g. an image that has not finished decoding), in which case there is
/// no usable scale and the caller should skip drawing.
#[must_use]
pub fn scale_for_container(
    container_width: f64,
    container_height: f64,
    image_width: f64,
    image_height: f64,
) -> Option<(f64, f64)> {
    if container_width == container_height {
        return Some((1.0, 1.0));
    }
    let portrait = container_width < container_height;
    let divisor = if portrait { image_width } else { image_height };
    if divisor <= 0.0 || !divisor.is_finite() {
        return None;
    }
    let scale = container_width.min(container_height) / divisor;
    Some((scale, scale))
}
