//! Pointer-to-angle and pointer-to-fraction mathematics.
//!
//! Pure functions shared by the hue ring and the sliders, extracted for
//! testability.

use std::f32::consts::TAU;

use huepick_ui::Point;

/// Fold any angle in radians into `[0, 2π)`.
pub fn normalize_angle(theta: f32) -> f32 {
    if !theta.is_finite() {
        return 0.0;
    }
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid can round tiny negative inputs up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Angle of the pointer around a center, in `[0, 2π)`.
///
/// Measured from the positive x axis toward positive y (clockwise on a
/// y-down screen).
pub fn angle_from_pointer(pointer_x: f32, pointer_y: f32, center_x: f32, center_y: f32) -> f32 {
    normalize_angle((pointer_y - center_y).atan2(pointer_x - center_x))
}

/// Point at `theta` on a circle of `radius` centered at `(radius, radius)`.
///
/// This places a thumb inside the circle's square bounding box whose
/// top-left corner is the origin.
pub fn point_on_circle(theta: f32, radius: f32) -> Point {
    Point::new(radius + radius * theta.cos(), radius + radius * theta.sin())
}

/// Fraction along a track of `track_width`, clamped to `[0, 1]`.
///
/// A non-positive track width or NaN position yields 0.
pub fn fraction_from_pointer(pointer_x: f32, track_width: f32) -> f32 {
    if track_width <= 0.0 || track_width.is_nan() || pointer_x.is_nan() {
        return 0.0;
    }
    (pointer_x / track_width).clamp(0.0, 1.0)
}

/// Radians to degrees, wrapped into `[0, 360)`.
pub fn radians_to_degrees(theta: f32) -> f32 {
    crate::color::wrap_hue(normalize_angle(theta).to_degrees())
}

/// Degrees to radians, wrapped into `[0, 2π)`.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    normalize_angle(degrees.to_radians())
}
