//! Channel clamping helpers.
//!
//! Intermediate arithmetic (error diffusion, kernel sums, averages) runs in
//! wider signed or floating types; these helpers bring the result back into
//! a valid channel value.

/// Clamp an integer channel value into `0..=255`.
#[inline]
pub fn clamp255(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamp a fractional quantity into `0.0..=1.0`.
///
/// NaN collapses to `0.0`.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Convert a filtered channel sum to a channel value.
///
/// Takes the magnitude, rounds to the nearest integer, then clamps.
/// Negative kernel responses (edge kernels) map to their absolute value.
/// A uniform region stays uniform under any kernel whose weights sum to one.
#[inline]
pub fn abs255(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    clamp255(value.abs().round() as i64)
}
