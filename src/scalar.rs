//! Scalar helpers shared by the vector, matrix and quaternion modules.

/// Tolerance used by every `equals` comparison in this crate.
pub const EPSILON: f32 = 0.000001;

/// Degrees to radians.
pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;

/// Radians to degrees.
pub const RAD2DEG: f32 = 180.0 / std::f32::consts::PI;

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics when `min > max`; the upper bound wins.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    let result = if value < min { min } else { value };
    if result > max { max } else { result }
}

/// Linear interpolation between `start` and `end`.
#[inline]
pub fn lerp(start: f32, end: f32, amount: f32) -> f32 {
    start + amount * (end - start)
}

/// Map `value` from `[start, end]` into `[0, 1]`.
#[inline]
pub fn normalize(value: f32, start: f32, end: f32) -> f32 {
    (value - start) / (end - start)
}

/// Map `value` from one range into another.
#[inline]
pub fn remap(value: f32, input_start: f32, input_end: f32, output_start: f32, output_end: f32) -> f32 {
    (value - input_start) / (input_end - input_start) * (output_end - output_start) + output_start
}

/// Wrap `value` into `[min, max)`.
#[inline]
pub fn wrap(value: f32, min: f32, max: f32) -> f32 {
    value - (max - min) * ((value - min) / (max - min)).floor()
}

/// Approximate equality, scaled by the magnitude of the operands.
#[inline]
pub fn float_equals(x: f32, y: f32) -> bool {
    (x - y).abs() <= EPSILON * 1.0f32.max(x.abs().max(y.abs()))
}
