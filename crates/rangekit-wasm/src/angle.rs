//! WASM bindings for angle unwrapping.
//!
//! All angles are in degrees.

use rangekit_core::angle::{signed_delta, unwrap, unwrap_sequence};
use wasm_bindgen::prelude::*;

/// Recompute `to` so it lies within 180° of `from`.
///
/// Interpolate from `from` to the returned value to rotate the short way.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const target = unwrap_angle(350, 10); // 370
/// const mid = 350 + (target - 350) * 0.5; // 360, not 180
/// ```
#[wasm_bindgen]
pub fn unwrap_angle(from: f32, to: f32) -> f32 {
    unwrap(from, to)
}

/// Shortest signed difference from `from` to `to`, in `(-180, 180]`.
#[wasm_bindgen]
pub fn signed_angle_delta(from: f32, to: f32) -> f32 {
    signed_delta(from, to)
}

/// Remove discontinuities from a sequence of angles.
///
/// The first angle is returned unchanged. Each following angle is unwrapped
/// against the raw angle before it, so corrections do not accumulate.
///
/// # Arguments
///
/// * `angles` - Angles in degrees (`Float32Array` on the JS side)
///
/// # Returns
///
/// A new `Float32Array` of the same length.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const keys = unwrap_angle_sequence(new Float32Array([350, 10, 370]));
/// // Float32Array [350, 370, 10]
/// ```
#[wasm_bindgen]
pub fn unwrap_angle_sequence(angles: &[f32]) -> Vec<f32> {
    unwrap_sequence(angles)
}
