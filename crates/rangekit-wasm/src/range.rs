//! WASM bindings for range remapping.
//!
//! Three call shapes are offered to JavaScript: four scalar bounds,
//! `{ min, max }` interval objects, and two-element `Float32Array` pairs.
//! All of them produce identical results for identical bounds.

use rangekit_core::range::{transform, transform_interval as core_transform_interval, Interval};
use wasm_bindgen::prelude::*;

/// Transform a value from one range to another. Unclamped.
///
/// Reversed ranges are allowed. A zero-width input range returns
/// `Infinity` or `NaN`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const opacity = transform_range(scrollY, 0, 400, 1, 0);
/// ```
#[wasm_bindgen]
pub fn transform_range(value: f32, min: f32, max: f32, new_min: f32, new_max: f32) -> f32 {
    transform(value, min, max, new_min, new_max)
}

/// Transform a value between two interval objects. Unclamped.
///
/// # Arguments
///
/// * `value` - Value to remap
/// * `input` - `{ min: number, max: number }` input range
/// * `output` - `{ min: number, max: number }` output range
///
/// # Errors
///
/// Returns an error if either interval cannot be deserialized.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const x = transform_interval(0.5, { min: 0, max: 1 }, { min: 100, max: 200 });
/// ```
#[wasm_bindgen]
pub fn transform_interval(value: f32, input: JsValue, output: JsValue) -> Result<f32, JsValue> {
    let input: Interval = serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("Invalid input interval: {}", e)))?;
    let output: Interval = serde_wasm_bindgen::from_value(output)
        .map_err(|e| JsValue::from_str(&format!("Invalid output interval: {}", e)))?;

    Ok(core_transform_interval(value, input, output))
}

/// Transform a value between two `[min, max]` pairs. Unclamped.
///
/// # Errors
///
/// Returns an error if either pair does not hold exactly two numbers.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const x = transform_pair(5, new Float32Array([0, 10]), new Float32Array([0, 1]));
/// ```
#[wasm_bindgen]
pub fn transform_pair(value: f32, input: &[f32], output: &[f32]) -> Result<f32, JsValue> {
    let input = Interval::try_from(input)
        .map_err(|e| JsValue::from_str(&format!("Invalid input range: {}", e)))?;
    let output = Interval::try_from(output)
        .map_err(|e| JsValue::from_str(&format!("Invalid output range: {}", e)))?;

    Ok(core_transform_interval(value, input, output))
}
