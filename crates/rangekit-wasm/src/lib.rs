//! Rangekit WASM - WebAssembly bindings for Rangekit
//!
//! This crate exposes the rangekit-core helpers to JavaScript/TypeScript
//! animation and UI code.
//!
//! # Module Structure
//!
//! - `range` - Unclamped range remapping (scalar bounds, interval objects, pairs)
//! - `angle` - Angle unwrapping for single pairs and whole sequences
//!
//! # Usage
//!
//! ```typescript
//! import init, { transform_range, unwrap_angle } from '@rangekit/wasm';
//!
//! await init();
//!
//! const opacity = transform_range(scrollY, 0, 400, 1, 0);
//! const target = unwrap_angle(350, 10); // 370
//! ```

use wasm_bindgen::prelude::*;

mod angle;
mod range;

pub use angle::{signed_angle_delta, unwrap_angle, unwrap_angle_sequence};
pub use range::{transform_interval, transform_pair, transform_range};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up; rangekit has no global state
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
