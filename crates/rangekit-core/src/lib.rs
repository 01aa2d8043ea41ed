//! Rangekit Core - Range remapping and angle unwrapping
//!
//! This crate provides small, pure numeric helpers for interpolation code:
//! unclamped linear remapping between intervals, and removal of the
//! 0°/360° discontinuity when interpolating rotations.
//!
//! Every function is stateless and total over `f32`. Degenerate input and
//! NaN produce IEEE-754 results rather than errors.

pub mod angle;
pub mod range;

pub use angle::{signed_delta, unwrap, unwrap_sequence};
pub use range::{transform, transform_interval, Interval, IntervalError};
