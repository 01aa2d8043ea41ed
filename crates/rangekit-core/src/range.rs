//! Linear, unclamped range remapping.
//!
//! A value is mapped from an input interval to an output interval with
//!
//! ```text
//! ((value - min) / (max - min)) * (new_max - new_min) + new_min
//! ```
//!
//! No clamping is performed: values outside the input interval extrapolate
//! proportionally outside the output interval. Either interval may be
//! reversed (`min > max`), which simply inverts the mapping direction.
//!
//! A degenerate input interval (`min == max`) divides by zero. The result is
//! whatever IEEE-754 says (infinity or NaN) and is returned to the caller
//! as-is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building an [`Interval`] from untyped data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// The source did not hold exactly two components.
    #[error("Interval needs exactly 2 components, got {0}")]
    WrongLength(usize),
}

/// An ordered `(min, max)` pair describing an input or output range.
///
/// `min` is not required to be smaller than `max`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Interval {
    /// Start of the range
    pub min: f32,
    /// End of the range
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Signed width of the interval (`max - min`).
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Check if both bounds are equal, which makes any mapping through
    /// this interval undefined.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// The same interval with its bounds swapped.
    pub fn reversed(&self) -> Self {
        Self {
            min: self.max,
            max: self.min,
        }
    }
}

impl From<(f32, f32)> for Interval {
    fn from((min, max): (f32, f32)) -> Self {
        Self { min, max }
    }
}

impl From<[f32; 2]> for Interval {
    fn from([min, max]: [f32; 2]) -> Self {
        Self { min, max }
    }
}

impl TryFrom<&[f32]> for Interval {
    type Error = IntervalError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        match *values {
            [min, max] => Ok(Self { min, max }),
            _ => Err(IntervalError::WrongLength(values.len())),
        }
    }
}

/// Transform a value from one range to another. Unclamped.
///
/// # Arguments
/// * `value` - Input value, nominally between `min` and `max`
/// * `min` - Start of the input range
/// * `max` - End of the input range
/// * `new_min` - Start of the output range
/// * `new_max` - End of the output range
///
/// # Returns
/// The value mapped into the output range. Non-finite when `min == max`.
#[inline]
#[must_use]
pub fn transform(value: f32, min: f32, max: f32, new_min: f32, new_max: f32) -> f32 {
    ((value - min) / (max - min)) * (new_max - new_min) + new_min
}

/// Transform a value between two [`Interval`]s. Unclamped.
///
/// Produces exactly the same bits as [`transform`] called with the
/// unpacked bounds.
#[inline]
#[must_use]
pub fn transform_interval(value: f32, input: Interval, output: Interval) -> f32 {
    transform(value, input.min, input.max, output.min, output.max)
}
