//! Removal of the ±360° discontinuity between angles expressed in degrees.
//!
//! Interpolating naively from 350° to 10° sweeps 340° the long way round.
//! [`unwrap`] rewrites the target as `370°` so that a linear interpolation
//! from the start takes the shortest path (+20°). Results are not bounded to
//! `[0, 360)`; only the relationship to the starting angle matters.

/// Degrees in a full turn.
pub const FULL_TURN: f32 = 360.0;

/// Degrees in a half turn.
pub const HALF_TURN: f32 = 180.0;

/// Shortest signed difference from `from` to `to`, in degrees.
///
/// The result lies in `(-180, 180]` and `from + signed_delta(from, to)` is
/// congruent to `to` modulo 360.
#[inline]
#[must_use]
pub fn signed_delta(from: f32, to: f32) -> f32 {
    // rem_euclid can round up to exactly FULL_TURN for tiny negative inputs,
    // which the subtraction below folds back to 0.
    let delta = (to - from).rem_euclid(FULL_TURN);
    if delta > HALF_TURN {
        delta - FULL_TURN
    } else {
        delta
    }
}

/// Recompute `to` relative to `from` so the two are at most 180° apart.
///
/// # Arguments
/// * `from` - Starting angle in degrees
/// * `to` - Target angle in degrees
///
/// # Returns
/// An angle congruent to `to` (mod 360) within 180° of `from`.
#[inline]
#[must_use]
pub fn unwrap(from: f32, to: f32) -> f32 {
    from + signed_delta(from, to)
}

/// Remove discontinuities from a sequence of angles.
///
/// The first angle is copied through unchanged. Every following angle is
/// unwrapped against the *original* angle before it, not against the
/// already-unwrapped one:
///
/// ```text
/// output[0] = angles[0]
/// output[i] = unwrap(angles[i - 1], angles[i])
/// ```
///
/// Each adjacent pair is therefore made continuous on its own, but
/// corrections do not accumulate. A sequence that winds through several
/// full turns is not unwrapped globally.
#[must_use]
pub fn unwrap_sequence(angles: &[f32]) -> Vec<f32> {
    let mut unwrapped = Vec::with_capacity(angles.len());
    if let Some(&first) = angles.first() {
        unwrapped.push(first);
    }
    unwrapped.extend(angles.windows(2).map(|pair| unwrap(pair[0], pair[1])));
    unwrapped
}
