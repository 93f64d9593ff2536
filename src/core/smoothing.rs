//! Signal Math
//!
//! One-pole smoothing and the oscillation formulas that drive the
//! pulse and float signals. Everything here is a pure function of its
//! arguments.

// =============================================================================
// TUNING CONSTANTS
// =============================================================================

/// Fraction of the remaining distance the pulse moves toward its target per tick.
pub const PULSE_SMOOTHING: f32 = 0.1;

/// Peak deviation of the pulse target from 1.0.
pub const PULSE_AMPLITUDE: f32 = 0.1;

/// Phase multiplier for the pulse target sine.
pub const PULSE_FREQUENCY: f32 = 2.0;

/// Phase multiplier for the float sine.
pub const FLOAT_FREQUENCY: f32 = 0.5;

/// Half the float range; also its midpoint.
pub const FLOAT_AMPLITUDE: f32 = 0.5;

// =============================================================================
// FILTER
// =============================================================================

/// Move `current` a fixed fraction of the way toward `target`.
///
/// For `factor` in `[0, 1]` the result always lies between `current`
/// and `target` (inclusive), so repeated application converges without
/// overshooting.
#[inline]
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

// =============================================================================
// OSCILLATORS
// =============================================================================

/// Target the pulse chases: `1 + 0.1 * sin(phase * 2)`.
#[inline]
pub fn pulse_target(phase: f32) -> f32 {
    1.0 + PULSE_AMPLITUDE * (phase * PULSE_FREQUENCY).sin()
}

/// Float oscillation: `0.5 * sin(phase * 0.5) + 0.5`, always in `[0, 1]`.
#[inline]
pub fn float_oscillation(phase: f32) -> f32 {
    FLOAT_AMPLITUDE * (phase * FLOAT_FREQUENCY).sin() + FLOAT_AMPLITUDE
}
