//! Loop Signal
//!
//! The repeating phase source that drives animation ticks. It is passed
//! into the driver rather than read from global state, so the signal math
//! can be exercised with any phase sequence.

use std::f32::consts::PI;
use std::time::Duration;
use serde::{Serialize, Deserialize};

/// Default loop period in seconds (4π).
///
/// Both oscillators complete whole cycles over this period
/// (`sin(2φ)` four, `sin(φ/2)` one), so wrapping is seamless.
pub const DEFAULT_LOOP_PERIOD: f32 = 4.0 * PI;

/// A single sample of the loop signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LoopPhase(pub f32);

impl LoopPhase {
    /// Phase at the start of a loop.
    pub const ZERO: LoopPhase = LoopPhase(0.0);

    /// Raw phase value.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for LoopPhase {
    fn from(value: f32) -> Self {
        LoopPhase(value)
    }
}

/// Source of loop phase samples.
///
/// `elapsed` is host time since the driver started. Sources are free to
/// ignore it.
pub trait PhaseSource: Send {
    /// Produce the phase for the tick at `elapsed`.
    fn sample(&mut self, elapsed: Duration) -> LoopPhase;

    /// Loop period, if the source repeats.
    fn period(&self) -> Option<f32> {
        None
    }
}

// =============================================================================
// REPEATING LOOP
// =============================================================================

/// Wall-clock loop: `phase = elapsed_secs mod period`.
#[derive(Clone, Debug)]
pub struct RepeatingLoop {
    period: f32,
}

impl RepeatingLoop {
    /// Create a loop with the given period in seconds.
    ///
    /// The period must be positive and finite; `DriverConfig::validate`
    /// checks this for configured loops.
    pub fn new(period: f32) -> Self {
        debug_assert!(
            period.is_finite() && period > 0.0,
            "loop period must be positive and finite, got {}",
            period
        );
        Self { period }
    }

    /// Phase at a given elapsed time.
    pub fn phase_at(&self, elapsed: Duration) -> LoopPhase {
        let phase = (elapsed.as_secs_f64() % self.period as f64) as f32;
        // f64 -> f32 rounding can land exactly on the period
        if phase >= self.period {
            LoopPhase::ZERO
        } else {
            LoopPhase(phase)
        }
    }
}

impl Default for RepeatingLoop {
    fn default() -> Self {
        Self::new(DEFAULT_LOOP_PERIOD)
    }
}

impl PhaseSource for RepeatingLoop {
    fn sample(&mut self, elapsed: Duration) -> LoopPhase {
        self.phase_at(elapsed)
    }

    fn period(&self) -> Option<f32> {
        Some(self.period)
    }
}

// =============================================================================
// FROZEN / SCRIPTED
// =============================================================================

/// A loop that has stopped: every sample is the same.
#[derive(Clone, Copy, Debug)]
pub struct FrozenPhase(pub LoopPhase);

impl PhaseSource for FrozenPhase {
    fn sample(&mut self, _elapsed: Duration) -> LoopPhase {
        self.0
    }
}

/// Plays back a recorded phase sequence, then holds the last sample.
#[derive(Clone, Debug)]
pub struct ScriptedPhase {
    phases: Vec<LoopPhase>,
    cursor: usize,
}

impl ScriptedPhase {
    /// Create from a sequence of samples.
    pub fn new(phases: Vec<LoopPhase>) -> Self {
        Self { phases, cursor: 0 }
    }

    /// Samples not yet played.
    pub fn remaining(&self) -> usize {
        self.phases.len().saturating_sub(self.cursor)
    }
}

impl PhaseSource for ScriptedPhase {
    fn sample(&mut self, _elapsed: Duration) -> LoopPhase {
        match self.phases.get(self.cursor) {
            Some(phase) => {
                self.cursor += 1;
                *phase
            }
            None => self.phases.last().copied().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_repeating_loop_wraps() {
        let mut source = RepeatingLoop::new(2.0);
        assert_eq!(source.sample(Duration::ZERO), LoopPhase(0.0));
        assert_eq!(source.sample(Duration::from_millis(500)), LoopPhase(0.5));
        assert_eq!(source.sample(Duration::from_millis(2500)), LoopPhase(0.5));
        assert_eq!(source.period(), Some(2.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "loop period must be positive and finite")]
    fn test_zero_period_rejected() {
        RepeatingLoop::new(0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "loop period must be positive and finite")]
    fn test_nan_period_rejected() {
        RepeatingLoop::new(f32::NAN);
    }

    #[test]
    fn test_frozen_phase_constant() {
        let mut source = FrozenPhase(LoopPhase(1.25));
        for secs in 0..5 {
            assert_eq!(source.sample(Duration::from_secs(secs)), LoopPhase(1.25));
        }
        assert_eq!(source.period(), None);
    }

    #[test]
    fn test_scripted_phase_holds_last() {
        let mut source = ScriptedPhase::new(vec![LoopPhase(0.1), LoopPhase(0.2)]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.sample(Duration::ZERO), LoopPhase(0.1));
        assert_eq!(source.sample(Duration::ZERO), LoopPhase(0.2));
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.sample(Duration::ZERO), LoopPhase(0.2));
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut source = ScriptedPhase::new(Vec::new());
        assert_eq!(source.sample(Duration::from_secs(3)), LoopPhase::ZERO);
    }

    proptest! {
        #[test]
        fn prop_repeating_loop_in_range(millis in 0u64..10_000_000, period in 0.01f32..100.0) {
            let source = RepeatingLoop::new(period);
            let phase = source.phase_at(Duration::from_millis(millis)).value();
            prop_assert!(phase >= 0.0 && phase < period);
        }
    }
}
