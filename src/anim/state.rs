//! Animation State Definitions
//!
//! The live animation signals and the snapshot handed to renderers.

use serde::{Serialize, Deserialize};

use crate::core::phase::LoopPhase;
use crate::core::smoothing::{
    smooth_toward, pulse_target, float_oscillation, PULSE_SMOOTHING,
};
use crate::core::viewport::ViewportSize;

// =============================================================================
// ANIMATION STATE
// =============================================================================

/// Animation-driver signals for one mounted consumer.
///
/// Created on mount, advanced once per tick, dropped on unmount.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    /// Latest viewport reported by the host
    viewport: ViewportSize,
    /// Tracks the most recent loop phase sample
    time: f32,
    /// Raw loop signal from the last tick
    loop_phase: f32,
    /// Smoothed oscillation around 1.0
    pulse_value: f32,
    /// Oscillation in [0, 1], recomputed every tick
    float_value: f32,
    /// Ticks applied since initialization
    tick: u64,
}

impl AnimationState {
    /// Fresh state: `time = 0`, `pulse = 1`, `float = 0`.
    pub fn initialize(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            time: 0.0,
            loop_phase: 0.0,
            pulse_value: 1.0,
            float_value: 0.0,
            tick: 0,
        }
    }

    /// Advance the signals by one loop sample.
    ///
    /// Order matters: `time` and `float` are direct assignments, `pulse`
    /// blends from its previous value.
    pub fn apply_phase(&mut self, phase: LoopPhase) {
        let phase = phase.value();

        self.time = phase;
        self.loop_phase = phase;
        self.pulse_value = smooth_toward(self.pulse_value, pulse_target(phase), PULSE_SMOOTHING);
        self.float_value = float_oscillation(phase);
        self.tick += 1;
    }

    /// Replace the viewport after a host resize.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    /// Current viewport.
    #[inline]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Time driver value.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Last loop phase sample.
    #[inline]
    pub fn loop_phase(&self) -> f32 {
        self.loop_phase
    }

    /// Smoothed pulse value.
    #[inline]
    pub fn pulse_value(&self) -> f32 {
        self.pulse_value
    }

    /// Float value.
    #[inline]
    pub fn float_value(&self) -> f32 {
        self.float_value
    }

    /// Ticks applied so far.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Snapshot for subscribers.
    pub fn frame(&self) -> AnimationFrame {
        AnimationFrame {
            tick: self.tick,
            dimensions: self.viewport,
            time: self.time,
            loop_phase: self.loop_phase,
            pulse_value: self.pulse_value,
            float_value: self.float_value,
        }
    }
}

// =============================================================================
// FRAME SNAPSHOT
// =============================================================================

/// Immutable copy of the signals, published once per tick.
///
/// Field names serialize in camelCase for renderer-side consumers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationFrame {
    /// Tick that produced this frame (0 before the first tick)
    pub tick: u64,
    /// Viewport at the time of the tick
    pub dimensions: ViewportSize,
    /// Time driver value
    pub time: f32,
    /// Raw loop phase
    pub loop_phase: f32,
    /// Smoothed pulse value
    pub pulse_value: f32,
    /// Float value
    pub float_value: f32,
}
