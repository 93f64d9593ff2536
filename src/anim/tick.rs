//! Animation Tick
//!
//! One step of the animation loop, plus replay of a recorded phase
//! sequence. Pure and synchronous; the host decides when to call it.

use crate::core::phase::LoopPhase;
use crate::core::viewport::ViewportSize;
use crate::anim::state::{AnimationState, AnimationFrame};

/// Result of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickResult {
    /// Tick number after this step
    pub tick: u64,
    /// Whether the loop restarted (phase went backwards)
    pub loop_wrapped: bool,
}

/// Run one animation tick.
///
/// # Arguments
///
/// * `state` - The animation state (will be mutated)
/// * `phase` - Loop phase sample for this tick
pub fn tick(state: &mut AnimationState, phase: LoopPhase) -> TickResult {
    let loop_wrapped = state.tick() > 0 && phase.value() < state.loop_phase();

    state.apply_phase(phase);

    TickResult {
        tick: state.tick(),
        loop_wrapped,
    }
}

/// Replay a recorded phase sequence from a fresh state.
///
/// Returns the final state and one frame per phase.
pub fn replay(
    viewport: ViewportSize,
    phases: &[LoopPhase],
) -> (AnimationState, Vec<AnimationFrame>) {
    let mut state = AnimationState::initialize(viewport);
    let mut frames = Vec::with_capacity(phases.len());

    for phase in phases {
        tick(&mut state, *phase);
        frames.push(state.frame());
    }

    (state, frames)
}
