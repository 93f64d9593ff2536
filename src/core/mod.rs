//! Core primitives.
//!
//! Signal math, the loop phase source, viewport dimensions and frame
//! hashing. Nothing in here touches the async runtime.

pub mod smoothing;
pub mod phase;
pub mod viewport;
pub mod hash;

// Re-export core types
pub use smoothing::{smooth_toward, pulse_target, float_oscillation};
pub use phase::{LoopPhase, PhaseSource, RepeatingLoop, FrozenPhase, ScriptedPhase};
pub use viewport::ViewportSize;
pub use hash::{FrameHash, FrameHasher, compute_frames_hash};
