//! Animation Module
//!
//! The animation state and its per-tick update. Synchronous and
//! deterministic for a given phase sequence.
//!
//! ## Module Structure
//!
//! - `state`: Animation signals and the published frame snapshot
//! - `tick`: Single-step update and replay

pub mod state;
pub mod tick;

// Re-export key types
pub use state::{AnimationState, AnimationFrame};
pub use tick::{tick, replay, TickResult};
