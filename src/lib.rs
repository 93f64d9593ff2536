//! # Cosmic Miner Animation Core
//!
//! Tick-driven animation signals (time, pulse, float) for the Cosmic Miner
//! game UI, driven by an injected loop signal and published to renderers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 COSMIC MINER ANIMATION CORE                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Pure primitives                           │
//! │  ├── smoothing.rs- One-pole filter and oscillators           │
//! │  ├── phase.rs    - Loop phase sources                        │
//! │  ├── viewport.rs - Host viewport dimensions                  │
//! │  └── hash.rs     - Frame hashing for replay checks           │
//! │                                                              │
//! │  anim/           - Animation state (synchronous)             │
//! │  ├── state.rs    - Signals and frame snapshot                │
//! │  └── tick.rs     - Per-tick update and replay                │
//! │                                                              │
//! │  host/           - Host binding (async)                      │
//! │  ├── config.rs   - Driver configuration                      │
//! │  ├── protocol.rs - Host messages                             │
//! │  └── driver.rs   - Frame loop and subscriptions              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Per-Tick Update
//!
//! ```text
//! time  <- phase
//! pulse <- pulse + (1 + 0.1 sin(2 phase) - pulse) * 0.1
//! float <- 0.5 sin(0.5 phase) + 0.5
//! ```
//!
//! Given the same phase sequence and initial viewport, `anim::replay`
//! produces bit-identical frames.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod anim;
pub mod host;

// Re-export commonly used types
pub use crate::core::phase::{LoopPhase, PhaseSource, RepeatingLoop, DEFAULT_LOOP_PERIOD};
pub use crate::core::viewport::ViewportSize;
pub use crate::anim::state::{AnimationState, AnimationFrame};
pub use crate::host::{AnimationDriver, DriverConfig, DriverHandle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
