//! Host Protocol
//!
//! Messages flowing between the host environment and the animation driver.

use serde::{Serialize, Deserialize};

use crate::anim::state::AnimationFrame;
use crate::core::viewport::ViewportSize;

/// Host → driver control messages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// Viewport changed size.
    Resize(ViewportSize),
    /// Stop the frame loop.
    Shutdown,
}

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    /// Host sent `Shutdown`.
    Shutdown,
    /// Every driver handle was dropped.
    HandlesDropped,
    /// Last frame subscriber went away.
    Unmounted,
    /// Configured frame limit reached.
    FrameLimit,
}

/// Summary returned when the frame loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverExit {
    /// Why the loop stopped
    pub reason: ExitReason,
    /// Frames published
    pub frames: u64,
    /// Completed loop cycles
    pub loops: u64,
    /// State at exit
    pub last_frame: AnimationFrame,
}
