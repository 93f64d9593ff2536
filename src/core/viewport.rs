//! Viewport dimensions reported by the host.

use serde::{Serialize, Deserialize};

/// Width and height of the host viewport in logical pixels.
///
/// Owned by the host; the animation state only keeps the latest copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    /// Width in logical pixels
    pub width: f32,
    /// Height in logical pixels
    pub height: f32,
}

impl ViewportSize {
    /// Create from width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, or 0 for a degenerate viewport.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0.0 {
            0.0
        } else {
            self.width / self.height
        }
    }
}
