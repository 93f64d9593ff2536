//! Frame Hashing for Replay Verification
//!
//! Hashes animation frames by the exact bits of their float fields so two
//! runs over the same phase sequence can be compared byte for byte.

use sha2::{Sha256, Digest};

use super::viewport::ViewportSize;
use crate::anim::state::AnimationFrame;

/// Hash output type (256 bits / 32 bytes)
pub type FrameHash = [u8; 32];

/// Deterministic hasher for frame sequences.
///
/// Order of updates is critical for determinism.
pub struct FrameHasher {
    hasher: Sha256,
}

impl FrameHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for a frame sequence.
    pub fn for_frames() -> Self {
        Self::new(b"COSMIC_MINER_FRAMES_V1")
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f32 value (little-endian bit pattern).
    #[inline]
    pub fn update_f32(&mut self, value: f32) {
        self.hasher.update(value.to_bits().to_le_bytes());
    }

    /// Update with a viewport.
    #[inline]
    pub fn update_viewport(&mut self, viewport: ViewportSize) {
        self.update_f32(viewport.width);
        self.update_f32(viewport.height);
    }

    /// Update with every field of a frame.
    pub fn update_frame(&mut self, frame: &AnimationFrame) {
        self.update_u64(frame.tick);
        self.update_viewport(frame.dimensions);
        self.update_f32(frame.time);
        self.update_f32(frame.loop_phase);
        self.update_f32(frame.pulse_value);
        self.update_f32(frame.float_value);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> FrameHash {
        self.hasher.finalize().into()
    }
}

/// Hash a sequence of frames, prefixed with its length.
pub fn compute_frames_hash(frames: &[AnimationFrame]) -> FrameHash {
    let mut hasher = FrameHasher::for_frames();
    hasher.update_u64(frames.len() as u64);
    for frame in frames {
        hasher.update_frame(frame);
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::state::AnimationState;
    use crate::core::phase::LoopPhase;

    fn frames(phases: &[f32]) -> Vec<AnimationFrame> {
        let mut state = AnimationState::initialize(ViewportSize::new(390.0, 844.0));
        phases
            .iter()
            .map(|p| {
                state.apply_phase(LoopPhase(*p));
                state.frame()
            })
            .collect()
    }

    #[test]
    fn test_hash_deterministic() {
        let a = compute_frames_hash(&frames(&[0.0, 0.5, 1.0]));
        let b = compute_frames_hash(&frames(&[0.0, 0.5, 1.0]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_sensitive_to_phase() {
        let a = compute_frames_hash(&frames(&[0.0, 0.5, 1.0]));
        let b = compute_frames_hash(&frames(&[0.0, 0.5, 1.01]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_domain_separation() {
        let a = FrameHasher::new(b"A").finalize();
        let b = FrameHasher::new(b"B").finalize();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_sequence_differs_from_single_frame() {
        let empty = compute_frames_hash(&[]);
        let single = compute_frames_hash(&frames(&[0.0]));
        assert_ne!(empty, single);
    }
}
