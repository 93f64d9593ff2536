//! Animation Driver
//!
//! Host frame loop. Owns the animation state and the loop signal, ticks on
//! a fixed interval and broadcasts each frame to subscribers. Resize and
//! shutdown arrive over a control channel and are applied between ticks.

use tokio::sync::{mpsc, broadcast};
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{info, debug, instrument};
#[cfg(feature = "frame-tracing")]
use tracing::trace;

use crate::anim::state::{AnimationState, AnimationFrame};
use crate::anim::tick::tick;
use crate::core::phase::PhaseSource;
use crate::core::viewport::ViewportSize;
use crate::host::config::{DriverConfig, ConfigError};
use crate::host::protocol::{HostMessage, ExitReason, DriverExit};

/// Control messages buffered before `resize`/`shutdown` wait.
const CONTROL_CHANNEL_CAPACITY: usize = 32;

/// Driver errors.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Configuration rejected.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Driver has already exited.
    #[error("Driver channel closed")]
    ChannelClosed,
}

// =============================================================================
// HANDLE
// =============================================================================

/// Host-side handle to a running driver.
///
/// Cloneable. The driver stops once every handle is dropped.
#[derive(Clone, Debug)]
pub struct DriverHandle {
    control_tx: mpsc::Sender<HostMessage>,
    frames_tx: broadcast::Sender<AnimationFrame>,
}

impl DriverHandle {
    /// Subscribe to published frames (mount).
    ///
    /// Dropping the receiver unsubscribes (unmount).
    pub fn subscribe(&self) -> broadcast::Receiver<AnimationFrame> {
        self.frames_tx.subscribe()
    }

    /// Number of live frame subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.frames_tx.receiver_count()
    }

    /// Report a new viewport size.
    pub async fn resize(&self, viewport: ViewportSize) -> Result<(), DriverError> {
        self.send(HostMessage::Resize(viewport)).await
    }

    /// Ask the driver to stop after the current tick.
    pub async fn shutdown(&self) -> Result<(), DriverError> {
        self.send(HostMessage::Shutdown).await
    }

    async fn send(&self, message: HostMessage) -> Result<(), DriverError> {
        self.control_tx
            .send(message)
            .await
            .map_err(|_| DriverError::ChannelClosed)
    }
}

// =============================================================================
// DRIVER
// =============================================================================

/// The frame loop for one animation state.
pub struct AnimationDriver<S: PhaseSource> {
    config: DriverConfig,
    source: S,
    state: AnimationState,
    frames_tx: broadcast::Sender<AnimationFrame>,
    control_rx: mpsc::Receiver<HostMessage>,
}

impl<S: PhaseSource> AnimationDriver<S> {
    /// Create a driver and its handle. The loop does not start until `run`.
    pub fn new(config: DriverConfig, source: S) -> Result<(Self, DriverHandle), DriverError> {
        config.validate()?;

        let (control_tx, control_rx) = mpsc::channel(CONTROL_CHANNEL_CAPACITY);
        let (frames_tx, _) = broadcast::channel(config.frame_channel_capacity);
        let state = AnimationState::initialize(config.initial_viewport);

        let handle = DriverHandle {
            control_tx,
            frames_tx: frames_tx.clone(),
        };

        let driver = Self {
            config,
            source,
            state,
            frames_tx,
            control_rx,
        };

        Ok((driver, handle))
    }

    /// Current state (before `run`, or for inspection in tests).
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Run the frame loop until a stop condition is met.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> DriverExit {
        let frame_duration = self.config.frame_duration();
        let mut tick_interval = interval(frame_duration);
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Animation driver started: {} Hz, loop period {:?}",
            self.config.frame_rate,
            self.source.period()
        );

        let start = Instant::now();
        let mut frames = 0u64;
        let mut loops = 0u64;
        let mut seen_subscriber = false;

        let reason = loop {
            tokio::select! {
                biased;

                message = self.control_rx.recv() => match message {
                    Some(HostMessage::Resize(viewport)) => {
                        debug!(
                            "Viewport resized to {}x{} (aspect {:.3})",
                            viewport.width,
                            viewport.height,
                            viewport.aspect_ratio()
                        );
                        self.state.set_viewport(viewport);
                    }
                    Some(HostMessage::Shutdown) => break ExitReason::Shutdown,
                    None => break ExitReason::HandlesDropped,
                },

                _ = tick_interval.tick() => {
                    let subscribers = self.frames_tx.receiver_count();
                    if subscribers > 0 {
                        seen_subscriber = true;
                    } else if seen_subscriber && self.config.stop_when_unsubscribed {
                        break ExitReason::Unmounted;
                    }

                    let phase = self.source.sample(start.elapsed());
                    let result = tick(&mut self.state, phase);
                    if result.loop_wrapped {
                        loops += 1;
                        debug!("Loop wrapped at tick {} ({} loops)", result.tick, loops);
                    }

                    #[cfg(feature = "frame-tracing")]
                    trace!(
                        "tick {}: phase={:.4} pulse={:.4} float={:.4}",
                        result.tick,
                        self.state.loop_phase(),
                        self.state.pulse_value(),
                        self.state.float_value()
                    );

                    // No receivers is not an error; the frame is just dropped
                    let _ = self.frames_tx.send(self.state.frame());
                    frames += 1;

                    if self.config.max_frames.is_some_and(|max| frames >= max) {
                        break ExitReason::FrameLimit;
                    }
                }
            }
        };

        info!("Animation driver stopped ({:?}) after {} frames", reason, frames);

        DriverExit {
            reason,
            frames,
            loops,
            last_frame: self.state.frame(),
        }
    }
}

impl<S: PhaseSource + 'static> AnimationDriver<S> {
    /// Create a driver and run it on a new tokio task.
    pub fn spawn(
        config: DriverConfig,
        source: S,
    ) -> Result<(DriverHandle, JoinHandle<DriverExit>), DriverError> {
        let (driver, handle) = Self::new(config, source)?;
        Ok((handle, tokio::spawn(driver.run())))
    }
}
