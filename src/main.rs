//! Cosmic Miner Animation Driver
//!
//! Runs the animation loop headless, logs the signals, then replays the
//! recorded phases to verify the frames are deterministic.
//!
//! Usage: `cosmic-miner-anim [config.json] [frames]`

use anyhow::{Context, Result};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cosmic_miner::{
    VERSION,
    AnimationDriver, AnimationFrame, DriverConfig, LoopPhase, RepeatingLoop,
    anim::replay,
    core::hash::compute_frames_hash,
};

/// Frames to run when neither the config nor the command line sets a limit.
const DEFAULT_DEMO_FRAMES: u64 = 240;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Cosmic Miner animation core v{}", VERSION);

    let mut args = std::env::args().skip(1);
    let mut config = match args.next() {
        Some(path) => DriverConfig::load(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => DriverConfig::default(),
    };
    if let Some(frames) = args.next() {
        let frames: u64 = frames
            .parse()
            .with_context(|| format!("invalid frame count: {}", frames))?;
        config.max_frames = Some(frames);
    }
    if config.max_frames.is_none() {
        config.max_frames = Some(DEFAULT_DEMO_FRAMES);
    }

    info!(
        "Frame rate: {} Hz, loop period: {:.3}s, viewport: {}x{}",
        config.frame_rate,
        config.loop_period_secs,
        config.initial_viewport.width,
        config.initial_viewport.height
    );

    run_demo(config).await
}

/// Drive the loop, record every frame, then verify by replay.
async fn run_demo(config: DriverConfig) -> Result<()> {
    let viewport = config.initial_viewport;
    let report_every = config.frame_rate.max(1) as u64;
    let source = RepeatingLoop::new(config.loop_period_secs);

    let (driver, handle) = AnimationDriver::new(config, source)
        .context("creating animation driver")?;
    let mut rx = handle.subscribe();

    let recorder = tokio::spawn(async move {
        let mut frames: Vec<AnimationFrame> = Vec::new();
        let mut lagged = false;
        loop {
            match rx.recv().await {
                Ok(frame) => {
                    if frame.tick % report_every == 0 {
                        info!(
                            "Tick {}: time={:.3} pulse={:.4} float={:.4}",
                            frame.tick, frame.time, frame.pulse_value, frame.float_value
                        );
                    }
                    frames.push(frame);
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Recorder lagged, {} frames skipped", skipped);
                    lagged = true;
                }
                Err(RecvError::Closed) => break,
            }
        }
        (frames, lagged)
    });

    let exit = driver.run().await;
    // Last sender goes away here, which ends the recorder
    drop(handle);

    info!(
        "Driver exited: {:?}, {} frames, {} loops",
        exit.reason, exit.frames, exit.loops
    );
    info!(
        "Final: pulse={:.4} float={:.4}",
        exit.last_frame.pulse_value, exit.last_frame.float_value
    );

    let (frames, lagged) = recorder.await.context("recorder task failed")?;
    if lagged {
        warn!("Skipping replay verification: recording is incomplete");
        return Ok(());
    }

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let live_hash = compute_frames_hash(&frames);
    info!("Live frames hash:   {}", hex::encode(live_hash));

    let phases: Vec<LoopPhase> = frames.iter().map(|f| LoopPhase(f.loop_phase)).collect();
    let (_, replayed) = replay(viewport, &phases);
    let replay_hash = compute_frames_hash(&replayed);
    info!("Replay frames hash: {}", hex::encode(replay_hash));

    if live_hash == replay_hash {
        info!("DETERMINISM VERIFIED: Hashes match!");
    } else {
        warn!("DETERMINISM FAILURE: Hashes differ!");
    }

    Ok(())
}
