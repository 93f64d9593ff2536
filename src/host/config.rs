//! Driver Configuration
//!
//! Frame rate, loop period, initial viewport and stop conditions for the
//! host frame loop. Loadable from a (possibly partial) JSON file.

use std::path::Path;
use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::core::phase::DEFAULT_LOOP_PERIOD;
use crate::core::viewport::ViewportSize;

/// Highest frame rate with a non-zero microsecond frame interval.
pub const MAX_FRAME_RATE: u32 = 1_000_000;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Host frame loop configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Ticks per second (Hz).
    pub frame_rate: u32,
    /// Loop period in seconds.
    pub loop_period_secs: f32,
    /// Viewport before the first resize event.
    pub initial_viewport: ViewportSize,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
    /// Frames buffered per subscriber before old ones are dropped.
    pub frame_channel_capacity: usize,
    /// Stop once the last frame subscriber goes away.
    pub stop_when_unsubscribed: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            loop_period_secs: DEFAULT_LOOP_PERIOD,
            initial_viewport: ViewportSize::new(390.0, 844.0),
            max_frames: None,
            frame_channel_capacity: 16,
            stop_when_unsubscribed: false,
        }
    }
}

impl DriverConfig {
    /// Load from a JSON file and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: DriverConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be positive".into()));
        }
        if self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::Invalid(format!(
                "frame_rate must be at most {} Hz, got {}",
                MAX_FRAME_RATE, self.frame_rate
            )));
        }
        if !self.loop_period_secs.is_finite() || self.loop_period_secs <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "loop_period_secs must be positive and finite, got {}",
                self.loop_period_secs
            )));
        }
        if self.frame_channel_capacity == 0 {
            return Err(ConfigError::Invalid("frame_channel_capacity must be positive".into()));
        }
        Ok(())
    }

    /// Interval between ticks.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.frame_rate.max(1) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DriverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_duration(), Duration::from_micros(16_666));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DriverConfig::from_json(r#"{ "frame_rate": 30, "max_frames": 90 }"#).unwrap();
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.max_frames, Some(90));
        assert_eq!(config.loop_period_secs, DEFAULT_LOOP_PERIOD);
        assert_eq!(config.initial_viewport, ViewportSize::new(390.0, 844.0));
    }

    #[test]
    fn test_viewport_from_json() {
        let config = DriverConfig::from_json(
            r#"{ "initial_viewport": { "width": 1280.0, "height": 720.0 } }"#,
        ).unwrap();
        assert_eq!(config.initial_viewport, ViewportSize::new(1280.0, 720.0));
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let result = DriverConfig::from_json(r#"{ "frame_rate": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_frame_rate_above_microsecond_resolution_rejected() {
        let result = DriverConfig::from_json(r#"{ "frame_rate": 2000000 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let config = DriverConfig {
            frame_rate: MAX_FRAME_RATE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_duration(), Duration::from_micros(1));
    }

    #[test]
    fn test_bad_period_rejected() {
        let config = DriverConfig {
            loop_period_secs: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = DriverConfig {
            loop_period_secs: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = DriverConfig {
            frame_channel_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = DriverConfig::from_json("{ frame_rate: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = DriverConfig::load("/nonexistent/cosmic-miner.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
