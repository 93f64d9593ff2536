//! Host Binding
//!
//! Async frame loop connecting the animation state to a host environment.
//! The host pushes resize/shutdown messages in; frames are broadcast out.
//!
//! ## Module Structure
//!
//! - `config`: Driver configuration and validation
//! - `protocol`: Host messages and exit summary
//! - `driver`: Frame loop and host-side handle

pub mod config;
pub mod protocol;
pub mod driver;

pub use config::{DriverConfig, ConfigError};
pub use protocol::{HostMessage, ExitReason, DriverExit};
pub use driver::{AnimationDriver, DriverHandle, DriverError};
