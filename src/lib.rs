//! `poseflow` - Guided pose timer
//!
//! Walks an ordered per-day plan of timed exercise poses, alternating pose
//! and transition phases with a countdown dial, optional still images per
//! pose and an audio cue per completed pose. A single background worker
//! thread drives the countdown and reports to the GUI over a channel.
//!
//! # Architecture
//!
//! - [`plan`]: JSON plan loading, read-only during a session
//! - [`config`]: visual/timing configuration with bundled defaults
//! - [`session`]: the sequencing state machine and countdown worker
//! - [`media`]: best-effort pose images and the completion cue

// Module declarations
pub mod config;
pub mod error;
pub mod media;
pub mod plan;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use error::{PoseTimerError, Result};
