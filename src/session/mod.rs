//! Pose sequencing and countdown timing
//!
//! This is the stateful core of the application. A selected day plan is
//! expanded into an ordered list of segments (transitions and holds), and a
//! background worker thread walks that list, emitting render ticks and
//! completion cues over a channel to the GUI.
//!
//! # Architecture
//!
//! - [`schedule`]: pure expansion of a day plan into segments
//! - [`countdown`]: pure fraction/formatting math for the dial
//! - [`SessionController`]: start/pause/resume/reset surface, owns the state
//! - [`worker`]: the single background thread that mutates session state
//!
//! # Concurrency
//!
//! Only the worker thread mutates `segment_index`/`current_index`/`phase`
//! while a session runs. All mutation happens under one `parking_lot::Mutex`;
//! the `running` flag, checked once per tick under that lock, is the sole
//! cancellation mechanism. A generation counter invalidates a worker that
//! outlives a pause/reset/restart by less than one tick.

pub mod controller;
pub mod countdown;
pub mod schedule;
pub mod worker;

pub use controller::{Phase, SessionController, SessionState};
pub use schedule::{Segment, SegmentKind, build_schedule};
pub use worker::SessionEvent;
