//! Countdown worker thread
//!
//! The worker is the only writer of session state while a session runs. It
//! walks the expanded segment list as a cursor, sleeping one tick at a time
//! and re-checking the `running` flag and its generation under the state
//! lock before every mutation. Pausing or resetting simply makes the next
//! check fail, so the thread winds down within one tick without touching
//! the indices.

use crate::config::Timing;
use crate::session::controller::{Phase, SessionState};
use crate::session::schedule::{Segment, SegmentKind};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Events emitted by the countdown worker for the GUI to render
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A new segment began counting down
    SegmentStarted {
        /// Transition or hold, deciding the dial color
        kind: SegmentKind,
        /// Text for the pose label
        label: String,
        /// Bare pose name for image lookup
        pose_name: String,
        /// Full countdown length in seconds
        total: f64,
    },
    /// One render tick of the current segment
    Tick {
        /// Seconds left in the segment
        remaining: f64,
        /// Full countdown length in seconds
        total: f64,
        /// Transition or hold, deciding the dial color
        kind: SegmentKind,
    },
    /// A pose (or one side of a bilateral pose) was held to completion;
    /// fires the audio cue
    PoseCompleted {
        /// Pose name, with the side suffix for bilateral poses
        name: String,
    },
    /// The last pose of the day finished
    SessionComplete,
}

/// Walk the schedule from the current cursor position until the session
/// completes, is paused, is reset, or is superseded by a newer worker.
pub(crate) fn run(
    state: &Arc<Mutex<SessionState>>,
    schedule: &Arc<Vec<Segment>>,
    timing: Timing,
    event_tx: &mpsc::SyncSender<SessionEvent>,
    epoch: u64,
) {
    loop {
        let segment = {
            let mut s = state.lock();
            if !s.is_live(epoch) {
                return;
            }
            if s.segment_index >= schedule.len() {
                s.phase = Phase::Complete;
                s.running = false;
                // Rewind the cursor so the next start is a fresh run
                s.segment_index = 0;
                s.current_index = 0;
                drop(s);
                info!("Session complete");
                let _ = event_tx.send(SessionEvent::SessionComplete);
                return;
            }
            let segment = schedule[s.segment_index].clone();
            s.phase = match segment.kind {
                SegmentKind::Transition => Phase::Transitioning,
                SegmentKind::Hold => Phase::InPose,
            };
            s.current_index = segment.pose_index;
            segment
        };

        debug!(
            "Segment started: {:?} ({:.1}s)",
            segment.label, segment.duration
        );
        let _ = event_tx.send(SessionEvent::SegmentStarted {
            kind: segment.kind,
            label: segment.label.clone(),
            pose_name: segment.pose_name.clone(),
            total: segment.duration,
        });

        let mut remaining = segment.duration;
        while remaining > 0.0 {
            if !state.lock().is_live(epoch) {
                return;
            }
            // Ticks never block the timer: drop them when the GUI lags
            if let Err(e) = event_tx.try_send(SessionEvent::Tick {
                remaining,
                total: segment.duration,
                kind: segment.kind,
            }) {
                trace!("Dropped tick: {e}");
            }
            std::thread::sleep(Duration::from_secs_f64(timing.tick_interval));
            remaining -= timing.tick_interval;
        }

        // Final tick pins the dial at empty before the next segment starts
        let _ = event_tx.try_send(SessionEvent::Tick {
            remaining: 0.0,
            total: segment.duration,
            kind: segment.kind,
        });

        if let Some(cue) = segment.cue.clone() {
            let _ = event_tx.send(SessionEvent::PoseCompleted { name: cue });
        }

        let mut s = state.lock();
        if !s.is_live(epoch) {
            return;
        }
        s.segment_index += 1;
    }
}
