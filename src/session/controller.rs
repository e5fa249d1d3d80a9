//! Session controller
//!
//! The control surface the GUI talks to: start, pause, resume, reset and
//! day selection. State mutation while running is delegated to the single
//! worker thread; the controller only flips the `running` flag, bumps the
//! worker generation, and spawns workers.

use crate::config::Timing;
use crate::plan::PracticePlan;
use crate::session::schedule::{Segment, build_schedule};
use crate::session::worker::{self, SessionEvent};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::mpsc;
use tracing::{info, warn};

/// Sequencer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No session started
    #[default]
    Idle,
    /// Counting down a transition interval
    Transitioning,
    /// Counting down a pose hold
    InPose,
    /// The day's last pose finished
    Complete,
}

/// Shared session state, mutated by the worker thread while running
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Cursor into the expanded segment schedule
    pub segment_index: usize,
    /// Index of the current pose within the day plan
    pub current_index: usize,
    /// Whether a countdown is in progress; the sole cancellation flag
    pub running: bool,
    /// Current sequencer phase
    pub phase: Phase,
    /// Worker generation; a worker whose generation no longer matches
    /// exits without mutating state
    pub(crate) epoch: u64,
}

impl SessionState {
    fn new() -> Self {
        Self {
            segment_index: 0,
            current_index: 0,
            running: false,
            phase: Phase::Idle,
            epoch: 0,
        }
    }

    /// Whether a worker of the given generation may keep mutating state
    pub(crate) fn is_live(&self, epoch: u64) -> bool {
        self.running && self.epoch == epoch
    }
}

/// The pose sequencer's control surface
pub struct SessionController {
    plan: PracticePlan,
    day_index: usize,
    timing: Timing,
    schedule: Arc<Vec<Segment>>,
    state: Arc<Mutex<SessionState>>,
    event_tx: mpsc::SyncSender<SessionEvent>,
}

impl SessionController {
    /// Create a controller over a loaded plan, with the first day selected
    pub fn new(
        plan: PracticePlan,
        timing: Timing,
        event_tx: mpsc::SyncSender<SessionEvent>,
    ) -> Self {
        let schedule = Arc::new(build_schedule(plan.day(0), &timing));
        Self {
            plan,
            day_index: 0,
            timing,
            schedule,
            state: Arc::new(Mutex::new(SessionState::new())),
            event_tx,
        }
    }

    /// Day labels in plan order, for the day selector
    pub fn day_labels(&self) -> Vec<String> {
        self.plan.day_labels()
    }

    /// Select the day to run. Out-of-range indices fall back to the first
    /// day; the request is ignored while a session is running. Returns the
    /// day that is active afterwards, so callers can reconcile their own
    /// view of the selection.
    pub fn select_day(&mut self, index: usize) -> usize {
        let mut s = self.state.lock();
        if s.running {
            warn!("Ignoring day change while a session is running");
            return self.day_index;
        }
        self.day_index = if index < self.plan.len() { index } else { 0 };
        self.schedule = Arc::new(build_schedule(self.plan.day(self.day_index), &self.timing));
        s.epoch += 1;
        s.segment_index = 0;
        s.current_index = 0;
        s.phase = Phase::Idle;
        info!(
            "Selected {} ({} segments)",
            self.plan.day(self.day_index).label,
            self.schedule.len()
        );
        self.day_index
    }

    /// Start or resume the countdown.
    ///
    /// Idempotent while running. From `Complete`, starts the day over. After
    /// a pause, the current segment restarts at its full configured duration
    /// (intra-phase elapsed time is intentionally not preserved). Returns
    /// whether a worker was spawned.
    pub fn start(&self) -> bool {
        let epoch = {
            let mut s = self.state.lock();
            if s.running {
                warn!("Start requested while already running; ignored");
                return false;
            }
            if self.schedule.is_empty() {
                warn!(
                    "{} has no poses; nothing to start",
                    self.plan.day(self.day_index).label
                );
                return false;
            }
            if s.phase == Phase::Complete {
                s.segment_index = 0;
                s.current_index = 0;
            }
            s.running = true;
            s.epoch += 1;
            s.epoch
        };

        let state = Arc::clone(&self.state);
        let schedule = Arc::clone(&self.schedule);
        let timing = self.timing;
        let event_tx = self.event_tx.clone();
        info!(
            "Starting countdown worker for {} (generation {epoch})",
            self.plan.day(self.day_index).label
        );
        std::thread::spawn(move || worker::run(&state, &schedule, timing, &event_tx, epoch));
        true
    }

    /// Suspend the countdown without touching the pose or segment cursor.
    /// The worker observes the cleared flag within one tick and exits.
    pub fn pause(&self) {
        let mut s = self.state.lock();
        if !s.running {
            return;
        }
        s.running = false;
        info!(
            "Paused at segment {} (pose index {})",
            s.segment_index, s.current_index
        );
    }

    /// Resume after a pause. The current segment restarts from its full
    /// configured duration.
    pub fn resume(&self) -> bool {
        self.start()
    }

    /// Force the session back to Idle from any state
    pub fn reset(&self) {
        let mut s = self.state.lock();
        s.running = false;
        s.epoch += 1;
        s.segment_index = 0;
        s.current_index = 0;
        s.phase = Phase::Idle;
        info!("Session reset");
    }

    /// Whether a countdown is currently in progress
    pub fn is_running(&self) -> bool {
        self.state.lock().running
    }

    /// A copy of the current session state
    pub fn snapshot(&self) -> SessionState {
        self.state.lock().clone()
    }
}
