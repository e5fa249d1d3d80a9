//! Day plan expansion into timed segments
//!
//! A day plan is expanded once, ahead of time, into the exact ordered list
//! of countdown segments the worker will walk: a pre-roll transition into
//! the first pose, a hold per pose, and a transition between consecutive
//! poses. Bilateral poses (`Side: true`) expand into a Left hold, a fixed
//! side-switch transition, and a Right hold; each side holds the pose's
//! full configured duration.
//!
//! Doing the expansion up front keeps the worker a dumb cursor over an
//! immutable list and makes the sequencing independently testable.

use crate::config::Timing;
use crate::plan::DayPlan;

/// Which kind of countdown a segment is, deciding the dial color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Interval between poses (or between sides of a bilateral pose)
    Transition,
    /// Holding a pose
    Hold,
}

/// One countdown segment of a session
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Transition or hold
    pub kind: SegmentKind,
    /// Index of the pose this segment belongs to; transitions between poses
    /// carry the index of the upcoming pose
    pub pose_index: usize,
    /// Bare pose name, used for image lookup
    pub pose_name: String,
    /// Text shown above the dial while this segment runs
    pub label: String,
    /// Cue fired when this segment completes (holds only)
    pub cue: Option<String>,
    /// Countdown length in seconds
    pub duration: f64,
}

/// Expand a day plan into its ordered segment list
pub fn build_schedule(day: &DayPlan, timing: &Timing) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(day.poses.len() * 2);

    for (index, pose) in day.poses.iter().enumerate() {
        // Transition into this pose: the pre-roll for the first pose, the
        // between-pose interval otherwise. The incoming pose's override wins.
        segments.push(Segment {
            kind: SegmentKind::Transition,
            pose_index: index,
            pose_name: pose.name.clone(),
            label: format!("Transition to {}", pose.name),
            cue: None,
            duration: pose.transition.unwrap_or(timing.transition_duration),
        });

        if pose.side {
            segments.push(Segment {
                kind: SegmentKind::Hold,
                pose_index: index,
                pose_name: pose.name.clone(),
                label: format!("{} (Left)", pose.name),
                cue: Some(format!("{} Left", pose.name)),
                duration: pose.duration,
            });
            segments.push(Segment {
                kind: SegmentKind::Transition,
                pose_index: index,
                pose_name: pose.name.clone(),
                label: "Transition to right side".to_string(),
                cue: None,
                duration: timing.side_switch_duration,
            });
            segments.push(Segment {
                kind: SegmentKind::Hold,
                pose_index: index,
                pose_name: pose.name.clone(),
                label: format!("{} (Right)", pose.name),
                cue: Some(format!("{} Right", pose.name)),
                duration: pose.duration,
            });
        } else {
            segments.push(Segment {
                kind: SegmentKind::Hold,
                pose_index: index,
                pose_name: pose.name.clone(),
                label: pose.name.clone(),
                cue: Some(pose.name.clone()),
                duration: pose.duration,
            });
        }
    }

    segments
}
