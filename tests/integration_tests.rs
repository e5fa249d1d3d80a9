//! Integration tests for `poseflow`
//!
//! Drives real countdown workers with millisecond-scale ticks and checks
//! the full phase sequences, plus plan/config loading behavior.

use poseflow::config::{ConfigManager, Timing};
use poseflow::error::PoseTimerError;
use poseflow::plan::PracticePlan;
use poseflow::session::{
    Phase, SegmentKind, SessionController, SessionEvent, countdown,
};
use std::sync::mpsc;
use std::time::Duration;

fn fast_timing() -> Timing {
    Timing {
        transition_duration: 0.02,
        side_switch_duration: 0.02,
        tick_interval: 0.005,
    }
}

fn run_to_completion(
    json: &str,
    timing: Timing,
) -> (SessionController, Vec<SessionEvent>) {
    let plan = PracticePlan::from_json(json).expect("valid plan");
    let (tx, rx) = mpsc::sync_channel(1024);
    let controller = SessionController::new(plan, timing, tx);
    assert!(controller.start(), "session should start");

    let mut events = Vec::new();
    loop {
        match rx.recv_timeout(Duration::from_secs(10)) {
            Ok(event) => {
                let done = event == SessionEvent::SessionComplete;
                events.push(event);
                if done {
                    break;
                }
            }
            Err(e) => panic!("session did not complete: {e}"),
        }
    }
    // Let the worker publish its final state before snapshotting
    std::thread::sleep(Duration::from_millis(20));
    (controller, events)
}

fn segment_starts(events: &[SessionEvent]) -> Vec<(SegmentKind, String, usize)> {
    let mut starts = Vec::new();
    for event in events {
        if let SessionEvent::SegmentStarted { kind, label, .. } = event {
            starts.push((*kind, label.clone(), starts.len()));
        }
    }
    starts
}

/// A one-pose day runs pre-roll transition, the pose, then completes with
/// the index back at 0.
#[test]
fn test_single_pose_day_end_to_end() {
    let (controller, events) = run_to_completion(
        r#"{"Day 1": {"Poses": [{"Name": "Mountain", "Duration": 0.05}]}}"#,
        fast_timing(),
    );

    let starts = segment_starts(&events);
    assert_eq!(starts.len(), 2);
    assert_eq!(starts[0].0, SegmentKind::Transition);
    assert_eq!(starts[0].1, "Transition to Mountain");
    assert_eq!(starts[1].0, SegmentKind::Hold);
    assert_eq!(starts[1].1, "Mountain");

    let state = controller.snapshot();
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.current_index, 0);
    assert!(!state.running);
}

/// A plan with N unsided poses produces exactly N transitions (including
/// the pre-roll) and N holds, with holds visiting every pose in order.
#[test]
fn test_plain_plan_phase_counts() {
    let (_, events) = run_to_completion(
        r#"{"Day 1": {"Poses": [
            {"Name": "Mountain", "Duration": 0.03},
            {"Name": "Warrior", "Duration": 0.03},
            {"Name": "Child", "Duration": 0.03}
        ]}}"#,
        fast_timing(),
    );

    let starts = segment_starts(&events);
    let transitions = starts
        .iter()
        .filter(|(k, _, _)| *k == SegmentKind::Transition)
        .count();
    let holds: Vec<&String> = starts
        .iter()
        .filter(|(k, _, _)| *k == SegmentKind::Hold)
        .map(|(_, label, _)| label)
        .collect();

    assert_eq!(transitions, 3);
    assert_eq!(holds, vec!["Mountain", "Warrior", "Child"]);

    // Kinds strictly alternate: transition, hold, transition, hold, ...
    for (i, (kind, _, _)) in starts.iter().enumerate() {
        let expected = if i % 2 == 0 {
            SegmentKind::Transition
        } else {
            SegmentKind::Hold
        };
        assert_eq!(*kind, expected, "segment {i}");
    }
}

/// A side-flagged pose runs Left and Right holds with one mini-transition
/// between them, and cues once per side.
#[test]
fn test_side_pose_sub_phases() {
    let (_, events) = run_to_completion(
        r#"{"Day 1": {"Poses": [{"Name": "Tree", "Duration": 0.03, "Side": true}]}}"#,
        fast_timing(),
    );

    let labels: Vec<String> = segment_starts(&events)
        .into_iter()
        .map(|(_, label, _)| label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "Transition to Tree",
            "Tree (Left)",
            "Transition to right side",
            "Tree (Right)"
        ]
    );

    let cues: Vec<String> = events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::PoseCompleted { name } => Some(name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(cues, vec!["Tree Left", "Tree Right"]);
}

/// Ticks carry a monotonically shrinking remaining time within a segment
/// and a fraction inside the unit interval.
#[test]
fn test_tick_stream_is_sane() {
    let (_, events) = run_to_completion(
        r#"{"Day 1": {"Poses": [{"Name": "Mountain", "Duration": 0.05}]}}"#,
        fast_timing(),
    );

    let mut last_remaining = f64::INFINITY;
    for event in &events {
        match event {
            SessionEvent::SegmentStarted { .. } => last_remaining = f64::INFINITY,
            SessionEvent::Tick {
                remaining, total, ..
            } => {
                assert!(*remaining <= last_remaining, "remaining must shrink");
                let f = countdown::fraction(*remaining, *total);
                assert!((0.0..=1.0).contains(&f));
                last_remaining = *remaining;
            }
            _ => {}
        }
    }
}

/// Pausing mid-transition keeps the cursor; a fresh start after reset walks
/// the day from the pre-roll again.
#[test]
fn test_pause_reset_start_cycle() {
    let plan = PracticePlan::from_json(
        r#"{"Day 1": {"Poses": [{"Name": "Mountain", "Duration": 60}]}}"#,
    )
    .expect("valid plan");
    let (tx, rx) = mpsc::sync_channel(1024);
    let controller = SessionController::new(
        plan,
        Timing {
            transition_duration: 60.0,
            side_switch_duration: 10.0,
            tick_interval: 0.005,
        },
        tx,
    );

    assert!(controller.start());
    // First event is the pre-roll start
    assert!(matches!(
        rx.recv_timeout(Duration::from_secs(5)).expect("event"),
        SessionEvent::SegmentStarted {
            kind: SegmentKind::Transition,
            ..
        }
    ));

    controller.pause();
    std::thread::sleep(Duration::from_millis(30));
    let paused = controller.snapshot();
    assert!(!paused.running);
    assert_eq!(paused.current_index, 0);
    assert_eq!(paused.phase, Phase::Transitioning);

    controller.reset();
    let reset = controller.snapshot();
    assert_eq!(reset.phase, Phase::Idle);
    assert_eq!(reset.segment_index, 0);
    assert!(!reset.running);

    // Drain anything buffered, then a new start begins at the pre-roll
    while rx.try_recv().is_ok() {}
    assert!(controller.start());
    assert!(matches!(
        rx.recv_timeout(Duration::from_secs(5)).expect("event"),
        SessionEvent::SegmentStarted {
            kind: SegmentKind::Transition,
            ..
        }
    ));
    controller.reset();
}

/// Restarting after completion runs the whole day again.
#[test]
fn test_start_after_complete_runs_again() {
    let (controller, _) = run_to_completion(
        r#"{"Day 1": {"Poses": [{"Name": "Mountain", "Duration": 0.03}]}}"#,
        fast_timing(),
    );
    assert_eq!(controller.snapshot().phase, Phase::Complete);
    assert!(controller.start());
    controller.reset();
}

#[test]
fn test_mm_ss_formatting() {
    assert_eq!(countdown::format_mm_ss(125.0), "02:05");
    assert_eq!(countdown::format_mm_ss(59.0), "00:59");
    assert_eq!(countdown::format_mm_ss(0.0), "00:00");
}

#[test]
fn test_malformed_plan_is_rejected() {
    let result = PracticePlan::from_json(r#"{"Day 1": {"Poses": [{"Name": "NoDuration"}]}}"#);
    assert!(matches!(result, Err(PoseTimerError::PlanError(_))));

    let result = PracticePlan::from_json("not json at all");
    assert!(matches!(result, Err(PoseTimerError::PlanError(_))));
}

#[test]
fn test_config_falls_back_without_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ConfigManager::load_from(&dir.path().join("config.json"));
    assert!(config.transition_duration > 0.0);
    assert!(poseflow::config::Rgb::parse(&config.color_pose).is_some());
}
