//! GUI controller implementation
//!
//! Owns the main window, forwards button presses to the session controller
//! and drains the worker event channel on the UI thread with a repeating
//! `slint::Timer`, so the countdown worker never touches GUI state directly.

use crate::MainWindow;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use poseflow::config::{AppConfig, Rgb};
use poseflow::media::{AudioCue, PoseImageMap};
use poseflow::session::{SegmentKind, SessionController, SessionEvent, countdown};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use std::sync::{Arc, mpsc};
use std::time::Duration;
use tracing::{debug, warn};

/// How often the UI thread drains the worker event channel
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A full dial is drawn fractionally short of 1.0: a 360° pie arc has
/// coincident endpoints and renders as empty
const DIAL_FULL: f32 = 0.999;

// Fallbacks when a configured color string does not parse
const POSE_FALLBACK: Rgb = Rgb { r: 0xa3, g: 0xbe, b: 0x8c };
const TRANSITION_FALLBACK: Rgb = Rgb { r: 0xeb, g: 0xcb, b: 0x8b };
const CORE_FALLBACK: Rgb = Rgb { r: 0x2e, g: 0x34, b: 0x40 };
const TEXT_FALLBACK: Rgb = Rgb { r: 0xec, g: 0xef, b: 0xf4 };

/// Dial colors resolved from configuration
#[derive(Clone, Copy)]
struct Palette {
    pose: slint::Color,
    transition: slint::Color,
}

impl Palette {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            pose: to_slint(Rgb::parse_or(&config.color_pose, POSE_FALLBACK)),
            transition: to_slint(Rgb::parse_or(&config.color_transition, TRANSITION_FALLBACK)),
        }
    }

    fn for_kind(&self, kind: SegmentKind) -> slint::Color {
        match kind {
            SegmentKind::Hold => self.pose,
            SegmentKind::Transition => self.transition,
        }
    }
}

fn to_slint(rgb: Rgb) -> slint::Color {
    slint::Color::from_rgb_u8(rgb.r, rgb.g, rgb.b)
}

/// GUI controller: window plus the event poll timer keeping it updated
pub struct GuiController {
    window: MainWindow,
    // Dropping the timer stops the polling; keep it alive with the window
    _event_poll_timer: slint::Timer,
}

impl GuiController {
    /// Build the window, wire the transport callbacks and start the event
    /// poll timer.
    pub fn new(
        controller: Arc<Mutex<SessionController>>,
        event_rx: mpsc::Receiver<SessionEvent>,
        config: &AppConfig,
        images: PoseImageMap,
        audio: AudioCue,
    ) -> Result<Self> {
        let window = MainWindow::new().context("Failed to create main window")?;
        let palette = Palette::from_config(config);

        window.set_core_color(to_slint(Rgb::parse_or(
            &config.color_inner_circle,
            CORE_FALLBACK,
        )));
        window.set_core_text_color(to_slint(Rgb::parse_or(
            &config.color_inner_text,
            TEXT_FALLBACK,
        )));
        window.set_dial_color(palette.pose);
        window.set_fraction(DIAL_FULL);

        let labels: Vec<SharedString> = controller
            .lock()
            .day_labels()
            .into_iter()
            .map(SharedString::from)
            .collect();
        window.set_day_model(ModelRc::new(VecModel::from(labels)));

        {
            let controller = Arc::clone(&controller);
            let weak = window.as_weak();
            window.on_start_requested(move || {
                if controller.lock().start()
                    && let Some(window) = weak.upgrade()
                {
                    window.set_pause_text(SharedString::from("Pause"));
                }
            });
        }

        {
            let controller = Arc::clone(&controller);
            let weak = window.as_weak();
            window.on_pause_toggled(move || {
                let controller = controller.lock();
                let text = if controller.is_running() {
                    controller.pause();
                    "Resume"
                } else if controller.resume() {
                    "Pause"
                } else {
                    return;
                };
                if let Some(window) = weak.upgrade() {
                    window.set_pause_text(SharedString::from(text));
                }
            });
        }

        {
            let controller = Arc::clone(&controller);
            let weak = window.as_weak();
            let idle_color = palette.pose;
            window.on_reset_requested(move || {
                let mut controller = controller.lock();
                controller.reset();
                let _ = controller.select_day(0);
                if let Some(window) = weak.upgrade() {
                    window.set_selected_day(0);
                    window.set_pose_label(SharedString::default());
                    window.set_time_text(SharedString::default());
                    window.set_fraction(DIAL_FULL);
                    window.set_dial_color(idle_color);
                    window.set_has_image(false);
                    window.set_pause_text(SharedString::from("Pause"));
                }
            });
        }

        {
            let controller = Arc::clone(&controller);
            let weak = window.as_weak();
            window.on_day_selected(move |index| {
                let requested = usize::try_from(index).unwrap_or(0);
                let active = controller.lock().select_day(requested);
                // Refused (running) or clamped: snap the selector back to
                // the day that is actually active
                if active != requested && let Some(window) = weak.upgrade() {
                    window.set_selected_day(i32::try_from(active).unwrap_or(0));
                }
            });
        }

        let event_poll_timer = slint::Timer::default();
        {
            let weak = window.as_weak();
            event_poll_timer.start(
                slint::TimerMode::Repeated,
                EVENT_POLL_INTERVAL,
                move || {
                    let Some(window) = weak.upgrade() else { return };
                    while let Ok(event) = event_rx.try_recv() {
                        handle_event(&window, &event, palette, &images, &audio);
                    }
                },
            );
        }

        Ok(Self {
            window,
            _event_poll_timer: event_poll_timer,
        })
    }

    /// Run the Slint event loop until the window closes
    pub fn run(self) -> Result<()> {
        self.window.run().context("Slint event loop failed")?;
        Ok(())
    }
}

/// Apply one worker event to the window
fn handle_event(
    window: &MainWindow,
    event: &SessionEvent,
    palette: Palette,
    images: &PoseImageMap,
    audio: &AudioCue,
) {
    match event {
        SessionEvent::SegmentStarted {
            kind,
            label,
            pose_name,
            total,
        } => {
            window.set_pose_label(SharedString::from(label.as_str()));
            window.set_dial_color(palette.for_kind(*kind));
            window.set_fraction(DIAL_FULL);
            window.set_time_text(SharedString::from(countdown::format_mm_ss(*total)));
            update_pose_image(window, pose_name, images);
        }
        SessionEvent::Tick {
            remaining, total, ..
        } => {
            window.set_fraction(countdown::fraction(*remaining, *total).min(DIAL_FULL));
            window.set_time_text(SharedString::from(countdown::format_mm_ss(*remaining)));
        }
        SessionEvent::PoseCompleted { name } => {
            debug!("Pose completed: {name}");
            audio.play();
        }
        SessionEvent::SessionComplete => {
            window.set_pose_label(SharedString::from("Session Complete!"));
            window.set_time_text(SharedString::from("00:00"));
            window.set_fraction(0.0);
            window.set_has_image(false);
            window.set_pause_text(SharedString::from("Pause"));
        }
    }
}

/// Swap the image panel to the named pose's image, or hide it when the pose
/// has none
fn update_pose_image(window: &MainWindow, pose_name: &str, images: &PoseImageMap) {
    let Some(path) = images.resolve(pose_name) else {
        window.set_has_image(false);
        return;
    };
    match slint::Image::load_from_path(&path) {
        Ok(image) => {
            window.set_pose_image(image);
            window.set_has_image(true);
        }
        Err(e) => {
            warn!("Failed to load image {}: {e:?}", path.display());
            window.set_has_image(false);
        }
    }
}
