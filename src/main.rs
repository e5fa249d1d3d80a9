//! `poseflow` - Guided pose timer
//!
//! Walks a per-day plan of timed poses with a countdown dial, optional pose
//! images and an audio cue per completed pose.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use parking_lot::Mutex;
use poseflow::{
    config::ConfigManager,
    error::get_user_friendly_error,
    media::{AudioCue, PoseImageMap},
    plan::{self, PLAN_FILE},
    session::SessionController,
    utils,
};
use std::path::Path;
use std::sync::{Arc, mpsc};
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("poseflow v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load();

    // The plan is the one thing the application cannot run without
    let plan = match plan::load_plan(Path::new(PLAN_FILE)) {
        Ok(plan) => plan,
        Err(e) => {
            error!("Failed to load practice plan: {e}");
            show_error_and_exit(&get_user_friendly_error(&e));
        }
    };
    info!("Practice plan loaded with {} day(s)", plan.len());

    let images = PoseImageMap::load();
    let audio = AudioCue::new();
    if !audio.is_enabled() {
        info!("Running without audio cues");
    }

    let channel_capacity = 32;
    let (event_tx, event_rx) = mpsc::sync_channel(channel_capacity);

    let controller = SessionController::new(plan, config.timing(), event_tx);
    let controller = Arc::new(Mutex::new(controller));

    let gui_controller = GuiController::new(controller, event_rx, &config, images, audio)
        .context("Failed to create GUI controller")?;

    // Hold the display awake for the whole session; losing the guard is
    // non-fatal
    let _keep_awake = utils::keep_display_awake();

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("poseflow shutting down");

    Ok(())
}

/// Shows an error dialog and exits the application.
fn show_error_and_exit(message: &str) -> ! {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("Pose Timer - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();

    std::process::exit(1);
}
