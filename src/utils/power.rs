//! Display keep-awake guard
//!
//! A timer the user follows hands-free must not let the display sleep
//! mid-pose, so the display is held awake for the lifetime of the returned
//! guard. Acquisition failure (headless session, denied by system policy)
//! is logged and non-fatal: the timer still runs, the display just follows
//! system policy.

use tracing::{info, warn};

/// Try to keep the display awake for the lifetime of the returned guard.
/// Returns `None` when the platform refuses the request.
pub fn keep_display_awake() -> Option<keepawake::KeepAwake> {
    match keepawake::Builder::default()
        .display(true)
        .reason("Pose session in progress")
        .app_name("poseflow")
        .app_reverse_domain("io.github.poseflow")
        .create()
    {
        Ok(guard) => {
            info!("Display keep-awake acquired");
            Some(guard)
        }
        Err(e) => {
            warn!("Could not keep display awake ({e}), continuing without");
            None
        }
    }
}
