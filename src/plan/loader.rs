//! Plan file loading
//!
//! Thin file-reading wrapper over [`PracticePlan::from_json`]. Kept separate
//! so the parser stays a pure bytes-to-plan function.

use crate::error::{PoseTimerError, Result, StringError};
use crate::plan::models::PracticePlan;
use std::path::Path;
use tracing::info;

/// Name of the plan file, resolved against the working directory
pub const PLAN_FILE: &str = "plan.json";

/// Load and parse a practice plan from disk.
///
/// A missing or unreadable file is an error: the application cannot run
/// without a plan.
pub fn load_plan(path: &Path) -> Result<PracticePlan> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        PoseTimerError::PlanError(StringError::new(format!(
            "cannot read {}: {e}",
            path.display()
        )))
    })?;

    let plan = PracticePlan::from_json(&json)?;
    info!(
        "Loaded plan from {} with {} day(s)",
        path.display(),
        plan.len()
    );
    Ok(plan)
}
