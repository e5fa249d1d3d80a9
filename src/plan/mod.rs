//! Practice plan loading and data model
//!
//! A practice plan maps day labels to ordered pose lists. It is loaded once
//! at startup from a JSON file and is read-only for the rest of the session.
//! A missing or malformed plan file is fatal: the application cannot run
//! without one.

pub mod loader;
pub mod models;

pub use loader::{PLAN_FILE, load_plan};
pub use models::{DayPlan, Pose, PracticePlan};
