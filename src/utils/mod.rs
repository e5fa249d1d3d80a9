//! Utility modules

pub mod logging;
pub mod power;

pub use logging::init_logging;
pub use power::keep_display_awake;
