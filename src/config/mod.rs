//! Configuration management module
//!
//! Loads the visual/timing configuration from `config.json` in the working
//! directory, falling back to a bundled example configuration when the file
//! is absent or malformed. Configuration is resolved once at startup into
//! immutable structs handed to the session controller and the GUI.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, Rgb, Timing};
