//! Configuration manager for loading application configuration
//!
//! Resolution order: `config.json` in the working directory, then the
//! bundled example configuration compiled into the binary, then hard
//! defaults. A missing or malformed configuration is never fatal.

use crate::config::models::AppConfig;
use std::path::Path;
use tracing::{info, warn};

/// The example configuration shipped with the application, used when no
/// `config.json` is present
const BUNDLED_CONFIG: &str = include_str!("../../assets/config_example.json");

/// Name of the user configuration file, resolved against the working directory
pub const CONFIG_FILE: &str = "config.json";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration, falling back to the bundled example and then to
    /// hard defaults. Infallible: every failure path degrades to defaults.
    pub fn load() -> AppConfig {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific path (test seam)
    pub fn load_from(path: &Path) -> AppConfig {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str(&json) {
                    Ok(config) => {
                        info!("Configuration loaded from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Failed to parse {}: {e}, using bundled defaults", path.display());
                    }
                },
                Err(e) => {
                    warn!("Failed to read {}: {e}, using bundled defaults", path.display());
                }
            }
        } else {
            info!(
                "{} not found, using bundled example configuration",
                path.display()
            );
        }

        serde_json::from_str(BUNDLED_CONFIG).unwrap_or_else(|e| {
            warn!("Bundled example configuration is invalid: {e}");
            AppConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_config_parses() {
        let config: AppConfig = serde_json::from_str(BUNDLED_CONFIG).unwrap();
        assert!(config.transition_duration > 0.0);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("config.json"));
        assert!(config.transition_duration > 0.0);
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{ not json").unwrap();

        let config = ConfigManager::load_from(&path);
        assert!(config.transition_duration > 0.0);
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r##"{"transition_duration": 7, "color_pose": "#112233"}"##,
        )
        .unwrap();

        let config = ConfigManager::load_from(&path);
        assert!((config.transition_duration - 7.0).abs() < f64::EPSILON);
        assert_eq!(config.color_pose, "#112233");
    }
}
