//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to the per-user data
//! directory and automatic rotation on application startup keeping 10
//! historical files.

use crate::error::Result;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (app.log.1 through app.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Resolve the per-user data directory for logs.
///
/// `POSEFLOW_DATA_DIR` overrides everything; otherwise `%APPDATA%` on
/// Windows or `$HOME/.local/share` elsewhere, falling back to the working
/// directory.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("POSEFLOW_DATA_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("poseflow");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("poseflow");
    }
    PathBuf::from(".")
}

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG`.
/// Rotates existing logs on startup to keep a history of the last 10
/// sessions.
pub fn init_logging() -> Result<()> {
    let log_dir = data_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join("app.log");
    rotate_logs_on_startup(&log_path)?;

    // tracing_appender's rolling appender has no startup-based rotation with
    // a retention cap, so rotation is handled above and the appender itself
    // never rotates
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| crate::error::PoseTimerError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| crate::error::PoseTimerError::ConfigError(Box::new(e)))?;

    tracing::info!("poseflow v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// - app.log.9 is deleted (oldest)
/// - app.log.N -> app.log.N+1 for N in 8..=1
/// - app.log -> app.log.1; a fresh app.log is created by the logger
fn rotate_logs_on_startup(log_path: &PathBuf) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path.parent().ok_or_else(|| {
        crate::error::PoseTimerError::ConfigError(crate::error::StringError::new(
            "Invalid log path",
        ))
    })?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| {
            crate::error::PoseTimerError::ConfigError(crate::error::StringError::new(
                "Invalid log filename",
            ))
        })?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    let log_1 = log_dir.join(format!("{log_name}.1"));
    std::fs::rename(log_path, &log_1)?;

    Ok(())
}
