//! Configuration data models
//!
//! This module defines the data structures used for application configuration.
//! Field names match the external `config.json` keys.

use serde::{Deserialize, Serialize};

/// Default pose-phase transition duration in seconds
const DEFAULT_TRANSITION_DURATION: f64 = 20.0;

/// Fixed duration of the mini-transition between the two sides of a
/// bilateral pose, in seconds
const SIDE_SWITCH_DURATION: f64 = 10.0;

/// Default countdown tick interval in seconds. Finer ticks give a smoother
/// dial at the cost of more redraws.
const DEFAULT_TICK_INTERVAL: f64 = 0.1;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default transition duration between poses, in seconds
    #[serde(default = "default_transition_duration")]
    pub transition_duration: f64,
    /// Dial color while holding a pose (`#RRGGBB`)
    #[serde(default = "default_color_pose")]
    pub color_pose: String,
    /// Dial color during transitions (`#RRGGBB`)
    #[serde(default = "default_color_transition")]
    pub color_transition: String,
    /// Inner circle color (`#RRGGBB`)
    #[serde(default = "default_color_inner_circle")]
    pub color_inner_circle: String,
    /// Countdown text color (`#RRGGBB`)
    #[serde(default = "default_color_inner_text")]
    pub color_inner_text: String,
}

fn default_transition_duration() -> f64 {
    DEFAULT_TRANSITION_DURATION
}

fn default_color_pose() -> String {
    "#a3be8c".to_string()
}

fn default_color_transition() -> String {
    "#ebcb8b".to_string()
}

fn default_color_inner_circle() -> String {
    "#2e3440".to_string()
}

fn default_color_inner_text() -> String {
    "#eceff4".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transition_duration: default_transition_duration(),
            color_pose: default_color_pose(),
            color_transition: default_color_transition(),
            color_inner_circle: default_color_inner_circle(),
            color_inner_text: default_color_inner_text(),
        }
    }
}

impl AppConfig {
    /// Derive the immutable timing parameters handed to the session controller
    pub fn timing(&self) -> Timing {
        Timing {
            transition_duration: self.transition_duration,
            side_switch_duration: SIDE_SWITCH_DURATION,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Timing parameters for the session controller and countdown worker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Default transition duration between poses, in seconds
    pub transition_duration: f64,
    /// Duration of the left/right switch inside a bilateral pose, in seconds
    pub side_switch_duration: f64,
    /// Countdown tick interval, in seconds
    pub tick_interval: f64,
}

impl Default for Timing {
    fn default() -> Self {
        AppConfig::default().timing()
    }
}

/// An RGB color parsed from a `#RRGGBB` configuration string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` hex string. Returns `None` for any other shape.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Parse a configured color string, falling back to `fallback` with a
    /// warning when the string is not valid `#RRGGBB`.
    pub fn parse_or(s: &str, fallback: Self) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::warn!("Invalid color string {s:?} in configuration, using default");
            fallback
        })
    }
}
