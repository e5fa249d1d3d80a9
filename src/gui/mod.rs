//! GUI module
//!
//! Provides the Slint-based graphical front end: day selector, transport
//! buttons, countdown dial and pose image panel, synchronized with the
//! session controller over the worker event channel.

pub mod gui_controller;

pub use gui_controller::GuiController;
