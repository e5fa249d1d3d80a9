//! Optional media collaborators: pose images and the audio cue
//!
//! Everything in this module is best-effort. A missing mapping file, a
//! missing image, or an unavailable audio device degrades to a skipped
//! visual/audio update with a log line, never an error the session sees.

pub mod audio;
pub mod images;

pub use audio::AudioCue;
pub use images::PoseImageMap;
