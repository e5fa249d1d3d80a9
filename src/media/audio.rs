//! Completion cue playback
//!
//! Plays a fixed local sound asset once per completed pose (or side of a
//! bilateral pose). The cue is decoded on every play so the asset can be
//! swapped between runs. A missing asset or an unavailable output device
//! disables the cue with a single warning; the timer never depends on it.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the cue sound asset, resolved against the working directory
pub const CUE_FILE: &str = "ding.mp3";

struct CueOutput {
    // The stream must outlive every sink playing on it
    _stream: OutputStream,
    handle: OutputStreamHandle,
    path: PathBuf,
}

/// One-shot completion cue
pub struct AudioCue {
    output: Option<CueOutput>,
}

impl AudioCue {
    /// Open the default audio output for the cue at the default path
    pub fn new() -> Self {
        Self::with_path(Path::new(CUE_FILE))
    }

    /// Open the default audio output for a cue asset at `path`. Missing
    /// asset or missing output device yields a silent cue.
    pub fn with_path(path: &Path) -> Self {
        if !path.exists() {
            warn!(
                "Cue asset {} not found, audio cues disabled",
                path.display()
            );
            return Self { output: None };
        }

        match OutputStream::try_default() {
            Ok((stream, handle)) => {
                info!("Audio cue ready: {}", path.display());
                Self {
                    output: Some(CueOutput {
                        _stream: stream,
                        handle,
                        path: path.to_path_buf(),
                    }),
                }
            }
            Err(e) => {
                warn!("No audio output available ({e}), audio cues disabled");
                Self { output: None }
            }
        }
    }

    /// Whether a cue will actually sound
    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Play the cue once, without blocking. Playback failures are logged
    /// and skipped.
    pub fn play(&self) {
        let Some(output) = &self.output else {
            return;
        };

        let file = match File::open(&output.path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Failed to open {}: {e}", output.path.display());
                return;
            }
        };

        let source = match Decoder::new(BufReader::new(file)) {
            Ok(source) => source,
            Err(e) => {
                warn!("Failed to decode {}: {e}", output.path.display());
                return;
            }
        };

        match Sink::try_new(&output.handle) {
            Ok(sink) => {
                sink.append(source);
                // Detach so playback continues without holding the sink
                sink.detach();
                debug!("Played completion cue");
            }
            Err(e) => {
                warn!("Failed to start cue playback: {e}");
            }
        }
    }
}

impl Default for AudioCue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_disables_cue() {
        let dir = tempfile::tempdir().unwrap();
        let cue = AudioCue::with_path(&dir.path().join("ding.mp3"));
        assert!(!cue.is_enabled());
        // Playing a disabled cue is a no-op, not a panic
        cue.play();
    }
}
