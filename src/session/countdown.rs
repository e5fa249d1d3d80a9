//! Countdown display math
//!
//! Pure helpers shared by the worker and the GUI: the remaining-time
//! fraction driving the dial sweep and the mm:ss text inside it.

/// Normalized remaining fraction for the dial, clamped to `[0, 1]` even
/// under floating-point drift. A non-positive total renders as empty.
pub fn fraction(remaining: f64, total: f64) -> f32 {
    if total <= 0.0 {
        return 0.0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is clamped to [0, 1] before display; f32 precision is ample"
    )]
    let f = (remaining / total) as f32;
    f.clamp(0.0, 1.0)
}

/// Format seconds as a zero-padded `mm:ss` string.
///
/// Sub-second remainders round to the nearest second so the display does not
/// flash `00:00` while time is still left on the clock.
pub fn format_mm_ss(seconds: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "negatives are clamped to zero and plan durations are far below u64::MAX"
    )]
    let total = seconds.max(0.0).round() as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{minutes:02}:{secs:02}")
}
