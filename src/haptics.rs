//! Haptic cue seam
//!
//! Haptic hardware belongs to the host platform; the core only decides
//! when a cue fires. Hosts implement `HapticSink`, everything else takes
//! the no-op or logging sink.

/// Haptic cue kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticCue {
    /// Heavy impact on a wire strike
    Impact,
    /// Notification-style success pattern on a win
    Success,
}

/// Host-provided haptic output.
pub trait HapticSink: Send {
    fn trigger(&mut self, cue: HapticCue);
}

/// Discards every cue. Default for headless use.
#[derive(Debug, Default)]
pub struct NullHaptics;

impl HapticSink for NullHaptics {
    fn trigger(&mut self, _cue: HapticCue) {}
}

/// Logs cues instead of vibrating. Used by the demo bin.
#[derive(Debug, Default)]
pub struct LogHaptics;

impl HapticSink for LogHaptics {
    fn trigger(&mut self, cue: HapticCue) {
        log::debug!("haptic cue: {cue:?}");
    }
}
