use thiserror::Error;

use super::audio_segment::AudioSegment;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("no audio input device available: {0}")]
    DeviceUnavailable(String),
    #[error("failed to open audio stream: {0}")]
    Stream(String),
    #[error("no speech detected before the listening window closed")]
    NoSpeech,
}

/// Capture phase, reported so the interface can drive its listening
/// indicator. Reverting the indicator on exit is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    /// Measuring ambient noise before listening.
    Calibrating,
    /// Waiting for and collecting the utterance.
    Listening,
}

/// Domain interface for a scoped, single-use microphone capture session.
///
/// `record_utterance` blocks until one complete utterance is captured.
/// Implementations must release the input device on every exit path.
pub trait AudioInput: Send {
    fn record_utterance(
        &mut self,
        on_phase: &(dyn Fn(CapturePhase) + Send + Sync),
    ) -> Result<AudioSegment, CaptureError>;
}
