use thiserror::Error;

use super::audio_segment::AudioSegment;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizeError {
    /// Audio was captured but the service could not map it to text.
    #[error("could not understand the audio")]
    UnrecognizedSpeech,
    /// The transcription backend was unreachable or returned an error.
    #[error("speech service unavailable: {detail}")]
    ServiceUnavailable { detail: String },
}

/// Domain interface for speech-to-text transcription.
///
/// Implementations submit a captured utterance and yield the raw
/// transcript, or one of the two typed failures. Never retried.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, audio: &AudioSegment) -> Result<String, RecognizeError>;
}
