use thiserror::Error;

use crate::audio::domain::audio_input::{AudioInput, CaptureError, CapturePhase};
use crate::audio::domain::speech_recognizer::{RecognizeError, SpeechRecognizer};

#[derive(Error, Debug)]
pub enum ListenError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Recognize(#[from] RecognizeError),
}

/// One full capture-and-transcribe cycle: record a single utterance, send
/// it to the recognizer, return the raw transcript. No retry on failure;
/// the caller reports the error and the application stays usable.
pub struct ListenOnceUseCase {
    input: Box<dyn AudioInput>,
    recognizer: Box<dyn SpeechRecognizer>,
}

impl ListenOnceUseCase {
    pub fn new(input: Box<dyn AudioInput>, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self { input, recognizer }
    }

    pub fn execute(
        &mut self,
        on_phase: &(dyn Fn(CapturePhase) + Send + Sync),
    ) -> Result<String, ListenError> {
        let utterance = self.input.record_utterance(on_phase)?;
        log::info!("captured {:.2}s utterance", utterance.duration());

        let transcript = self.recognizer.transcribe(&utterance)?;
        log::info!("transcribed: {transcript:?}");
        Ok(transcript)
    }
}
