use std::thread;

use crossbeam_channel::Receiver;

use signbridge_core::audio::domain::audio_input::CapturePhase;
use signbridge_core::audio::domain::endpointer::EndpointerConfig;
use signbridge_core::audio::domain::speech_recognizer::RecognizeError;
use signbridge_core::audio::infrastructure::cloud_recognizer::{CloudRecognizer, RecognizerConfig};
use signbridge_core::audio::infrastructure::cpal_audio_input::CpalAudioInput;
use signbridge_core::pipeline::listen_once_use_case::{ListenError, ListenOnceUseCase};

/// Messages sent from the listen worker thread to the UI.
#[derive(Debug, Clone)]
pub enum ListenEvent {
    Calibrating,
    Listening,
    Transcribed(String),
    /// Capture or recognition failed; the message is ready for the
    /// transcript log. The cycle is over, nothing is retried.
    Failed(String),
}

/// Parameters for one listen cycle.
pub struct ListenParams {
    pub device_name: Option<String>,
    pub recognizer: RecognizerConfig,
    pub endpointer: EndpointerConfig,
}

/// Spawn a background worker that captures one utterance and transcribes
/// it. The blocking capture and network call stay off the UI thread; the
/// UI polls the returned channel.
pub fn spawn(params: ListenParams) -> Receiver<ListenEvent> {
    let (tx, rx) = crossbeam_channel::unbounded::<ListenEvent>();

    thread::spawn(move || {
        let mut use_case = ListenOnceUseCase::new(
            Box::new(CpalAudioInput::new(params.device_name, params.endpointer)),
            Box::new(CloudRecognizer::new(params.recognizer)),
        );

        let tx_phase = tx.clone();
        let on_phase = move |phase: CapturePhase| {
            let event = match phase {
                CapturePhase::Calibrating => ListenEvent::Calibrating,
                CapturePhase::Listening => ListenEvent::Listening,
            };
            let _ = tx_phase.send(event);
        };

        let event = match use_case.execute(&on_phase) {
            Ok(transcript) => ListenEvent::Transcribed(transcript),
            Err(e) => ListenEvent::Failed(failure_message(&e)),
        };
        let _ = tx.send(event);
    });

    rx
}

fn failure_message(error: &ListenError) -> String {
    match error {
        ListenError::Recognize(RecognizeError::UnrecognizedSpeech) => {
            "Sorry, I could not understand the audio.".to_string()
        }
        ListenError::Recognize(RecognizeError::ServiceUnavailable { detail }) => {
            format!("Could not reach the speech recognition service; {detail}")
        }
        ListenError::Capture(e) => format!("Microphone problem: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signbridge_core::audio::domain::audio_input::CaptureError;

    #[test]
    fn test_unrecognized_speech_message() {
        let msg = failure_message(&ListenError::Recognize(RecognizeError::UnrecognizedSpeech));
        assert_eq!(msg, "Sorry, I could not understand the audio.");
    }

    #[test]
    fn test_service_unavailable_message_includes_detail() {
        let msg = failure_message(&ListenError::Recognize(
            RecognizeError::ServiceUnavailable {
                detail: "503 Service Unavailable".into(),
            },
        ));
        assert!(msg.contains("503 Service Unavailable"));
    }

    #[test]
    fn test_capture_failure_message() {
        let msg = failure_message(&ListenError::Capture(CaptureError::NoSpeech));
        assert!(msg.starts_with("Microphone problem"));
    }
}
