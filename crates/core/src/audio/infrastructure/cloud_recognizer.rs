//! Remote transcription over an OpenAI-compatible `audio/transcriptions`
//! endpoint. One blocking request per utterance, no retry.

use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::speech_recognizer::{RecognizeError, SpeechRecognizer};
use crate::audio::infrastructure::wav::encode_wav;
use crate::shared::constants::{DEFAULT_TRANSCRIPTION_ENDPOINT, DEFAULT_TRANSCRIPTION_MODEL};

#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    pub endpoint: String,
    pub model: String,
    pub language: String,
    /// Bearer token. None means whatever the service accepts by default.
    pub api_key: Option<String>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TRANSCRIPTION_ENDPOINT.to_string(),
            model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            language: "en".to_string(),
            api_key: None,
        }
    }
}

pub struct CloudRecognizer {
    config: RecognizerConfig,
    client: reqwest::blocking::Client,
}

impl CloudRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl SpeechRecognizer for CloudRecognizer {
    fn transcribe(&self, audio: &AudioSegment) -> Result<String, RecognizeError> {
        let wav = encode_wav(audio).map_err(|e| RecognizeError::ServiceUnavailable {
            detail: format!("failed to encode upload body: {e}"),
        })?;

        let file = Part::bytes(wav)
            .file_name("utterance.wav")
            .mime_str("audio/wav")
            .map_err(|e| RecognizeError::ServiceUnavailable {
                detail: e.to_string(),
            })?;
        let form = Form::new()
            .part("file", file)
            .text("model", self.config.model.clone())
            .text("language", self.config.language.clone())
            .text("response_format", "json");

        let mut request = self.client.post(&self.config.endpoint).multipart(form);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        log::debug!(
            "submitting {:.2}s utterance to {}",
            audio.duration(),
            self.config.endpoint
        );

        let response = request
            .send()
            .map_err(|e| RecognizeError::ServiceUnavailable {
                detail: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| RecognizeError::ServiceUnavailable {
                detail: e.to_string(),
            })?;

        if !status.is_success() {
            return Err(RecognizeError::ServiceUnavailable {
                detail: format!("{status}: {}", body.trim()),
            });
        }

        transcript_from_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// A well-formed response with no usable text means the service heard the
/// audio but could not transcribe it.
fn transcript_from_response(body: &str) -> Result<String, RecognizeError> {
    let parsed: TranscriptionResponse =
        serde_json::from_str(body).map_err(|e| RecognizeError::ServiceUnavailable {
            detail: format!("malformed response: {e}"),
        })?;

    let text = parsed.text.trim();
    if text.is_empty() {
        Err(RecognizeError::UnrecognizedSpeech)
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_text() {
        let result = transcript_from_response(r#"{"text": "hello world"}"#);
        assert_eq!(result.unwrap(), "hello world");
    }

    #[test]
    fn test_response_text_is_trimmed() {
        let result = transcript_from_response(r#"{"text": "  hello \n"}"#);
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn test_empty_text_is_unrecognized_speech() {
        let result = transcript_from_response(r#"{"text": ""}"#);
        assert_eq!(result.unwrap_err(), RecognizeError::UnrecognizedSpeech);
    }

    #[test]
    fn test_whitespace_text_is_unrecognized_speech() {
        let result = transcript_from_response(r#"{"text": " \n\t "}"#);
        assert_eq!(result.unwrap_err(), RecognizeError::UnrecognizedSpeech);
    }

    #[test]
    fn test_malformed_body_is_service_error() {
        let result = transcript_from_response("not json");
        assert!(matches!(
            result.unwrap_err(),
            RecognizeError::ServiceUnavailable { .. }
        ));
    }

    #[test]
    fn test_missing_text_field_is_service_error() {
        let result = transcript_from_response(r#"{"status": "ok"}"#);
        assert!(matches!(
            result.unwrap_err(),
            RecognizeError::ServiceUnavailable { .. }
        ));
    }

    #[test]
    fn test_unreachable_endpoint_is_service_unavailable() {
        let recognizer = CloudRecognizer::new(RecognizerConfig {
            endpoint: "http://127.0.0.1:1/transcriptions".into(),
            ..RecognizerConfig::default()
        });
        let audio = AudioSegment::new(vec![0.0; 160], 16_000, 1);
        let err = recognizer.transcribe(&audio).unwrap_err();
        assert!(matches!(err, RecognizeError::ServiceUnavailable { .. }));
    }
}
