pub mod cloud_recognizer;
pub mod cpal_audio_input;
pub mod wav;
