pub mod audio_input;
pub mod audio_segment;
pub mod endpointer;
pub mod speech_recognizer;
