use std::time::Duration;

/// Spoken token that ends a cycle without any visual playback.
pub const EXIT_PHRASE: &str = "goodbye";

/// How long each letter image stays on screen in the spelling path.
pub const LETTER_HOLD: Duration = Duration::from_millis(800);

/// Fallback frame delay for GIF frames that declare a zero delay.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Capture sample rate. 16 kHz mono is what speech endpoints expect.
pub const CAPTURE_SAMPLE_RATE: u32 = 16_000;

pub const DEFAULT_TRANSCRIPTION_ENDPOINT: &str =
    "https://api.openai.com/v1/audio/transcriptions";
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

/// File extension for phrase animations under the animation directory.
pub const ANIMATION_EXTENSION: &str = "gif";

/// File extension for per-letter images under the letters directory.
pub const LETTER_EXTENSION: &str = "jpg";
