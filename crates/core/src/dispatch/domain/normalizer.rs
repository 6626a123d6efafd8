/// Normalize a raw transcript for matching: lowercase plus full
/// punctuation removal. Idempotent.
pub fn normalize(transcript: &str) -> String {
    transcript
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
