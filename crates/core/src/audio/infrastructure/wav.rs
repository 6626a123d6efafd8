//! In-memory WAV encoding for the transcription upload body.

use std::io::Cursor;

use crate::audio::domain::audio_segment::AudioSegment;

/// Encode a segment as a 16-bit PCM WAV file in memory.
pub fn encode_wav(segment: &AudioSegment) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels: segment.channels(),
        sample_rate: segment.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for &sample in segment.samples() {
            writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}
