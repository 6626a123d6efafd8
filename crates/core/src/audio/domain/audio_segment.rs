/// A captured utterance: interleaved PCM samples normalized to [-1.0, 1.0].
#[derive(Clone, Debug)]
pub struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }
}

/// Root-mean-square level of a block of samples, 0.0 for silence up to
/// ~0.707 for a full-scale sine wave.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f64 = samples.iter().map(|&s| s as f64 * s as f64).sum();
    (sum_squares / samples.len() as f64).sqrt() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_creates_segment_with_correct_fields() {
        let samples = vec![0.0f32; 16000];
        let seg = AudioSegment::new(samples.clone(), 16000, 1);
        assert_eq!(seg.samples(), &samples[..]);
        assert_eq!(seg.sample_rate(), 16000);
        assert_eq!(seg.channels(), 1);
    }

    #[test]
    fn test_duration_mono() {
        let seg = AudioSegment::new(vec![0.0; 48000], 16000, 1);
        assert_relative_eq!(seg.duration(), 3.0);
    }

    #[test]
    fn test_duration_stereo() {
        let seg = AudioSegment::new(vec![0.0; 96000], 48000, 2);
        assert_relative_eq!(seg.duration(), 1.0);
    }

    #[test]
    fn test_empty_segment() {
        let seg = AudioSegment::new(Vec::new(), 16000, 1);
        assert!(seg.is_empty());
        assert_relative_eq!(seg.duration(), 0.0);
    }

    #[test]
    fn test_rms_silence_is_zero() {
        assert_eq!(rms(&vec![0.0; 1000]), 0.0);
    }

    #[test]
    fn test_rms_full_scale() {
        let full = vec![1.0f32; 1000];
        assert_relative_eq!(rms(&full), 1.0, epsilon = 0.001);
    }

    #[test]
    fn test_rms_negative_matches_positive() {
        let pos = vec![0.25f32; 500];
        let neg = vec![-0.25f32; 500];
        assert_relative_eq!(rms(&pos), rms(&neg));
    }

    #[test]
    fn test_rms_empty_samples() {
        assert_eq!(rms(&[]), 0.0);
    }
}
