//! Utterance endpointing: ambient-noise calibration followed by a
//! speech-onset / trailing-silence state machine.
//!
//! Timing is counted in samples rather than wall-clock instants, so the
//! machine is deterministic regardless of how capture chunks arrive.

use super::audio_segment::{rms, AudioSegment};

#[derive(Debug, Clone, Copy)]
pub struct EndpointerConfig {
    /// Ambient sound measured over this window before listening starts.
    pub calibration_ms: u32,
    /// Speech threshold = ambient RMS * this factor, floored at `min_threshold`.
    pub threshold_factor: f32,
    pub min_threshold: f32,
    /// Give up if no speech onset within this window after calibration.
    pub max_wait_ms: u32,
    /// This much continuous silence ends the utterance.
    pub trailing_silence_ms: u32,
    /// Hard cap on utterance length.
    pub max_utterance_ms: u32,
}

impl Default for EndpointerConfig {
    fn default() -> Self {
        Self {
            calibration_ms: 500,
            threshold_factor: 2.5,
            min_threshold: 0.01,
            max_wait_ms: 8_000,
            trailing_silence_ms: 800,
            max_utterance_ms: 15_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointerStatus {
    /// Still measuring the ambient noise floor.
    Calibrating,
    /// Calibrated, waiting for speech onset.
    WaitingForSpeech,
    /// Speech detected, collecting the utterance.
    Capturing,
    /// Trailing silence (or the length cap) ended the utterance.
    Complete,
    /// No speech onset within the wait window.
    TimedOut,
}

/// Feeds on capture chunks, yields exactly one utterance.
pub struct Endpointer {
    config: EndpointerConfig,
    sample_rate: u32,
    status: EndpointerStatus,
    threshold: f32,
    calibration_sum_squares: f64,
    calibration_samples: usize,
    waited_samples: usize,
    silence_run_samples: usize,
    utterance: Vec<f32>,
}

impl Endpointer {
    pub fn new(config: EndpointerConfig, sample_rate: u32) -> Self {
        Self {
            config,
            sample_rate,
            status: EndpointerStatus::Calibrating,
            threshold: config.min_threshold,
            calibration_sum_squares: 0.0,
            calibration_samples: 0,
            waited_samples: 0,
            silence_run_samples: 0,
            utterance: Vec::new(),
        }
    }

    pub fn status(&self) -> EndpointerStatus {
        self.status
    }

    /// Speech threshold derived from calibration. Meaningful once the
    /// status has left `Calibrating`.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Process one chunk of mono samples and return the updated status.
    /// Chunks arriving after `Complete` or `TimedOut` are ignored.
    pub fn push(&mut self, chunk: &[f32]) -> EndpointerStatus {
        if chunk.is_empty() {
            return self.status;
        }
        match self.status {
            EndpointerStatus::Calibrating => self.calibrate(chunk),
            EndpointerStatus::WaitingForSpeech => self.wait_for_onset(chunk),
            EndpointerStatus::Capturing => self.capture(chunk),
            EndpointerStatus::Complete | EndpointerStatus::TimedOut => {}
        }
        self.status
    }

    /// Consume the endpointer, returning whatever was captured.
    pub fn into_utterance(self) -> AudioSegment {
        AudioSegment::new(self.utterance, self.sample_rate, 1)
    }

    fn calibrate(&mut self, chunk: &[f32]) {
        self.calibration_sum_squares += chunk.iter().map(|&s| s as f64 * s as f64).sum::<f64>();
        self.calibration_samples += chunk.len();

        if self.calibration_samples >= self.ms_to_samples(self.config.calibration_ms) {
            let ambient =
                (self.calibration_sum_squares / self.calibration_samples as f64).sqrt() as f32;
            self.threshold = (ambient * self.config.threshold_factor).max(self.config.min_threshold);
            log::debug!(
                "calibrated: ambient rms {:.4}, speech threshold {:.4}",
                ambient,
                self.threshold
            );
            self.status = EndpointerStatus::WaitingForSpeech;
        }
    }

    fn wait_for_onset(&mut self, chunk: &[f32]) {
        if rms(chunk) > self.threshold {
            self.status = EndpointerStatus::Capturing;
            self.silence_run_samples = 0;
            self.utterance.extend_from_slice(chunk);
            return;
        }
        self.waited_samples += chunk.len();
        if self.waited_samples >= self.ms_to_samples(self.config.max_wait_ms) {
            self.status = EndpointerStatus::TimedOut;
        }
    }

    fn capture(&mut self, chunk: &[f32]) {
        self.utterance.extend_from_slice(chunk);

        if rms(chunk) > self.threshold {
            self.silence_run_samples = 0;
        } else {
            self.silence_run_samples += chunk.len();
            if self.silence_run_samples >= self.ms_to_samples(self.config.trailing_silence_ms) {
                self.status = EndpointerStatus::Complete;
                return;
            }
        }

        if self.utterance.len() >= self.ms_to_samples(self.config.max_utterance_ms) {
            self.status = EndpointerStatus::Complete;
        }
    }

    fn ms_to_samples(&self, ms: u32) -> usize {
        (self.sample_rate as u64 * ms as u64 / 1000) as usize
    }
}
