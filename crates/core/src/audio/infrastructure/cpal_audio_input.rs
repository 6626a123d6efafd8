//! Live microphone capture using CPAL.
//!
//! The input stream is opened per `record_utterance` call and lives on the
//! function's stack, so it is released on every exit path, including
//! failure. Capture targets 16 kHz mono f32; devices that only expose a
//! different native config are converted in software.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::audio::domain::audio_input::{AudioInput, CaptureError, CapturePhase};
use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::endpointer::{Endpointer, EndpointerConfig, EndpointerStatus};
use crate::shared::constants::CAPTURE_SAMPLE_RATE;

/// How often the capture loop drains the shared buffer.
const DRAIN_INTERVAL: Duration = Duration::from_millis(50);

type SampleBuffer = Arc<Mutex<Vec<f32>>>;

pub struct CpalAudioInput {
    device_name: Option<String>,
    endpointer_config: EndpointerConfig,
}

impl CpalAudioInput {
    pub fn new(device_name: Option<String>, endpointer_config: EndpointerConfig) -> Self {
        Self {
            device_name,
            endpointer_config,
        }
    }

    fn resolve_device(&self) -> Result<cpal::Device, CaptureError> {
        let host = cpal::default_host();

        if let Some(wanted) = &self.device_name {
            let devices = host
                .input_devices()
                .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;
            for device in devices {
                if device.name().as_deref() == Ok(wanted.as_str()) {
                    return Ok(device);
                }
            }
            return Err(CaptureError::DeviceUnavailable(format!(
                "input device '{wanted}' not found"
            )));
        }

        host.default_input_device()
            .ok_or_else(|| CaptureError::DeviceUnavailable("no default input device".into()))
    }

    /// Try 16 kHz mono f32 first (PipeWire/PulseAudio convert transparently),
    /// then the device's native config with software conversion.
    fn build_stream(
        device: &cpal::Device,
        buffer: SampleBuffer,
    ) -> Result<cpal::Stream, CaptureError> {
        let preferred = cpal::StreamConfig {
            channels: 1,
            sample_rate: cpal::SampleRate(CAPTURE_SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };

        let err_callback = |err| {
            log::warn!("audio stream error: {err}");
        };

        let sink = Arc::clone(&buffer);
        if let Ok(stream) = device.build_input_stream(
            &preferred,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                if let Ok(mut buf) = sink.lock() {
                    buf.extend_from_slice(data);
                }
            },
            err_callback,
            None,
        ) {
            return Ok(stream);
        }

        Self::build_native_stream(device, buffer)
    }

    fn build_native_stream(
        device: &cpal::Device,
        buffer: SampleBuffer,
    ) -> Result<cpal::Stream, CaptureError> {
        let native = device
            .default_input_config()
            .map_err(|e| CaptureError::Stream(e.to_string()))?;

        let channels = native.channels() as usize;
        let native_rate = native.sample_rate().0;
        let config: cpal::StreamConfig = native.clone().into();

        log::info!(
            "capturing at native format ({channels}ch/{native_rate}Hz/{:?}), converting in software",
            native.sample_format()
        );

        let err_callback = |err| {
            log::warn!("audio stream error: {err}");
        };

        match native.sample_format() {
            cpal::SampleFormat::F32 => {
                let sink = Arc::clone(&buffer);
                device
                    .build_input_stream(
                        &config,
                        move |data: &[f32], _: &cpal::InputCallbackInfo| {
                            let converted = to_mono_16khz(data, channels, native_rate);
                            if let Ok(mut buf) = sink.lock() {
                                buf.extend_from_slice(&converted);
                            }
                        },
                        err_callback,
                        None,
                    )
                    .map_err(|e| CaptureError::Stream(e.to_string()))
            }
            cpal::SampleFormat::I16 => {
                let sink = Arc::clone(&buffer);
                device
                    .build_input_stream(
                        &config,
                        move |data: &[i16], _: &cpal::InputCallbackInfo| {
                            let floats: Vec<f32> =
                                data.iter().map(|&s| s as f32 / i16::MAX as f32).collect();
                            let converted = to_mono_16khz(&floats, channels, native_rate);
                            if let Ok(mut buf) = sink.lock() {
                                buf.extend_from_slice(&converted);
                            }
                        },
                        err_callback,
                        None,
                    )
                    .map_err(|e| CaptureError::Stream(e.to_string()))
            }
            fmt => Err(CaptureError::Stream(format!(
                "unsupported native sample format: {fmt:?}"
            ))),
        }
    }
}

impl AudioInput for CpalAudioInput {
    fn record_utterance(
        &mut self,
        on_phase: &(dyn Fn(CapturePhase) + Send + Sync),
    ) -> Result<AudioSegment, CaptureError> {
        let device = self.resolve_device()?;
        let buffer: SampleBuffer = Arc::new(Mutex::new(Vec::new()));

        let stream = Self::build_stream(&device, Arc::clone(&buffer))?;
        stream
            .play()
            .map_err(|e| CaptureError::Stream(e.to_string()))?;

        on_phase(CapturePhase::Calibrating);
        let mut endpointer = Endpointer::new(self.endpointer_config, CAPTURE_SAMPLE_RATE);
        let mut listening_announced = false;

        loop {
            thread::sleep(DRAIN_INTERVAL);
            let chunk: Vec<f32> = {
                let mut buf = buffer
                    .lock()
                    .map_err(|e| CaptureError::Stream(e.to_string()))?;
                std::mem::take(&mut *buf)
            };

            match endpointer.push(&chunk) {
                EndpointerStatus::Complete => break,
                EndpointerStatus::TimedOut => return Err(CaptureError::NoSpeech),
                EndpointerStatus::WaitingForSpeech | EndpointerStatus::Capturing => {
                    if !listening_announced {
                        on_phase(CapturePhase::Listening);
                        listening_announced = true;
                    }
                }
                EndpointerStatus::Calibrating => {}
            }
        }

        drop(stream);
        Ok(endpointer.into_utterance())
    }
}

/// Mix interleaved multi-channel audio down to mono and resample to the
/// capture rate by nearest-sample selection.
fn to_mono_16khz(samples: &[f32], channels: usize, source_rate: u32) -> Vec<f32> {
    let mono: Vec<f32> = if channels <= 1 {
        samples.to_vec()
    } else {
        samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    if source_rate == CAPTURE_SAMPLE_RATE {
        return mono;
    }

    let ratio = source_rate as f64 / CAPTURE_SAMPLE_RATE as f64;
    let out_len = (mono.len() as f64 / ratio) as usize;
    (0..out_len)
        .map(|i| mono[((i as f64 * ratio) as usize).min(mono.len().saturating_sub(1))])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mono_passthrough_at_capture_rate() {
        let samples = vec![0.1, 0.2, 0.3];
        assert_eq!(to_mono_16khz(&samples, 1, CAPTURE_SAMPLE_RATE), samples);
    }

    #[test]
    fn test_stereo_mixdown_averages_channels() {
        let samples = vec![1.0, 0.0, 0.5, 0.5];
        let mono = to_mono_16khz(&samples, 2, CAPTURE_SAMPLE_RATE);
        assert_eq!(mono.len(), 2);
        assert_relative_eq!(mono[0], 0.5);
        assert_relative_eq!(mono[1], 0.5);
    }

    #[test]
    fn test_resample_halves_sample_count() {
        let samples = vec![0.25; 32_000];
        let mono = to_mono_16khz(&samples, 1, 32_000);
        assert_eq!(mono.len(), 16_000);
        assert_relative_eq!(mono[0], 0.25);
    }

    #[test]
    fn test_resample_empty_input() {
        assert!(to_mono_16khz(&[], 2, 48_000).is_empty());
    }

    #[test]
    fn test_resolve_unknown_device_fails() {
        let input = CpalAudioInput::new(
            Some("NoSuchDevice12345".into()),
            EndpointerConfig::default(),
        );
        let err = input.resolve_device().err().expect("device should not resolve");
        assert!(matches!(err, CaptureError::DeviceUnavailable(_)));
    }
}
