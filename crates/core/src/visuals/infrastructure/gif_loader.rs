//! Animation loading: eager GIF decode with per-frame timing.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;

use super::visual_error::VisualError;
use crate::shared::constants::DEFAULT_FRAME_DELAY;
use crate::shared::frame::Frame;
use crate::visuals::domain::animation::Animation;

/// Decode every frame of a GIF into memory, reading each frame's display
/// delay from the source. Frames declaring a zero delay get the
/// conventional 100 ms fallback.
pub fn load_animation(path: &Path) -> Result<Animation, VisualError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VisualError::ResourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VisualError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let decoder = GifDecoder::new(BufReader::new(file)).map_err(|e| VisualError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_frames =
        decoder
            .into_frames()
            .collect_frames()
            .map_err(|e| VisualError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;

    if source_frames.is_empty() {
        return Err(VisualError::NoFrames {
            path: path.to_path_buf(),
        });
    }

    let frames = source_frames
        .into_iter()
        .map(|frame| {
            let mut delay = Duration::from(frame.delay());
            if delay.is_zero() {
                delay = DEFAULT_FRAME_DELAY;
            }
            let buffer = frame.into_buffer();
            let (width, height) = buffer.dimensions();
            Frame::new(buffer.into_raw(), width, height, delay)
        })
        .collect();

    let animation = Animation::new(frames);
    log::debug!(
        "loaded {} with {} frame(s)",
        path.display(),
        animation.frame_count()
    );
    Ok(animation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, RgbaImage};
    use std::path::PathBuf;

    fn write_test_gif(dir: &Path, delays_ms: &[u32]) -> PathBuf {
        let path = dir.join("test.gif");
        let mut file = File::create(&path).unwrap();
        let mut encoder = GifEncoder::new(&mut file);

        let frames: Vec<image::Frame> = delays_ms
            .iter()
            .enumerate()
            .map(|(i, &ms)| {
                let shade = (i * 60) as u8;
                let buffer = RgbaImage::from_pixel(8, 6, image::Rgba([shade, 0, 0, 255]));
                image::Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(ms, 1))
            })
            .collect();
        encoder.encode_frames(frames).unwrap();
        path
    }

    #[test]
    fn test_load_decodes_all_frames_eagerly() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_gif(dir.path(), &[100, 100, 100]);
        let animation = load_animation(&path).unwrap();
        assert_eq!(animation.frame_count(), 3);
        assert_eq!(animation.current_index(), 0);
    }

    #[test]
    fn test_load_reads_per_frame_delays() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_gif(dir.path(), &[200, 300]);
        let mut animation = load_animation(&path).unwrap();
        assert_eq!(animation.current_delay(), Duration::from_millis(200));
        animation.advance();
        assert_eq!(animation.current_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_zero_delay_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_gif(dir.path(), &[0]);
        let animation = load_animation(&path).unwrap();
        assert_eq!(animation.current_delay(), DEFAULT_FRAME_DELAY);
    }

    #[test]
    fn test_frame_dimensions_and_pixel_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_gif(dir.path(), &[100]);
        let animation = load_animation(&path).unwrap();
        let frame = animation.current_frame();
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 6);
        assert_eq!(frame.rgba().len(), 8 * 6 * 4);
    }

    #[test]
    fn test_missing_file_is_resource_not_found() {
        let err = load_animation(Path::new("/nonexistent/hello.gif")).unwrap_err();
        assert!(matches!(err, VisualError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_non_gif_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.gif");
        std::fs::write(&path, b"definitely not a gif").unwrap();
        let err = load_animation(&path).unwrap_err();
        assert!(matches!(err, VisualError::Decode { .. }));
    }
}
