//! Static letter images, addressed by naming convention:
//! `{letters_dir}/{letter}.jpg`.

use std::path::{Path, PathBuf};

use super::visual_error::VisualError;
use crate::shared::constants::{LETTER_EXTENSION, LETTER_HOLD};
use crate::shared::frame::Frame;

/// Conventional path for a letter image. Changing this naming scheme is a
/// breaking interface change.
pub fn letter_image_path(letters_dir: &Path, letter: char) -> PathBuf {
    letters_dir.join(format!("{letter}.{LETTER_EXTENSION}"))
}

/// Decode the image for one letter. The returned frame carries the fixed
/// spelling hold duration as its delay.
pub fn load_letter(letters_dir: &Path, letter: char) -> Result<Frame, VisualError> {
    let path = letter_image_path(letters_dir, letter);

    let img = image::open(&path).map_err(|e| match e {
        image::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            VisualError::ResourceNotFound { path: path.clone() }
        }
        image::ImageError::IoError(io) => VisualError::Io {
            path: path.clone(),
            source: io,
        },
        other => VisualError::Decode {
            path: path.clone(),
            source: other,
        },
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Frame::new(rgba.into_raw(), width, height, LETTER_HOLD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn write_letter(dir: &Path, letter: char) {
        let img = RgbImage::from_pixel(10, 12, image::Rgb([10, 20, 30]));
        img.save(letter_image_path(dir, letter)).unwrap();
    }

    #[test]
    fn test_path_follows_naming_convention() {
        assert_eq!(
            letter_image_path(Path::new("/visuals/letters"), 'a'),
            PathBuf::from("/visuals/letters/a.jpg")
        );
    }

    #[test]
    fn test_load_decodes_letter_image() {
        let dir = tempfile::tempdir().unwrap();
        write_letter(dir.path(), 'x');

        let frame = load_letter(dir.path(), 'x').unwrap();
        assert_eq!(frame.width(), 10);
        assert_eq!(frame.height(), 12);
        assert_eq!(frame.rgba().len(), 10 * 12 * 4);
        assert_eq!(frame.delay(), LETTER_HOLD);
    }

    #[test]
    fn test_missing_letter_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_letter(dir.path(), 'q').unwrap_err();
        match err {
            VisualError::ResourceNotFound { path } => {
                assert_eq!(path, letter_image_path(dir.path(), 'q'));
            }
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_letter_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(letter_image_path(dir.path(), 'z'), b"not a jpeg").unwrap();
        let err = load_letter(dir.path(), 'z').unwrap_err();
        assert!(matches!(err, VisualError::Decode { .. }));
    }
}
