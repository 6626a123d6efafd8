use std::time::Duration;

/// A decoded image frame: tightly packed RGBA pixels plus how long the
/// frame should stay on screen before the next one replaces it.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
    delay: Duration,
}

impl Frame {
    pub fn new(rgba: Vec<u8>, width: u32, height: u32, delay: Duration) -> Self {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        Self {
            rgba,
            width,
            height,
            delay,
        }
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Consumes the frame, returning the pixel buffer without copying.
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
