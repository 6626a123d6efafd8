use std::time::Duration;

use crate::shared::frame::Frame;

/// A looping animation: the ordered decoded frames plus the index of the
/// frame currently on screen. All frames are decoded eagerly at load time;
/// advancing never touches the filesystem.
#[derive(Clone, Debug)]
pub struct Animation {
    frames: Vec<Frame>,
    index: usize,
}

impl Animation {
    /// `frames` must be non-empty; loaders reject sources with no frames.
    pub fn new(frames: Vec<Frame>) -> Self {
        debug_assert!(!frames.is_empty());
        Self { frames, index: 0 }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.index]
    }

    /// Display delay of the frame currently on screen; the playback loop
    /// schedules the next advance after this long.
    pub fn current_delay(&self) -> Duration {
        self.current_frame().delay()
    }

    /// Move to the next frame, wrapping modulo the frame count.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }
}
