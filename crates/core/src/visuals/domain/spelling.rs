/// The letter-sequence playback plan: one step per alphabetic character of
/// the normalized transcript, in order. Digits, whitespace, and residual
/// symbols contribute no step and no delay. An empty plan is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingSequence {
    letters: Vec<char>,
    index: usize,
}

impl SpellingSequence {
    pub fn plan(normalized: &str) -> Self {
        Self {
            letters: normalized.chars().filter(|c| c.is_alphabetic()).collect(),
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter currently on screen, None once the sequence is exhausted.
    pub fn current(&self) -> Option<char> {
        self.letters.get(self.index).copied()
    }

    /// Zero-based position of the current letter.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Step to the next letter and return it, or None when done.
    pub fn advance(&mut self) -> Option<char> {
        if self.index < self.letters.len() {
            self.index += 1;
        }
        self.current()
    }
}
