// Shrthnd Word Buffer
// Per-session token accumulator with boundary and retraction semantics

/// Characters that terminate a word.
pub const BOUNDARY_CHARS: &[char] = &[' ', '\n', '.', ',', '!', '?'];

/// Whether `c` signals a word boundary.
pub fn is_boundary_char(c: char) -> bool {
    BOUNDARY_CHARS.contains(&c)
}

/// Buffer state, exposed for tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    Empty,
    Accumulating,
}

/// Accumulates intended glyphs into the current word.
///
/// Boundary characters never enter the buffer; callers classify each glyph
/// before mutating it. Backspace clamps at empty so the buffer cannot
/// desync below the real edit surface.
#[derive(Debug, Default)]
pub struct WordBuffer {
    word: String,
}

impl WordBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the buffer.
    pub fn state(&self) -> BufferState {
        if self.word.is_empty() {
            BufferState::Empty
        } else {
            BufferState::Accumulating
        }
    }

    /// The word accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.word
    }

    /// Feed one intended glyph. Alphanumerics accumulate; everything else
    /// is ignored. Returns whether the glyph was accepted.
    pub fn on_char(&mut self, glyph: char) -> bool {
        if glyph.is_alphanumeric() {
            self.word.push(glyph);
            true
        } else {
            false
        }
    }

    /// A boundary arrived: hand back the buffered word (possibly empty)
    /// and reset to `Empty`.
    pub fn on_boundary(&mut self) -> String {
        std::mem::take(&mut self.word)
    }

    /// The user erased one character. Clamps at empty.
    pub fn on_backspace(&mut self) {
        self.word.pop();
    }

    /// Discard any buffered word.
    pub fn clear(&mut self) {
        self.word.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_then_boundary() {
        let mut buf = WordBuffer::new();
        for c in "btw".chars() {
            assert!(buf.on_char(c));
        }
        assert_eq!(buf.state(), BufferState::Accumulating);
        assert_eq!(buf.on_boundary(), "btw");
        assert_eq!(buf.state(), BufferState::Empty);
    }

    #[test]
    fn test_boundary_on_empty_yields_empty_word() {
        let mut buf = WordBuffer::new();
        assert_eq!(buf.on_boundary(), "");
        assert_eq!(buf.state(), BufferState::Empty);
    }

    #[test]
    fn test_non_alphanumeric_is_ignored() {
        let mut buf = WordBuffer::new();
        buf.on_char('a');
        assert!(!buf.on_char('\''));
        assert!(!buf.on_char('-'));
        buf.on_char('b');
        assert_eq!(buf.as_str(), "ab");
    }

    #[test]
    fn test_backspace_retracts() {
        let mut buf = WordBuffer::new();
        buf.on_char('i');
        buf.on_char('d');
        buf.on_char('k');
        buf.on_backspace();
        assert_eq!(buf.as_str(), "id");
    }

    #[test]
    fn test_backspace_never_underflows() {
        let mut buf = WordBuffer::new();
        for _ in 0..10 {
            buf.on_backspace();
        }
        assert_eq!(buf.state(), BufferState::Empty);
        buf.on_char('x');
        buf.on_backspace();
        buf.on_backspace();
        assert_eq!(buf.state(), BufferState::Empty);
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn test_boundary_chars_classified() {
        for c in [' ', '\n', '.', ',', '!', '?'] {
            assert!(is_boundary_char(c));
        }
        assert!(!is_boundary_char('a'));
        assert!(!is_boundary_char(';'));
    }

    #[test]
    fn test_multibyte_glyphs_retract_cleanly() {
        let mut buf = WordBuffer::new();
        buf.on_char('ü');
        buf.on_char('ß');
        buf.on_backspace();
        assert_eq!(buf.as_str(), "ü");
    }
}
