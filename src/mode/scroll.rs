//! Scrolling text
//!
//! Shows a text one glyph column per tick, so a light row held still reads
//! as a vertical strip of the text sliding past. Each glyph is followed by
//! [`INTER_CHAR_SPACING`] blank columns and centered within the row.
//!
//! The text is shown once. After its last character the mode stays dark
//! until it is reset.

use heapless::Vec;

use super::Mode;
use crate::config::{FONT_GLYPH_HEIGHT, INTER_CHAR_SPACING, SCROLL_TEXT_CAPACITY};
use crate::font::Font;
use crate::mask::{Bitmask, LightCount};

/// End of text marker
const TERMINATOR: u8 = 0;

/// Fixed capacity text buffer
///
/// Anything beyond [`SCROLL_TEXT_CAPACITY`] bytes, and anything after an
/// embedded NUL, is dropped.
#[derive(Debug, Clone, Default)]
pub struct ScrollText {
    bytes: Vec<u8, SCROLL_TEXT_CAPACITY>,
}

impl ScrollText {
    /// Copy as much of `text` as fits
    pub fn truncated(text: &str) -> Self {
        let mut bytes = Vec::new();
        for &byte in text.as_bytes() {
            if byte == TERMINATOR || bytes.push(byte).is_err() {
                break;
            }
        }
        Self { bytes }
    }

    /// Character at `index`, the terminator past the end
    pub fn char_at(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(TERMINATOR)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Position of the renderer within the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub char_index: usize,
    pub current_char: u8,
    /// Glyph width plus spacing
    pub char_width: u8,
    /// Next column of the current glyph to show
    pub column: u8,
}

impl ScrollState {
    const fn is_finished(&self) -> bool {
        self.current_char == TERMINATOR
    }

    fn load(&mut self, index: usize, text: &ScrollText, font: &dyn Font) {
        self.char_index = index;
        self.current_char = text.char_at(index);
        self.char_width = font
            .glyph_width(self.current_char)
            .saturating_add(INTER_CHAR_SPACING);
        self.column = 0;
    }
}

/// Scroll mode - walks a text through a bitmap font
pub struct ScrollTextMode {
    text: ScrollText,
    font: &'static dyn Font,
    state: ScrollState,
}

impl ScrollTextMode {
    pub fn new(text: ScrollText, font: &'static dyn Font) -> Self {
        let mut mode = Self {
            text,
            font,
            state: ScrollState::default(),
        };
        Mode::reset(&mut mode);
        mode
    }

    /// Replace the text and rewind to its start
    pub fn set_text(&mut self, text: &str) {
        self.text = ScrollText::truncated(text);
        Mode::reset(self);
    }

    pub fn text(&self) -> &ScrollText {
        &self.text
    }

    pub const fn state(&self) -> &ScrollState {
        &self.state
    }
}

impl Mode for ScrollTextMode {
    fn tick(&mut self, _tick: u32, lights: LightCount) -> Bitmask {
        if self.state.is_finished() {
            return 0;
        }

        while self.state.column >= self.state.char_width {
            self.state.load(self.state.char_index + 1, &self.text, self.font);
            if self.state.is_finished() {
                return 0;
            }
        }

        let bits = self
            .font
            .glyph_column(self.state.current_char, self.state.column);
        self.state.column += 1;

        let shift = lights.center_shift(FONT_GLYPH_HEIGHT);
        lights.clip(bits << shift)
    }

    fn reset(&mut self) {
        self.state.load(0, &self.text, self.font);
    }
}
