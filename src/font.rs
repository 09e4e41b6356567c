//! Bitmap fonts for the scroll mode
//!
//! A glyph is a run of columns, each column a bitmask with bit 0 at the top.
//! The scroll mode shows one column per tick, so the text moves across the
//! light row one column at a time.

use crate::mask::Bitmask;

/// Glyph lookup used by the scroll renderer
///
/// Both lookups must be total: characters the font does not know get some
/// well-defined (typically blank) glyph.
pub trait Font {
    /// Number of columns of the glyph for `ch`, without spacing
    fn glyph_width(&self, ch: u8) -> u8;

    /// Column `column` of the glyph for `ch`; columns past the width are blank
    fn glyph_column(&self, ch: u8, column: u8) -> Bitmask;
}

/// Variable width 5x7 font, 8 lights tall
///
/// Covers space, `A`-`Z`, `0`-`9` and `. , ! ? - : '`. Lower case letters
/// are shown as upper case. Anything else renders as a blank cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

/// Shared instance used by the default configuration
pub static BUILTIN_FONT: BuiltinFont = BuiltinFont;

const BLANK: &[u8] = &[0x00, 0x00, 0x00];

#[rustfmt::skip]
const fn glyph(ch: u8) -> &'static [u8] {
    match ch.to_ascii_uppercase() {
        b' ' => BLANK,
        b'!' => &[0x5f],
        b'\'' => &[0x05, 0x03],
        b',' => &[0x50, 0x30],
        b'-' => &[0x08, 0x08, 0x08, 0x08],
        b'.' => &[0x60, 0x60],
        b':' => &[0x36, 0x36],
        b'?' => &[0x02, 0x01, 0x51, 0x09, 0x06],
        b'0' => &[0x3e, 0x51, 0x49, 0x45, 0x3e],
        b'1' => &[0x42, 0x7f, 0x40],
        b'2' => &[0x42, 0x61, 0x51, 0x49, 0x46],
        b'3' => &[0x21, 0x41, 0x45, 0x4b, 0x31],
        b'4' => &[0x18, 0x14, 0x12, 0x7f, 0x10],
        b'5' => &[0x27, 0x45, 0x45, 0x45, 0x39],
        b'6' => &[0x3c, 0x4a, 0x49, 0x49, 0x30],
        b'7' => &[0x01, 0x71, 0x09, 0x05, 0x03],
        b'8' => &[0x36, 0x49, 0x49, 0x49, 0x36],
        b'9' => &[0x06, 0x49, 0x49, 0x29, 0x1e],
        b'A' => &[0x7c, 0x12, 0x11, 0x12, 0x7c],
        b'B' => &[0x7f, 0x49, 0x49, 0x49, 0x36],
        b'C' => &[0x3e, 0x41, 0x41, 0x41, 0x22],
        b'D' => &[0x7f, 0x41, 0x41, 0x22, 0x1c],
        b'E' => &[0x7f, 0x49, 0x49, 0x49, 0x41],
        b'F' => &[0x7f, 0x09, 0x09, 0x09, 0x01],
        b'G' => &[0x3e, 0x41, 0x49, 0x49, 0x7a],
        b'H' => &[0x7f, 0x08, 0x08, 0x08, 0x7f],
        b'I' => &[0x41, 0x7f, 0x41],
        b'J' => &[0x20, 0x40, 0x41, 0x3f, 0x01],
        b'K' => &[0x7f, 0x08, 0x14, 0x22, 0x41],
        b'L' => &[0x7f, 0x40, 0x40, 0x40, 0x40],
        b'M' => &[0x7f, 0x02, 0x0c, 0x02, 0x7f],
        b'N' => &[0x7f, 0x04, 0x08, 0x10, 0x7f],
        b'O' => &[0x3e, 0x41, 0x41, 0x41, 0x3e],
        b'P' => &[0x7f, 0x09, 0x09, 0x09, 0x06],
        b'Q' => &[0x3e, 0x41, 0x51, 0x21, 0x5e],
        b'R' => &[0x7f, 0x09, 0x19, 0x29, 0x46],
        b'S' => &[0x46, 0x49, 0x49, 0x49, 0x31],
        b'T' => &[0x01, 0x01, 0x7f, 0x01, 0x01],
        b'U' => &[0x3f, 0x40, 0x40, 0x40, 0x3f],
        b'V' => &[0x1f, 0x20, 0x40, 0x20, 0x1f],
        b'W' => &[0x3f, 0x40, 0x38, 0x40, 0x3f],
        b'X' => &[0x63, 0x14, 0x08, 0x14, 0x63],
        b'Y' => &[0x07, 0x08, 0x70, 0x08, 0x07],
        b'Z' => &[0x61, 0x51, 0x49, 0x45, 0x43],
        _ => BLANK,
    }
}

impl Font for BuiltinFont {
    #[allow(clippy::cast_possible_truncation)]
    fn glyph_width(&self, ch: u8) -> u8 {
        glyph(ch).len() as u8
    }

    fn glyph_column(&self, ch: u8, column: u8) -> Bitmask {
        glyph(ch)
            .get(usize::from(column))
            .map_or(0, |&bits| Bitmask::from(bits))
    }
}
