//! Built-in 5x7 bitmap glyphs for the code label.
//!
//! Registration codes are digit-only, so ten glyphs cover every label the
//! renderer can legally produce. Keeping the font in-crate avoids pulling a
//! native font stack (fontconfig etc.) for a 6-character caption.

/// Font-space glyph width in pixels (before scaling).
pub const GLYPH_WIDTH: u32 = 5;
/// Font-space glyph height in pixels (before scaling).
pub const GLYPH_HEIGHT: u32 = 7;
/// Font-space gap between adjacent glyphs.
pub const TRACKING: u32 = 1;
/// Integer upscale applied when blitting onto a surface.
pub const SCALE: u32 = 2;

/// Rows are 5-bit patterns, MSB = leftmost column.
const DIGITS: [[u8; 7]; 10] = [
    // 0
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 1
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 2
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    // 3
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    // 4
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 5
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 6
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // 7
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 8
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 9
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// Glyph rows for `ch`, or `None` if the font has no glyph for it.
pub fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    let d = ch.to_digit(10)? as usize;
    DIGITS.get(d)
}
