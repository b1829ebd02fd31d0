//! 8x8 bitmap glyph table
//!
//! One glyph per byte value, 8 bytes per glyph (one per row, top first).
//! Within a row byte, bit 0 is the leftmost column.
//!
//! | Codes         | Source table                          |
//! |---------------|---------------------------------------|
//! | `0x00..=0x7F` | `font8x8` basic (ASCII)               |
//! | `0x80..=0x9F` | `font8x8` C1 control block (blank)    |
//! | `0xA0..=0xFF` | `font8x8` Latin-1 supplement          |

use font8x8::legacy::{BASIC_LEGACY, CONTROL_LEGACY, LATIN_LEGACY};

/// Glyph width in pixels
pub const FONT_WIDTH: i32 = 8;

/// Glyph height in pixels
pub const FONT_HEIGHT: i32 = 8;

/// One 8x8 glyph
pub type Glyph = [u8; 8];

/// Glyph for every byte value, assembled at compile time
static GLYPHS: [Glyph; 256] = build_table();

const fn build_table() -> [Glyph; 256] {
    let mut table = [[0u8; 8]; 256];
    let mut code = 0;
    while code < 256 {
        table[code] = if code < 0x80 {
            BASIC_LEGACY[code]
        } else if code < 0xA0 {
            CONTROL_LEGACY[code - 0x80]
        } else {
            LATIN_LEGACY[code - 0xA0]
        };
        code += 1;
    }
    table
}

/// Look up the glyph for a byte
#[inline]
pub fn glyph(code: u8) -> &'static Glyph {
    &GLYPHS[code as usize]
}

/// Width of one glyph column block at `scale`
///
/// `(scale & 1) + scale / 2`, which is narrower than `scale` from 2 up:
/// glyphs grow twice as fast vertically as horizontally for even scales.
#[inline]
pub const fn block_width(scale: u8) -> i32 {
    ((scale & 1) + scale / 2) as i32
}

/// Horizontal cursor advance after one glyph at `scale`
#[inline]
pub const fn advance(scale: u8) -> i32 {
    FONT_WIDTH * block_width(scale)
}
