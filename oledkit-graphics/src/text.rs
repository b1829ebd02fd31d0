//! Glyph and text rendering
//!
//! Text is a byte sequence, one glyph per byte. `'\n'` starts a new line
//! at column 0; there is no wrapping and no bounds check, glyphs past the
//! edge are clipped pixel by pixel.

use crate::color::Color;
use crate::font::{advance, block_width, glyph, FONT_HEIGHT, FONT_WIDTH};
use crate::framebuffer::FrameBuffer;

/// Text cursor position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl FrameBuffer {
    /// Draw one glyph with its top-left corner at `(x, y)`
    ///
    /// At scale 1 every set glyph bit is one pixel. At larger scales it is
    /// a block [`block_width`] wide and `scale` tall.
    pub fn draw_char(&mut self, x: i32, y: i32, code: u8, color: Color, scale: u8) {
        let (x, y) = (i64::from(x), i64::from(y));
        let bw = i64::from(block_width(scale));
        let bh = i64::from(scale);

        for (row, &bits) in (0..i64::from(FONT_HEIGHT)).zip(glyph(code).iter()) {
            let mut bits = bits;
            for col in 0..i64::from(FONT_WIDTH) {
                if bits & 0x01 != 0 {
                    if scale == 1 {
                        self.plot(x + col, y + row, color);
                    } else {
                        self.fill_area(x + col * bw, y + row * bh, bw, bh, color);
                    }
                }
                bits >>= 1;
            }
        }
    }

    /// Draw a byte string starting at `(x, y)`
    ///
    /// Returns where the cursor ended up, for callers that continue the
    /// text. The cursor saturates at the ends of the `i32` range.
    pub fn display_text(&mut self, x: i32, y: i32, text: &[u8], color: Color, scale: u8) -> Cursor {
        let mut cursor = Cursor { x, y };

        for &code in text {
            if code == b'\n' {
                cursor.x = 0;
                cursor.y = cursor.y.saturating_add(FONT_HEIGHT * i32::from(scale));
            } else {
                self.draw_char(cursor.x, cursor.y, code, color, scale);
                cursor.x = cursor.x.saturating_add(advance(scale));
            }
        }

        cursor
    }
}
