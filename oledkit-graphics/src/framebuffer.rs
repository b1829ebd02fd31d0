//! Packed bitplane framebuffer
//!
//! Memory layout matches the controller's horizontal addressing mode:
//!
//! ```text
//!            column 0   column 1        column 127
//! page 0   [ byte 0 ] [ byte 1 ] ... [ byte 127 ]    rows 0-7
//! page 1   [ byte 128][ byte 129] ...[ byte 255 ]    rows 8-15
//! ...
//! page 7   [ byte 896] ...           [ byte 1023]    rows 56-63
//! ```
//!
//! Within a byte, bit `b` is pixel row `page * 8 + b` (bit 0 at the top).
//!
//! Every primitive in this crate clips silently: coordinates outside the
//! buffer are ignored, never reported.

use crate::color::Color;

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Framebuffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// 128x64 1-bpp framebuffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    buffer: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.buffer.iter().filter(|b| **b != 0).count();
        f.debug_struct("FrameBuffer")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("nonzero_bytes", &lit)
            .finish()
    }
}

impl FrameBuffer {
    /// Create a blank framebuffer (all pixels off)
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_SIZE],
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> i32 {
        WIDTH as i32
    }

    /// Height in pixels
    pub const fn height(&self) -> i32 {
        HEIGHT as i32
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Apply `color` to every pixel
    pub fn fill(&mut self, color: Color) {
        for byte in self.buffer.iter_mut() {
            color.apply(byte, 0xFF);
        }
    }

    /// Byte offset and bit mask for an in-bounds pixel
    #[inline]
    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return None;
        }
        let offset = x as usize + (y as usize / 8) * WIDTH;
        Some((offset, 1 << (y & 7)))
    }

    /// Write one pixel
    ///
    /// This is the single mutation path for every drawing primitive.
    /// Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((offset, mask)) = Self::locate(x, y) {
            color.apply(&mut self.buffer[offset], mask);
        }
    }

    /// Read one pixel: 1 if lit, 0 if off or out of bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        match Self::locate(x, y) {
            Some((offset, mask)) => u8::from(self.buffer[offset] & mask != 0),
            None => 0,
        }
    }

    /// Raw bitplane bytes in transfer order
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes of one page (8 pixel rows)
    ///
    /// Returns `None` for pages outside the display.
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        if page >= PAGES {
            return None;
        }
        Some(&self.buffer[page * WIDTH..(page + 1) * WIDTH])
    }

    /// Number of lit pixels
    pub fn count_lit(&self) -> u32 {
        self.buffer.iter().map(|b| b.count_ones()).sum()
    }
}
