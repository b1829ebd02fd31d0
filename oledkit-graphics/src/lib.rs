//! Raster graphics engine for 128x64 monochrome OLEDs
//!
//! This crate owns the in-memory picture and everything that draws into it:
//!
//! - [`FrameBuffer`] - packed 1-bpp bitplane in controller page order
//! - Lines - Bresenham plus clipped horizontal/vertical spans
//! - Shapes - rectangle and midpoint-circle outlines and fills
//! - Text - 8x8 bitmap glyphs with integer up-scaling
//!
//! # Clipping
//!
//! Every primitive accepts any coordinates. Pixels that fall outside the
//! display are dropped; nothing here returns an error or panics on
//! out-of-range input.
//!
//! # Example
//!
//! ```
//! use oledkit_graphics::{Color, FrameBuffer};
//!
//! let mut fb = FrameBuffer::new();
//! fb.draw_rect(0, 0, 128, 64, Color::Set);
//! fb.draw_fill_circle(64, 32, 10, Color::Set);
//! fb.display_text(4, 4, b"Hello", Color::Invert, 1);
//! assert_eq!(fb.get_pixel(0, 0), 1);
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod font;
pub mod framebuffer;
mod line;
mod shape;
#[cfg(feature = "graphics")]
pub mod target;
pub mod text;

// Re-export key types
pub use color::{Color, BLACK, INVERT, WHITE};
pub use font::{FONT_HEIGHT, FONT_WIDTH};
pub use framebuffer::{FrameBuffer, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
pub use text::Cursor;
