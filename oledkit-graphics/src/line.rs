//! Line rasterization
//!
//! General lines use Bresenham's integer algorithm. Horizontal and vertical
//! spans have their own clipped fast paths; the rectangle, circle and glyph
//! fills are all built from them.

use core::mem::swap;

use crate::color::Color;
use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};

/// Clip a 1-D span `[start, start + len)` to `[0, limit)`
///
/// Returns the clipped start and length, or `None` when nothing is left.
/// Both fit in `i32` because they lie inside the buffer.
pub(crate) fn clip_span(start: i64, len: i64, limit: usize) -> Option<(i32, i32)> {
    let end = start.saturating_add(len).min(limit as i64);
    let start = start.max(0);
    if end <= start {
        return None;
    }
    Some((start as i32, (end - start) as i32))
}

impl FrameBuffer {
    /// Write one pixel given in widened coordinates
    #[inline]
    pub(crate) fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Horizontal span in widened coordinates, clipped before the walk
    pub(crate) fn span(&mut self, x: i64, y: i64, w: i64, color: Color) {
        if y < 0 || y >= HEIGHT as i64 {
            return;
        }
        let Some((x, w)) = clip_span(x, w, WIDTH) else {
            return;
        };
        for x in x..x + w {
            self.set_pixel(x, y as i32, color);
        }
    }

    /// Vertical span in widened coordinates, clipped before the walk
    pub(crate) fn column(&mut self, x: i64, y: i64, h: i64, color: Color) {
        if x < 0 || x >= WIDTH as i64 {
            return;
        }
        let Some((y, h)) = clip_span(y, h, HEIGHT) else {
            return;
        };
        for y in y..y + h {
            self.set_pixel(x as i32, y, color);
        }
    }

    /// Draw a line from `(x0, y0)` to `(x1, y1)`, both endpoints inclusive
    ///
    /// The major axis is always walked in increasing order, so a line and
    /// its reverse light the same pixels. Only the part of the major axis
    /// that crosses the buffer is walked; the error term is advanced over
    /// the skipped steps in closed form.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
        let steep = (y1 - y0).abs() > (x1 - x0).abs();

        if steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let ystep = if y0 < y1 { 1 } else { -1 };
        let limit = (if steep { HEIGHT } else { WIDTH }) as i64;

        let first = x0.max(0);
        let last = x1.min(limit - 1);
        if first > last {
            return;
        }

        // Truncating division; a rounded start shifts every tie-break.
        // dy <= dx keeps err in [0, dx), so after k steps it is
        // (dx / 2 - k * dy) mod dx and y has moved once per wrap.
        let mut err = dx / 2;
        let mut y = y0;
        if first > x0 {
            let dx_wide = i128::from(dx);
            let acc = i128::from(dx / 2) - i128::from(first - x0) * i128::from(dy);
            err = acc.rem_euclid(dx_wide) as i64;
            y += ystep * (-acc.div_euclid(dx_wide)) as i64;
        }

        for x in first..=last {
            if steep {
                self.plot(y, x, color);
            } else {
                self.plot(x, y, color);
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }

    /// Draw `w` pixels to the right of `(x, y)`
    pub fn draw_horizontal_line(&mut self, x: i32, y: i32, w: i32, color: Color) {
        self.span(x.into(), y.into(), w.into(), color);
    }

    /// Draw `h` pixels downward from `(x, y)`
    pub fn draw_vertical_line(&mut self, x: i32, y: i32, h: i32, color: Color) {
        self.column(x.into(), y.into(), h.into(), color);
    }
}
