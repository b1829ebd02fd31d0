//! Rectangle and circle rasterization
//!
//! Circles use the midpoint algorithm with a single integer decision
//! parameter `dp`. Each iteration computes one point `(x, y)` of the
//! second octant and mirrors it into the other seven.
//!
//! Radii can be anywhere in `i32`, so the octant is not walked blindly.
//! Only columns whose mirrored points or spans can land in the buffer are
//! visited; the walk jumps over the rest using the closed form of the
//! decision parameter.

use crate::color::Color;
use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::line::clip_span;

/// Integer square root, rounded down
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = 1u128 << ((128 - n.leading_zeros() + 1) / 2);
    loop {
        let next = (x + n / x) / 2;
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// Nearest and farthest distance from `c` to the pixels `0..size`
fn reach(c: i64, size: usize) -> (i64, i64) {
    let last = size as i64 - 1;
    let near = if c < 0 {
        -c
    } else if c > last {
        c - last
    } else {
        0
    };
    (near, c.abs().max((last - c).abs()))
}

/// Midpoint walk over the second octant of a circle of radius `r`
///
/// `dp` always equals `x² + 4x + y² - 3y + 1 + 2r - r²`, so the state of
/// any column is known once its `y` is. While the octant is shallow
/// enough that `y` drops by at most one per column, `y` at column `k` is
/// the largest `y` keeping `(2y - 3)² < 4(r - 1)² + 17 - 4(k + 1)²`.
struct Octant {
    r: i64,
    x: i64,
    y: i64,
    dp: i64,
    /// Last column the closed form holds for
    shallow: i64,
}

impl Octant {
    fn new(r: i64) -> Self {
        // Column 0 is always shallow and column r + 1 never is
        let (mut lo, mut hi) = (0, r + 1);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if Self::is_shallow(r, mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self {
            r,
            x: 0,
            y: r,
            dp: 1 - r,
            shallow: lo,
        }
    }

    fn is_shallow(r: i64, k: i64) -> bool {
        let (r, k) = (i128::from(r), i128::from(k));
        (2 * k + 3).pow(2) + 4 * (k + 1).pow(2) < 4 * (r - 1).pow(2) + 17
    }

    /// `y` at column `k`, for `k <= shallow`
    fn y_at(&self, k: i64) -> i64 {
        if k == 0 {
            return self.r;
        }
        let (r, k) = (i128::from(self.r), i128::from(k));
        let t = 4 * (r - 1).pow(2) + 17 - 4 * (k + 1).pow(2);
        let m = isqrt((t - 1) as u128) as i128;
        ((m + 3) / 2).min(r) as i64
    }

    /// Smallest column up to `shallow` whose `y` is at most `bound`
    fn first_at_or_below(&self, bound: i64) -> Option<i64> {
        if self.r <= bound {
            return Some(0);
        }
        if self.y_at(self.shallow) > bound {
            return None;
        }
        let (mut lo, mut hi) = (0, self.shallow);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.y_at(mid) <= bound {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        Some(hi)
    }

    /// Move forward to column `k` without visiting the columns between
    fn skip_to(&mut self, k: i64) {
        let k = k.min(self.shallow);
        if k <= self.x {
            return;
        }
        let y = self.y_at(k);
        let (r, x, yw) = (i128::from(self.r), i128::from(k), i128::from(y));
        self.x = k;
        self.y = y;
        self.dp = (x * x + 4 * x + yw * yw - 3 * yw + 1 + 2 * r - r * r) as i64;
    }

    /// Advance one column; `false` once the octant is complete
    ///
    /// `x` is always incremented first; `y` is decremented only when the
    /// midpoint fell outside the circle. Changing this order moves the
    /// outline by one pixel at the octant boundaries.
    fn step(&mut self) -> bool {
        if self.x >= self.y {
            return false;
        }
        self.x += 1;
        if self.dp < 0 {
            self.dp += 2 * self.x + 3;
        } else {
            self.y -= 1;
            self.dp += 2 * self.x - 2 * self.y + 5;
        }
        true
    }

    /// Visit every column inside the given inclusive ranges, in order
    fn walk(mut self, mut ranges: [(i64, i64); 2], mut visit: impl FnMut(i64, i64)) {
        ranges.sort_unstable();
        for (start, end) in ranges {
            if end < start {
                continue;
            }
            self.skip_to(start - 1);
            while self.x < end && self.step() {
                if self.x >= start {
                    visit(self.x, self.y);
                }
            }
        }
    }
}

impl FrameBuffer {
    /// Draw a rectangle outline with its top-left corner at `(x, y)`
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));
        self.span(x, y, w, color);
        self.span(x, y + h - 1, w, color);
        self.column(x, y, h, color);
        self.column(x + w - 1, y, h, color);
    }

    /// Fill a rectangle with its top-left corner at `(x, y)`
    pub fn draw_fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.fill_area(x.into(), y.into(), w.into(), h.into(), color);
    }

    /// Fill the visible part of a rectangle given in widened coordinates
    pub(crate) fn fill_area(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        let Some((x, w)) = clip_span(x, w, WIDTH) else {
            return;
        };
        for column in x..x + w {
            self.column(column.into(), y, h, color);
        }
    }

    /// Draw a circle outline of radius `r` centred on `(x0, y0)`
    ///
    /// `r == 0` plots the centre pixel; negative radii draw nothing.
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));

        // Axis extremes
        self.plot(x0, y0 + r, color);
        self.plot(x0, y0 - r, color);
        self.plot(x0 + r, y0, color);
        self.plot(x0 - r, y0, color);

        // (±x, ±y) needs x within horizontal reach, (±y, ±x) needs x
        // within vertical reach
        let (near_x, far_x) = reach(x0, WIDTH);
        let (near_y, far_y) = reach(y0, HEIGHT);

        Octant::new(r).walk([(near_x, far_x), (near_y, far_y)], |x, y| {
            self.plot(x0 + x, y0 + y, color);
            self.plot(x0 - x, y0 + y, color);
            self.plot(x0 + x, y0 - y, color);
            self.plot(x0 - x, y0 - y, color);
            self.plot(x0 + y, y0 + x, color);
            self.plot(x0 - y, y0 + x, color);
            self.plot(x0 + y, y0 - x, color);
            self.plot(x0 - y, y0 - x, color);
        });
    }

    /// Fill a circle of radius `r` centred on `(x0, y0)`
    ///
    /// Walks the same decision-parameter sequence as [`draw_circle`], so
    /// every outline pixel lies inside the fill. Spans run from `x0 - d`
    /// to `x0 + d` inclusive.
    ///
    /// [`draw_circle`]: FrameBuffer::draw_circle
    pub fn draw_fill_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));

        self.span(x0 - r, y0, 2 * r + 1, color);

        let (near_x, _) = reach(x0, WIDTH);
        let (near_y, far_y) = reach(y0, HEIGHT);
        let octant = Octant::new(r);

        // Rows y0 ± x are visible for x within vertical reach. Rows y0 ± y
        // are visible while y is within it, and their spans reach the
        // buffer once x covers the horizontal gap.
        let outer_start = octant
            .first_at_or_below(far_y)
            .unwrap_or(octant.shallow)
            .max(near_x);
        let outer_end = octant
            .first_at_or_below(near_y - 1)
            .map_or(i64::MAX, |k| k - 1);

        octant.walk([(near_y, far_y), (outer_start, outer_end)], |x, y| {
            self.span(x0 - x, y0 - y, 2 * x + 1, color);
            self.span(x0 - x, y0 + y, 2 * x + 1, color);
            self.span(x0 - y, y0 - x, 2 * y + 1, color);
            self.span(x0 - y, y0 + x, 2 * y + 1, color);
        });
    }
}
