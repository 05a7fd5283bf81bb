//! Rasterizer
//!
//! Solid fills, rectangles, discs and lines in integer arithmetic.  Every
//!   write goes through [Pixel::copy_pixel], so pixels outside of the image
//!   are silently skipped and every routine is total.
//!
//! [Pixel::copy_pixel]: ../trait.Pixel.html#method.copy_pixel

use crate::clip::Rectangle;
use crate::Pixel;

use log::trace;

use std::cmp::max;
use std::cmp::min;
use std::convert::TryFrom;

/// Overwrite every pixel with `color`
pub fn fill<P: Pixel + ?Sized>(pix: &mut P, color: u32) {
    trace!("FILL {}x{} {:#010x}", pix.width(), pix.height(), color);
    pix.fill(color);
}

/// Fill the `w` x `h` rectangle with top-left corner at (`x0`,`y0`)
///
/// Covers `x0 <= x < x0 + w` and `y0 <= y < y0 + h`; an empty size draws
///   nothing
///
///     use paint::{Pixel, RenderingBuffer};
///
///     let mut buf = RenderingBuffer::new(4, 4);
///     paint::fill_rect(&mut buf, -1, -1, 3, 3, 0xFF);
///     assert_eq!(buf.get((1,1)), 0xFF);
///     assert_eq!(buf.get((2,2)), 0);
///
pub fn fill_rect<P: Pixel + ?Sized>(pix: &mut P, x0: i64, y0: i64, w: usize, h: usize, color: u32) {
    trace!("FILL RECT x,y {} {} w,h {} {} {:#010x}", x0, y0, w, h, color);
    // Sizes past i64::MAX reach beyond any image anyway
    let w = i64::try_from(w).unwrap_or(i64::MAX);
    let h = i64::try_from(h).unwrap_or(i64::MAX);
    let r = Rectangle::new(x0, y0, x0.saturating_add(w), y0.saturating_add(h));
    let area = match Rectangle::image(pix.width(), pix.height()).intersect(&r) {
        Some(area) => area,
        None => return,
    };
    for y in area.y1 .. area.y2 {
        for x in area.x1 .. area.x2 {
            pix.copy_pixel(x, y, color);
        }
    }
}

/// Fill the disc of radius `r` centered on (`cx`,`cy`)
///
/// A pixel is covered when `(x-cx)^2 + (y-cy)^2 <= r^2`; the test is exact
///   in integers so output is identical on every platform.  Squares are
///   taken in `i128`, so any `u32` radius is exact.  A radius of 0 covers
///   only the center.
pub fn fill_circle<P: Pixel + ?Sized>(pix: &mut P, cx: i64, cy: i64, r: u32, color: u32) {
    trace!("FILL CIRCLE cx,cy {} {} r {} {:#010x}", cx, cy, r, color);
    let rr = i128::from(r) * i128::from(r);
    let r = i64::from(r);
    let (xmax, ymax) = (pix.width() as i64 - 1, pix.height() as i64 - 1);
    let x1 = max(cx - r, 0);
    let x2 = min(cx + r, xmax);
    let y1 = max(cy - r, 0);
    let y2 = min(cy + r, ymax);
    for y in y1 ..= y2 {
        let dy = i128::from(y - cy);
        for x in x1 ..= x2 {
            let dx = i128::from(x - cx);
            if dx * dx + dy * dy <= rr {
                pix.copy_pixel(x, y, color);
            }
        }
    }
}

/// Draw a line from (`x1`,`y1`) to (`x2`,`y2`)
///
/// This is a column sweep, not Bresenham. With `y = dy*x/dx + c` and
///   `c = y1 - dy*x1/dx`, column `x` is filled between its values at `x`
///   and `x+1`, so steep lines have no gaps.  Division truncates toward
///   zero.  Vertical lines fill the rows between the endpoints.
///
///     use paint::{Pixel, RenderingBuffer};
///
///     let mut buf = RenderingBuffer::new(4, 4);
///     paint::draw_line(&mut buf, 0, 0, 3, 3, 1);
///     assert_eq!(buf.get((0,1)), 1);
///     assert_eq!(buf.get((1,0)), 0);
///
pub fn draw_line<P: Pixel + ?Sized>(pix: &mut P, x1: i64, y1: i64, x2: i64, y2: i64, color: u32) {
    trace!("DRAW LINE ({}, {}) - ({}, {}) {:#010x}", x1, y1, x2, y2, color);
    let (xmax, ymax) = (pix.width() as i64 - 1, pix.height() as i64 - 1);
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0 {
        if x1 < 0 || x1 > xmax {
            return;
        }
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        for y in max(y1, 0) ..= min(y2, ymax) {
            pix.copy_pixel(x1, y, color);
        }
        return;
    }

    // Intercept from the endpoints as given, before they are ordered
    let c = y1 - dy * x1 / dx;
    let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
    for x in max(x1, 0) ..= min(x2, xmax) {
        let sy1 = dy * x / dx + c;
        let sy2 = dy * (x + 1) / dx + c;
        let (sy1, sy2) = if sy1 > sy2 { (sy2,sy1) } else { (sy1,sy2) };
        for y in max(sy1, 0) ..= min(sy2, ymax) {
            pix.copy_pixel(x, y, color);
        }
    }
}
