#![allow(dead_code)]

use paint::{Pixel, RenderingBuffer};

/// Buffer of `w` x `h` with every pixel set to `bg`
pub fn canvas(w: usize, h: usize, bg: u32) -> RenderingBuffer {
    let mut buf = RenderingBuffer::new(w, h);
    paint::fill(&mut buf, bg);
    buf
}

/// Coordinates of pixels not equal to `bg`, row-major
pub fn lit(buf: &RenderingBuffer, bg: u32) -> Vec<(usize,usize)> {
    let mut out = vec![];
    for y in 0 .. buf.height() {
        for x in 0 .. buf.width() {
            if buf.get((x,y)) != bg {
                out.push((x,y));
            }
        }
    }
    out
}

/// Sort points into row-major order for comparison against `lit`
pub fn row_major(mut pts: Vec<(usize,usize)>) -> Vec<(usize,usize)> {
    pts.sort_by_key(|&(x,y)| (y,x));
    pts
}
