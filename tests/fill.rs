
mod common;

use paint::{Pixel, PixelData, RenderingBuffer};

#[test]
fn s1_solo_fill() {
    let mut buf = RenderingBuffer::new(4, 2);
    paint::fill(&mut buf, 0x11223344);
    assert_eq!(buf.len(), 8);
    assert!(buf.pixeldata().iter().all(|&p| p == 0x11223344));
}

#[test]
fn last_fill_wins() {
    let mut buf = common::canvas(3, 3, 0xAAAAAAAA);
    paint::fill_circle(&mut buf, 1, 1, 1, 5);
    paint::fill(&mut buf, 0xDEADBEEF);
    paint::fill(&mut buf, 0x00C0FFEE);
    assert!(buf.pixeldata().iter().all(|&p| p == 0x00C0FFEE));
}

#[test]
fn fill_is_idempotent() {
    let mut buf = RenderingBuffer::new(7, 5);
    paint::fill(&mut buf, 42);
    let once = buf.clone();
    paint::fill(&mut buf, 42);
    assert_eq!(buf, once);
}

#[test]
fn fill_borrowed_storage() {
    let mut storage = [7u32; 12];
    {
        let mut buf = RenderingBuffer::from_raw(&mut storage[..], 4, 3).unwrap();
        paint::fill(&mut buf, 1);
        paint::fill_rect(&mut buf, 3, 2, 5, 5, 2);
        assert_eq!(buf.len(), 12);
    }
    let mut expected = [1u32; 12];
    expected[11] = 2;
    assert_eq!(storage, expected);
}

/// An image that is not a RenderingBuffer still gets every routine
struct Sparse {
    w: usize,
    h: usize,
    px: std::collections::BTreeMap<(usize,usize),u32>,
}

impl Pixel for Sparse {
    fn width(&self) -> usize { self.w }
    fn height(&self) -> usize { self.h }
    fn get(&self, id: (usize,usize)) -> u32 {
        assert!(id.0 < self.w && id.1 < self.h);
        self.px.get(&id).copied().unwrap_or(0)
    }
    fn set(&mut self, id: (usize,usize), c: u32) {
        assert!(id.0 < self.w && id.1 < self.h);
        self.px.insert(id, c);
    }
}

#[test]
fn generic_pixel_target() {
    let mut img = Sparse { w: 3, h: 2, px: Default::default() };
    paint::fill(&mut img, 9);
    assert_eq!(img.px.len(), 6);
    paint::draw_line(&mut img, -5, 1, 10, 1, 3);
    for x in 0 .. 3 {
        assert_eq!(img.get((x,0)), 9);
        assert_eq!(img.get((x,1)), 3);
    }
}
