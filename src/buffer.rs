//! Rendering buffer

use crate::error::Error;
use crate::Pixel;
use crate::PixelData;

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// Pixels are stored in row-major order (C-format); pixel (x,y) lives at
///   `y * width + x`.  The storage `B` is anything viewable as a slice
///   of `u32`: an owned `Vec`, an array, or a borrowed `&mut [u32]`.
///
///     use paint::{Pixel, RenderingBuffer};
///
///     let mut storage = [0u32; 6];
///     let mut buf = RenderingBuffer::from_raw(&mut storage[..], 3, 2).unwrap();
///     buf.set((2,1), 0xFF);
///     assert_eq!(storage[5], 0xFF);
///
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct RenderingBuffer<B = Vec<u32>> {
    data: B,
    width: usize,
    height: usize,
}

impl RenderingBuffer<Vec<u32>> {
    /// Create a new buffer of width and height
    ///
    /// Every pixel starts as 0
    ///
    /// # Panics
    ///
    /// If `width` or `height` is 0
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create buffer with 0 width or height");
        }
        RenderingBuffer { width, height, data: vec![0u32; width * height] }
    }
}

impl<B> RenderingBuffer<B> where B: AsRef<[u32]> {
    /// Wrap existing pixel storage of exactly `width * height` pixels
    pub fn from_raw(data: B, width: usize, height: usize) -> Result<Self, Error> {
        let len = data.as_ref().len();
        if width == 0 || height == 0 || width.checked_mul(height) != Some(len) {
            return Err(Error::Dimensions { width, height, len });
        }
        Ok(RenderingBuffer { data, width, height })
    }
    /// Number of pixels; always `width * height`
    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }
    /// Buffer holds no pixels; never true for a buffer built by `new` or
    ///   `from_raw`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[u32] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &self.data.as_ref()[i .. i + self.width]
    }
    /// Give back the underlying storage
    pub fn into_inner(self) -> B {
        self.data
    }
    fn offset(&self, index: (usize,usize), who: &str) -> usize {
        assert!(index.0 < self.width, "request {} >= {} width :: {}", index.0, self.width, who);
        assert!(index.1 < self.height, "request {} >= {} height :: {}", index.1, self.height, who);
        index.1 * self.width + index.0
    }
}

impl<B> Pixel for RenderingBuffer<B> where B: AsRef<[u32]> + AsMut<[u32]> {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn get(&self, id: (usize, usize)) -> u32 {
        self[id]
    }
    fn set(&mut self, id: (usize, usize), c: u32) {
        self[id] = c;
    }
    fn fill(&mut self, c: u32) {
        for p in self.data.as_mut().iter_mut() {
            *p = c;
        }
    }
}

impl<B> PixelData for RenderingBuffer<B> where B: AsRef<[u32]> {
    fn pixeldata(&self) -> &[u32] {
        self.data.as_ref()
    }
}

impl<B> Index<(usize,usize)> for RenderingBuffer<B> where B: AsRef<[u32]> {
    type Output = u32;
    fn index(&self, index: (usize, usize)) -> &u32 {
        let i = self.offset(index, "index");
        &self.data.as_ref()[i]
    }
}
impl<B> IndexMut<(usize,usize)> for RenderingBuffer<B> where B: AsRef<[u32]> + AsMut<[u32]> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u32 {
        let i = self.offset(index, "index_mut");
        &mut self.data.as_mut()[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major() {
        let mut buf = RenderingBuffer::new(4, 2);
        assert_eq!(buf.len(), 8);
        assert!(!buf.is_empty());
        buf.set((1,1), 7);
        assert_eq!(buf.pixeldata()[5], 7);
        assert_eq!(buf.row(1), &[0, 7, 0, 0]);
        assert_eq!(buf[(1,1)], 7);
    }
    #[test]
    fn from_raw_checks_length() {
        match RenderingBuffer::from_raw(vec![0u32; 5], 2, 3) {
            Err(Error::Dimensions { width: 2, height: 3, len: 5 }) => {},
            other => panic!("unexpected {:?}", other),
        }
        assert!(RenderingBuffer::from_raw(vec![0u32; 0], 0, 3).is_err());
        assert!(RenderingBuffer::from_raw([0u32; 6], 3, 2).is_ok());
    }
    #[test]
    #[should_panic]
    fn zero_width() {
        let _ = RenderingBuffer::new(0, 3);
    }
    #[test]
    #[should_panic(expected = "width :: index")]
    fn index_out_of_range() {
        let buf = RenderingBuffer::new(2, 2);
        let v = buf[(2,0)];
        assert_eq!(v, 0);
    }
}
