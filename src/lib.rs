//! Minimal integer software rasterizer
//!
//! How does this work
//!
//! ```text
//!    buf = RenderingBuffer::new(w, h)       -- row-major u32 pixels
//!    fill(buf, color)                       -- every pixel
//!    fill_rect(buf, x, y, w, h, color)      -- axis aligned box
//!    fill_circle(buf, cx, cy, r, color)     -- integer disc test
//!    draw_line(buf, x1, y1, x2, y2, color)  -- column sweep
//!      copy_pixel(x, y, color)
//!        in_bounds()                        -- out of range writes dropped
//!    write_ppm(buf, path)                   -- P6, 3 bytes per pixel
//! ```
//!
//! Writes are opaque; there is no blending or anti-aliasing.
//!
//!     use paint::{Pixel, RenderingBuffer};
//!
//!     let mut buf = RenderingBuffer::new(64, 48);
//!     paint::fill(&mut buf, paint::rgba(255, 255, 255, 255));
//!     paint::fill_circle(&mut buf, 32, 24, 10, paint::rgba(255, 0, 0, 255));
//!     paint::draw_line(&mut buf, 0, 0, 63, 47, paint::rgba(0, 0, 255, 255));
//!     assert_eq!(buf.get((32, 24)), paint::rgba(255, 0, 0, 255));
//!

pub mod color;
pub mod buffer;
pub mod clip;
pub mod raster;
pub mod ppm;
pub mod error;

pub use color::*;
pub use buffer::*;
pub use clip::*;
pub use raster::*;
pub use ppm::*;
pub use error::Error;

/// Access to the raw pixels of an image
pub trait PixelData {
    fn pixeldata(&self) -> &[u32];
}

/// Pixel level access to an image
pub trait Pixel {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Pixel at (x,y), panics if out of range
    fn get(&self, id: (usize, usize)) -> u32;
    /// Overwrite pixel at (x,y), panics if out of range
    fn set(&mut self, id: (usize, usize), c: u32);
    /// Overwrite every pixel
    fn fill(&mut self, c: u32) {
        for y in 0 .. self.height() {
            for x in 0 .. self.width() {
                self.set((x,y), c);
            }
        }
    }
    /// Copies the color `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the image are ignored
    fn copy_pixel(&mut self, x: i64, y: i64, c: u32) {
        if in_bounds(x, y, self.width(), self.height()) {
            self.set((x as usize, y as usize), c);
        }
    }
}
