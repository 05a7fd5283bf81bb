//! Colors
//!
//! A pixel is a `u32` with four byte lanes at bit offsets 0, 8, 16 and 24.
//! Lanes 0, 8 and 16 are red, green and blue. Lane 24 is carried along
//! but has no meaning to the rasterizer or the PPM writer.

/// Pack four components into a pixel, red in the least significant byte
///
///     use paint::rgba;
///
///     assert_eq!(rgba(0x44, 0x33, 0x22, 0x11), 0x11223344);
///
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) | (g as u32) << 8 | (b as u32) << 16 | (a as u32) << 24
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red, lane 0
    pub r: u8,
    /// Green, lane 8
    pub g: u8,
    /// Blue, lane 16
    pub b: u8,
    /// Lane 24
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Red, green and blue bytes in that order, as written to a PPM
    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<u32> for Rgba8 {
    fn from(p: u32) -> Rgba8 {
        Rgba8::new( p as u8, (p >> 8) as u8, (p >> 16) as u8, (p >> 24) as u8 )
    }
}
impl From<Rgba8> for u32 {
    fn from(c: Rgba8) -> u32 {
        rgba(c.r, c.g, c.b, c.a)
    }
}
