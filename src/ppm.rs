//! Writing of PPM (Portable Pixmap Format) files
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
//! Output is the binary P6 variant:
//!
//! ```text
//! P6\n<width> <height>\n255\n<r g b bytes, row-major>
//! ```
//!
//! Lanes 0, 8 and 16 of each pixel become the red, green and blue bytes;
//!   lane 24 is dropped.

use crate::color::Rgba8;
use crate::error::Error;
use crate::Pixel;

use log::{debug, warn};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// ASCII header for a `width` x `height` image
///
///     assert_eq!(paint::ppm::header(4, 2), "P6\n4 2\n255\n");
///
pub fn header(width: usize, height: usize) -> String {
    format!("P6\n{} {}\n255\n", width, height)
}

/// Write the P6 byte stream for `pix` into `out`
///
/// Bytes are written in pieces; wrap unbuffered outputs in a `BufWriter`
pub fn write_ppm_to<P, W>(pix: &P, out: &mut W) -> io::Result<()>
    where P: Pixel + ?Sized, W: Write + ?Sized
{
    out.write_all(header(pix.width(), pix.height()).as_bytes())?;
    for y in 0 .. pix.height() {
        for x in 0 .. pix.width() {
            out.write_all(&Rgba8::from(pix.get((x,y))).rgb())?;
        }
    }
    Ok(())
}

/// Save `pix` as a P6 file at `filename`
///
/// An existing file is truncated.  On failure the partial file is left in
///   place; [Error::raw_os_error] gives the operating system error code.
///   The file is closed on every path.
///
///     use paint::RenderingBuffer;
///
///     let buf = RenderingBuffer::new(2, 2);
///     let path = std::env::temp_dir().join("paint_doc_write_ppm.ppm");
///     paint::write_ppm(&buf, &path).unwrap();
///     assert_eq!(std::fs::metadata(&path).unwrap().len(), 11 + 3 * 4);
///
/// [Error::raw_os_error]: ../enum.Error.html#method.raw_os_error
pub fn write_ppm<P, Q>(pix: &P, filename: Q) -> Result<(), Error>
    where P: Pixel + ?Sized, Q: AsRef<Path>
{
    let filename = filename.as_ref();
    debug!("PPM: writing {}x{} to {}", pix.width(), pix.height(), filename.display());
    save(pix, filename).map_err(|e| {
        warn!("PPM: {}: {}", filename.display(), e);
        Error::from(e)
    })?;
    debug!("PPM: wrote {}", filename.display());
    Ok(())
}

fn save<P: Pixel + ?Sized>(pix: &P, filename: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(filename)?);
    write_ppm_to(pix, &mut out)?;
    // Dropping a BufWriter discards flush errors
    out.flush()
}
