//! Errors

use std::fmt;
use std::io;

/// Errors from buffer construction and PPM output
///
/// Drawing never fails; out of range writes are dropped instead.
#[derive(Debug)]
pub enum Error {
    /// Opening, writing or flushing the output failed
    Io(io::Error),
    /// Storage does not hold `width * height` pixels, or a dimension is zero
    Dimensions {
        width: usize,
        height: usize,
        len: usize,
    },
}

impl Error {
    /// Operating system error code behind an I/O failure
    ///
    /// `None` for dimension errors and for I/O errors raised without an
    ///   OS code, e.g. a writer returning `ErrorKind::WriteZero`
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Error::Io(e) => e.raw_os_error(),
            Error::Dimensions { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Dimensions { width, height, len } =>
                write!(f, "buffer of {} pixels cannot hold {}x{} image", len, width, height),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Dimensions { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}
