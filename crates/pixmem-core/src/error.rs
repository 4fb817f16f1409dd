//! Error types for pixmem-core operations.
//!
//! Only data-driven failures are reported through [`Error`]: a caller handed
//! over a buffer that cannot hold the bitmap it claims to describe, or a
//! format name that does not exist. Misusing an iterator (moving it out of
//! range, dereferencing the end position) is a programming error and panics
//! instead.
//!
//! # Usage
//!
//! ```rust
//! use pixmem_core::{BitmapMemory, Error, PixelFormat};
//!
//! let mut pixels = vec![0u8; 16];
//! let err = BitmapMemory::from_slice(&mut pixels, 4, 4, 8, PixelFormat::R8G8B8A8Unsigned)
//!     .unwrap_err();
//! assert!(matches!(err, Error::InvalidStride { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing bitmap memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Stride is too small for the given width and pixel size.
    ///
    /// The absolute stride must be at least `width * bytes_per_pixel`,
    /// otherwise consecutive rows would overlap.
    #[error("stride {stride} is less than minimum {min_stride} for width {width}")]
    InvalidStride {
        /// Provided stride (may be negative for bottom-up bitmaps)
        stride: isize,
        /// Minimum required absolute stride
        min_stride: usize,
        /// Bitmap width in pixels
        width: usize,
    },

    /// Buffer does not span all rows of the bitmap.
    #[error("buffer of {actual} bytes is too small, bitmap needs {required} bytes")]
    BufferTooSmall {
        /// Bytes needed to hold every row
        required: usize,
        /// Bytes actually provided
        actual: usize,
    },

    /// One row of the bitmap holds more bytes than can be addressed.
    #[error("row of {width} pixels at {bytes_per_pixel} bytes each exceeds the address space")]
    RowTooLarge {
        /// Bitmap width in pixels
        width: usize,
        /// Size of one pixel in bytes
        bytes_per_pixel: usize,
    },

    /// Pixel format name could not be parsed.
    #[error("unknown pixel format: {0}")]
    UnknownPixelFormat(String),
}

impl Error {
    /// Creates an [`Error::InvalidStride`] error.
    #[inline]
    pub fn invalid_stride(stride: isize, min_stride: usize, width: usize) -> Self {
        Self::InvalidStride {
            stride,
            min_stride,
            width,
        }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(required: usize, actual: usize) -> Self {
        Self::BufferTooSmall { required, actual }
    }

    /// Creates an [`Error::RowTooLarge`] error.
    #[inline]
    pub fn row_too_large(width: usize, bytes_per_pixel: usize) -> Self {
        Self::RowTooLarge {
            width,
            bytes_per_pixel,
        }
    }

    /// Returns `true` if the bitmap layout itself was rejected.
    #[inline]
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidStride { .. } | Self::BufferTooSmall { .. } | Self::RowTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_stride() {
        let err = Error::invalid_stride(-12, 16, 4);
        let msg = err.to_string();
        assert!(msg.contains("-12"));
        assert!(msg.contains("16"));
        assert!(err.is_layout_error());
    }

    #[test]
    fn test_buffer_too_small() {
        let err = Error::buffer_too_small(400, 399);
        assert_eq!(
            err.to_string(),
            "buffer of 399 bytes is too small, bitmap needs 400 bytes"
        );
        assert!(err.is_layout_error());
    }

    #[test]
    fn test_row_too_large() {
        let err = Error::row_too_large(usize::MAX, 4);
        assert!(err.to_string().contains(&usize::MAX.to_string()));
        assert!(err.is_layout_error());
    }

    #[test]
    fn test_unknown_pixel_format() {
        let err = Error::UnknownPixelFormat("R7G7B7".into());
        assert!(err.to_string().contains("R7G7B7"));
        assert!(!err.is_layout_error());
    }
}
