//! Description of a rectangular pixel buffer.
//!
//! [`BitmapMemory`] does not own the pixels it describes. It records where the
//! first pixel lives, how far apart rows are and how a pixel is laid out, and
//! leaves the lifetime of the buffer to whoever built it.
//!
//! # Bottom-up bitmaps
//!
//! A negative stride walks rows towards lower addresses. `pixels` then points
//! at the *last* row of the underlying buffer, which is row 0 of the bitmap:
//!
//! ```rust
//! use pixmem_core::{BitmapMemory, PixelFormat};
//!
//! let mut buffer = vec![0u8; 3 * 8];
//! let base = buffer.as_ptr() as usize;
//! let memory = BitmapMemory::from_slice(&mut buffer, 2, 3, -8, PixelFormat::R8G8B8A8Unsigned)?;
//! assert!(memory.is_bottom_up());
//! assert_eq!(memory.pixels as usize, base + 16);
//! # Ok::<(), pixmem_core::Error>(())
//! ```

use tracing::debug;

use crate::error::{Error, Result};
use crate::format::PixelFormat;

/// Layout of a bitmap's pixels in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapMemory {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Byte distance from one row to the next, negative for bottom-up storage.
    pub stride: isize,
    /// Layout of a single pixel.
    pub pixel_format: PixelFormat,
    /// Address of the first byte of pixel (0, 0).
    pub pixels: *mut u8,
}

impl BitmapMemory {
    /// Describes a bitmap without checking the layout. See [`validate`](Self::validate).
    #[inline]
    pub const fn new(
        width: usize,
        height: usize,
        stride: isize,
        pixel_format: PixelFormat,
        pixels: *mut u8,
    ) -> Self {
        Self {
            width,
            height,
            stride,
            pixel_format,
            pixels,
        }
    }

    /// Describes a bitmap living inside `buffer`.
    ///
    /// Fails if the stride cannot hold a row or if the buffer does not span
    /// every row. For a negative stride the returned `pixels` points at the
    /// last row inside `buffer`.
    pub fn from_slice(
        buffer: &mut [u8],
        width: usize,
        height: usize,
        stride: isize,
        pixel_format: PixelFormat,
    ) -> Result<Self> {
        let mut memory = Self::new(width, height, stride, pixel_format, buffer.as_mut_ptr());
        memory.validate()?;

        let required = memory.required_bytes();
        if buffer.len() < required {
            debug!(required, actual = buffer.len(), "bitmap buffer too small");
            return Err(Error::buffer_too_small(required, buffer.len()));
        }

        if stride < 0 && height > 0 {
            let last_row = (height - 1) * stride.unsigned_abs();
            memory.pixels = buffer.as_mut_ptr().wrapping_add(last_row);
        }
        Ok(memory)
    }

    /// Number of bytes occupied by the pixels of one row.
    ///
    /// Saturates at `usize::MAX` for rows that cannot be addressed.
    #[inline]
    pub const fn row_byte_count(&self) -> usize {
        self.width.saturating_mul(self.pixel_format.bytes_per_pixel())
    }

    /// Number of bytes occupied by the pixels of one row, `None` on overflow.
    #[inline]
    pub const fn checked_row_byte_count(&self) -> Option<usize> {
        self.width.checked_mul(self.pixel_format.bytes_per_pixel())
    }

    /// Checks that a row fits in the address space and that rows do not overlap.
    pub fn validate(&self) -> Result<()> {
        let bytes_per_pixel = self.pixel_format.bytes_per_pixel();
        let Some(min_stride) = self.checked_row_byte_count() else {
            debug!(
                width = self.width,
                bytes_per_pixel, "bitmap row exceeds the address space"
            );
            return Err(Error::row_too_large(self.width, bytes_per_pixel));
        };
        if self.stride.unsigned_abs() < min_stride {
            debug!(
                stride = self.stride,
                min_stride,
                width = self.width,
                "stride smaller than one bitmap row"
            );
            return Err(Error::invalid_stride(self.stride, min_stride, self.width));
        }
        Ok(())
    }

    /// Number of bytes a buffer must span to hold every row.
    ///
    /// Saturates at `usize::MAX` for layouts that cannot exist.
    pub fn required_bytes(&self) -> usize {
        if self.width == 0 || self.height == 0 {
            return 0;
        }
        self.checked_row_byte_count()
            .and_then(|row| {
                (self.height - 1)
                    .checked_mul(self.stride.unsigned_abs())?
                    .checked_add(row)
            })
            .unwrap_or(usize::MAX)
    }

    /// Whether rows are stored from the bottom of the buffer upwards.
    #[inline]
    pub const fn is_bottom_up(&self) -> bool {
        self.stride < 0
    }

    /// Whether the bitmap contains no pixels at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_byte_count() {
        let memory = BitmapMemory::new(
            100,
            100,
            1000,
            PixelFormat::R8G8B8A8Unsigned,
            std::ptr::null_mut(),
        );
        assert_eq!(memory.row_byte_count(), 400);
        assert!(memory.validate().is_ok());
        assert_eq!(memory.required_bytes(), 99 * 1000 + 400);
    }

    #[test]
    fn test_stride_too_small() {
        let memory = BitmapMemory::new(
            10,
            2,
            -29,
            PixelFormat::R8G8B8Unsigned,
            std::ptr::null_mut(),
        );
        assert_eq!(
            memory.validate(),
            Err(Error::InvalidStride {
                stride: -29,
                min_stride: 30,
                width: 10
            })
        );
    }

    #[test]
    fn test_from_slice_top_down() {
        let mut buffer = vec![0u8; 5 * 20];
        let base = buffer.as_mut_ptr();
        let memory =
            BitmapMemory::from_slice(&mut buffer, 5, 5, 20, PixelFormat::R8G8B8A8Unsigned)
                .unwrap();
        assert_eq!(memory.pixels, base);
        assert!(!memory.is_bottom_up());
    }

    #[test]
    fn test_from_slice_bottom_up() {
        let mut buffer = vec![0u8; 2 * 12 + 9];
        let base = buffer.as_mut_ptr() as usize;
        let memory =
            BitmapMemory::from_slice(&mut buffer, 3, 3, -12, PixelFormat::R8G8B8Unsigned)
                .unwrap();
        assert_eq!(memory.pixels as usize, base + 24);
        assert!(memory.is_bottom_up());
    }

    #[test]
    fn test_from_slice_too_small() {
        let mut buffer = vec![0u8; 99];
        let err = BitmapMemory::from_slice(&mut buffer, 5, 5, 20, PixelFormat::R8G8B8A8Unsigned)
            .unwrap_err();
        assert_eq!(err, Error::buffer_too_small(100, 99));
    }

    #[test]
    fn test_row_size_overflow() {
        let width = usize::MAX / 4 + 2;
        let memory = BitmapMemory::new(
            width,
            1,
            4,
            PixelFormat::R8G8B8A8Unsigned,
            std::ptr::null_mut(),
        );
        assert_eq!(memory.checked_row_byte_count(), None);
        assert_eq!(memory.row_byte_count(), usize::MAX);
        assert_eq!(memory.required_bytes(), usize::MAX);
        assert_eq!(memory.validate(), Err(Error::row_too_large(width, 4)));

        let mut buffer = [0u8; 4];
        let err =
            BitmapMemory::from_slice(&mut buffer, width, 1, 4, PixelFormat::R8G8B8A8Unsigned)
                .unwrap_err();
        assert_eq!(err, Error::row_too_large(width, 4));
    }

    #[test]
    fn test_buffer_size_overflow() {
        let mut buffer = [0u8; 4];
        let err = BitmapMemory::from_slice(
            &mut buffer,
            1,
            usize::MAX,
            isize::MAX,
            PixelFormat::R8Unsigned,
        )
        .unwrap_err();
        assert_eq!(err, Error::buffer_too_small(usize::MAX, 4));
    }

    #[test]
    fn test_empty_bitmap() {
        let mut buffer = Vec::new();
        let memory =
            BitmapMemory::from_slice(&mut buffer, 0, 7, 0, PixelFormat::R8Unsigned).unwrap();
        assert!(memory.is_empty());
        assert_eq!(memory.required_bytes(), 0);
    }
}
