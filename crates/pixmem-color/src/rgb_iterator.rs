//! Pixel iterator that reads and writes [`RgbColor`] values.
//!
//! [`RgbPixelIterator`] moves exactly like a [`PixelIterator`] and adds
//! access to the pixel under the cursor. The conversion between the bitmap's
//! [`PixelFormat`] and RGB is looked up once at construction.
//!
//! Unlike the plain iterator, dereferencing the end position is checked in
//! every build: [`get`](RgbPixelIterator::get), [`set`](RgbPixelIterator::set)
//! and [`pixel`](RgbPixelIterator::pixel) panic there instead of touching
//! memory outside the bitmap.
//!
//! # Example
//!
//! ```rust
//! use pixmem_color::{RgbColor, RgbPixelIterator};
//! use pixmem_core::{Lines, PixelFormat};
//!
//! let mut buffer = vec![0u8; 3 * 3 * 3];
//! let mut it = RgbPixelIterator::over_slice(&mut buffer, 3, 3, 9, PixelFormat::R8G8B8Unsigned)?;
//!
//! let end = it.end();
//! while it != end {
//!     it.set(RgbColor::RED);
//!     it.advance();
//! }
//!
//! it.move_to(1, 0);
//! it += Lines(2);
//! assert_eq!(RgbColor::from(it.pixel()), RgbColor::RED);
//! # Ok::<(), pixmem_color::ColorError>(())
//! ```

use std::marker::PhantomData;
use std::ops::{AddAssign, Deref, SubAssign};

use pixmem_core::{BitmapMemory, Lines, PixelFormat, PixelIterator};
use tracing::trace;

use crate::access::PixelAccessor;
use crate::error::ColorResult;
use crate::models::RgbColor;

/// Pixel iterator with RGB read and write access.
///
/// Derefs to [`PixelIterator`] for position queries. Movement goes through
/// the forwarding methods and operators on this type.
pub struct RgbPixelIterator<'a> {
    pixels: PixelIterator,
    accessor: PixelAccessor,
    _buffer: PhantomData<&'a mut [u8]>,
}

impl<'a> RgbPixelIterator<'a> {
    /// Creates an iterator at pixel `(0, 0)` of `memory`.
    ///
    /// # Safety
    ///
    /// Every row of `memory` must be valid for reads and writes of
    /// `row_byte_count()` bytes for `'a`, and nothing else may access those
    /// bytes while the iterator is in use.
    pub unsafe fn new(memory: BitmapMemory) -> Self {
        trace!(format = %memory.pixel_format, "rgb pixel iterator");
        Self {
            pixels: PixelIterator::new(memory),
            accessor: PixelAccessor::for_format(memory.pixel_format),
            _buffer: PhantomData,
        }
    }

    /// Creates an iterator over a bitmap stored in `buffer`.
    ///
    /// A negative stride treats the last row of the buffer as row 0.
    pub fn over_slice(
        buffer: &'a mut [u8],
        width: usize,
        height: usize,
        stride: isize,
        pixel_format: PixelFormat,
    ) -> ColorResult<Self> {
        let memory = BitmapMemory::from_slice(buffer, width, height, stride, pixel_format)?;
        // SAFETY: `memory` was checked against `buffer`, which stays borrowed for 'a.
        Ok(unsafe { Self::new(memory) })
    }

    /// End sentinel of the same bitmap, for loop conditions.
    #[inline]
    pub fn end(&self) -> PixelIterator {
        PixelIterator::end(*self.pixels.memory())
    }

    /// Routines used to convert pixels.
    #[inline]
    pub fn accessor(&self) -> PixelAccessor {
        self.accessor
    }

    /// Color of the current pixel.
    ///
    /// # Panics
    ///
    /// At the end position.
    #[inline]
    pub fn get(&self) -> RgbColor {
        let address = self.checked_address();
        // SAFETY: the position is inside the bitmap, which is valid for 'a.
        unsafe { self.accessor.read(address) }
    }

    /// Overwrites the current pixel.
    ///
    /// # Panics
    ///
    /// At the end position.
    #[inline]
    pub fn set(&mut self, color: RgbColor) {
        let address = self.checked_address();
        // SAFETY: the position is inside the bitmap, which is valid for 'a.
        unsafe { self.accessor.write(address, color) }
    }

    /// Proxy for the current pixel that can be read and assigned.
    ///
    /// # Panics
    ///
    /// At the end position.
    #[inline]
    pub fn pixel(&mut self) -> PixelProxy<'_> {
        PixelProxy {
            address: self.checked_address(),
            accessor: self.accessor,
            _iterator: PhantomData,
        }
    }

    /// See [`PixelIterator::move_to`].
    #[inline]
    pub fn move_to(&mut self, x: usize, y: usize) {
        self.pixels.move_to(x, y);
    }

    /// See [`PixelIterator::advance`].
    #[inline]
    pub fn advance(&mut self) {
        self.pixels.advance();
    }

    /// See [`PixelIterator::retreat`].
    #[inline]
    pub fn retreat(&mut self) {
        self.pixels.retreat();
    }

    /// See [`PixelIterator::advance_by`].
    #[inline]
    pub fn advance_by(&mut self, count: isize) {
        self.pixels.advance_by(count);
    }

    /// See [`PixelIterator::retreat_by`].
    #[inline]
    pub fn retreat_by(&mut self, count: isize) {
        self.pixels.retreat_by(count);
    }

    /// See [`PixelIterator::advance_lines`].
    #[inline]
    pub fn advance_lines(&mut self, lines: isize) {
        self.pixels.advance_lines(lines);
    }

    /// See [`PixelIterator::retreat_lines`].
    #[inline]
    pub fn retreat_lines(&mut self, lines: isize) {
        self.pixels.retreat_lines(lines);
    }

    #[inline]
    fn checked_address(&self) -> *mut u8 {
        assert!(
            !self.pixels.is_end(),
            "Cannot access a pixel at the end position"
        );
        self.pixels.address()
    }
}

impl Deref for RgbPixelIterator<'_> {
    type Target = PixelIterator;

    #[inline]
    fn deref(&self) -> &PixelIterator {
        &self.pixels
    }
}

impl std::fmt::Debug for RgbPixelIterator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbPixelIterator")
            .field("pixels", &self.pixels)
            .field("format", &self.accessor.format())
            .finish()
    }
}

impl PartialEq for RgbPixelIterator<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

impl PartialEq<PixelIterator> for RgbPixelIterator<'_> {
    #[inline]
    fn eq(&self, other: &PixelIterator) -> bool {
        self.pixels == *other
    }
}

impl AddAssign<isize> for RgbPixelIterator<'_> {
    #[inline]
    fn add_assign(&mut self, count: isize) {
        self.pixels += count;
    }
}

impl SubAssign<isize> for RgbPixelIterator<'_> {
    #[inline]
    fn sub_assign(&mut self, count: isize) {
        self.pixels -= count;
    }
}

impl AddAssign<Lines> for RgbPixelIterator<'_> {
    #[inline]
    fn add_assign(&mut self, lines: Lines) {
        self.pixels += lines;
    }
}

impl SubAssign<Lines> for RgbPixelIterator<'_> {
    #[inline]
    fn sub_assign(&mut self, lines: Lines) {
        self.pixels -= lines;
    }
}

/// Handle to one pixel, borrowed from an [`RgbPixelIterator`].
pub struct PixelProxy<'i> {
    address: *mut u8,
    accessor: PixelAccessor,
    _iterator: PhantomData<&'i mut [u8]>,
}

impl PixelProxy<'_> {
    /// Reads the pixel.
    #[inline]
    pub fn get(&self) -> RgbColor {
        // SAFETY: created from a checked in-bitmap position of a live iterator.
        unsafe { self.accessor.read(self.address) }
    }

    /// Overwrites the pixel.
    #[inline]
    pub fn set(&mut self, color: RgbColor) {
        // SAFETY: created from a checked in-bitmap position of a live iterator.
        unsafe { self.accessor.write(self.address, color) }
    }
}

impl From<PixelProxy<'_>> for RgbColor {
    #[inline]
    fn from(proxy: PixelProxy<'_>) -> Self {
        proxy.get()
    }
}
