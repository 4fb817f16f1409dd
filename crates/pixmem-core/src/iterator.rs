//! Strided cursor over bitmap memory.
//!
//! [`PixelIterator`] walks the pixels of a [`BitmapMemory`] row by row. It
//! keeps its `(x, y)` position and the byte address of that pixel in sync, so
//! moving by a pixel costs one addition and jumping anywhere costs one
//! address computation.
//!
//! # Positions
//!
//! Every pixel `(x, y)` with `x < width` and `y < height` is a valid position.
//! The only other legal position is the end sentinel `(width, height)`, one
//! past the last pixel, at address `pixels + height * stride + width * bpp`.
//! A bulk move that lands exactly on "column 0 of the row after the last
//! row" is rewritten to the sentinel so it compares equal to
//! [`PixelIterator::end`].
//!
//! # Contract violations
//!
//! Moving outside the legal positions or dereferencing the sentinel is a
//! programming error. Debug builds panic with a description of the misuse;
//! release builds skip the checks. The iterator never dereferences memory
//! itself and uses wrapping pointer arithmetic, so a violation produces a
//! meaningless address rather than undefined behavior inside this module.
//!
//! # Usage
//!
//! ```rust
//! use pixmem_core::{BitmapMemory, Lines, PixelFormat, PixelIterator};
//!
//! let mut buffer = vec![0u8; 4 * 16];
//! let memory = BitmapMemory::from_slice(&mut buffer, 4, 4, 16, PixelFormat::R8G8B8A8Unsigned)?;
//!
//! let mut it = PixelIterator::begin(memory);
//! it += 5;
//! assert_eq!((it.x(), it.y()), (1, 1));
//! it += Lines(2);
//! assert_eq!((it.x(), it.y()), (1, 3));
//! it += 3;
//! assert_eq!(it, PixelIterator::end(memory));
//! # Ok::<(), pixmem_core::Error>(())
//! ```

use std::ops::{Add, AddAssign, Sub, SubAssign};

use tracing::trace;

use crate::memory::BitmapMemory;

/// Number of rows for a vertical-only move with `+=` / `-=`.
///
/// `it += Lines(3)` keeps the column and moves three rows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Lines(pub isize);

/// Random-access cursor over the pixels of a bitmap.
///
/// Two iterators are equal when they point at the same byte address.
#[derive(Debug, Clone, Copy)]
pub struct PixelIterator {
    memory: BitmapMemory,
    x: usize,
    y: usize,
    current: *mut u8,
    bytes_per_pixel: usize,
}

impl PixelIterator {
    /// Creates an iterator at pixel `(0, 0)`.
    ///
    /// The stride must be able to hold one row (checked in debug builds).
    pub fn new(memory: BitmapMemory) -> Self {
        debug_assert!(
            memory.stride.unsigned_abs() >= memory.row_byte_count(),
            "Stride must be greater or equal to the byte count of one bitmap line"
        );
        trace!(
            width = memory.width,
            height = memory.height,
            stride = memory.stride,
            format = %memory.pixel_format,
            "pixel iterator"
        );

        Self {
            memory,
            x: 0,
            y: 0,
            current: memory.pixels,
            bytes_per_pixel: memory.pixel_format.bytes_per_pixel(),
        }
    }

    /// Iterator at the first pixel.
    #[inline]
    pub fn begin(memory: BitmapMemory) -> Self {
        Self::new(memory)
    }

    /// Iterator one past the last pixel.
    ///
    /// Reached by advancing `begin` over every pixel. For bitmaps without
    /// pixels this is the same address as `begin`.
    pub fn end(memory: BitmapMemory) -> Self {
        let mut it = Self::new(memory);
        it.advance_pixels(memory.width * memory.height);
        it
    }

    /// The bitmap this iterator walks.
    #[inline]
    pub fn memory(&self) -> &BitmapMemory {
        &self.memory
    }

    /// Bytes between horizontally adjacent pixels.
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Address of the current pixel.
    #[inline]
    pub fn address(&self) -> *mut u8 {
        debug_assert!(
            !self.is_end(),
            "Iterator must not be dereferenced at the end position"
        );
        self.current
    }

    /// Current column.
    #[inline]
    pub fn x(&self) -> usize {
        debug_assert!(
            !self.is_end(),
            "Iterator has no coordinates at the end position"
        );
        self.x
    }

    /// Current row.
    #[inline]
    pub fn y(&self) -> usize {
        debug_assert!(
            !self.is_end(),
            "Iterator has no coordinates at the end position"
        );
        self.y
    }

    /// Whether the iterator is outside the bitmap, normally on the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        !(self.x < self.memory.width && self.y < self.memory.height)
    }

    /// Jumps to `(x, y)`, which must be a pixel or exactly `(width, height)`.
    pub fn move_to(&mut self, x: usize, y: usize) {
        let width = self.memory.width;
        let height = self.memory.height;
        if x == width && y == height {
            self.set_end();
            return;
        }
        debug_assert!(
            x < width && y < height,
            "New iterator position must be inside the bitmap or the end position"
        );
        self.x = x;
        self.y = y;
        self.current = self.address_of(x, y);
    }

    /// Moves to the next pixel, wrapping into the next row at the right border.
    pub fn advance(&mut self) {
        let width = self.memory.width;
        if self.x + 1 < width && self.y < self.memory.height {
            self.x += 1;
            self.current = self.current.wrapping_add(self.bytes_per_pixel);
            return;
        }

        debug_assert!(
            !self.is_end(),
            "Cannot move iterator beyond the end position"
        );
        if self.y + 1 < self.memory.height {
            let rewind = (self.x * self.bytes_per_pixel) as isize;
            self.current = self
                .current
                .wrapping_offset(self.memory.stride - rewind);
            self.x = 0;
            self.y += 1;
        } else {
            self.set_end();
        }
    }

    /// Moves to the previous pixel, wrapping into the prior row at the left border.
    pub fn retreat(&mut self) {
        if self.y >= self.memory.height {
            debug_assert!(
                !self.memory.is_empty(),
                "Cannot move iterator before the first pixel"
            );
            let last_x = self.memory.width.wrapping_sub(1);
            let last_y = self.memory.height.wrapping_sub(1);
            self.x = last_x;
            self.y = last_y;
            self.current = self.address_of(last_x, last_y);
        } else if self.x > 0 {
            self.x -= 1;
            self.current = self.current.wrapping_sub(self.bytes_per_pixel);
        } else {
            debug_assert!(self.y > 0, "Cannot move iterator before the first pixel");
            let last_x = self.memory.width - 1;
            let forward = (last_x * self.bytes_per_pixel) as isize;
            self.current = self
                .current
                .wrapping_offset(forward - self.memory.stride);
            self.x = last_x;
            self.y = self.y.wrapping_sub(1);
        }
    }

    /// Moves `count` pixels forward in row-major order. Negative counts move back.
    #[inline]
    pub fn advance_by(&mut self, count: isize) {
        if count < 0 {
            self.retreat_pixels(count.unsigned_abs());
        } else {
            self.advance_pixels(count as usize);
        }
    }

    /// Moves `count` pixels back in row-major order. Negative counts move forward.
    #[inline]
    pub fn retreat_by(&mut self, count: isize) {
        if count < 0 {
            self.advance_pixels(count.unsigned_abs());
        } else {
            self.retreat_pixels(count as usize);
        }
    }

    /// Moves `lines` rows down, keeping the column. Negative counts move up.
    #[inline]
    pub fn advance_lines(&mut self, lines: isize) {
        if lines < 0 {
            self.retreat_rows(lines.unsigned_abs());
        } else {
            self.advance_rows(lines as usize);
        }
    }

    /// Moves `lines` rows up, keeping the column. Negative counts move down.
    #[inline]
    pub fn retreat_lines(&mut self, lines: isize) {
        if lines < 0 {
            self.advance_rows(lines.unsigned_abs());
        } else {
            self.retreat_rows(lines as usize);
        }
    }

    fn advance_pixels(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        debug_assert!(
            !self.is_end(),
            "Cannot move iterator beyond the end position"
        );

        let width = self.memory.width;
        let remaining = width.saturating_sub(self.x);
        if count < remaining {
            self.x += count;
            self.current = self.current.wrapping_add(count * self.bytes_per_pixel);
            return;
        }

        let beyond = count - remaining;
        let new_x = beyond % width;
        let new_y = self.y + beyond / width + 1;
        if new_y == self.memory.height && new_x == 0 {
            self.set_end();
        } else {
            debug_assert!(
                new_y < self.memory.height,
                "Cannot move iterator beyond the end position"
            );
            self.x = new_x;
            self.y = new_y;
            self.current = self.address_of(new_x, new_y);
        }
    }

    fn retreat_pixels(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        // The sentinel behaves like column 0 of the row after the last one.
        let at_end = self.is_end();
        let (x, y) = if at_end {
            (0, self.memory.height)
        } else {
            (self.x, self.y)
        };

        if x >= count {
            self.x = x - count;
            self.current = self.current.wrapping_sub(count * self.bytes_per_pixel);
            return;
        }

        let width = self.memory.width;
        let beyond = count - x;
        let mut lines = beyond / width;
        let rest = beyond % width;
        let new_x = if rest > 0 {
            lines += 1;
            width - rest
        } else {
            0
        };

        debug_assert!(y >= lines, "Cannot move iterator before the first pixel");
        let new_y = y.wrapping_sub(lines);
        self.x = new_x;
        self.y = new_y;
        self.current = self.address_of(new_x, new_y);
    }

    fn advance_rows(&mut self, lines: usize) {
        if lines == 0 {
            return;
        }
        debug_assert!(!self.is_end(), "Cannot move the end iterator by lines");
        debug_assert!(
            self.y + lines < self.memory.height,
            "Cannot move iterator below the last line"
        );
        self.y += lines;
        self.current = self
            .current
            .wrapping_offset((lines as isize).wrapping_mul(self.memory.stride));
    }

    fn retreat_rows(&mut self, lines: usize) {
        if lines == 0 {
            return;
        }
        debug_assert!(!self.is_end(), "Cannot move the end iterator by lines");
        debug_assert!(self.y >= lines, "Cannot move iterator above the first line");
        self.y = self.y.wrapping_sub(lines);
        self.current = self
            .current
            .wrapping_offset((lines as isize).wrapping_mul(self.memory.stride).wrapping_neg());
    }

    fn set_end(&mut self) {
        self.x = self.memory.width;
        self.y = self.memory.height;
        self.current = if self.memory.is_empty() {
            self.memory.pixels
        } else {
            self.address_of(self.x, self.y)
        };
    }

    #[inline]
    fn address_of(&self, x: usize, y: usize) -> *mut u8 {
        self.memory
            .pixels
            .wrapping_offset((y as isize).wrapping_mul(self.memory.stride))
            .wrapping_add(x.wrapping_mul(self.bytes_per_pixel))
    }
}

impl PartialEq for PixelIterator {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for PixelIterator {}

impl AddAssign<isize> for PixelIterator {
    #[inline]
    fn add_assign(&mut self, count: isize) {
        self.advance_by(count);
    }
}

impl SubAssign<isize> for PixelIterator {
    #[inline]
    fn sub_assign(&mut self, count: isize) {
        self.retreat_by(count);
    }
}

impl Add<isize> for PixelIterator {
    type Output = PixelIterator;

    #[inline]
    fn add(mut self, count: isize) -> PixelIterator {
        self.advance_by(count);
        self
    }
}

impl Sub<isize> for PixelIterator {
    type Output = PixelIterator;

    #[inline]
    fn sub(mut self, count: isize) -> PixelIterator {
        self.retreat_by(count);
        self
    }
}

impl AddAssign<Lines> for PixelIterator {
    #[inline]
    fn add_assign(&mut self, lines: Lines) {
        self.advance_lines(lines.0);
    }
}

impl SubAssign<Lines> for PixelIterator {
    #[inline]
    fn sub_assign(&mut self, lines: Lines) {
        self.retreat_lines(lines.0);
    }
}
