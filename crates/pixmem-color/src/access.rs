//! Reading and writing [`RgbColor`] values in any [`PixelFormat`].
//!
//! [`PixelAccessor::for_format`] resolves a pair of conversion routines for a
//! format once; the routines are then called through plain function pointers
//! for every pixel, so there is no per-pixel format dispatch.
//!
//! # Channel mapping
//!
//! - Unsigned channels are normalized by their maximum value on read and
//!   written as `round(clamp(v, 0, 1) * max)`.
//! - Float channels (half and single precision) are copied unclamped.
//! - Color channels a format does not store read as `0`, a missing alpha
//!   channel reads as `1`. Writes drop channels the format does not store.
//!
//! # Example
//!
//! ```rust
//! use pixmem_color::{PixelAccessor, RgbColor};
//! use pixmem_core::PixelFormat;
//!
//! let accessor = PixelAccessor::for_format(PixelFormat::B8G8R8A8Unsigned);
//! let mut pixel = [0u8; 4];
//! accessor.write_pixel(&mut pixel, RgbColor::new(1.0, 0.2, 0.0, 1.0));
//! assert_eq!(pixel, [0x00, 0x33, 0xFF, 0xFF]);
//! assert_eq!(accessor.read_pixel(&pixel).green, 0.2);
//! ```

use half::f16;
use pixmem_core::PixelFormat;
use tracing::trace;

use crate::models::RgbColor;

/// Reads the pixel at an address.
pub type ReadPixelFn = unsafe fn(*const u8) -> RgbColor;

/// Writes the pixel at an address.
pub type WritePixelFn = unsafe fn(*mut u8, RgbColor);

/// Channel index of a channel the format does not store.
const ABSENT: usize = usize::MAX;

/// Storage type of one channel in a byte- or word-aligned format.
trait Channel: Copy {
    fn decode(self) -> f32;
    fn encode(value: f32) -> Self;
}

impl Channel for u8 {
    #[inline(always)]
    fn decode(self) -> f32 {
        f32::from(self) / 255.0
    }

    #[inline(always)]
    fn encode(value: f32) -> Self {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Channel for u16 {
    #[inline(always)]
    fn decode(self) -> f32 {
        f32::from(self) / 65535.0
    }

    #[inline(always)]
    fn encode(value: f32) -> Self {
        (value.clamp(0.0, 1.0) * 65535.0).round() as u16
    }
}

impl Channel for f16 {
    #[inline(always)]
    fn decode(self) -> f32 {
        self.to_f32()
    }

    #[inline(always)]
    fn encode(value: f32) -> Self {
        f16::from_f32(value)
    }
}

impl Channel for f32 {
    #[inline(always)]
    fn decode(self) -> f32 {
        self
    }

    #[inline(always)]
    fn encode(value: f32) -> Self {
        value
    }
}

/// Native word holding several bit-packed channels.
trait PackedWord: Copy {
    fn to_bits(self) -> u32;
    fn from_bits(bits: u32) -> Self;
}

impl PackedWord for u16 {
    #[inline(always)]
    fn to_bits(self) -> u32 {
        u32::from(self)
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        bits as u16
    }
}

impl PackedWord for u32 {
    #[inline(always)]
    fn to_bits(self) -> u32 {
        self
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        bits
    }
}

#[inline(always)]
unsafe fn load<T: Channel, const INDEX: usize>(address: *const u8, missing: f32) -> f32 {
    if INDEX == ABSENT {
        return missing;
    }
    let channel = unsafe { address.cast::<T>().add(INDEX).read_unaligned() };
    channel.decode()
}

#[inline(always)]
unsafe fn store<T: Channel, const INDEX: usize>(address: *mut u8, value: f32) {
    if INDEX != ABSENT {
        unsafe { address.cast::<T>().add(INDEX).write_unaligned(T::encode(value)) }
    }
}

/// Reads a pixel whose channels are consecutive `T` values at the given indices.
unsafe fn read_channels<T: Channel, const R: usize, const G: usize, const B: usize, const A: usize>(
    address: *const u8,
) -> RgbColor {
    unsafe {
        RgbColor::new(
            load::<T, R>(address, 0.0),
            load::<T, G>(address, 0.0),
            load::<T, B>(address, 0.0),
            load::<T, A>(address, 1.0),
        )
    }
}

unsafe fn write_channels<T: Channel, const R: usize, const G: usize, const B: usize, const A: usize>(
    address: *mut u8,
    color: RgbColor,
) {
    unsafe {
        store::<T, R>(address, color.red);
        store::<T, G>(address, color.green);
        store::<T, B>(address, color.blue);
        store::<T, A>(address, color.alpha);
    }
}

#[inline(always)]
fn unpack(word: u32, shift: u32, bits: u32, missing: f32) -> f32 {
    if bits == 0 {
        return missing;
    }
    let max = (1u32 << bits) - 1;
    ((word >> shift) & max) as f32 / max as f32
}

#[inline(always)]
fn pack(value: f32, shift: u32, bits: u32) -> u32 {
    if bits == 0 {
        return 0;
    }
    let max = (1u32 << bits) - 1;
    ((value.clamp(0.0, 1.0) * max as f32).round() as u32) << shift
}

/// Reads a pixel packed into one native word. Each channel is given as
/// `(shift, bits)`, zero bits meaning the channel is absent.
unsafe fn read_packed<
    W: PackedWord,
    const RS: u32,
    const RB: u32,
    const GS: u32,
    const GB: u32,
    const BS: u32,
    const BB: u32,
    const AS: u32,
    const AB: u32,
>(
    address: *const u8,
) -> RgbColor {
    let word = unsafe { address.cast::<W>().read_unaligned() }.to_bits();
    RgbColor::new(
        unpack(word, RS, RB, 0.0),
        unpack(word, GS, GB, 0.0),
        unpack(word, BS, BB, 0.0),
        unpack(word, AS, AB, 1.0),
    )
}

unsafe fn write_packed<
    W: PackedWord,
    const RS: u32,
    const RB: u32,
    const GS: u32,
    const GB: u32,
    const BS: u32,
    const BB: u32,
    const AS: u32,
    const AB: u32,
>(
    address: *mut u8,
    color: RgbColor,
) {
    let word = pack(color.red, RS, RB)
        | pack(color.green, GS, GB)
        | pack(color.blue, BS, BB)
        | pack(color.alpha, AS, AB);
    unsafe { address.cast::<W>().write_unaligned(W::from_bits(word)) }
}

/// Expands to the read/write pair for a channel layout.
macro_rules! channels {
    ($t:ty, $r:expr, $g:expr, $b:expr, $a:expr) => {
        (
            read_channels::<$t, { $r }, { $g }, { $b }, { $a }> as ReadPixelFn,
            write_channels::<$t, { $r }, { $g }, { $b }, { $a }> as WritePixelFn,
        )
    };
}

/// Expands to the read/write pair for a packed layout of `(shift, bits)` pairs.
macro_rules! packed {
    ($w:ty, ($rs:expr, $rb:expr), ($gs:expr, $gb:expr), ($bs:expr, $bb:expr), ($ls:expr, $lb:expr)) => {
        (
            read_packed::<$w, { $rs }, { $rb }, { $gs }, { $gb }, { $bs }, { $bb }, { $ls }, { $lb }>
                as ReadPixelFn,
            write_packed::<$w, { $rs }, { $rb }, { $gs }, { $gb }, { $bs }, { $bb }, { $ls }, { $lb }>
                as WritePixelFn,
        )
    };
}

/// RGB read/write routines for one pixel format.
#[derive(Debug, Clone, Copy)]
pub struct PixelAccessor {
    format: PixelFormat,
    read: ReadPixelFn,
    write: WritePixelFn,
}

impl PixelAccessor {
    /// Picks the conversion routines for `format`.
    pub fn for_format(format: PixelFormat) -> Self {
        const X: usize = ABSENT;

        let (read, write) = match format {
            PixelFormat::R8Unsigned => channels!(u8, 0, X, X, X),
            PixelFormat::A8Unsigned => channels!(u8, X, X, X, 0),
            PixelFormat::R8G8Unsigned => channels!(u8, 0, 1, X, X),
            PixelFormat::R8A8Unsigned => channels!(u8, 0, X, X, 1),
            PixelFormat::R8G8B8Unsigned => channels!(u8, 0, 1, 2, X),
            PixelFormat::B8G8R8Unsigned => channels!(u8, 2, 1, 0, X),
            PixelFormat::R8G8B8A8Unsigned => channels!(u8, 0, 1, 2, 3),
            PixelFormat::B8G8R8A8Unsigned => channels!(u8, 2, 1, 0, 3),
            PixelFormat::A8R8G8B8Unsigned => channels!(u8, 1, 2, 3, 0),
            PixelFormat::A8B8G8R8Unsigned => channels!(u8, 3, 2, 1, 0),
            PixelFormat::R16UnsignedNative16 => channels!(u16, 0, X, X, X),
            PixelFormat::A16UnsignedNative16 => channels!(u16, X, X, X, 0),
            PixelFormat::R16G16UnsignedNative16 => channels!(u16, 0, 1, X, X),
            PixelFormat::R16G16B16A16UnsignedNative16 => channels!(u16, 0, 1, 2, 3),
            PixelFormat::R16FloatNative16 => channels!(f16, 0, X, X, X),
            PixelFormat::R16G16FloatNative16 => channels!(f16, 0, 1, X, X),
            PixelFormat::R16G16B16A16FloatNative16 => channels!(f16, 0, 1, 2, 3),
            PixelFormat::R32FloatNative32 => channels!(f32, 0, X, X, X),
            PixelFormat::R32G32B32A32FloatNative32 => channels!(f32, 0, 1, 2, 3),
            PixelFormat::R5G6B5UnsignedNative16 => {
                packed!(u16, (11, 5), (5, 6), (0, 5), (0, 0))
            }
            PixelFormat::B5G6R5UnsignedNative16 => {
                packed!(u16, (0, 5), (5, 6), (11, 5), (0, 0))
            }
            PixelFormat::A2R10G10B10UnsignedNative32 => {
                packed!(u32, (20, 10), (10, 10), (0, 10), (30, 2))
            }
            PixelFormat::A2B10G10R10UnsignedNative32 => {
                packed!(u32, (0, 10), (10, 10), (20, 10), (30, 2))
            }
        };

        trace!(format = %format, "pixel accessor");
        Self {
            format,
            read,
            write,
        }
    }

    /// Format the routines were picked for.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Reads the pixel at `address`.
    ///
    /// # Safety
    ///
    /// `address` must be valid for reading one pixel of [`format`](Self::format).
    /// No alignment is required.
    #[inline]
    pub unsafe fn read(&self, address: *const u8) -> RgbColor {
        unsafe { (self.read)(address) }
    }

    /// Writes the pixel at `address`.
    ///
    /// # Safety
    ///
    /// `address` must be valid for writing one pixel of [`format`](Self::format).
    /// No alignment is required.
    #[inline]
    pub unsafe fn write(&self, address: *mut u8, color: RgbColor) {
        unsafe { (self.write)(address, color) }
    }

    /// Reads the pixel stored at the start of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than one pixel.
    pub fn read_pixel(&self, bytes: &[u8]) -> RgbColor {
        assert!(
            bytes.len() >= self.format.bytes_per_pixel(),
            "{} pixel needs {} bytes",
            self.format,
            self.format.bytes_per_pixel()
        );
        // SAFETY: the slice covers a whole pixel.
        unsafe { self.read(bytes.as_ptr()) }
    }

    /// Writes a pixel to the start of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than one pixel.
    pub fn write_pixel(&self, bytes: &mut [u8], color: RgbColor) {
        assert!(
            bytes.len() >= self.format.bytes_per_pixel(),
            "{} pixel needs {} bytes",
            self.format,
            self.format.bytes_per_pixel()
        );
        // SAFETY: the slice covers a whole pixel.
        unsafe { self.write(bytes.as_mut_ptr(), color) }
    }
}
