//! Pixel memory layouts.
//!
//! [`PixelFormat`] names how the channels of one pixel are laid out in
//! memory and answers the questions an iterator or pixel accessor needs
//! answered about it: how many bits a pixel occupies, which channels it
//! stores and whether those are integer or floating point.
//!
//! # Naming
//!
//! - Byte-order formats (`R8G8B8A8Unsigned`) name bytes in memory order,
//!   independent of the machine's endianness.
//! - `Native16`/`Native32` formats store native-endian words. Multi-word
//!   formats (`R16G16B16A16UnsignedNative16`) name the words in memory order.
//! - Packed formats (`R5G6B5UnsignedNative16`) put several channels into one
//!   word and name them from the most significant bits to the least
//!   significant ones.
//!
//! # Usage
//!
//! ```rust
//! use pixmem_core::PixelFormat;
//!
//! let format: PixelFormat = "r5g6b5unsignednative16".parse().unwrap();
//! assert_eq!(format.bits_per_pixel(), 16);
//! assert!(!format.are_all_channels_byte_aligned());
//! assert!(!format.has_alpha());
//! ```

use std::str::FromStr;

use crate::error::Error;

/// Memory layout of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// One unsigned byte of red.
    R8Unsigned,
    /// One unsigned byte of alpha.
    A8Unsigned,
    /// Red and green bytes.
    R8G8Unsigned,
    /// Red and alpha bytes.
    R8A8Unsigned,
    /// Red, green and blue bytes.
    R8G8B8Unsigned,
    /// Blue, green and red bytes.
    B8G8R8Unsigned,
    /// Red, green, blue and alpha bytes.
    #[default]
    R8G8B8A8Unsigned,
    /// Blue, green, red and alpha bytes.
    B8G8R8A8Unsigned,
    /// Alpha, red, green and blue bytes.
    A8R8G8B8Unsigned,
    /// Alpha, blue, green and red bytes.
    A8B8G8R8Unsigned,
    /// One native 16-bit word of red.
    R16UnsignedNative16,
    /// One native 16-bit word of alpha.
    A16UnsignedNative16,
    /// Red and green native 16-bit words.
    R16G16UnsignedNative16,
    /// Red, green, blue and alpha native 16-bit words.
    R16G16B16A16UnsignedNative16,
    /// One half-precision float of red.
    R16FloatNative16,
    /// Red and green half-precision floats.
    R16G16FloatNative16,
    /// Red, green, blue and alpha half-precision floats.
    R16G16B16A16FloatNative16,
    /// One single-precision float of red.
    R32FloatNative32,
    /// Red, green, blue and alpha single-precision floats.
    R32G32B32A32FloatNative32,
    /// 16-bit word, red in bits 11..16, green in 5..11, blue in 0..5.
    R5G6B5UnsignedNative16,
    /// 16-bit word, blue in bits 11..16, green in 5..11, red in 0..5.
    B5G6R5UnsignedNative16,
    /// 32-bit word, alpha in bits 30..32, red 20..30, green 10..20, blue 0..10.
    A2R10G10B10UnsignedNative32,
    /// 32-bit word, alpha in bits 30..32, blue 20..30, green 10..20, red 0..10.
    A2B10G10R10UnsignedNative32,
}

impl PixelFormat {
    /// Every supported pixel format.
    pub const ALL: [PixelFormat; 23] = [
        Self::R8Unsigned,
        Self::A8Unsigned,
        Self::R8G8Unsigned,
        Self::R8A8Unsigned,
        Self::R8G8B8Unsigned,
        Self::B8G8R8Unsigned,
        Self::R8G8B8A8Unsigned,
        Self::B8G8R8A8Unsigned,
        Self::A8R8G8B8Unsigned,
        Self::A8B8G8R8Unsigned,
        Self::R16UnsignedNative16,
        Self::A16UnsignedNative16,
        Self::R16G16UnsignedNative16,
        Self::R16G16B16A16UnsignedNative16,
        Self::R16FloatNative16,
        Self::R16G16FloatNative16,
        Self::R16G16B16A16FloatNative16,
        Self::R32FloatNative32,
        Self::R32G32B32A32FloatNative32,
        Self::R5G6B5UnsignedNative16,
        Self::B5G6R5UnsignedNative16,
        Self::A2R10G10B10UnsignedNative32,
        Self::A2B10G10R10UnsignedNative32,
    ];

    /// Number of bits one pixel occupies.
    #[inline]
    pub const fn bits_per_pixel(&self) -> usize {
        match self {
            Self::R8Unsigned | Self::A8Unsigned => 8,
            Self::R8G8Unsigned
            | Self::R8A8Unsigned
            | Self::R16UnsignedNative16
            | Self::A16UnsignedNative16
            | Self::R16FloatNative16
            | Self::R5G6B5UnsignedNative16
            | Self::B5G6R5UnsignedNative16 => 16,
            Self::R8G8B8Unsigned | Self::B8G8R8Unsigned => 24,
            Self::R8G8B8A8Unsigned
            | Self::B8G8R8A8Unsigned
            | Self::A8R8G8B8Unsigned
            | Self::A8B8G8R8Unsigned
            | Self::R16G16UnsignedNative16
            | Self::R16G16FloatNative16
            | Self::R32FloatNative32
            | Self::A2R10G10B10UnsignedNative32
            | Self::A2B10G10R10UnsignedNative32 => 32,
            Self::R16G16B16A16UnsignedNative16 | Self::R16G16B16A16FloatNative16 => 64,
            Self::R32G32B32A32FloatNative32 => 128,
        }
    }

    /// Number of bytes one pixel occupies.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel() / 8
    }

    /// Number of channels stored per pixel.
    #[inline]
    pub const fn channel_count(&self) -> usize {
        self.has_red() as usize
            + self.has_green() as usize
            + self.has_blue() as usize
            + self.has_alpha() as usize
    }

    /// Whether the format stores a red channel.
    #[inline]
    pub const fn has_red(&self) -> bool {
        !matches!(self, Self::A8Unsigned | Self::A16UnsignedNative16)
    }

    /// Whether the format stores a green channel.
    #[inline]
    pub const fn has_green(&self) -> bool {
        !matches!(
            self,
            Self::R8Unsigned
                | Self::A8Unsigned
                | Self::R8A8Unsigned
                | Self::R16UnsignedNative16
                | Self::A16UnsignedNative16
                | Self::R16FloatNative16
                | Self::R32FloatNative32
        )
    }

    /// Whether the format stores a blue channel.
    #[inline]
    pub const fn has_blue(&self) -> bool {
        self.has_green()
            && !matches!(
                self,
                Self::R8G8Unsigned | Self::R16G16UnsignedNative16 | Self::R16G16FloatNative16
            )
    }

    /// Whether the format stores an alpha channel.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        matches!(
            self,
            Self::A8Unsigned
                | Self::R8A8Unsigned
                | Self::R8G8B8A8Unsigned
                | Self::B8G8R8A8Unsigned
                | Self::A8R8G8B8Unsigned
                | Self::A8B8G8R8Unsigned
                | Self::A16UnsignedNative16
                | Self::R16G16B16A16UnsignedNative16
                | Self::R16G16B16A16FloatNative16
                | Self::R32G32B32A32FloatNative32
                | Self::A2R10G10B10UnsignedNative32
                | Self::A2B10G10R10UnsignedNative32
        )
    }

    /// Whether channels are stored as floating point values.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(
            self,
            Self::R16FloatNative16
                | Self::R16G16FloatNative16
                | Self::R16G16B16A16FloatNative16
                | Self::R32FloatNative32
                | Self::R32G32B32A32FloatNative32
        )
    }

    /// Whether channels are signed. No supported format is.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        false
    }

    /// Whether every channel starts and ends on a byte boundary.
    #[inline]
    pub const fn are_all_channels_byte_aligned(&self) -> bool {
        !matches!(
            self,
            Self::R5G6B5UnsignedNative16
                | Self::B5G6R5UnsignedNative16
                | Self::A2R10G10B10UnsignedNative32
                | Self::A2B10G10R10UnsignedNative32
        )
    }

    /// Variant name, e.g. `"R8G8B8A8Unsigned"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::R8Unsigned => "R8Unsigned",
            Self::A8Unsigned => "A8Unsigned",
            Self::R8G8Unsigned => "R8G8Unsigned",
            Self::R8A8Unsigned => "R8A8Unsigned",
            Self::R8G8B8Unsigned => "R8G8B8Unsigned",
            Self::B8G8R8Unsigned => "B8G8R8Unsigned",
            Self::R8G8B8A8Unsigned => "R8G8B8A8Unsigned",
            Self::B8G8R8A8Unsigned => "B8G8R8A8Unsigned",
            Self::A8R8G8B8Unsigned => "A8R8G8B8Unsigned",
            Self::A8B8G8R8Unsigned => "A8B8G8R8Unsigned",
            Self::R16UnsignedNative16 => "R16UnsignedNative16",
            Self::A16UnsignedNative16 => "A16UnsignedNative16",
            Self::R16G16UnsignedNative16 => "R16G16UnsignedNative16",
            Self::R16G16B16A16UnsignedNative16 => "R16G16B16A16UnsignedNative16",
            Self::R16FloatNative16 => "R16FloatNative16",
            Self::R16G16FloatNative16 => "R16G16FloatNative16",
            Self::R16G16B16A16FloatNative16 => "R16G16B16A16FloatNative16",
            Self::R32FloatNative32 => "R32FloatNative32",
            Self::R32G32B32A32FloatNative32 => "R32G32B32A32FloatNative32",
            Self::R5G6B5UnsignedNative16 => "R5G6B5UnsignedNative16",
            Self::B5G6R5UnsignedNative16 => "B5G6R5UnsignedNative16",
            Self::A2R10G10B10UnsignedNative32 => "A2R10G10B10UnsignedNative32",
            Self::A2B10G10R10UnsignedNative32 => "A2B10G10R10UnsignedNative32",
        }
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPixelFormat(s.to_string()))
    }
}
