//! # pixmem-color
//!
//! Color models, exact conversions between them, and RGB access to pixels of
//! any supported [`PixelFormat`](pixmem_core::PixelFormat).
//!
//! - **Color models** - [`RgbColor`], [`HsvColor`], [`HslColor`], [`YuvColor`]
//! - **Conversions** - RGB/HSV/HSL in every direction, RGB/YUV per [`YuvColorSystem`]
//! - **Pixel access** - [`PixelAccessor`] per format, [`RgbPixelIterator`] with [`PixelProxy`]
//!
//! # Architecture
//!
//! ```text
//!                 pixmem-color
//!                      |
//!     +----------------+----------------+
//!     |                |                |
//!  models  <---  convert / yuv     rgb_iterator
//!                                       |
//!                                    access
//!                                       |
//!                                  pixmem-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use pixmem_color::{HsvColor, RgbColor, RgbPixelIterator};
//! use pixmem_core::PixelFormat;
//!
//! let mut buffer = vec![0x80u8; 4 * 4 * 4];
//! let mut it = RgbPixelIterator::over_slice(&mut buffer, 4, 4, 16, PixelFormat::R8G8B8A8Unsigned)?;
//!
//! // Desaturate every pixel by half
//! let end = it.end();
//! while it != end {
//!     let mut hsv = HsvColor::from(it.get());
//!     hsv.saturation *= 0.5;
//!     it.set(RgbColor::from(hsv));
//!     it.advance();
//! }
//! # Ok::<(), pixmem_color::ColorError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`pixmem_core`] - Pixel formats, bitmap memory, pixel iteration
//! - [`half`] - Half-precision pixel channels
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Construction-time diagnostics
//!
//! # Feature Flags
//!
//! - `serde` - Serialization for color types and [`YuvColorSystem`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod access;
pub mod convert;
pub mod error;
pub mod models;
pub mod rgb_iterator;
pub mod yuv;

pub use access::{PixelAccessor, ReadPixelFn, WritePixelFn};
pub use convert::{
    hsl_from_hsv, hsl_from_rgb, hsv_from_hsl, hsv_from_rgb, rgb_from_hsl, rgb_from_hsv,
    rgb_from_yuv, wrap_angle, yuv_from_rgb,
};
pub use error::{ColorError, ColorResult};
pub use models::{
    BLUE_HUE, CYAN_HUE, GREEN_HUE, HslColor, HsvColor, MAGENTA_HUE, RED_HUE, RgbColor,
    YELLOW_HUE, YuvColor,
};
pub use rgb_iterator::{PixelProxy, RgbPixelIterator};
pub use yuv::YuvColorSystem;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixmem_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::convert::*;
    pub use crate::error::{ColorError, ColorResult};
    pub use crate::models::*;
    pub use crate::rgb_iterator::{PixelProxy, RgbPixelIterator};
    pub use crate::yuv::YuvColorSystem;
    pub use pixmem_core::prelude::*;
}
