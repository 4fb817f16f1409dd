//! # pixmem-core
//!
//! Format-agnostic access to raw bitmap memory.
//!
//! This crate describes where pixels live and lets callers walk them:
//!
//! - [`PixelFormat`] - Closed set of pixel memory layouts and their metadata
//! - [`BitmapMemory`] - Width, height, stride, format and address of a pixel buffer
//! - [`PixelIterator`] - Strided cursor with bulk, line and absolute moves
//! - [`Lines`] - Row count for vertical-only iterator moves
//!
//! ## Design
//!
//! `BitmapMemory` is a plain descriptor that does not own its pixels, so the
//! iterator works on raw pointers and never reads or writes through them.
//! Reading colors out of pixels is left to `pixmem-color`, which picks a
//! conversion routine per [`PixelFormat`] once and reuses it for every pixel.
//!
//! Misusing an iterator is a programming error and panics in debug builds.
//! Building a [`BitmapMemory`] from caller-supplied data is fallible and
//! reports [`Error`].
//!
//! ## Crate Structure
//!
//! ```text
//! pixmem-core (this crate)
//!    ^
//!    |
//!    +-- pixmem-color (color models, conversions, RGB pixel access)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for [`PixelFormat`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod iterator;
pub mod memory;

pub use error::{Error, Result};
pub use format::PixelFormat;
pub use iterator::{Lines, PixelIterator};
pub use memory::BitmapMemory;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixmem_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::PixelFormat;
    pub use crate::iterator::{Lines, PixelIterator};
    pub use crate::memory::BitmapMemory;
}
