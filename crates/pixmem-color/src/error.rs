//! Error types for color operations.
//!
//! Color model conversions are total and never fail. Errors only arise when
//! parsing configuration values or when the bitmap handed to an
//! [`RgbPixelIterator`](crate::RgbPixelIterator) is rejected.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// YUV color system name could not be parsed.
    #[error("unknown YUV color system: {0}")]
    UnknownColorSystem(String),

    /// Bitmap memory was rejected.
    #[error(transparent)]
    Core(#[from] pixmem_core::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let err: ColorError = pixmem_core::Error::buffer_too_small(8, 4).into();
        assert!(matches!(err, ColorError::Core(_)));
        assert_eq!(err.to_string(), "buffer of 4 bytes is too small, bitmap needs 8 bytes");
    }

    #[test]
    fn test_unknown_color_system() {
        let err = ColorError::UnknownColorSystem("bt999".into());
        assert_eq!(err.to_string(), "unknown YUV color system: bt999");
    }
}
