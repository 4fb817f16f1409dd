//! Color value types.
//!
//! All channels are `f32` and nominally normalized to `[0, 1]`, except:
//!
//! - Hue is an angle in radians in `[0, 2π)` that wraps around
//!   (see the `*_HUE` constants for where the primaries sit).
//! - YUV chroma (`u`, `v`) spans `[-0.5, 0.5]`.
//!
//! Every type carries alpha, which conversions pass through untouched.

use std::f32::consts::{FRAC_PI_3, PI};

/// Hue of pure red in radians.
pub const RED_HUE: f32 = 0.0;
/// Hue of pure yellow in radians.
pub const YELLOW_HUE: f32 = FRAC_PI_3;
/// Hue of pure green in radians.
pub const GREEN_HUE: f32 = FRAC_PI_3 * 2.0;
/// Hue of pure cyan in radians.
pub const CYAN_HUE: f32 = PI;
/// Hue of pure blue in radians.
pub const BLUE_HUE: f32 = FRAC_PI_3 * 4.0;
/// Hue of pure magenta in radians.
pub const MAGENTA_HUE: f32 = (5.0 * std::f64::consts::PI / 3.0) as f32;

/// Color in the RGB model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    /// Red intensity.
    pub red: f32,
    /// Green intensity.
    pub green: f32,
    /// Blue intensity.
    pub blue: f32,
    /// Opacity.
    pub alpha: f32,
}

impl RgbColor {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::opaque(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::opaque(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::opaque(0.0, 0.0, 1.0);

    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Color in the hue, saturation, value model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HsvColor {
    /// Hue angle in radians.
    pub hue: f32,
    /// Colorfulness relative to the value.
    pub saturation: f32,
    /// Intensity of the strongest channel.
    pub value: f32,
    /// Opacity.
    pub alpha: f32,
}

impl HsvColor {
    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha,
        }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(hue: f32, saturation: f32, value: f32) -> Self {
        Self::new(hue, saturation, value, 1.0)
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Color in the hue, saturation, lightness model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HslColor {
    /// Hue angle in radians.
    pub hue: f32,
    /// Colorfulness relative to the lightness.
    pub saturation: f32,
    /// Midpoint between the strongest and weakest channel.
    pub lightness: f32,
    /// Opacity.
    pub alpha: f32,
}

impl HslColor {
    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self::new(hue, saturation, lightness, 1.0)
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Color as luma plus two chroma differences.
///
/// The meaning of the channels depends on the
/// [`YuvColorSystem`](crate::YuvColorSystem) used to produce them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YuvColor {
    /// Luma in `[0, 1]`.
    pub y: f32,
    /// Blue difference in `[-0.5, 0.5]`.
    pub u: f32,
    /// Red difference in `[-0.5, 0.5]`.
    pub v: f32,
    /// Opacity.
    pub alpha: f32,
}

impl YuvColor {
    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(y: f32, u: f32, v: f32, alpha: f32) -> Self {
        Self { y, u, v, alpha }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(y: f32, u: f32, v: f32) -> Self {
        Self::new(y, u, v, 1.0)
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}
