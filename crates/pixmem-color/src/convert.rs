//! Conversions between color models.
//!
//! Every function here is pure and total. Achromatic inputs (black, white,
//! grays) have no defined hue; they produce a saturation of zero and a fixed
//! hue instead of dividing by zero, so NaN never leaves this module for
//! finite inputs. Alpha is always passed through unchanged.
//!
//! # Directions
//!
//! | From | To | Function |
//! |------|----|----------|
//! | RGB | HSV | [`hsv_from_rgb`] |
//! | HSV | RGB | [`rgb_from_hsv`] |
//! | RGB | HSL | [`hsl_from_rgb`] |
//! | HSL | RGB | [`rgb_from_hsl`] |
//! | HSV | HSL | [`hsl_from_hsv`] |
//! | HSL | HSV | [`hsv_from_hsl`] |
//! | RGB | YUV | [`yuv_from_rgb`] |
//! | YUV | RGB | [`rgb_from_yuv`] |
//!
//! The RGB/HSV/HSL directions are also available as `From` impls.
//!
//! # Example
//!
//! ```rust
//! use pixmem_color::{HsvColor, RgbColor, YuvColorSystem, rgb_from_yuv, yuv_from_rgb};
//!
//! let hsv = HsvColor::from(RgbColor::RED);
//! assert_eq!((hsv.hue, hsv.saturation, hsv.value), (0.0, 1.0, 1.0));
//!
//! let yuv = yuv_from_rgb(RgbColor::WHITE, YuvColorSystem::Bt709);
//! let back = rgb_from_yuv(yuv, YuvColorSystem::Bt709);
//! assert!((back.green - 1.0).abs() < 1e-6);
//! ```

use std::f32::consts::TAU;

use crate::models::{HslColor, HsvColor, RgbColor, YELLOW_HUE, YuvColor};
use crate::yuv::YuvColorSystem;

/// Reduces an angle in radians into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle - TAU * (angle / TAU).floor()
}

/// Brightest and darkest channel plus hue, shared by HSV and HSL.
struct HueExtent {
    highest: f32,
    lowest: f32,
    chroma: f32,
    hue: f32,
}

/// Finds the extreme channels with an explicit comparison cascade.
///
/// Ties resolve towards red, then green, which decides the hue of grays.
#[inline]
fn hue_extent(color: &RgbColor) -> HueExtent {
    let (red, green, blue) = (color.red, color.green, color.blue);

    // (highest, lowest, channel delta, sextant offset)
    let (highest, lowest, delta, offset) = if red < green {
        if green < blue {
            (blue, red, red - green, 4.0)
        } else {
            let lowest = if red < blue { red } else { blue };
            (green, lowest, blue - red, 2.0)
        }
    } else if red < blue {
        (blue, green, red - green, 4.0)
    } else {
        let lowest = if green < blue { green } else { blue };
        (red, lowest, green - blue, 0.0)
    };

    let chroma = highest - lowest;
    let mut sextant = if chroma < f32::EPSILON {
        offset
    } else {
        delta / chroma + offset
    };
    if sextant < 0.0 {
        sextant += 6.0;
    }

    HueExtent {
        highest,
        lowest,
        chroma,
        hue: sextant * YELLOW_HUE,
    }
}

/// Splits a hue into its sextant index `0..6` and the position inside it.
#[inline]
fn sextant_of(hue: f32) -> (usize, f32) {
    let sextant = wrap_angle(hue) / YELLOW_HUE;
    let whole = sextant.floor();
    // wrap_angle can round up to exactly 2π for tiny negative angles
    ((whole + 0.5) as usize % 6, sextant - whole)
}

/// Converts RGB to hue, saturation and value.
pub fn hsv_from_rgb(color: RgbColor) -> HsvColor {
    let extent = hue_extent(&color);
    let saturation = if extent.chroma < f32::EPSILON {
        0.0
    } else {
        extent.chroma / extent.highest
    };
    HsvColor::new(extent.hue, saturation, extent.highest, color.alpha)
}

/// Converts hue, saturation and value to RGB.
pub fn rgb_from_hsv(color: HsvColor) -> RgbColor {
    let (sextant, fraction) = sextant_of(color.hue);
    let value = color.value;
    let saturation = color.saturation;

    let (red, green, blue) = match sextant {
        0 => (
            value,
            value * (1.0 - saturation * (1.0 - fraction)),
            value * (1.0 - saturation),
        ),
        1 => (
            value * (1.0 - saturation * fraction),
            value,
            value * (1.0 - saturation),
        ),
        2 => (
            value * (1.0 - saturation),
            value,
            value * (1.0 - saturation * (1.0 - fraction)),
        ),
        3 => (
            value * (1.0 - saturation),
            value * (1.0 - saturation * fraction),
            value,
        ),
        4 => (
            value * (1.0 - saturation * (1.0 - fraction)),
            value * (1.0 - saturation),
            value,
        ),
        _ => (
            value,
            value * (1.0 - saturation),
            value * (1.0 - saturation * fraction),
        ),
    };
    RgbColor::new(red, green, blue, color.alpha)
}

/// Converts RGB to hue, saturation and lightness.
pub fn hsl_from_rgb(color: RgbColor) -> HslColor {
    let extent = hue_extent(&color);
    let lightness = (extent.highest + extent.lowest) / 2.0;
    let saturation = if extent.chroma < f32::EPSILON {
        0.0
    } else {
        extent.chroma / (1.0 - (2.0 * lightness - 1.0).abs())
    };
    HslColor::new(extent.hue, saturation, lightness, color.alpha)
}

/// Converts hue, saturation and lightness to RGB.
pub fn rgb_from_hsl(color: HslColor) -> RgbColor {
    let (sextant, fraction) = sextant_of(color.hue);
    let lightness = color.lightness;
    let primary = (1.0 - (2.0 * lightness - 1.0).abs()) * color.saturation;

    let (red, green, blue) = match sextant {
        0 => (primary, fraction * primary, 0.0),
        1 => ((1.0 - fraction) * primary, primary, 0.0),
        2 => (0.0, primary, fraction * primary),
        3 => (0.0, (1.0 - fraction) * primary, primary),
        4 => (fraction * primary, 0.0, primary),
        _ => (primary, 0.0, (1.0 - fraction) * primary),
    };

    let adjustment = lightness - primary / 2.0;
    RgbColor::new(
        red + adjustment,
        green + adjustment,
        blue + adjustment,
        color.alpha,
    )
}

/// Converts HSV to HSL without going through RGB.
pub fn hsl_from_hsv(color: HsvColor) -> HslColor {
    let chroma = color.saturation * color.value;
    let mut adjustment = (2.0 - color.saturation) * color.value;
    let lightness = adjustment / 2.0;

    if adjustment >= 1.0 {
        adjustment = 2.0 - adjustment;
    }
    let saturation = if adjustment < f32::EPSILON {
        0.0
    } else {
        chroma / adjustment
    };
    HslColor::new(color.hue, saturation, lightness, color.alpha)
}

/// Converts HSL to HSV without going through RGB.
pub fn hsv_from_hsl(color: HslColor) -> HsvColor {
    let lightness = color.lightness;
    let adjustment = color.saturation
        * if lightness < 0.5 {
            lightness
        } else {
            1.0 - lightness
        };

    let value = lightness + adjustment;
    let saturation = if value < f32::EPSILON {
        0.0
    } else {
        2.0 * adjustment / value
    };
    HsvColor::new(color.hue, saturation, value, color.alpha)
}

/// Converts RGB to luma and color differences in the given color system.
///
/// `u` and `v` are clamped to `[-0.5, 0.5]`.
pub fn yuv_from_rgb(color: RgbColor, system: YuvColorSystem) -> YuvColor {
    let kr = system.red_weight();
    let kg = system.green_weight();
    let kb = system.blue_weight();
    let red = f64::from(color.red);
    let green = f64::from(color.green);
    let blue = f64::from(color.blue);

    let y = kr * red + kg * green + kb * blue;
    let u = (0.5 * (blue - y) / (1.0 - kb)).clamp(-0.5, 0.5);
    let v = (0.5 * (red - y) / (1.0 - kr)).clamp(-0.5, 0.5);
    YuvColor::new(y as f32, u as f32, v as f32, color.alpha)
}

/// Converts luma and color differences in the given color system back to RGB.
pub fn rgb_from_yuv(color: YuvColor, system: YuvColorSystem) -> RgbColor {
    let kr = system.red_weight();
    let kg = system.green_weight();
    let kb = system.blue_weight();
    let y = f64::from(color.y);
    let u = f64::from(color.u);
    let v = f64::from(color.v);

    let red = y + 2.0 * (1.0 - kr) * v;
    let blue = y + 2.0 * (1.0 - kb) * u;
    let green = y - (2.0 * kr * (1.0 - kr) / kg) * v - (2.0 * kb * (1.0 - kb) / kg) * u;
    RgbColor::new(red as f32, green as f32, blue as f32, color.alpha)
}

impl From<RgbColor> for HsvColor {
    #[inline]
    fn from(color: RgbColor) -> Self {
        hsv_from_rgb(color)
    }
}

impl From<HsvColor> for RgbColor {
    #[inline]
    fn from(color: HsvColor) -> Self {
        rgb_from_hsv(color)
    }
}

impl From<RgbColor> for HslColor {
    #[inline]
    fn from(color: RgbColor) -> Self {
        hsl_from_rgb(color)
    }
}

impl From<HslColor> for RgbColor {
    #[inline]
    fn from(color: HslColor) -> Self {
        rgb_from_hsl(color)
    }
}

impl From<HsvColor> for HslColor {
    #[inline]
    fn from(color: HsvColor) -> Self {
        hsl_from_hsv(color)
    }
}

impl From<HslColor> for HsvColor {
    #[inline]
    fn from(color: HslColor) -> Self {
        hsv_from_hsl(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BLUE_HUE, CYAN_HUE, GREEN_HUE, MAGENTA_HUE, RED_HUE};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SAMPLES: usize = 5000;

    fn random_colors(seed: u64) -> impl Iterator<Item = RgbColor> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..SAMPLES).map(move |_| {
            RgbColor::opaque(
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
            )
        })
    }

    fn assert_rgb_eq(actual: RgbColor, expected: RgbColor, epsilon: f32) {
        assert_abs_diff_eq!(actual.red, expected.red, epsilon = epsilon);
        assert_abs_diff_eq!(actual.green, expected.green, epsilon = epsilon);
        assert_abs_diff_eq!(actual.blue, expected.blue, epsilon = epsilon);
        assert_eq!(actual.alpha, expected.alpha);
    }

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_abs_diff_eq!(wrap_angle(TAU + 1.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(wrap_angle(-1.0), TAU - 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(wrap_angle(-3.0 * TAU + 0.5), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_hsv_from_primaries() {
        let red = hsv_from_rgb(RgbColor::RED);
        assert_eq!((red.hue, red.saturation, red.value), (RED_HUE, 1.0, 1.0));

        let yellow = hsv_from_rgb(RgbColor::opaque(1.0, 1.0, 0.0));
        assert_abs_diff_eq!(yellow.hue, YELLOW_HUE, epsilon = 1e-6);
        assert_eq!((yellow.saturation, yellow.value), (1.0, 1.0));

        let green = hsv_from_rgb(RgbColor::GREEN);
        assert_abs_diff_eq!(green.hue, GREEN_HUE, epsilon = 1e-6);

        let cyan = hsv_from_rgb(RgbColor::opaque(0.0, 1.0, 1.0));
        assert_abs_diff_eq!(cyan.hue, CYAN_HUE, epsilon = 1e-6);

        let blue = hsv_from_rgb(RgbColor::BLUE);
        assert_abs_diff_eq!(blue.hue, BLUE_HUE, epsilon = 1e-6);

        let magenta = hsv_from_rgb(RgbColor::opaque(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(magenta.hue, MAGENTA_HUE, epsilon = 1e-6);
        assert_eq!((magenta.saturation, magenta.value), (1.0, 1.0));
    }

    #[test]
    fn test_hsv_from_achromatic() {
        let white = hsv_from_rgb(RgbColor::WHITE);
        assert_eq!((white.saturation, white.value), (0.0, 1.0));

        let black = hsv_from_rgb(RgbColor::BLACK);
        assert_eq!((black.saturation, black.value), (0.0, 0.0));

        let gray = hsv_from_rgb(RgbColor::opaque(0.5, 0.5, 0.5));
        assert_eq!((gray.hue, gray.saturation, gray.value), (0.0, 0.0, 0.5));
        assert!(!gray.hue.is_nan());
    }

    #[test]
    fn test_rgb_from_hsv_primaries() {
        assert_rgb_eq(rgb_from_hsv(HsvColor::opaque(RED_HUE, 1.0, 1.0)), RgbColor::RED, 1e-6);
        assert_rgb_eq(
            rgb_from_hsv(HsvColor::opaque(YELLOW_HUE, 1.0, 1.0)),
            RgbColor::opaque(1.0, 1.0, 0.0),
            1e-6,
        );
        assert_rgb_eq(
            rgb_from_hsv(HsvColor::opaque(GREEN_HUE, 1.0, 1.0)),
            RgbColor::GREEN,
            1e-6,
        );
        assert_rgb_eq(
            rgb_from_hsv(HsvColor::opaque(CYAN_HUE, 1.0, 1.0)),
            RgbColor::opaque(0.0, 1.0, 1.0),
            1e-6,
        );
        assert_rgb_eq(
            rgb_from_hsv(HsvColor::opaque(BLUE_HUE, 1.0, 1.0)),
            RgbColor::BLUE,
            1e-6,
        );
        assert_rgb_eq(
            rgb_from_hsv(HsvColor::opaque(MAGENTA_HUE, 1.0, 1.0)),
            RgbColor::opaque(1.0, 0.0, 1.0),
            1e-6,
        );
        assert_rgb_eq(rgb_from_hsv(HsvColor::opaque(2.0, 0.0, 1.0)), RgbColor::WHITE, 0.0);
        assert_rgb_eq(rgb_from_hsv(HsvColor::opaque(4.0, 0.0, 0.0)), RgbColor::BLACK, 0.0);
    }

    #[test]
    fn test_hue_wraps_around() {
        let wrapped = rgb_from_hsv(HsvColor::opaque(GREEN_HUE + TAU, 1.0, 1.0));
        assert_rgb_eq(wrapped, RgbColor::GREEN, 1e-5);

        let negative = rgb_from_hsv(HsvColor::opaque(-TAU + BLUE_HUE, 1.0, 1.0));
        assert_rgb_eq(negative, RgbColor::BLUE, 1e-5);

        let tiny = rgb_from_hsv(HsvColor::opaque(-1e-9, 1.0, 1.0));
        assert_rgb_eq(tiny, RgbColor::RED, 1e-5);
    }

    #[test]
    fn test_hsl_from_primaries() {
        let red = hsl_from_rgb(RgbColor::RED);
        assert_eq!((red.hue, red.saturation, red.lightness), (RED_HUE, 1.0, 0.5));

        let white = hsl_from_rgb(RgbColor::WHITE);
        assert_eq!((white.saturation, white.lightness), (0.0, 1.0));

        let black = hsl_from_rgb(RgbColor::BLACK);
        assert_eq!((black.saturation, black.lightness), (0.0, 0.0));

        let blue = hsl_from_rgb(RgbColor::BLUE);
        assert_abs_diff_eq!(blue.hue, BLUE_HUE, epsilon = 1e-6);
        assert_eq!((blue.saturation, blue.lightness), (1.0, 0.5));
    }

    #[test]
    fn test_rgb_from_hsl_primaries() {
        assert_rgb_eq(rgb_from_hsl(HslColor::opaque(RED_HUE, 1.0, 0.5)), RgbColor::RED, 1e-6);
        assert_rgb_eq(
            rgb_from_hsl(HslColor::opaque(GREEN_HUE, 1.0, 0.5)),
            RgbColor::GREEN,
            1e-6,
        );
        assert_rgb_eq(
            rgb_from_hsl(HslColor::opaque(BLUE_HUE, 1.0, 0.5)),
            RgbColor::BLUE,
            1e-6,
        );
        assert_rgb_eq(rgb_from_hsl(HslColor::opaque(1.0, 0.3, 1.0)), RgbColor::WHITE, 1e-6);
        assert_rgb_eq(rgb_from_hsl(HslColor::opaque(1.0, 0.3, 0.0)), RgbColor::BLACK, 1e-6);
    }

    #[test]
    fn test_hsv_hsl_relations() {
        let hsl = hsl_from_hsv(HsvColor::opaque(CYAN_HUE, 1.0, 1.0));
        assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (CYAN_HUE, 1.0, 0.5));

        let hsv = hsv_from_hsl(HslColor::opaque(CYAN_HUE, 1.0, 0.5));
        assert_eq!((hsv.hue, hsv.saturation, hsv.value), (CYAN_HUE, 1.0, 1.0));

        let black = hsl_from_hsv(HsvColor::opaque(1.0, 0.7, 0.0));
        assert_eq!((black.saturation, black.lightness), (0.0, 0.0));

        let white = hsl_from_hsv(HsvColor::opaque(1.0, 0.0, 1.0));
        assert_eq!((white.saturation, white.lightness), (0.0, 1.0));

        let black = hsv_from_hsl(HslColor::opaque(1.0, 0.7, 0.0));
        assert_eq!((black.saturation, black.value), (0.0, 0.0));
    }

    #[test]
    fn test_alpha_passes_through() {
        let color = RgbColor::new(0.2, 0.4, 0.6, 0.25);
        assert_eq!(hsv_from_rgb(color).alpha, 0.25);
        assert_eq!(hsl_from_rgb(color).alpha, 0.25);
        assert_eq!(hsl_from_hsv(hsv_from_rgb(color)).alpha, 0.25);
        assert_eq!(yuv_from_rgb(color, YuvColorSystem::Bt2020).alpha, 0.25);
    }

    #[test]
    fn test_hsv_round_trip() {
        for color in random_colors(1) {
            assert_rgb_eq(rgb_from_hsv(hsv_from_rgb(color)), color, 1e-6);
        }
    }

    #[test]
    fn test_hsl_round_trip() {
        for color in random_colors(2) {
            assert_rgb_eq(rgb_from_hsl(hsl_from_rgb(color)), color, 1e-6);
        }
    }

    #[test]
    fn test_rgb_hsl_hsv_rgb_chain() {
        for color in random_colors(3) {
            let hsv = hsv_from_hsl(hsl_from_rgb(color));
            assert_rgb_eq(rgb_from_hsv(hsv), color, 1e-6);
        }
    }

    #[test]
    fn test_rgb_hsv_hsl_rgb_chain() {
        for color in random_colors(4) {
            let hsl = hsl_from_hsv(hsv_from_rgb(color));
            assert_rgb_eq(rgb_from_hsl(hsl), color, 1e-6);
        }
    }

    #[test]
    fn test_from_impls_match_functions() {
        let color = RgbColor::opaque(0.9, 0.1, 0.35);
        assert_eq!(HsvColor::from(color), hsv_from_rgb(color));
        assert_eq!(HslColor::from(color), hsl_from_rgb(color));
        let hsv: HsvColor = color.into();
        assert_eq!(RgbColor::from(hsv), rgb_from_hsv(hsv));
        assert_eq!(HslColor::from(hsv), hsl_from_hsv(hsv));
    }

    #[test]
    fn test_yuv_reference_values() {
        let white = yuv_from_rgb(RgbColor::WHITE, YuvColorSystem::Bt709);
        assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(white.u, 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(white.v, 0.0, epsilon = 1e-7);

        let red = yuv_from_rgb(RgbColor::RED, YuvColorSystem::Bt470);
        assert_abs_diff_eq!(red.y, 0.299, epsilon = 1e-7);
        assert_abs_diff_eq!(red.v, 0.5, epsilon = 1e-7);

        let blue = yuv_from_rgb(RgbColor::BLUE, YuvColorSystem::Bt2020);
        assert_abs_diff_eq!(blue.y, 0.0593, epsilon = 1e-7);
        assert_abs_diff_eq!(blue.u, 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_yuv_round_trip_primaries() {
        let colors = [
            RgbColor::BLACK,
            RgbColor::WHITE,
            RgbColor::RED,
            RgbColor::GREEN,
            RgbColor::BLUE,
        ];
        for system in YuvColorSystem::ALL {
            for color in colors {
                let yuv = yuv_from_rgb(color, system);
                assert_rgb_eq(rgb_from_yuv(yuv, system), color, 1e-7);
            }
        }
    }

    #[test]
    fn test_yuv_round_trip_random() {
        for system in YuvColorSystem::ALL {
            for color in random_colors(5) {
                let yuv = yuv_from_rgb(color, system);
                assert!((-0.5..=0.5).contains(&yuv.u));
                assert!((-0.5..=0.5).contains(&yuv.v));
                assert_rgb_eq(rgb_from_yuv(yuv, system), color, 1e-6);
            }
        }
    }

    #[test]
    fn test_yuv_clamps_chroma() {
        let yuv = yuv_from_rgb(RgbColor::opaque(0.0, 0.0, 4.0), YuvColorSystem::Bt709);
        assert_eq!(yuv.u, 0.5);
    }
}
