//! YUV color systems.
//!
//! A color system supplies the luma weights `Kr`, `Kg` and `Kb` that turn RGB
//! into luma plus two scaled color differences:
//!
//! ```text
//! Y = Kr * R + Kg * G + Kb * B
//! U = 0.5 * (B - Y) / (1 - Kb)
//! V = 0.5 * (R - Y) / (1 - Kr)
//! ```
//!
//! | System | Standard | Kr | Kb |
//! |--------|----------|----|----|
//! | `Bt470` | ITU-R BT.470 / BT.601 (SDTV) | 0.299 | 0.114 |
//! | `Bt709` | ITU-R BT.709 (HDTV) | 0.2126 | 0.0722 |
//! | `Bt2020` | ITU-R BT.2020 (UHDTV) | 0.2627 | 0.0593 |

use std::str::FromStr;

use crate::error::ColorError;

/// Set of luma weights used for RGB/YUV conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YuvColorSystem {
    /// Standard definition television (BT.470, BT.601).
    Bt470,
    /// High definition television.
    #[default]
    Bt709,
    /// Ultra high definition television.
    Bt2020,
}

impl YuvColorSystem {
    /// Every supported color system.
    pub const ALL: [YuvColorSystem; 3] = [Self::Bt470, Self::Bt709, Self::Bt2020];

    /// Contribution of red to luma (`Kr`).
    #[inline]
    pub const fn red_weight(&self) -> f64 {
        match self {
            Self::Bt470 => 0.299,
            Self::Bt709 => 0.2126,
            Self::Bt2020 => 0.2627,
        }
    }

    /// Contribution of blue to luma (`Kb`).
    #[inline]
    pub const fn blue_weight(&self) -> f64 {
        match self {
            Self::Bt470 => 0.114,
            Self::Bt709 => 0.0722,
            Self::Bt2020 => 0.0593,
        }
    }

    /// Contribution of green to luma (`1 - Kr - Kb`).
    #[inline]
    pub fn green_weight(&self) -> f64 {
        1.0 - self.red_weight() - self.blue_weight()
    }

    /// Short lowercase name, e.g. `"bt709"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bt470 => "bt470",
            Self::Bt709 => "bt709",
            Self::Bt2020 => "bt2020",
        }
    }
}

impl std::fmt::Display for YuvColorSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for YuvColorSystem {
    type Err = ColorError;

    /// Parses `bt470` (or its alias `bt601`), `bt709` and `bt2020`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['.', '-', '_', ' '], "").as_str() {
            "bt470" | "bt601" => Ok(Self::Bt470),
            "bt709" => Ok(Self::Bt709),
            "bt2020" => Ok(Self::Bt2020),
            _ => Err(ColorError::UnknownColorSystem(s.to_string())),
        }
    }
}
