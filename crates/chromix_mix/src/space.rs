//! Interpolation spaces understood by `color-mix()`

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownColorSpace;

/// Interpolation space named in a `color-mix()` expression.
///
/// Selects how the rendering engine blends; it does not change how colors
/// are stored here. The local preview is channel-linear whatever the space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Per-channel in gamma-encoded sRGB
    #[default]
    Srgb,
    /// Perceptually uniform
    Oklch,
    /// Hue, saturation and lightness interpolated separately
    Hsl,
}

impl ColorSpace {
    /// Keyword used after `in` in CSS
    pub fn id(self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::Oklch => "oklch",
            Self::Hsl => "hsl",
        }
    }

    /// Short explanation for an info panel
    pub fn description(self) -> &'static str {
        match self {
            Self::Srgb => "Standard color space for the web",
            Self::Oklch => "Perceptually uniform - more natural blends",
            Self::Hsl => "Mixes by hue and saturation",
        }
    }

    pub fn all() -> &'static [ColorSpace] {
        const SPACES: [ColorSpace; 3] = [ColorSpace::Srgb, ColorSpace::Oklch, ColorSpace::Hsl];
        &SPACES
    }
}

impl Display for ColorSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorSpace {
    type Err = UnknownColorSpace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|space| space.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownColorSpace(trimmed.to_string()))
    }
}
