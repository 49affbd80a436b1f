//! Mix ratio: the first color's weight, in whole percent

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RatioError;

/// Integer percent in `[0, 100]`.
///
/// Weight of the first color in a two-color blend; the second color gets the
/// complement. The range is checked once here so mixing never has to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MixRatio(u8);

impl MixRatio {
    /// Only the second color
    pub const NONE: MixRatio = MixRatio(0);
    pub const HALF: MixRatio = MixRatio(50);
    /// Only the first color
    pub const FULL: MixRatio = MixRatio(100);

    pub fn new(percent: u8) -> Result<Self, RatioError> {
        Self::try_from(i64::from(percent))
    }

    /// Saturating constructor for slider input
    pub fn clamped(percent: i64) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Weight of the second color
    pub fn complement(self) -> MixRatio {
        MixRatio(100 - self.0)
    }

    /// Weight of the first color as a fraction in `[0.0, 1.0]`
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl Default for MixRatio {
    fn default() -> Self {
        Self::HALF
    }
}

impl TryFrom<i64> for MixRatio {
    type Error = RatioError;

    fn try_from(percent: i64) -> Result<Self, Self::Error> {
        if (0..=100).contains(&percent) {
            Ok(Self(percent as u8))
        } else {
            Err(RatioError(percent))
        }
    }
}

impl From<MixRatio> for u8 {
    fn from(ratio: MixRatio) -> u8 {
        ratio.0
    }
}

impl fmt::Display for MixRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
