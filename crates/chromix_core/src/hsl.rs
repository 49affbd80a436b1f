//! HSL representation derived from RGB

use std::fmt;

use serde::Serialize;

use crate::color::Color;

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// CSS functional notation, e.g. `hsl(223, 64%, 40%)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    pub fn is_achromatic(&self) -> bool {
        self.s == 0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        to_hsl(color)
    }
}

/// Convert RGB to HSL, rounding to whole degrees and percentages.
///
/// Works in f64 on the 0-255 channel scale, so a hue or percentage that is
/// exactly half way between two integers rounds away from zero.
pub fn to_hsl(color: Color) -> Hsl {
    let r = f64::from(color.r());
    let g = f64::from(color.g());
    let b = f64::from(color.b());

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let l = sum * 100.0 / 510.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: percent(l),
        };
    }

    let d = max - min;
    // sum > 255 is lightness above one half
    let s = if sum > 255.0 {
        d * 100.0 / (510.0 - sum)
    } else {
        d * 100.0 / sum
    };

    let hue = if max == r {
        60.0 * (g - b) / d + if g < b { 360.0 } else { 0.0 }
    } else if max == g {
        60.0 * (b - r) / d + 120.0
    } else {
        60.0 * (r - g) / d + 240.0
    };

    // A hue just under 360 rounds up to a full turn
    let degrees = hue.round() as u16 % 360;

    Hsl {
        h: degrees,
        s: percent(s),
        l: percent(l),
    }
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
