//! Color types and utilities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;
use crate::hex;
use crate::hsl::{self, Hsl};

/// RGB color with f32 channels in `[0.0, 255.0]`
///
/// Channels are not rounded on construction so that interpolated colors keep
/// their fractional part until they are formatted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb8(255, 255, 255);
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const RED: Color = Color::rgb8(255, 0, 0);
    pub const GREEN: Color = Color::rgb8(0, 255, 0);
    pub const BLUE: Color = Color::rgb8(0, 0, 255);

    /// Create from 8-bit channels
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
        }
    }

    /// Create from fractional channels, clamped into `[0, 255]`
    pub fn from_channels(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Create from unit channels in `[0.0, 1.0]`
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Self::from_channels(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Create from a packed value (0xRRGGBB); bits above the low 24 are ignored
    pub const fn from_rgb24(hex: u32) -> Self {
        Self::rgb8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub fn r(&self) -> f32 {
        self.r
    }

    pub fn g(&self) -> f32 {
        self.g
    }

    pub fn b(&self) -> f32 {
        self.b
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels rounded to the nearest integer
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            round_channel(self.r),
            round_channel(self.g),
            round_channel(self.b),
        ]
    }

    /// `#rrggbb`, lowercase
    pub fn to_hex(&self) -> String {
        hex::to_hex(*self)
    }

    pub fn to_hsl(&self) -> Hsl {
        hsl::to_hsl(*self)
    }

    /// CSS functional notation, e.g. `rgb(36, 72, 166)`
    pub fn to_css_rgb(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// Linear interpolation from `from` (t = 0) to `to` (t = 1)
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::from_channels(
            from.r * (1.0 - t) + to.r * t,
            from.g * (1.0 - t) + to.g * t,
            from.b * (1.0 - t) + to.b * t,
        )
    }
}

fn clamp_channel(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 255.0)
    }
}

pub(crate) fn round_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb8(r, g, b)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}
