//! Mix requests and their CSS form

use std::fmt::{Display, Formatter};

use chromix_core::{linear_mix, Color, MixRatio};
use serde::{Deserialize, Serialize};

use crate::space::ColorSpace;

/// One blend to preview: built fresh per interaction, never mutated.
///
/// The presentation layer keeps whatever mutable state it needs and derives a
/// new request from it with the `with_*` builders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixRequest {
    pub color_a: Color,
    pub color_b: Color,
    /// Weight of `color_a`
    pub ratio: MixRatio,
    pub color_space: ColorSpace,
}

impl MixRequest {
    pub fn new(color_a: Color, color_b: Color, ratio: MixRatio, color_space: ColorSpace) -> Self {
        Self {
            color_a,
            color_b,
            ratio,
            color_space,
        }
    }

    pub fn with_colors(self, color_a: Color, color_b: Color) -> Self {
        Self {
            color_a,
            color_b,
            ..self
        }
    }

    pub fn with_ratio(self, ratio: MixRatio) -> Self {
        Self { ratio, ..self }
    }

    pub fn with_space(self, color_space: ColorSpace) -> Self {
        Self {
            color_space,
            ..self
        }
    }

    /// `color-mix(in <space>, <a> <ratio>%, <b> <100-ratio>%)`
    pub fn expression(&self) -> String {
        describe_mix_expression(self)
    }

    /// Declaration for the generated-code panel
    pub fn css_declaration(&self) -> String {
        format!("background: {};", self.expression())
    }

    /// Gradient from `color_a` to `color_b`, used as the ratio slider track
    pub fn slider_track(&self) -> String {
        format!(
            "linear-gradient(to right, {} 0%, {} 100%)",
            self.color_a, self.color_b
        )
    }

    /// Channel-linear preview of the blend, regardless of `color_space`
    pub fn linear_preview(&self) -> Color {
        linear_mix(self.color_a, self.color_b, self.ratio)
    }
}

impl Default for MixRequest {
    /// The playground's opening state: the brand pair, half and half, in sRGB
    fn default() -> Self {
        Self::new(
            Color::from_rgb24(0x2448A6),
            Color::from_rgb24(0xF5B841),
            MixRatio::HALF,
            ColorSpace::Srgb,
        )
    }
}

impl Display for MixRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "color-mix(in {}, {} {}, {} {})",
            self.color_space,
            self.color_a,
            self.ratio,
            self.color_b,
            self.ratio.complement()
        )
    }
}

/// Write a request as a CSS `color-mix()` expression.
///
/// The expression is an instruction for a rendering engine; nothing here
/// evaluates it beyond [`MixRequest::linear_preview`].
pub fn describe_mix_expression(request: &MixRequest) -> String {
    request.to_string()
}
