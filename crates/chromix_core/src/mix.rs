//! Channel-linear mixing

use crate::color::Color;
use crate::ratio::MixRatio;

/// Blend two colors channel by channel.
///
/// Each channel is `a * ratio + b * (1 - ratio)`, left fractional. This
/// mixes gamma-encoded channels directly and is not perceptually uniform: it
/// is a preview for when a rendering engine cannot evaluate `color-mix()`,
/// not a substitute for `oklch` or `hsl` interpolation.
///
/// The weighted sum is taken over the integer percent in f64 and divided
/// once, so a channel whose exact value ends in .5 is stored as exactly .5.
pub fn linear_mix(a: Color, b: Color, ratio: MixRatio) -> Color {
    let p = f64::from(ratio.percent());
    let q = f64::from(ratio.complement().percent());
    let channel = |x: f32, y: f32| ((f64::from(x) * p + f64::from(y) * q) / 100.0) as f32;

    Color::from_channels(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
    )
}
