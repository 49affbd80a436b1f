//! Resolving mix requests to colors

use std::fmt;

use chromix_core::Color;
use serde::Serialize;
use tracing::debug;

use crate::evaluator::ComputedMixEvaluator;
use crate::request::MixRequest;
use crate::space::ColorSpace;
use crate::tone::Tone;

/// How a mixed color was obtained
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Evaluated by the rendering engine in the requested color space
    Exact,
    /// Channel-linear fallback; ignores the requested color space
    Approximate,
}

/// A mixed color and how much to trust it
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MixOutcome {
    pub color: Color,
    pub precision: Precision,
}

impl MixOutcome {
    pub fn is_exact(&self) -> bool {
        self.precision == Precision::Exact
    }

    pub fn readout(&self) -> Readout {
        Readout::of(self.color)
    }
}

/// Display strings for a result panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Readout {
    /// Upper-case `#RRGGBB`
    pub hex: String,
    /// `rgb(r, g, b)`
    pub rgb: String,
    /// `hsl(h, s%, l%)`
    pub hsl: String,
}

impl Readout {
    pub fn of(color: Color) -> Self {
        Self {
            hex: color.to_hex().to_uppercase(),
            rgb: color.to_css_rgb(),
            hsl: color.to_hsl().to_css(),
        }
    }
}

type BoxedEvaluator = Box<dyn ComputedMixEvaluator + Send + Sync>;

/// Resolves [`MixRequest`]s, preferring a rendering engine when one is
/// attached.
///
/// Results say whether they came from the engine or from the channel-linear
/// fallback, so callers can flag previews that may differ from what the
/// engine will paint.
#[derive(Default)]
pub struct Mixer {
    evaluator: Option<BoxedEvaluator>,
}

impl Mixer {
    /// Mixer with no engine; every result is [`Precision::Approximate`]
    pub fn approximate() -> Self {
        Self { evaluator: None }
    }

    pub fn with_evaluator<E>(evaluator: E) -> Self
    where
        E: ComputedMixEvaluator + Send + Sync + 'static,
    {
        Self {
            evaluator: Some(Box::new(evaluator)),
        }
    }

    pub fn has_evaluator(&self) -> bool {
        self.evaluator.is_some()
    }

    pub fn mix(&self, request: &MixRequest) -> MixOutcome {
        let expression = request.expression();
        if let Some(color) = self.evaluate(&expression) {
            return MixOutcome {
                color,
                precision: Precision::Exact,
            };
        }
        MixOutcome {
            color: request.linear_preview(),
            precision: Precision::Approximate,
        }
    }

    /// Resolve a component tone of `base`.
    ///
    /// Returns `None` when the engine is unavailable and the tone's target
    /// has no local value (`transparent`, custom properties).
    pub fn mix_tone(&self, tone: Tone, space: ColorSpace, base: Color) -> Option<MixOutcome> {
        let expression = tone.expression(space, base);
        if let Some(color) = self.evaluate(&expression) {
            return Some(MixOutcome {
                color,
                precision: Precision::Exact,
            });
        }
        tone.approximate(base).map(|color| MixOutcome {
            color,
            precision: Precision::Approximate,
        })
    }

    fn evaluate(&self, expression: &str) -> Option<Color> {
        let evaluator = self.evaluator.as_ref()?;
        match evaluator.evaluate(expression) {
            Ok(color) => Some(color),
            Err(err) => {
                debug!(
                    "Mixer - falling back to linear preview for {}: {}",
                    expression, err
                );
                None
            }
        }
    }
}

impl fmt::Debug for Mixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mixer")
            .field("has_evaluator", &self.has_evaluator())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Unavailable;
    use chromix_core::MixRatio;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn oklch_request() -> MixRequest {
        MixRequest::default().with_space(ColorSpace::Oklch)
    }

    #[test]
    fn without_engine_results_are_approximate() {
        let outcome = Mixer::approximate().mix(&oklch_request());
        assert_eq!(outcome.precision, Precision::Approximate);
        assert!(!outcome.is_exact());
        assert_eq!(outcome.color, oklch_request().linear_preview());
    }

    #[test]
    fn engine_results_are_exact_and_see_the_expression() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mixer = Mixer::with_evaluator(move |expression: &str| -> Result<Color, Unavailable> {
            seen.fetch_add(1, Ordering::SeqCst);
            assert_eq!(expression, "color-mix(in oklch, #2448a6 50%, #f5b841 50%)");
            Ok(Color::rgb8(130, 121, 140))
        });

        let outcome = mixer.mix(&oklch_request());
        assert_eq!(
            outcome,
            MixOutcome {
                color: Color::rgb8(130, 121, 140),
                precision: Precision::Exact,
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn engine_failure_falls_back_to_linear() {
        let mixer = Mixer::with_evaluator(|_: &str| -> Result<Color, Unavailable> {
            Err(Unavailable::Unsupported)
        });
        let request = oklch_request().with_ratio(MixRatio::FULL);
        let outcome = mixer.mix(&request);
        assert_eq!(outcome.precision, Precision::Approximate);
        assert_eq!(outcome.color, request.color_a);
    }

    #[test]
    fn readout_formats() {
        let outcome = Mixer::approximate().mix(&MixRequest::default());
        assert_eq!(
            outcome.readout(),
            Readout {
                hex: "#8D8074".to_string(),
                rgb: "rgb(141, 128, 116)".to_string(),
                hsl: "hsl(30, 10%, 50%)".to_string(),
            }
        );
    }

    #[test]
    fn tones_without_engine() {
        let mixer = Mixer::approximate();
        let base = Color::rgb8(0x24, 0x48, 0xA6);

        let hover = mixer.mix_tone(Tone::Hover, ColorSpace::Srgb, base).unwrap();
        assert_eq!(hover.precision, Precision::Approximate);
        assert_eq!(hover.color.to_hex(), "#506db8");

        assert_eq!(mixer.mix_tone(Tone::CardBorder, ColorSpace::Srgb, base), None);
    }
}
