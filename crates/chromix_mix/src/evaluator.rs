//! Optional rendering-engine evaluation of `color-mix()`

use chromix_core::{parse_computed_color, Color};
use tracing::trace;

use crate::error::Unavailable;

/// Authoritative evaluation of a `color-mix()` expression.
///
/// Implemented by whatever can ask a real rendering engine for the computed
/// color, such as a browser binding. Any `Fn(&str) -> Result<Color, Unavailable>`
/// works as one.
pub trait ComputedMixEvaluator {
    fn evaluate(&self, expression: &str) -> Result<Color, Unavailable>;
}

impl<F> ComputedMixEvaluator for F
where
    F: Fn(&str) -> Result<Color, Unavailable>,
{
    fn evaluate(&self, expression: &str) -> Result<Color, Unavailable> {
        self(expression)
    }
}

/// Evaluator over a computed-style lookup.
///
/// `read` applies the expression as a background and returns the engine's
/// computed value (e.g. `rgb(141, 128, 116)`), or `None` when the engine
/// rejects it.
pub struct ComputedStyleReader<F> {
    read: F,
}

impl<F> ComputedStyleReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F> ComputedMixEvaluator for ComputedStyleReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn evaluate(&self, expression: &str) -> Result<Color, Unavailable> {
        let computed = (self.read)(expression).ok_or(Unavailable::Unsupported)?;
        let color = parse_computed_color(&computed)?;
        trace!(
            "ComputedStyleReader - {} resolved to {} ({})",
            expression,
            color,
            computed
        );
        Ok(color)
    }
}
