//! Chromix Mixing
//!
//! Builds on [`chromix_core`] to model one interaction of a `color-mix()`
//! playground as an immutable [`MixRequest`], write it as CSS, and resolve it
//! to a color.
//!
//! # Overview
//!
//! - **Requests**: two colors, a [`MixRatio`] and a [`ColorSpace`]
//! - **Expressions**: `color-mix(in oklch, #2448a6 50%, #f5b841 50%)`
//! - **Evaluation**: an optional [`ComputedMixEvaluator`] backed by a real
//!   rendering engine; without one (or when it fails) the [`Mixer`] falls
//!   back to a channel-linear preview and tags the result
//!   [`Precision::Approximate`]
//! - **Tones**: single-color derivations for hover/active/badge states
//! - **Presets**: the built-in color pairs and examples, extendable from TOML
//!
//! # Example
//!
//! ```rust
//! use chromix_mix::{ColorSpace, MixRequest, Mixer, Precision};
//! use chromix_core::{parse_hex, MixRatio};
//!
//! let request = MixRequest::new(
//!     parse_hex("#2448A6").unwrap(),
//!     parse_hex("#F5B841").unwrap(),
//!     MixRatio::HALF,
//!     ColorSpace::Oklch,
//! );
//! assert_eq!(
//!     request.expression(),
//!     "color-mix(in oklch, #2448a6 50%, #f5b841 50%)"
//! );
//!
//! let outcome = Mixer::approximate().mix(&request);
//! assert_eq!(outcome.precision, Precision::Approximate);
//! assert_eq!(outcome.readout().hex, "#8D8074");
//! ```

pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod mixer;
pub mod request;
pub mod space;
pub mod tone;

pub use catalog::{ColorPair, Example, PresetCatalog};
pub use error::{CatalogError, Unavailable, UnknownColorSpace};
pub use evaluator::{ComputedMixEvaluator, ComputedStyleReader};
pub use mixer::{MixOutcome, Mixer, Precision, Readout};
pub use request::{describe_mix_expression, MixRequest};
pub use space::ColorSpace;
pub use tone::{Tone, ToneSet, ToneTarget};

pub use chromix_core::{Color, MixRatio};
