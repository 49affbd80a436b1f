//! Chromix Core
//!
//! Pure color math behind the `color-mix()` playground:
//!
//! - **Color values**: RGB channels in `[0, 255]`, kept fractional until formatting
//! - **Hex**: parsing `#RRGGBB` (case-insensitive, `#` optional) and formatting `#rrggbb`
//! - **HSL**: RGB to HSL conversion with integer degrees and percentages
//! - **Linear mixing**: channel-wise interpolation used as a preview when no
//!   rendering engine is available to evaluate `color-mix()` natively
//! - **Computed colors**: parsing the `rgb()` / `color(srgb ...)` strings a
//!   rendering engine reports back
//!
//! # Example
//!
//! ```rust
//! use chromix_core::{linear_mix, parse_hex, MixRatio};
//!
//! let a = parse_hex("#2448A6").unwrap();
//! let b = parse_hex("f5b841").unwrap();
//!
//! let mixed = linear_mix(a, b, MixRatio::HALF);
//! assert_eq!(mixed.r(), (36.0 + 245.0) / 2.0);
//! assert_eq!(a.to_hsl().to_css(), "hsl(223, 64%, 40%)");
//! ```

pub mod color;
pub mod computed;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod mix;
pub mod ratio;

pub use color::Color;
pub use computed::parse_computed_color;
pub use error::{ParseError, RatioError, Result};
pub use hex::{parse_hex, to_hex};
pub use hsl::{to_hsl, Hsl};
pub use mix::linear_mix;
pub use ratio::MixRatio;
