//! Mixing error types

use thiserror::Error;

use chromix_core::ParseError;

/// The rendering engine could not evaluate a `color-mix()` expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// No engine is attached, or it does not support `color-mix()`
    #[error("color-mix() evaluation is not supported")]
    Unsupported,

    /// The engine answered with a color we could not read
    #[error("unreadable computed color: {0}")]
    Unreadable(#[from] ParseError),
}

/// Errors loading a preset catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// TOML syntax or shape error, including bad colors and ratios
    #[error("invalid preset catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// The same id appears twice in one document
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
}

/// Color space name other than `srgb`, `oklch` or `hsl`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color space `{0}` (expected srgb, oklch or hsl)")]
pub struct UnknownColorSpace(pub String);
