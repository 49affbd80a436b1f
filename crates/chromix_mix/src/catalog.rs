//! Built-in presets and TOML-loaded catalogs
//!
//! A catalog holds two kinds of entries:
//!
//! - **Color pairs**: two colors that replace the current request's colors
//! - **Examples**: complete requests, including ratio and color space
//!
//! ```toml
//! [[presets]]
//! id = "brand"
//! color_a = "#2448A6"
//! color_b = "#F5B841"
//!
//! [[examples]]
//! id = "gradient"
//! color_a = "#2448A6"
//! color_b = "#F5B841"
//! ratio = 50
//! color_space = "oklch"
//! ```

use std::collections::HashSet;

use chromix_core::{Color, MixRatio};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::request::MixRequest;
use crate::space::ColorSpace;

/// Two colors to load into the playground
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPair {
    pub id: String,
    pub color_a: Color,
    pub color_b: Color,
}

impl ColorPair {
    pub fn new(id: impl Into<String>, color_a: Color, color_b: Color) -> Self {
        Self {
            id: id.into(),
            color_a,
            color_b,
        }
    }

    /// Swap this pair into `current`, keeping its ratio and space
    pub fn apply(&self, current: MixRequest) -> MixRequest {
        current.with_colors(self.color_a, self.color_b)
    }
}

/// A complete request under a stable id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Example {
    pub id: String,
    pub color_a: Color,
    pub color_b: Color,
    pub ratio: MixRatio,
    #[serde(default)]
    pub color_space: ColorSpace,
}

impl Example {
    pub fn new(id: impl Into<String>, request: MixRequest) -> Self {
        Self {
            id: id.into(),
            color_a: request.color_a,
            color_b: request.color_b,
            ratio: request.ratio,
            color_space: request.color_space,
        }
    }

    pub fn request(&self) -> MixRequest {
        MixRequest::new(self.color_a, self.color_b, self.ratio, self.color_space)
    }
}

/// Color pairs and examples, looked up by id
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresetCatalog {
    presets: Vec<ColorPair>,
    examples: Vec<Example>,
}

impl PresetCatalog {
    /// The playground's shipped presets and examples
    pub fn builtin() -> Self {
        let hex = Color::from_rgb24;
        let example = |id: &str, a: u32, b: u32, percent: i64, space: ColorSpace| {
            Example::new(
                id,
                MixRequest::new(hex(a), hex(b), MixRatio::clamped(percent), space),
            )
        };

        Self {
            presets: vec![
                ColorPair::new("brand", hex(0x2448A6), hex(0xF5B841)),
                ColorPair::new("sunset", hex(0xFF6B6B), hex(0xFFA500)),
                ColorPair::new("ocean", hex(0x0077BE), hex(0x00CED1)),
                ColorPair::new("forest", hex(0x228B22), hex(0x90EE90)),
            ],
            examples: vec![
                example("pastel", 0x6B8CFF, 0xFFFFFF, 30, ColorSpace::Srgb),
                example("deep", 0x1A5490, 0x000000, 70, ColorSpace::Srgb),
                example("glass", 0x6B8CFF, 0xFFFFFF, 40, ColorSpace::Srgb),
                example("gradient", 0x2448A6, 0xF5B841, 50, ColorSpace::Oklch),
                example("complementary", 0x6B8CFF, 0xFF8C6B, 50, ColorSpace::Oklch),
                example("monochromatic", 0x2448A6, 0xFFFFFF, 60, ColorSpace::Hsl),
            ],
        }
    }

    /// Parse a catalog document.
    ///
    /// Colors must be six-digit hex and ratios within `[0, 100]`; ids must be
    /// unique within each section.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let catalog: PresetCatalog = toml::from_str(src)?;
        check_unique("preset", catalog.presets.iter().map(|p| p.id.as_str()))?;
        check_unique("example", catalog.examples.iter().map(|e| e.id.as_str()))?;
        debug!(
            "PresetCatalog::from_toml_str - loaded {} presets, {} examples",
            catalog.presets.len(),
            catalog.examples.len()
        );
        Ok(catalog)
    }

    /// Merge `other` into this catalog; entries with an existing id replace it
    pub fn extend(&mut self, other: PresetCatalog) {
        for pair in other.presets {
            match self.presets.iter_mut().find(|p| p.id == pair.id) {
                Some(existing) => *existing = pair,
                None => self.presets.push(pair),
            }
        }
        for example in other.examples {
            match self.examples.iter_mut().find(|e| e.id == example.id) {
                Some(existing) => *existing = example,
                None => self.examples.push(example),
            }
        }
    }

    pub fn pair(&self, id: &str) -> Option<&ColorPair> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn example(&self, id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    pub fn presets(&self) -> &[ColorPair] {
        &self.presets
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_ids() {
        let catalog = PresetCatalog::builtin();
        let presets: Vec<&str> = catalog.presets().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(presets, vec!["brand", "sunset", "ocean", "forest"]);
        assert_eq!(catalog.examples().len(), 6);
    }

    #[test]
    fn applying_a_pair_keeps_ratio_and_space() {
        let catalog = PresetCatalog::builtin();
        let current = MixRequest::default()
            .with_ratio(MixRatio::clamped(20))
            .with_space(ColorSpace::Hsl);

        let next = catalog.pair("ocean").unwrap().apply(current);
        assert_eq!(
            next.expression(),
            "color-mix(in hsl, #0077be 20%, #00ced1 80%)"
        );
    }

    #[test]
    fn example_requests() {
        let catalog = PresetCatalog::builtin();
        let mono = catalog.example("monochromatic").unwrap().request();
        assert_eq!(
            mono.expression(),
            "color-mix(in hsl, #2448a6 60%, #ffffff 40%)"
        );
        assert!(catalog.example("random").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let src = r##"
[[presets]]
id = "brand"
color_a = "#000000"
color_b = "#ffffff"

[[presets]]
id = "brand"
color_a = "#111111"
color_b = "#eeeeee"
"##;
        let err = PresetCatalog::from_toml_str(src).unwrap_err();
        assert_eq!(err.to_string(), "duplicate preset id `brand`");
    }

    #[test]
    fn bad_values_surface_as_toml_errors() {
        let bad_color = r##"
[[presets]]
id = "x"
color_a = "#12345"
color_b = "#ffffff"
"##;
        assert!(matches!(
            PresetCatalog::from_toml_str(bad_color),
            Err(CatalogError::Toml(_))
        ));

        let bad_ratio = r##"
[[examples]]
id = "x"
color_a = "#000000"
color_b = "#ffffff"
ratio = 120
"##;
        assert!(matches!(
            PresetCatalog::from_toml_str(bad_ratio),
            Err(CatalogError::Toml(_))
        ));
    }
}
