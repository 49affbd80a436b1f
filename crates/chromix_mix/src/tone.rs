//! Component tones derived from a single base color
//!
//! Interactive states and surfaces are tinted from the base color with a
//! one-color `color-mix()` against a keyword, e.g.
//! `color-mix(in srgb, #2448a6 80%, white)` for a hover state. The second
//! weight is left implicit, so the keyword gets the complement.

use chromix_core::{linear_mix, Color, MixRatio};

use crate::space::ColorSpace;

/// What the base color is mixed toward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToneTarget {
    White,
    Black,
    Transparent,
    /// The page's `--surface` custom property
    Surface,
}

impl ToneTarget {
    pub fn css(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Transparent => "transparent",
            Self::Surface => "var(--surface)",
        }
    }

    /// Local value of the target, if it has one without a rendering engine
    pub fn color(self) -> Option<Color> {
        match self {
            Self::White => Some(Color::WHITE),
            Self::Black => Some(Color::BLACK),
            // Alpha and custom properties are only known to the engine
            Self::Transparent | Self::Surface => None,
        }
    }
}

/// Every tone, in declaration order
const TONES: [Tone; 7] = [
    Tone::Hover,
    Tone::Active,
    Tone::CardSurface,
    Tone::CardBorder,
    Tone::BadgeSoft,
    Tone::BadgeSubtle,
    Tone::BadgeBorder,
];

/// Derived component tone
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Button hover: lighter
    Hover,
    /// Button pressed: darker
    Active,
    /// Faint card background
    CardSurface,
    CardBorder,
    /// Badge with a light tinted background
    BadgeSoft,
    /// Badge with a barely tinted background
    BadgeSubtle,
    BadgeBorder,
}

impl Tone {
    pub fn all() -> &'static [Tone] {
        &TONES
    }

    /// Position in [`Tone::all`]
    fn index(self) -> usize {
        self as usize
    }

    /// Weight of the base color
    pub fn weight(self) -> MixRatio {
        let percent = match self {
            Self::Hover => 80,
            Self::Active => 70,
            Self::CardSurface => 5,
            Self::CardBorder => 20,
            Self::BadgeSoft => 30,
            Self::BadgeSubtle => 10,
            Self::BadgeBorder => 30,
        };
        MixRatio::clamped(percent)
    }

    pub fn target(self) -> ToneTarget {
        match self {
            Self::Hover | Self::BadgeSoft | Self::BadgeSubtle => ToneTarget::White,
            Self::Active => ToneTarget::Black,
            Self::CardSurface => ToneTarget::Surface,
            Self::CardBorder | Self::BadgeBorder => ToneTarget::Transparent,
        }
    }

    /// `color-mix(in <space>, <base> <weight>%, <target>)`
    pub fn expression(self, space: ColorSpace, base: Color) -> String {
        format!(
            "color-mix(in {}, {} {}, {})",
            space,
            base,
            self.weight(),
            self.target().css()
        )
    }

    /// Channel-linear preview, when the target has a local value
    pub fn approximate(self, base: Color) -> Option<Color> {
        self.target()
            .color()
            .map(|target| linear_mix(base, target, self.weight()))
    }
}

/// Every tone expression for one base color and space
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToneSet {
    expressions: [String; 7],
}

impl ToneSet {
    pub fn new(space: ColorSpace, base: Color) -> Self {
        Self {
            expressions: TONES.map(|tone| tone.expression(space, base)),
        }
    }

    pub fn get(&self, tone: Tone) -> &str {
        &self.expressions[tone.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tone, &str)> {
        Tone::all()
            .iter()
            .zip(&self.expressions)
            .map(|(tone, expression)| (*tone, expression.as_str()))
    }
}
