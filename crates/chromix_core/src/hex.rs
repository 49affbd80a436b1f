//! Hex notation: `#RRGGBB` in, `#rrggbb` out

use crate::color::Color;
use crate::error::{ParseError, Result};

/// Parse exactly six hex digits, optionally prefixed with `#`.
///
/// Case-insensitive. Shorthand (`#abc`) and alpha (`#rrggbbaa`) forms are
/// rejected; so is anything else that is not six digits.
pub fn parse_hex(input: &str) -> Result<Color> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let offset = input.len() - digits.len();

    let mut value = 0u32;
    let mut found = 0;
    for (index, ch) in digits.char_indices() {
        let Some(digit) = ch.to_digit(16) else {
            return Err(ParseError::InvalidDigit {
                ch,
                index: index + offset,
            });
        };
        // Excess digits shift off the top; the length check rejects them
        value = value << 4 | digit;
        found += 1;
    }
    if found != 6 {
        return Err(ParseError::Length { found });
    }

    Ok(Color::from_rgb24(value))
}

/// Format as `#rrggbb`, rounding each channel to the nearest integer
pub fn to_hex(color: Color) -> String {
    color.to_string()
}
