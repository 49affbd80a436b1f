//! Parsing colors reported back by a rendering engine
//!
//! When a `color-mix()` expression is applied to an element, the engine
//! reports the resolved value as computed style. Depending on the engine and
//! the interpolation space that string takes one of these forms:
//!
//! - `rgb(36, 72, 166)` / `rgba(36, 72, 166, 0.5)` (legacy comma syntax)
//! - `rgb(36 72 166 / 50%)` (space syntax)
//! - `color(srgb 0.14 0.28 0.65)` (unit components)
//!
//! Alpha is accepted and discarded. Percent channels are scaled to their
//! range.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, opt, verify},
    error::{context, VerboseError},
    number::complete::float,
    sequence::{delimited, preceded},
    Finish, IResult,
};
use tracing::debug;

use crate::color::Color;
use crate::error::{ParseError, Result};

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parse a computed-style color string into a [`Color`].
pub fn parse_computed_color(input: &str) -> Result<Color> {
    match all_consuming(delimited(multispace0, computed_color, multispace0))(input).finish() {
        Ok((_, color)) => Ok(color),
        Err(err) => {
            debug!("parse_computed_color - rejected {:?}: {:?}", input, err);
            Err(ParseError::Syntax(input.trim().to_string()))
        }
    }
}

fn computed_color(input: &str) -> ParseResult<'_, Color> {
    alt((
        context("rgb()", rgb_function),
        context("color()", srgb_function),
    ))(input)
}

/// Parse rgb(r, g, b), rgba(r, g, b, a) or rgb(r g b / a)
fn rgb_function(input: &str) -> ParseResult<'_, Color> {
    let (input, _) = alt((tag_no_case("rgba"), tag_no_case("rgb")))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, [r, g, b]) = alt((comma_channels, space_channels))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Color::from_channels(r, g, b)))
}

/// Legacy syntax: commas throughout, alpha after a fourth comma
fn comma_channels(input: &str) -> ParseResult<'_, [f32; 3]> {
    let (input, r) = byte_channel(input)?;
    let (input, _) = comma(input)?;
    let (input, g) = byte_channel(input)?;
    let (input, _) = comma(input)?;
    let (input, b) = byte_channel(input)?;
    let (input, _) = opt(preceded(comma, alpha))(input)?;
    Ok((input, [r, g, b]))
}

/// Modern syntax: whitespace throughout, alpha after a slash
fn space_channels(input: &str) -> ParseResult<'_, [f32; 3]> {
    let (input, r) = byte_channel(input)?;
    let (input, _) = multispace1(input)?;
    let (input, g) = byte_channel(input)?;
    let (input, _) = multispace1(input)?;
    let (input, b) = byte_channel(input)?;
    let (input, _) = opt(preceded(slash, alpha))(input)?;
    Ok((input, [r, g, b]))
}

/// Parse color(srgb r g b) with components in [0, 1]
fn srgb_function(input: &str) -> ParseResult<'_, Color> {
    let (input, _) = tag_no_case("color")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = tag_no_case("srgb")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, r) = unit_channel(input)?;
    let (input, _) = multispace1(input)?;
    let (input, g) = unit_channel(input)?;
    let (input, _) = multispace1(input)?;
    let (input, b) = unit_channel(input)?;
    let (input, _) = opt(preceded(slash, alpha))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Color::from_unit(r, g, b)))
}

fn comma(input: &str) -> ParseResult<'_, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn slash(input: &str) -> ParseResult<'_, char> {
    delimited(multispace0, char('/'), multispace0)(input)
}

/// A finite number; `nan` and `inf` are not colors
fn number(input: &str) -> ParseResult<'_, f32> {
    context("finite number", verify(float, |n: &f32| n.is_finite()))(input)
}

/// Channel in [0, 255], or a percentage of it
fn byte_channel(input: &str) -> ParseResult<'_, f32> {
    let (input, number) = number(input)?;
    let (input, percent) = opt(char('%'))(input)?;
    let number = if percent.is_some() {
        number * 2.55
    } else {
        number
    };
    Ok((input, number))
}

/// Channel in [0, 1], or a percentage
fn unit_channel(input: &str) -> ParseResult<'_, f32> {
    let (input, number) = number(input)?;
    let (input, percent) = opt(char('%'))(input)?;
    let number = if percent.is_some() {
        number / 100.0
    } else {
        number
    };
    Ok((input, number))
}

fn alpha(input: &str) -> ParseResult<'_, f32> {
    let (input, a) = number(input)?;
    let (input, _) = opt(char('%'))(input)?;
    Ok((input, a))
}
