use std::{error::Error, fmt};

use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map_res, opt};
use nom::sequence::tuple;
use nom::IResult;

use crate::Color;

/// Returned when a string is not a six digit hex color such as `#8a9a5b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorFormat {
    input: String,
}

impl InvalidColorFormat {
    fn new(input: &str) -> Self {
        InvalidColorFormat {
            input: input.to_string(),
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color format: '{}'", self.input)
    }
}

impl Error for InvalidColorFormat {}

fn hex_channel(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |num: &str| {
        u8::from_str_radix(num, 16)
    })(input)
}

fn parse_hex(input: &str) -> IResult<&str, Color> {
    let (input, _) = opt(char('#'))(input)?;
    let (input, (r, g, b)) = tuple((hex_channel, hex_channel, hex_channel))(input)?;
    Ok((input, Color::from_rgb(r, g, b)))
}

/// Parse a `RRGGBB` or `#RRGGBB` hex color (case-insensitive).
pub fn parse_color(input: &str) -> Result<Color, InvalidColorFormat> {
    all_consuming(parse_hex)(input)
        .map(|(_, c)| c)
        .map_err(|_| InvalidColorFormat::new(input))
}

#[cfg(test)]
fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r, g, b)
}

#[test]
fn parse_rgb_hex_syntax() {
    assert_eq!(Ok(rgb(255, 0, 153)), parse_color("#ff0099"));
    assert_eq!(Ok(rgb(255, 0, 153)), parse_color("#FF0099"));
    assert_eq!(Ok(rgb(255, 0, 153)), parse_color("ff0099"));
    assert_eq!(Ok(rgb(255, 0, 153)), parse_color("#Ff0099"));

    assert_eq!(Ok(rgb(87, 166, 206)), parse_color("57A6CE"));
    assert_eq!(Ok(rgb(138, 154, 91)), parse_color("#8A9A5B"));
    assert_eq!(Ok(rgb(250, 250, 245)), parse_color("#FAFAF5"));
}

#[test]
fn parse_rejects_wrong_length() {
    assert!(parse_color("").is_err());
    assert!(parse_color("#").is_err());
    assert!(parse_color("#f09").is_err());
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("#1234567").is_err());
    assert!(parse_color("#12345678").is_err());
}

#[test]
fn parse_rejects_surrounding_whitespace() {
    assert!(parse_color(" #ff0077 ").is_err());
    assert!(parse_color("  #ff0077  ").is_err());
    assert!(parse_color("#ff0077\n").is_err());
    assert!(parse_color("\tff0077").is_err());
}

#[test]
fn parse_rejects_non_hex() {
    assert!(parse_color("#ZZZZZZ").is_err());
    assert!(parse_color("#hh0033").is_err());
    assert!(parse_color("##123456").is_err());
    assert!(parse_color("#12 456").is_err());
    assert!(parse_color("+12345").is_err());
    assert!(parse_color("rgb(1, 2, 3)").is_err());
}

#[test]
fn parse_error_reports_input() {
    let err = parse_color("#ZZZZZZ").unwrap_err();
    assert_eq!("#ZZZZZZ", err.input());
    assert_eq!("invalid color format: '#ZZZZZZ'", err.to_string());
}
