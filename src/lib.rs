mod helper;
pub mod parser;
pub mod suggest;
mod types;
pub mod wcag;

#[cfg(test)]
mod test_helper;

use std::{fmt, str::FromStr};

pub use helper::Fraction;
pub use parser::InvalidColorFormat;
pub use suggest::{suggest_alternative, Direction, DEFAULT_TARGET_RATIO};
pub use types::Scalar;
pub use wcag::{Compliance, ContrastReport, Level, Recommendation};

/// The representation of a color as an 8-bit sRGB triple.
///
/// Every channel is a `u8`, so a `Color` can never hold a value outside of
/// `0..=255`. Colors are usually obtained by parsing a hex string:
///
/// ```
/// use wcag_contrast::Color;
///
/// let olive: Color = "#8A9A5B".parse().unwrap();
/// assert_eq!(olive, Color::from_rgb(0x8a, 0x9a, 0x5b));
/// assert_eq!(olive.to_hex_string(true), "#8a9a5b");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Create a `Color` from integer RGB values between 0 and 255.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub const fn black() -> Color {
        Color::from_rgb(0, 0, 0)
    }

    pub const fn white() -> Color {
        Color::from_rgb(255, 255, 255)
    }

    /// The red, green and blue channels of the color.
    #[inline]
    pub fn to_rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The channels of the color, normalized to the range `[0.0, 1.0]`.
    pub fn to_rgb_float(&self) -> [Scalar; 3] {
        self.to_rgb().map(|c| Scalar::from(c) / 255.0)
    }

    /// Format the color as a hex string (`#fc0070`). Channels are always rendered as two
    /// lowercase, zero-padded digits.
    pub fn to_hex_string(&self, leading_hash: bool) -> String {
        format!(
            "{}{:02x}{:02x}{:02x}",
            if leading_hash { "#" } else { "" },
            self.r,
            self.g,
            self.b,
        )
    }

    fn map_channels(&self, f: impl Fn(Scalar) -> Scalar) -> Color {
        let [r, g, b] = self.to_rgb().map(|c| f(Scalar::from(c)) as u8);
        Color::from_rgb(r, g, b)
    }

    /// Lighten a color by moving every channel towards 255 by the given fraction of the
    /// remaining distance. A fraction of `0.0` leaves the color unchanged, `1.0` yields white.
    pub fn lighten(&self, f: Fraction) -> Color {
        let f = f.value();
        self.map_channels(|c| Scalar::min(255.0, (c + (255.0 - c) * f).floor()))
    }

    /// Darken a color by scaling every channel by `1 - f`. A fraction of `0.0` leaves the
    /// color unchanged, `1.0` yields black.
    pub fn darken(&self, f: Fraction) -> Color {
        let f = f.value();
        self.map_channels(|c| Scalar::max(0.0, (c * (1.0 - f)).floor()))
    }

    /// The relative brightness of a color (normalized to 0.0 for darkest black
    /// and 1.0 for lightest white), according to the WCAG definition.
    ///
    /// See: <https://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef>
    pub fn luminance(&self) -> Scalar {
        fn f(s: Scalar) -> Scalar {
            if s <= 0.03928 {
                s / 12.92
            } else {
                Scalar::powf((s + 0.055) / 1.055, 2.4)
            }
        }

        let [r, g, b] = self.to_rgb_float().map(f);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Contrast ratio between two colors as defined by the WCAG. The ratio can range from 1.0
    /// to 21.0. Two colors with a contrast ratio of 4.5 or higher can be used as text color and
    /// background color and should be well readable.
    ///
    /// <https://www.w3.org/TR/2008/REC-WCAG20-20081211/#contrast-ratiodef>
    pub fn contrast_ratio(&self, other: &Color) -> Scalar {
        let l_self = self.luminance();
        let l_other = other.luminance();

        if l_self > l_other {
            (l_self + 0.05) / (l_other + 0.05)
        } else {
            (l_other + 0.05) / (l_self + 0.05)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string(true))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::from_rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_color(s)
    }
}
