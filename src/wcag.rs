//! WCAG 2.x compliance levels for a contrast ratio.
//!
//! See: <https://www.w3.org/TR/WCAG21/#contrast-minimum>

use std::fmt;

use crate::suggest::suggest_alternative;
use crate::types::Scalar;
use crate::Color;

/// Minimum ratio for normal text at level AA.
pub const AA_NORMAL: Scalar = 4.5;
/// Minimum ratio for large text at level AA.
pub const AA_LARGE: Scalar = 3.0;
/// Minimum ratio for normal text at level AAA.
pub const AAA_NORMAL: Scalar = 7.0;
/// Minimum ratio for large text at level AAA.
pub const AAA_LARGE: Scalar = 4.5;

/// The outcome of checking a contrast ratio against the four WCAG thresholds.
///
/// The flags are independent of each other. A ratio of exactly 4.5 passes `aa_normal` and
/// `aaa_large`, but not `aaa_normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compliance {
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

/// The highest level reached for one text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Aaa,
    Aa,
    Fail,
}

impl Level {
    fn new(aaa: bool, aa: bool) -> Self {
        if aaa {
            Level::Aaa
        } else if aa {
            Level::Aa
        } else {
            Level::Fail
        }
    }

    pub fn passes(self) -> bool {
        self != Level::Fail
    }

    /// A short label such as `✓ AA (normal text)`.
    pub fn describe(self, text_size: &str) -> String {
        match self {
            Level::Aaa => format!("✓ AAA ({} text)", text_size),
            Level::Aa => format!("✓ AA ({} text)", text_size),
            Level::Fail => format!("✗ Fails AA ({} text)", text_size),
        }
    }
}

impl Compliance {
    pub fn from_ratio(ratio: Scalar) -> Self {
        Compliance {
            aa_normal: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }

    pub fn normal_text(&self) -> Level {
        Level::new(self.aaa_normal, self.aa_normal)
    }

    pub fn large_text(&self) -> Level {
        Level::new(self.aaa_large, self.aa_large)
    }

    /// Human readable summary, e.g. `✓ AA (normal text) | ✓ AAA (large text)`.
    pub fn summary(&self) -> String {
        format!(
            "{} | {}",
            self.normal_text().describe("normal"),
            self.large_text().describe("large")
        )
    }
}

/// Advice on how a color pair may be used, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Excellent,
    Good,
    LargeTextOnly,
    Insufficient,
}

impl Recommendation {
    pub fn new(compliance: &Compliance) -> Self {
        if compliance.aaa_normal {
            Recommendation::Excellent
        } else if compliance.aa_normal {
            Recommendation::Good
        } else if compliance.aa_large {
            Recommendation::LargeTextOnly
        } else {
            Recommendation::Insufficient
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Recommendation::Excellent => "Excellent contrast! Safe for all text sizes.",
            Recommendation::Good => {
                "Good contrast for normal text. Consider darker shade for AAA compliance."
            }
            Recommendation::LargeTextOnly => {
                "Only suitable for large text (18pt+ or 14pt bold). Use darker color for normal text."
            }
            Recommendation::Insufficient => {
                "Insufficient contrast. Do not use for text. Decorative elements only."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything there is to say about one foreground color on a background.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastReport {
    pub foreground: Color,
    pub background: Color,
    pub ratio: Scalar,
    pub compliance: Compliance,
    pub recommendation: Recommendation,
    /// An adjusted foreground reaching `target_ratio`. Only searched for when the pair fails
    /// AA for normal text.
    pub suggestion: Option<Color>,
}

impl ContrastReport {
    pub fn new(foreground: Color, background: Color, target_ratio: Scalar) -> Self {
        let ratio = foreground.contrast_ratio(&background);
        let compliance = Compliance::from_ratio(ratio);
        let suggestion = if compliance.aa_normal {
            None
        } else {
            suggest_alternative(&foreground, &background, target_ratio)
        };

        ContrastReport {
            foreground,
            background,
            ratio,
            compliance,
            recommendation: Recommendation::new(&compliance),
            suggestion,
        }
    }

    /// Contrast ratio of the suggested color against the background.
    pub fn suggestion_ratio(&self) -> Option<Scalar> {
        self.suggestion.map(|c| c.contrast_ratio(&self.background))
    }
}
