//! Search for a foreground color that reaches a target contrast ratio.
//!
//! The search only tries a handful of adjustments in one direction, so `None` means "nothing
//! close by works", not "no such color exists".

use tracing::{debug, trace};

use crate::helper::Fraction;
use crate::types::Scalar;
use crate::Color;

/// The ratio required for normal text at WCAG level AA.
pub const DEFAULT_TARGET_RATIO: Scalar = 4.5;

const ADJUSTMENT_STEPS: [Scalar; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];

/// Which way the foreground gets pushed to gain contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Lighten,
    Darken,
}

impl Direction {
    /// Lighten a foreground that is already lighter than the background, darken it otherwise.
    /// Equal luminances darken.
    pub fn for_pair(foreground: &Color, background: &Color) -> Self {
        if foreground.luminance() > background.luminance() {
            Direction::Lighten
        } else {
            Direction::Darken
        }
    }

    pub fn apply(self, color: &Color, amount: Fraction) -> Color {
        match self {
            Direction::Lighten => color.lighten(amount),
            Direction::Darken => color.darken(amount),
        }
    }
}

/// Suggest a lighter or darker variant of `foreground` whose contrast ratio against
/// `background` is at least `target_ratio`.
///
/// Returns `None` if the pair already meets the target, or if none of the tried adjustments
/// (10% to 50%) gets there.
pub fn suggest_alternative(
    foreground: &Color,
    background: &Color,
    target_ratio: Scalar,
) -> Option<Color> {
    let current = foreground.contrast_ratio(background);
    if current >= target_ratio {
        return None;
    }

    let direction = Direction::for_pair(foreground, background);
    let suggestion = ADJUSTMENT_STEPS.iter().find_map(|&amount| {
        let candidate = direction.apply(foreground, Fraction::from(amount));
        let ratio = candidate.contrast_ratio(background);
        trace!(%candidate, amount, ratio, "trying adjustment");
        (ratio >= target_ratio).then_some(candidate)
    });

    match suggestion {
        Some(color) => debug!(%foreground, %background, ?direction, %color, "found alternative"),
        None => debug!(%foreground, %background, ?direction, target_ratio, "no alternative"),
    }

    suggestion
}
