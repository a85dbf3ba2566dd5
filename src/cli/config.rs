use atty::Stream;
use clap::ArgMatches;

use wcag_contrast::{Scalar, DEFAULT_TARGET_RATIO};

use crate::brush::Brush;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn from_arg(mode: &str) -> Self {
        match mode {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }

    fn enabled(self, interactive: bool) -> bool {
        match self {
            ColorMode::Auto => interactive,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub brush: Brush,
    pub target_ratio: Scalar,
    pub verbosity: u8,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let mode = matches
            .get_one::<String>("color-mode")
            .map_or(ColorMode::Auto, |m| ColorMode::from_arg(m));
        let interactive_mode = atty::is(Stream::Stdout);

        let target_ratio = matches
            .get_one::<f64>("target")
            .copied()
            .unwrap_or(DEFAULT_TARGET_RATIO);
        if !(1.0..=21.0).contains(&target_ratio) {
            return Err(CliError::InvalidTarget(target_ratio));
        }

        Ok(Config {
            brush: Brush::new(mode.enabled(interactive_mode)),
            target_ratio,
            verbosity: matches.get_count("verbose"),
        })
    }
}
