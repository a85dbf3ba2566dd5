use clap::ArgMatches;
use tracing::{debug, info};

use wcag_contrast::{Color, ContrastReport};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Output;

pub struct ContrastCommand;

/// The foreground colors in the order given: `--foreground` first, then every `--colors` entry.
fn foreground_args(matches: &ArgMatches) -> Vec<String> {
    let mut colors = Vec::new();

    if let Some(foreground) = matches.get_one::<String>("foreground") {
        if !foreground.is_empty() {
            colors.push(foreground.clone());
        }
    }

    if let Some(list) = matches.get_one::<String>("colors") {
        if !list.is_empty() {
            colors.extend(list.split(',').map(|c| c.trim().to_string()));
        }
    }

    colors
}

impl ContrastCommand {
    pub fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        let background_arg = matches
            .get_one::<String>("background")
            .expect("required argument");

        let foregrounds = foreground_args(matches);
        if foregrounds.is_empty() {
            return Err(CliError::MissingInput);
        }

        let background: Color = background_arg.parse()?;
        info!(%background, count = foregrounds.len(), "checking foreground colors");

        out.show_header(background_arg)?;

        for foreground_arg in &foregrounds {
            if foreground_arg == background_arg {
                debug!(color = %foreground_arg, "skipping foreground identical to background");
                continue;
            }

            let foreground: Color = foreground_arg.parse()?;
            let report = ContrastReport::new(foreground, background, config.target_ratio);
            out.show_report(foreground_arg, &report)?;
        }

        info!(reported = out.reports_shown(), "finished contrast report");
        out.show_standards()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Brush;
    use crate::cli::build_cli;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["wcag-contrast"];
        argv.extend_from_slice(args);
        build_cli().try_get_matches_from(argv).expect("valid arguments")
    }

    fn run(args: &[&str]) -> (Result<()>, String, usize) {
        let matches = matches(args);
        let config = Config::from_matches(&matches).expect("valid config");
        let mut buffer = Vec::new();
        let mut out = Output::new(&mut buffer, Brush::new(false));
        let result = ContrastCommand.run(&mut out, &matches, &config);
        let shown = out.reports_shown();
        (result, String::from_utf8(buffer).unwrap(), shown)
    }

    #[test]
    fn collects_foregrounds_in_order() {
        let m = matches(&["-b", "#fff", "-f", "#000", "-c", "#111111, #222222,#333333"]);
        assert_eq!(
            vec!["#000", "#111111", "#222222", "#333333"],
            foreground_args(&m)
        );
        assert!(foreground_args(&matches(&["-b", "#fff"])).is_empty());
    }

    #[test]
    fn missing_foreground() {
        let (result, output, _) = run(&["-b", "#FFFFFF"]);
        assert!(matches!(result, Err(CliError::MissingInput)));
        assert!(output.is_empty());
    }

    #[test]
    fn skips_foreground_identical_to_background() {
        let (result, output, shown) =
            run(&["-b", "#FAFAF5", "-c", "#8A9A5B,#E6C2BF,#FAFAF5"]);
        assert!(result.is_ok());
        assert_eq!(2, shown);
        assert!(output.contains("Foreground: #8A9A5B\n"));
        assert!(output.contains("Foreground: #E6C2BF\n"));
        assert!(!output.contains("Foreground: #FAFAF5"));
    }

    #[test]
    fn skip_is_textual() {
        // same color, different spelling: still analysed
        let (result, output, shown) = run(&["-b", "#FFFFFF", "-f", "#ffffff"]);
        assert!(result.is_ok());
        assert_eq!(1, shown);
        assert!(output.contains("Contrast Ratio: 1.00:1"));
    }

    #[test]
    fn padded_list_entries_are_trimmed() {
        let (result, output, shown) = run(&["-b", "#FFFFFF", "-c", " #000000 ,\t#767676"]);
        assert!(result.is_ok());
        assert_eq!(2, shown);
        assert!(output.contains("Foreground: #000000\n"));
        assert!(output.contains("Foreground: #767676\n"));
    }

    #[test]
    fn padded_foreground_flag_is_rejected() {
        let (result, _, shown) = run(&["-b", "#FFFFFF", "-f", " #000000 "]);
        assert_eq!(0, shown);
        match result {
            Err(CliError::InvalidColorFormat(input)) => assert_eq!(" #000000 ", input),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_foreground() {
        let (result, _, _) = run(&["-b", "#FFFFFF", "-f", "#12345"]);
        match result {
            Err(CliError::InvalidColorFormat(input)) => assert_eq!("#12345", input),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_background() {
        let (result, output, _) = run(&["-b", "#ZZZZZZ", "-f", "#000000"]);
        assert!(matches!(result, Err(CliError::InvalidColorFormat(_))));
        assert!(output.is_empty());
    }
}
