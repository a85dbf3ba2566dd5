use std::io::{self, Write};

use atty::Stream;

mod brush;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use brush::Brush;
use commands::ContrastCommand;
use config::Config;
use error::{CliError, Result};
use output::Output;

fn write_stderr(painter: Brush, header: &str, message: &str) {
    writeln!(
        io::stderr(),
        "{}: {}",
        painter.paint(format!("[{}]", header), brush::FAIL),
        message
    )
    .ok();
}

#[cfg(windows)]
fn enable_ansi_support() {
    output_vt100::try_init().ok();
}

#[cfg(not(windows))]
fn enable_ansi_support() {}

fn run() -> Result<()> {
    let app = cli::build_cli();
    let matches = app.get_matches();

    let config = Config::from_matches(&matches)?;
    if config.brush.enabled() {
        enable_ansi_support();
    }
    logging::init(config.verbosity, atty::is(Stream::Stderr));

    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();
    let mut out = Output::new(&mut stdout_lock, config.brush);

    ContrastCommand.run(&mut out, &matches, &config)
}

fn main() {
    let result = run();
    match result {
        Err(CliError::StdoutClosed) => {}
        Err(err) => {
            let brush = Brush::new(atty::is(Stream::Stderr));
            write_stderr(brush, "wcag-contrast error", &err.message());
            std::process::exit(1);
        }
        Ok(()) => {}
    }
}
