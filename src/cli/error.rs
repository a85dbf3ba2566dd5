use std::io;

use wcag_contrast::{InvalidColorFormat, Scalar};

#[derive(Debug)]
pub enum CliError {
    InvalidColorFormat(String),
    MissingInput,
    InvalidTarget(Scalar),
    StdoutClosed,
    IoError(io::Error),
}

impl CliError {
    pub fn message(&self) -> String {
        match self {
            CliError::InvalidColorFormat(input) => format!("invalid color format: '{}'", input),
            CliError::MissingInput => {
                "Provide at least one foreground color using --foreground or --colors".into()
            }
            CliError::InvalidTarget(ratio) => format!(
                "target ratio must lie between 1.0 and 21.0 (got '{}')",
                ratio
            ),
            CliError::StdoutClosed => "output pipe has been closed".into(),
            CliError::IoError(err) => format!("I/O error: {}", err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe => CliError::StdoutClosed,
            _ => CliError::IoError(err),
        }
    }
}

impl From<InvalidColorFormat> for CliError {
    fn from(err: InvalidColorFormat) -> Self {
        CliError::InvalidColorFormat(err.input().to_string())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
