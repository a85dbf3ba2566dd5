use std::io;

use tracing::Level;

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. Stdout stays reserved for the report.
pub fn init(verbosity: u8, ansi: bool) {
    let result = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level_for(verbosity))
        .with_target(true)
        .with_ansi(ansi)
        .without_time()
        .try_init();

    if let Err(err) = result {
        tracing::warn!("logging already initialized: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(Level::WARN, level_for(0));
        assert_eq!(Level::INFO, level_for(1));
        assert_eq!(Level::DEBUG, level_for(2));
        assert_eq!(Level::TRACE, level_for(3));
        assert_eq!(Level::TRACE, level_for(9));
    }
}
