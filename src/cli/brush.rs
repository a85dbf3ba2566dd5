use std::fmt::Display;

use anstyle::{AnsiColor, Color, Style};

pub const PASS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
pub const FAIL: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
pub const HINT: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
pub const HEADING: Style = Style::new().bold();

/// Paints text with ANSI styles, or passes it through unchanged when colors are off.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    enabled: bool,
}

impl Brush {
    pub fn new(enabled: bool) -> Self {
        Brush { enabled }
    }

    pub fn enabled(self) -> bool {
        self.enabled
    }

    pub fn paint(self, text: impl Display, style: Style) -> String {
        if self.enabled {
            format!("{}{}{}", style.render(), text, style.render_reset())
        } else {
            text.to_string()
        }
    }
}
