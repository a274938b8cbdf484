//! Coloured status output for the terminal

use owo_colors::{colors::css, OwoColorize};

/// Whether stdout can render colours
fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color() {
        style(text)
    } else {
        text.to_string()
    }
}

/// Extension trait for colouring the outcome of a check
pub trait Colorize {
    /// A document that rendered (green)
    fn passed(&self) -> String;
    /// A document that failed (red)
    fn failed(&self) -> String;
    /// Secondary text such as summaries
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn passed(&self) -> String {
        paint(self.as_ref(), |text| text.fg::<css::Green>().to_string())
    }

    fn failed(&self) -> String {
        paint(self.as_ref(), |text| text.fg::<css::Red>().bold().to_string())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), |text| text.dimmed().to_string())
    }
}
