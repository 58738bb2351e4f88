//! Colour and width detection for terminal output.

use owo_colors::{OwoColorize, colors::css};

/// Tables wider than this are shown stacked instead.
const NARROW_BELOW: u16 = 100;

fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(width, _)| width.0)
}

/// Whether the terminal is too narrow for the record tables.
///
/// Unknown widths (output piped to a file, for instance) count as wide.
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|width| width < NARROW_BELOW)
}

/// Extension trait for colourising messages.
///
/// Colour is dropped when stdout does not support it.
pub trait Colorize {
    /// Green, for completed actions.
    fn success(&self) -> String;
    /// Amber, for rejected input and warnings.
    fn warning(&self) -> String;
    /// Red, for failed lookups.
    fn error(&self) -> String;
    /// Blue, for headings.
    fn info(&self) -> String;
    /// Dimmed, for hints.
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), |s| s.fg::<css::Green>().to_string())
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), |s| s.fg::<css::Orange>().to_string())
    }

    fn error(&self) -> String {
        paint(self.as_ref(), |s| s.fg::<css::Red>().to_string())
    }

    fn info(&self) -> String {
        paint(self.as_ref(), |s| s.fg::<css::LightBlue>().to_string())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), |s| s.dimmed().to_string())
    }
}

fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color() {
        style(text)
    } else {
        text.to_string()
    }
}
