//! This module defines log severity levels and their console presentation.
use colored::{ColoredString, Colorize};
use std::fmt;

/// The severity of a log line.
///
/// Each level maps to a short display prefix and a console color:
///
/// | Level   | Prefix | Color  |
/// |---------|--------|--------|
/// | Info    | `[+]`  | green  |
/// | Warning | `[!]`  | yellow |
/// | Error   | `[-]`  | red    |
/// | Debug   | `[*]`  | blue   |
///
/// The enum is closed, so there is no out-of-range value at runtime and
/// both accessors below are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Debug,
}

impl LogLevel {
    /// Returns the display prefix substituted for `%level%`.
    pub fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "[+]",
            LogLevel::Warning => "[!]",
            LogLevel::Error => "[-]",
            LogLevel::Debug => "[*]",
        }
    }

    /// Colorizes a formatted line for the console sink.
    ///
    /// `colored` emits a reset sequence after the fragment, so console
    /// styling always returns to the terminal default once the line is
    /// written, and degrades to plain text on non-tty outputs.
    pub(crate) fn paint(self, line: &str) -> ColoredString {
        match self {
            LogLevel::Info => line.green(),
            LogLevel::Warning => line.yellow(),
            LogLevel::Error => line.red(),
            LogLevel::Debug => line.blue(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
