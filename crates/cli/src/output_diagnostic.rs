// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Colors are used only when the target is a terminal and `NO_COLOR` is
//! unset.

use std::io::{self, IsTerminal, Write};

/// ANSI foreground colors used by the runner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
        }
    }
}

/// Wrap `text` in a color escape when `enabled`
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{}\x1b[0m", color.code(), text)
    } else {
        text.to_string()
    }
}

/// Whether stdout should receive colored output
pub fn stdout_color() -> bool {
    io::stdout().is_terminal() && !crate::env::no_color()
}

fn stderr_color() -> bool {
    io::stderr().is_terminal() && !crate::env::no_color()
}

/// Print an error message to stderr.
pub fn print_error(msg: impl std::fmt::Display) {
    write_diagnostic(&mut io::stderr(), "Error", Color::Red, msg, stderr_color());
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    write_diagnostic(
        &mut io::stderr(),
        "Warning",
        Color::Yellow,
        msg,
        stderr_color(),
    );
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    prefix: &str,
    color: Color,
    msg: impl std::fmt::Display,
    colored: bool,
) {
    let line = format!("{}: {}", prefix, msg);
    let _ = writeln!(writer, "{}", paint(&line, color, colored));
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
