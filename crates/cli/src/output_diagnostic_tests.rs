// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn render(prefix: &str, color: Color, msg: impl std::fmt::Display, colored: bool) -> String {
    let mut buf = Vec::new();
    write_diagnostic(&mut buf, prefix, color, msg, colored);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_plain_text_when_not_colored() {
    assert_eq!(
        render("Error", Color::Red, "no units selected", false),
        "Error: no units selected\n"
    );
}

#[test]
fn error_with_ansi_when_colored() {
    assert_eq!(
        render("Error", Color::Red, "no units selected", true),
        "\x1b[31mError: no units selected\x1b[0m\n"
    );
}

#[test]
fn warning_with_ansi_when_colored() {
    assert_eq!(
        render("Warning", Color::Yellow, "no units match 'x'", true),
        "\x1b[33mWarning: no units match 'x'\x1b[0m\n"
    );
}

#[test]
fn diagnostic_accepts_format_args() {
    assert_eq!(
        render("Warning", Color::Yellow, format_args!("{} filters", 2), false),
        "Warning: 2 filters\n"
    );
}

#[test]
fn paint_is_identity_when_disabled() {
    assert_eq!(paint("PASS", Color::Green, false), "PASS");
    assert_eq!(paint("PASS", Color::Green, true), "\x1b[32mPASS\x1b[0m");
}
