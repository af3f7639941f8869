// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[parameterized(
    unix = { "a\nb\n", &["a", "b"] },
    windows = { "a\r\nb\r\n", &["a", "b"] },
    old_mac = { "a\rb", &["a", "b"] },
    no_final_newline = { "a\nb", &["a", "b"] },
    trailing_spaces = { "a  \nb\t\n", &["a", "b"] },
    blank_line_kept = { "a\n\nb\n", &["a", "", "b"] },
    empty = { "", &[] },
    only_newline = { "\n", &[""] },
)]
fn normalize_cases(text: &str, expected: &[&str]) {
    assert_eq!(normalize(text), expected);
}

#[test]
fn trim_line_keeps_leading_whitespace() {
    assert_eq!(trim_line("  x  "), "  x");
}
