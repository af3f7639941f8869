// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_parse_int_prefix() {
    assert_eq!(parse_int("123abc"), 123.0);
    assert_eq!(parse_int("  -42px"), -42.0);
    assert!(parse_int("abc").is_nan());
}

#[test]
fn test_parse_float_prefix() {
    assert_eq!(parse_float("12.5abc"), 12.5);
    assert_eq!(parse_float("3"), 3.0);
    assert!(parse_float("x1").is_nan());
}

#[test]
fn test_to_number_whole_string() {
    assert_eq!(to_number("123"), 123.0);
    assert_eq!(to_number(""), 0.0);
    assert!(to_number("12px").is_nan());
}
