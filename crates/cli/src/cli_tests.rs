// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::CommandFactory;
use serial_test::serial;

#[test]
fn test_command_is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
#[serial]
fn test_defaults() {
    let cli = Cli::try_parse_from(["primer"]).unwrap();
    assert!(cli.filters.is_empty());
    assert!(!cli.list);
    assert!(!cli.real_time);
    assert!(!cli.verbose);
    assert_eq!(cli.format, None);
}

#[test]
#[serial]
fn test_filters_and_flags() {
    let cli = Cli::try_parse_from([
        "primer",
        "loops",
        "conditionals.switch*",
        "--timeout-ms",
        "250",
        "--format",
        "json",
        "--real-time",
        "-v",
    ])
    .unwrap();
    assert_eq!(cli.filters, vec!["loops", "conditionals.switch*"]);
    assert_eq!(cli.timeout_ms, Some(250));
    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert!(cli.real_time);
    assert!(cli.verbose);
}

#[test]
#[serial]
fn test_timeout_from_env() {
    std::env::set_var(crate::env::PRIMER_TIMEOUT_MS, "75");
    let cli = Cli::try_parse_from(["primer"]).unwrap();
    std::env::remove_var(crate::env::PRIMER_TIMEOUT_MS);
    assert_eq!(cli.timeout_ms, Some(75));
}

#[test]
#[serial]
fn test_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["primer", "--format", "yaml"]).is_err());
}
