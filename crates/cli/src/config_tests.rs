// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::Parser;
use serial_test::serial;
use std::io::Write;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["primer"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_empty_config() {
    assert_eq!(RunnerConfig::from_toml("").unwrap(), RunnerConfig::default());
}

#[test]
fn test_full_config() {
    let config = RunnerConfig::from_toml(
        r#"
default_timeout_ms = 1500
real_time = true
capture_log = "runs.jsonl"
format = "json"
verbose = true
"#,
    )
    .unwrap();
    assert_eq!(config.default_timeout_ms, Some(1500));
    assert!(config.real_time);
    assert_eq!(config.capture_log, Some(PathBuf::from("runs.jsonl")));
    assert_eq!(config.format, Some(OutputFormat::Json));
    assert!(config.verbose);
}

#[test]
fn test_unknown_field_rejected() {
    let err = RunnerConfig::from_toml("colour = true").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_zero_timeout_rejected() {
    let err = RunnerConfig::from_toml("default_timeout_ms = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ZeroTimeout));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "verbose = true").unwrap();
    let config = RunnerConfig::load(file.path()).unwrap();
    assert!(config.verbose);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = RunnerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
#[serial]
fn test_resolve_defaults() {
    let settings = Settings::resolve(cli(&[]), RunnerConfig::default());
    assert_eq!(settings.format, OutputFormat::Text);
    assert_eq!(settings.timeout_override, None);
    assert!(!settings.real_time);
    assert!(settings.capture_log.is_none());
}

#[test]
#[serial]
fn test_resolve_config_fills_gaps() {
    let config = RunnerConfig {
        default_timeout_ms: Some(900),
        real_time: true,
        capture_log: Some(PathBuf::from("from-config.jsonl")),
        format: Some(OutputFormat::Json),
        verbose: true,
    };
    let settings = Settings::resolve(cli(&["loops"]), config);
    assert_eq!(settings.filters, vec!["loops"]);
    assert_eq!(settings.timeout_override, Some(900));
    assert!(settings.real_time);
    assert_eq!(settings.format, OutputFormat::Json);
    assert_eq!(settings.capture_log, Some(PathBuf::from("from-config.jsonl")));
    assert!(settings.verbose);
}

#[test]
#[serial]
fn test_resolve_flags_win() {
    let config = RunnerConfig {
        default_timeout_ms: Some(900),
        format: Some(OutputFormat::Json),
        capture_log: Some(PathBuf::from("from-config.jsonl")),
        ..RunnerConfig::default()
    };
    let settings = Settings::resolve(
        cli(&[
            "--timeout-ms",
            "40",
            "--format",
            "text",
            "--capture-log",
            "flag.jsonl",
        ]),
        config,
    );
    assert_eq!(settings.timeout_override, Some(40));
    assert_eq!(settings.format, OutputFormat::Text);
    assert_eq!(settings.capture_log, Some(PathBuf::from("flag.jsonl")));
}
