// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Runs tutorial example units and checks what they print
#[derive(Parser, Debug)]
#[command(name = "primer", version, about = "Runs tutorial example units and checks what they print")]
pub struct Cli {
    /// Unit ids, dotted prefixes (`loops`) or globs (`loops.*`); all units when empty
    #[arg(value_name = "FILTER")]
    pub filters: Vec<String>,

    /// List registered units and exit
    #[arg(long)]
    pub list: bool,

    /// Override every unit's time budget, in milliseconds
    #[arg(long, env = "PRIMER_TIMEOUT_MS", value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Drive timers with the system clock instead of the virtual clock
    #[arg(long)]
    pub real_time: bool,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Append each captured run to this JSONL file
    #[arg(long, env = "PRIMER_CAPTURE_LOG", value_name = "PATH")]
    pub capture_log: Option<PathBuf>,

    /// Runner configuration file (TOML)
    #[arg(long, env = "PRIMER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show unified diffs for failing units
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One PASS/FAIL line per unit and a summary line
    #[default]
    Text,
    /// A single JSON object with every unit and the summary
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
