// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! `PRIMER_CONFIG`, `PRIMER_TIMEOUT_MS` and `PRIMER_CAPTURE_LOG` are read by
//! clap as flag fallbacks; everything else goes through these accessors.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

/// `PRIMER_LOG`: tracing filter directive (e.g. `debug`, `primer=trace`).
pub fn log_filter() -> Option<String> {
    std::env::var(names::PRIMER_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// `NO_COLOR`: disables ANSI colors when set to any non-empty value.
pub fn no_color() -> bool {
    std::env::var_os(names::NO_COLOR).is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
