// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator diagnostics on stderr.

use tracing_subscriber::EnvFilter;

/// Filter used when `PRIMER_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `PRIMER_LOG`
pub fn env_filter() -> EnvFilter {
    crate::env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber; a second call is a no-op
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
