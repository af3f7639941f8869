// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! primer binary entry point.

use std::io::Write;

use clap::Parser;

use primer::cli::Cli;
use primer::config::{RunnerConfig, Settings};
use primer::output_diagnostic::{print_error, print_warning, stdout_color};
use primer::report::exit_codes;
use primer::runner::{write_listing, RunOptions, Runner};
use primer::time::ClockHandle;
use primer::{catalog, logging, Executor};
use primer_capture::RunLog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match RunnerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                print_error(e);
                std::process::exit(exit_codes::FAILED);
            }
        },
        None => RunnerConfig::default(),
    };
    let settings = Settings::resolve(cli, config);
    tracing::debug!(?settings, "resolved settings");

    let registry = match catalog::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILED);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if settings.list {
        write_listing(&registry, &mut stdout)?;
        stdout.flush()?;
        return Ok(());
    }

    for filter in registry.unmatched(&settings.filters) {
        print_warning(format_args!("no unit matches '{}'", filter));
    }
    if registry.select(&settings.filters).is_empty() {
        print_error("no units selected");
        std::process::exit(exit_codes::FAILED);
    }

    let clock = if settings.real_time {
        ClockHandle::system()
    } else {
        ClockHandle::virtual_now()
    };
    let executor = Executor::new(clock).with_timeout_override(settings.timeout_override);
    let mut runner = Runner::new(registry, executor);
    if let Some(path) = &settings.capture_log {
        match RunLog::with_file(path) {
            Ok(log) => runner = runner.with_run_log(log),
            Err(e) => {
                print_error(format_args!(
                    "cannot open capture log {}: {}",
                    path.display(),
                    e
                ));
                std::process::exit(exit_codes::FAILED);
            }
        }
    }

    let options = RunOptions {
        filters: settings.filters,
        verbose: settings.verbose,
        format: settings.format,
        color: stdout_color(),
    };
    let report = runner.run(&options, &mut stdout).await?;
    stdout.flush()?;
    if let Some(log) = runner.run_log() {
        if log.write_errors() > 0 {
            print_warning(format_args!(
                "{} run(s) could not be written to the capture log",
                log.write_errors()
            ));
        }
    }

    std::process::exit(report.summary().exit_code());
}
