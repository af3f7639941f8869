// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential run over the selected units.

use crate::cli::OutputFormat;
use crate::executor::Executor;
use crate::output_diagnostic::{paint, Color};
use crate::registry::Registry;
use crate::report::{Outcome, Report, ReportEntry, Summary};
use crate::unit::ExampleUnit;
use primer_capture::{CapturedRun, RunLog};
use primer_compare::{compare, render_diff, unified_diff, ComparisonResult};
use serde::Serialize;
use std::io::{self, Write};

/// What to run and how to print it
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub filters: Vec<String>,
    pub verbose: bool,
    pub format: OutputFormat,
    pub color: bool,
}

/// Result of running and checking one unit
#[derive(Clone, Debug)]
pub struct UnitRun {
    pub run: CapturedRun,
    pub result: ComparisonResult,
    pub outcome: Outcome,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    units: &'a [ReportEntry],
    summary: Summary,
}

pub struct Runner {
    registry: Registry,
    executor: Executor,
    run_log: Option<RunLog>,
}

impl Runner {
    pub fn new(registry: Registry, executor: Executor) -> Self {
        Self {
            registry,
            executor,
            run_log: None,
        }
    }

    /// Record every captured run in `log`
    pub fn with_run_log(mut self, log: RunLog) -> Self {
        self.run_log = Some(log);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn run_log(&self) -> Option<&RunLog> {
        self.run_log.as_ref()
    }

    /// Execute one unit and compare its output
    pub async fn run_unit(&self, unit: &ExampleUnit) -> UnitRun {
        let run = self.executor.execute(unit).await;
        let result = compare(unit.id(), unit.expected(), &run.actual_lines);
        let outcome = Outcome::classify(&run, &result);
        tracing::debug!(unit = unit.id(), ?outcome, "unit checked");

        if let Some(log) = &self.run_log {
            log.record(run.clone(), outcome.is_pass());
        }
        UnitRun {
            run,
            result,
            outcome,
        }
    }

    /// Run every unit the filters select, one after another.
    ///
    /// Text output streams a line per unit followed by the summary line;
    /// JSON output is written once at the end.
    pub async fn run<W: Write>(&self, options: &RunOptions, out: &mut W) -> io::Result<Report> {
        let mut report = Report::new();
        for unit in self.registry.select(&options.filters) {
            let unit_run = self.run_unit(unit).await;
            if options.format == OutputFormat::Text {
                write_unit(out, unit, &unit_run, options)?;
            }
            report.record(unit_run.result, unit_run.outcome);
        }

        let summary = report.summary();
        match options.format {
            OutputFormat::Text => writeln!(out, "{}", summary)?,
            OutputFormat::Json => {
                let json = JsonReport {
                    units: report.entries(),
                    summary,
                };
                serde_json::to_writer_pretty(&mut *out, &json)?;
                writeln!(out)?;
            }
        }
        Ok(report)
    }
}

fn write_unit<W: Write>(
    out: &mut W,
    unit: &ExampleUnit,
    unit_run: &UnitRun,
    options: &RunOptions,
) -> io::Result<()> {
    let color = if unit_run.outcome.is_pass() {
        Color::Green
    } else {
        Color::Red
    };
    let label = paint(unit_run.outcome.label(), color, options.color);
    match unit_run.outcome.reason() {
        Some(reason) => writeln!(out, "{} {} ({})", label, unit.id(), reason)?,
        None => writeln!(out, "{} {}", label, unit.id())?,
    }

    if !unit_run.result.passed {
        write!(out, "{}", render_diff(&unit_run.result))?;
        if options.verbose {
            let expected: Vec<String> = unit.expected().iter().map(|l| l.display_text()).collect();
            write!(out, "{}", unified_diff(&expected, &unit_run.run.actual_lines))?;
        }
    }
    Ok(())
}

/// Print the registered units, one per line
pub fn write_listing<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    let width = registry.all().map(|u| u.id().len()).max().unwrap_or(0);
    for unit in registry.all() {
        let marker = if unit.is_manual() { "  [manual]" } else { "" };
        writeln!(
            out,
            "{:<width$}  {}{}",
            unit.id(),
            unit.title(),
            marker,
            width = width
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
