// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-unit outcomes and the run summary.

use primer_capture::CapturedRun;
use primer_compare::ComparisonResult;
use serde::Serialize;
use std::fmt;

/// Process exit codes
pub mod exit_codes {
    /// Every selected unit passed
    pub const SUCCESS: i32 = 0;
    /// A unit failed, or nothing could be run
    pub const FAILED: i32 = 1;
}

/// Terminal state of one unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    TimedOut,
    Errored,
}

impl Outcome {
    /// Classify a finished run.
    ///
    /// A timeout wins over everything. A unit whose transcript expects the
    /// error it raised still passes.
    pub fn classify(run: &CapturedRun, result: &ComparisonResult) -> Self {
        if run.timed_out {
            Outcome::TimedOut
        } else if result.passed {
            Outcome::Passed
        } else if run.is_errored() {
            Outcome::Errored
        } else {
            Outcome::Failed
        }
    }

    pub fn is_pass(self) -> bool {
        self == Outcome::Passed
    }

    /// `PASS` or `FAIL`
    pub fn label(self) -> &'static str {
        if self.is_pass() {
            "PASS"
        } else {
            "FAIL"
        }
    }

    /// Extra tag shown after a failing unit's id
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Outcome::TimedOut => Some("timed out"),
            Outcome::Errored => Some("error"),
            Outcome::Passed | Outcome::Failed => None,
        }
    }
}

/// One recorded unit
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub outcome: Outcome,
    #[serde(flatten)]
    pub result: ComparisonResult,
}

/// Counts over every recorded unit
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    /// Ids of units that did not pass, in recording order
    pub failed: Vec<String>,
    pub timed_out: usize,
    pub errored: usize,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILED
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} passed", self.passed, self.total)
    }
}

/// Additive collection of unit results
#[derive(Clone, Debug, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a comparison, classified by whether it passed
    pub fn add(&mut self, result: ComparisonResult) {
        let outcome = if result.passed {
            Outcome::Passed
        } else {
            Outcome::Failed
        };
        self.record(result, outcome);
    }

    /// Record a comparison with an explicit outcome
    pub fn record(&mut self, result: ComparisonResult, outcome: Outcome) {
        self.entries.push(ReportEntry { outcome, result });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Summary of everything recorded so far
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.entries.len(),
            ..Summary::default()
        };
        for entry in &self.entries {
            match entry.outcome {
                Outcome::Passed => summary.passed += 1,
                Outcome::TimedOut => summary.timed_out += 1,
                Outcome::Errored => summary.errored += 1,
                Outcome::Failed => {}
            }
            if !entry.outcome.is_pass() {
                summary.failed.push(entry.result.unit_id.clone());
            }
        }
        summary
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
