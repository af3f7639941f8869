// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-by-line transcript comparison.

use crate::expected::ExpectedLine;
use crate::normalize::trim_line;
use serde::Serialize;

/// Placeholder for the shorter side of a length mismatch
pub const MISSING: &str = "‹missing›";

/// One differing line
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// Zero-based line index
    pub index: usize,
    pub expected: String,
    pub actual: String,
}

impl DiffLine {
    pub fn new(index: usize, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            index,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result of comparing one unit's output with its transcript
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub unit_id: String,
    pub passed: bool,
    /// Differing lines; `None` when the comparison passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Vec<DiffLine>>,
}

impl ComparisonResult {
    /// Passing result with no diff
    pub fn pass(unit_id: impl Into<String>) -> Self {
        Self {
            unit_id: unit_id.into(),
            passed: true,
            diff: None,
        }
    }

    /// Failing result carrying its diff
    pub fn fail(unit_id: impl Into<String>, diff: Vec<DiffLine>) -> Self {
        Self {
            unit_id: unit_id.into(),
            passed: false,
            diff: Some(diff),
        }
    }

    /// Differing lines, empty when the comparison passed
    pub fn diff_lines(&self) -> &[DiffLine] {
        self.diff.as_deref().unwrap_or(&[])
    }
}

/// Compare captured output with an expected transcript.
///
/// Lines are compared pairwise after trimming trailing whitespace. When the
/// lengths differ the shorter side is reported as [`MISSING`].
pub fn compare(unit_id: &str, expected: &[ExpectedLine], actual: &[String]) -> ComparisonResult {
    let len = expected.len().max(actual.len());
    let mut diff = Vec::new();

    for index in 0..len {
        match (expected.get(index), actual.get(index)) {
            (Some(exp), Some(act)) => {
                if !exp.matches(act) {
                    diff.push(DiffLine::new(index, exp.display_text(), trim_line(act)));
                }
            }
            (Some(exp), None) => diff.push(DiffLine::new(index, exp.display_text(), MISSING)),
            (None, Some(act)) => diff.push(DiffLine::new(index, MISSING, trim_line(act))),
            (None, None) => {}
        }
    }

    if diff.is_empty() {
        ComparisonResult::pass(unit_id)
    } else {
        ComparisonResult::fail(unit_id, diff)
    }
}

/// Compare two plain transcripts where every line is exact
pub fn compare_text<S: AsRef<str>>(
    unit_id: &str,
    expected: &[S],
    actual: &[String],
) -> ComparisonResult {
    let expected: Vec<ExpectedLine> = expected
        .iter()
        .map(|line| ExpectedLine::exact(line.as_ref()))
        .collect();
    compare(unit_id, &expected, actual)
}

#[cfg(test)]
#[path = "comparator_tests.rs"]
mod tests;
