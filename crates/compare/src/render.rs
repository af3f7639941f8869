// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable rendering of comparison failures.

use crate::comparator::ComparisonResult;
use similar::TextDiff;

/// Render the differing lines of a result, one block per line.
///
/// Returns an empty string for a passing result.
pub fn render_diff(result: &ComparisonResult) -> String {
    let mut out = String::new();
    for line in result.diff_lines() {
        out.push_str(&format!("  line {}:\n", line.index + 1));
        out.push_str(&format!("    expected: {}\n", line.expected));
        out.push_str(&format!("    actual:   {}\n", line.actual));
    }
    out
}

/// Unified diff of two transcripts, labelled `expected` and `actual`
pub fn unified_diff<E, A>(expected: &[E], actual: &[A]) -> String
where
    E: AsRef<str>,
    A: AsRef<str>,
{
    let expected = join_lines(expected);
    let actual = join_lines(actual);
    TextDiff::from_lines(&expected, &actual)
        .unified_diff()
        .context_radius(2)
        .header("expected", "actual")
        .to_string()
}

fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push('\n');
    }
    text
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
