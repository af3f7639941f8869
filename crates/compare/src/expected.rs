// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expected transcript lines.

use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Per-line predicate for output that is not deterministic
pub type LineMatcher = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// One line of an expected transcript.
///
/// Most lines are exact. Lines showing the current date or a random number
/// are declared approximate and matched by a predicate instead.
#[derive(Clone)]
pub enum ExpectedLine {
    /// Must equal the actual line after trimming trailing whitespace
    Exact(String),
    /// Must satisfy `matcher`; `label` describes the line in diffs
    Approx { label: String, matcher: LineMatcher },
}

impl ExpectedLine {
    /// Exact line
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    /// Approximate line matched by an arbitrary predicate
    pub fn approx<F>(label: impl Into<String>, matcher: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Approx {
            label: label.into(),
            matcher: Arc::new(matcher),
        }
    }

    /// Approximate line matched by a regex anchored to the whole line.
    ///
    /// Returns an error when the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let re = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self::approx(format!("/{}/", pattern), move |line| {
            re.is_match(line)
        }))
    }

    /// Approximate line holding a number in `min..max` (half-open)
    pub fn number_in(min: f64, max: f64) -> Self {
        Self::approx(format!("number in [{}, {})", min, max), move |line| {
            line.trim()
                .parse::<f64>()
                .is_ok_and(|n| n >= min && n < max)
        })
    }

    /// Check an actual line against this expectation.
    ///
    /// Both sides are compared with trailing whitespace removed.
    pub fn matches(&self, actual: &str) -> bool {
        let actual = actual.trim_end();
        match self {
            Self::Exact(text) => text.trim_end() == actual,
            Self::Approx { matcher, .. } => matcher(actual),
        }
    }

    /// Text shown for this line in diffs
    pub fn display_text(&self) -> String {
        match self {
            Self::Exact(text) => text.trim_end().to_string(),
            Self::Approx { label, .. } => format!("≈ {}", label),
        }
    }

    /// Check if this line is matched by a predicate
    pub fn is_approx(&self) -> bool {
        matches!(self, Self::Approx { .. })
    }
}

impl fmt::Debug for ExpectedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => f.debug_tuple("Exact").field(text).finish(),
            Self::Approx { label, .. } => f.debug_tuple("Approx").field(label).finish(),
        }
    }
}

impl From<&str> for ExpectedLine {
    fn from(text: &str) -> Self {
        Self::exact(text)
    }
}

impl From<String> for ExpectedLine {
    fn from(text: String) -> Self {
        Self::Exact(text)
    }
}

#[cfg(test)]
#[path = "expected_tests.rs"]
mod tests;
