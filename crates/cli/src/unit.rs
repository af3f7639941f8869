// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Example units and the host handed to their bodies.

use crate::timers::{TimerHandle, TimerQueue};
use primer_capture::Console;
use primer_compare::{normalize, ExpectedLine};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Budget given to a unit that does not declare one
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Error a unit body (or one of its timer callbacks) raises.
///
/// The executor turns it into a single captured line holding the message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnitError {
    message: String,
}

impl UnitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap any error by its display text
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::new(err.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for UnitError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for UnitError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

pub type UnitResult = Result<(), UnitError>;

/// Body of a unit; must print the same lines every time it runs
pub type UnitBody = Arc<dyn Fn(&Host) -> UnitResult + Send + Sync>;

/// What a unit body can touch: its capture console and its timers.
#[derive(Clone, Debug)]
pub struct Host {
    console: Console,
    timers: TimerQueue,
}

impl Host {
    pub fn new(console: Console, timers: TimerQueue) -> Self {
        Self { console, timers }
    }

    /// Print one value as a line
    pub fn log(&self, value: impl fmt::Display) {
        self.console.log(value);
    }

    /// Print several values separated by spaces
    pub fn log_all<I, T>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        self.console.log_all(values);
    }

    /// Write raw text without a trailing newline
    pub fn write(&self, text: &str) {
        self.console.write(text);
    }

    /// Run `callback` once after `delay_ms`
    pub fn schedule_once<F>(&self, delay_ms: u64, callback: F) -> TimerHandle
    where
        F: FnMut(&Host, &TimerHandle) -> UnitResult + Send + 'static,
    {
        self.timers.schedule_once(delay_ms, Box::new(callback))
    }

    /// Run `callback` every `interval_ms` until its handle is cancelled
    pub fn schedule_repeating<F>(&self, interval_ms: u64, callback: F) -> TimerHandle
    where
        F: FnMut(&Host, &TimerHandle) -> UnitResult + Send + 'static,
    {
        self.timers.schedule_repeating(interval_ms, Box::new(callback))
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }
}

/// One self-contained example paired with its expected transcript.
///
/// Built with the `with_*`/`expect*` methods and immutable once handed to
/// the registry.
#[derive(Clone)]
pub struct ExampleUnit {
    id: String,
    title: String,
    body: UnitBody,
    expected: Vec<ExpectedLine>,
    timeout_ms: u64,
    manual: bool,
}

impl ExampleUnit {
    pub fn new<F>(id: impl Into<String>, title: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Host) -> UnitResult + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            title: title.into(),
            body: Arc::new(body),
            expected: Vec::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            manual: false,
        }
    }

    /// Append expected lines
    pub fn expect_lines<I, L>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<ExpectedLine>,
    {
        self.expected.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append one expected line, exact or approximate
    pub fn expect_line(mut self, line: impl Into<ExpectedLine>) -> Self {
        self.expected.push(line.into());
        self
    }

    /// Append the lines of a transcript text block
    pub fn expect_text(self, text: &str) -> Self {
        self.expect_lines(normalize(text))
    }

    /// Set the time budget
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Mark as manual-only: listed, never run automatically
    pub fn manual(mut self) -> Self {
        self.manual = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Topic is the id segment before the first dot
    pub fn topic(&self) -> &str {
        self.id.split('.').next().unwrap_or(&self.id)
    }

    pub fn expected(&self) -> &[ExpectedLine] {
        &self.expected
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn body(&self) -> &UnitBody {
        &self.body
    }
}

impl fmt::Debug for ExampleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleUnit")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("expected", &self.expected)
            .field("timeout_ms", &self.timeout_ms)
            .field("manual", &self.manual)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
