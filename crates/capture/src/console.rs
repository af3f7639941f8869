// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture context and session guard.

use parking_lot::Mutex;
use std::fmt::Display;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ConsoleState {
    lines: Vec<String>,
    /// Text written since the last newline
    pending: String,
    sealed: bool,
    /// Writes discarded because they arrived after sealing
    dropped: usize,
}

impl ConsoleState {
    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                let line = std::mem::take(&mut self.pending);
                self.lines.push(strip_cr(line));
            } else {
                self.pending.push(ch);
            }
        }
    }

    fn push_line(&mut self, line: &str) {
        if !self.pending.is_empty() {
            let pending = std::mem::take(&mut self.pending);
            self.lines.push(strip_cr(pending));
        }
        self.lines.push(escape_breaks(line));
    }

    fn snapshot(&self) -> Vec<String> {
        let mut lines = self.lines.clone();
        if !self.pending.is_empty() {
            lines.push(strip_cr(self.pending.clone()));
        }
        lines
    }
}

fn strip_cr(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

/// Escape line breaks so `text` stays on one line
fn escape_breaks(text: &str) -> String {
    text.replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Output sink a unit body writes to.
///
/// Cloning shares the same buffer. Once the owning [`CaptureSession`] is
/// finished or dropped, the console is sealed and further writes are counted
/// and discarded.
#[derive(Clone, Debug, Default)]
pub struct Console {
    inner: Arc<Mutex<ConsoleState>>,
}

impl Console {
    /// Create an unsealed console with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Print one value followed by a newline.
    ///
    /// A value whose text contains newlines produces several lines.
    pub fn log(&self, value: impl Display) {
        self.write(&format!("{}\n", value));
    }

    /// Print several values separated by single spaces, then a newline
    pub fn log_all<I, T>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.log(joined);
    }

    /// Record `line` as exactly one captured line.
    ///
    /// Pending partial text is closed first. Embedded line breaks are
    /// escaped as `\n` and `\r` instead of splitting the line.
    pub fn log_line(&self, line: &str) {
        let mut state = self.inner.lock();
        if state.sealed {
            state.dropped += 1;
            return;
        }
        state.push_line(line);
    }

    /// Write raw text; a trailing partial line stays pending until a newline
    /// arrives or the session finishes.
    pub fn write(&self, text: &str) {
        let mut state = self.inner.lock();
        if state.sealed {
            state.dropped += 1;
            return;
        }
        state.push_text(text);
    }

    /// Lines captured so far, including a pending partial line
    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().snapshot()
    }

    /// Number of complete lines captured so far
    pub fn len(&self) -> usize {
        self.inner.lock().lines.len()
    }

    /// Check if nothing has been captured
    pub fn is_empty(&self) -> bool {
        let state = self.inner.lock();
        state.lines.is_empty() && state.pending.is_empty()
    }

    /// Check whether the owning session has been sealed
    pub fn is_sealed(&self) -> bool {
        self.inner.lock().sealed
    }

    /// Number of writes discarded after sealing
    pub fn dropped_writes(&self) -> usize {
        self.inner.lock().dropped
    }

    fn seal(&self) -> Vec<String> {
        let mut state = self.inner.lock();
        if !state.sealed {
            let pending = std::mem::take(&mut state.pending);
            if !pending.is_empty() {
                state.lines.push(strip_cr(pending));
            }
            state.sealed = true;
        }
        state.lines.clone()
    }
}

/// Exclusive owner of one unit's capture.
///
/// The console is sealed on every exit path: explicitly through
/// [`CaptureSession::finish`], or when the session is dropped.
#[derive(Debug)]
pub struct CaptureSession {
    console: Console,
}

impl CaptureSession {
    /// Open a session over a fresh console
    pub fn open() -> Self {
        Self {
            console: Console::new(),
        }
    }

    /// Handle to pass into the unit body
    pub fn console(&self) -> Console {
        self.console.clone()
    }

    /// Seal the console and return everything it captured
    pub fn finish(self) -> Vec<String> {
        self.console.seal()
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.console.seal();
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
