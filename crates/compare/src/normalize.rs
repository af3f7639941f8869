// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line normalization shared by comparison and transcript parsing.

/// Trim trailing whitespace from one line
pub fn trim_line(line: &str) -> &str {
    line.trim_end()
}

/// Split a text blob into normalized transcript lines.
///
/// `\r\n` and lone `\r` both end a line, trailing whitespace is trimmed, and
/// the empty line after a final newline is dropped.
pub fn normalize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let body = unified.strip_suffix('\n').unwrap_or(&unified);
    body.split('\n')
        .map(|line| trim_line(line).to_string())
        .collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
