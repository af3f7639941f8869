// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured run data types.

use serde::{Deserialize, Serialize};

/// Everything one execution of a unit produced.
///
/// Created by the executor per invocation and consumed by comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedRun {
    /// Id of the unit that ran
    pub unit_id: String,

    /// Lines the unit printed, in order
    pub actual_lines: Vec<String>,

    /// Wall-clock duration of the execution
    pub duration_ms: u64,

    /// Whether the unit overran its budget and was abandoned
    pub timed_out: bool,

    /// Message of the error the unit raised, if any.
    /// The same message is also the last captured line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CapturedRun {
    /// Check if the unit raised an error
    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }
}
