// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run log implementation.

use crate::duration_serde;
use crate::run::CapturedRun;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

/// One recorded execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunRecord {
    /// Sequence number within this log
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// Whether the captured output matched the transcript
    pub passed: bool,

    /// The captured run itself
    pub run: CapturedRun,
}

/// Log of captured runs, optionally mirrored to a JSONL file
pub struct RunLog {
    start: Instant,
    records: Arc<Mutex<Vec<RunRecord>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
    write_errors: Arc<AtomicUsize>,
}

impl RunLog {
    /// Create a new in-memory run log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
            write_errors: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a run log that appends to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            write_errors: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Record a run
    pub fn record(&self, run: CapturedRun, passed: bool) {
        let mut records = self.records.lock();
        let record = RunRecord {
            seq: records.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            passed,
            run,
        };

        if let Some(ref writer) = self.file_writer {
            let written = serde_json::to_string(&record)
                .map_err(std::io::Error::from)
                .and_then(|json| append_line(&mut writer.lock(), &json));
            if let Err(e) = written {
                tracing::warn!(
                    unit = %record.run.unit_id,
                    error = %e,
                    "failed to write capture log"
                );
                self.write_errors.fetch_add(1, Ordering::Relaxed);
            }
        }

        records.push(record);
    }

    /// Number of records that could not be written to the file
    pub fn write_errors(&self) -> usize {
        self.write_errors.load(Ordering::Relaxed)
    }

    /// Get all records
    pub fn records(&self) -> Vec<RunRecord> {
        self.records.lock().clone()
    }

    /// Get the last N records
    pub fn last(&self, n: usize) -> Vec<RunRecord> {
        let all = self.records.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count records matching a predicate
    pub fn count<F: Fn(&RunRecord) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }

    /// Find every run of a unit
    pub fn find_by_unit(&self, unit_id: &str) -> Vec<RunRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.run.unit_id == unit_id)
            .cloned()
            .collect()
    }

    /// Find runs that did not match their transcript
    pub fn find_failures(&self) -> Vec<RunRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| !r.passed)
            .cloned()
            .collect()
    }

    /// Find runs that overran their budget
    pub fn find_timeouts(&self) -> Vec<RunRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.run.timed_out)
            .cloned()
            .collect()
    }

    /// Get the total number of records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

fn append_line(w: &mut BufWriter<File>, json: &str) -> std::io::Result<()> {
    use std::io::Write;
    writeln!(w, "{}", json)?;
    w.flush()
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RunLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            records: Arc::clone(&self.records),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
            write_errors: Arc::clone(&self.write_errors),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
