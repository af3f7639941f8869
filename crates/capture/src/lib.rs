// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped output capture for primer units.
//!
//! A unit body never writes to the process stdout. It writes into a
//! [`Console`] handed to it by the executor, and the executor owns the
//! [`CaptureSession`] that seals the console when the unit settles.

mod console;
mod duration_serde;
mod log;
mod run;

pub use console::{CaptureSession, Console};
pub use log::{RunLog, RunRecord};
pub use run::CapturedRun;
