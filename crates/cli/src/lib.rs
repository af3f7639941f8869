// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tutorial snippet runner
//!
//! Runs self-contained example units, captures what each one prints and
//! checks it line by line against the transcript the tutorial promises.
//!
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod env;
pub mod executor;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod registry;
pub mod report;
pub mod runner;
pub mod time;
pub mod timers;
pub mod unit;

pub use executor::Executor;
pub use registry::{Registry, RegistryError};
pub use report::{Outcome, Report, Summary};
pub use unit::{ExampleUnit, Host, UnitError, UnitResult};
