// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transcript comparison for primer units.
//!
//! Compares the lines a unit printed against its expected transcript and
//! renders the differences for reporting.

mod comparator;
mod expected;
mod normalize;
mod render;

pub use comparator::{compare, compare_text, ComparisonResult, DiffLine, MISSING};
pub use expected::{ExpectedLine, LineMatcher};
pub use normalize::{normalize, trim_line};
pub use render::{render_diff, unified_diff};
