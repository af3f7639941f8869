// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::executor::Executor;
use crate::report::Outcome;
use crate::time::ClockHandle;
use primer_compare::{compare, render_diff};

#[test]
fn test_builtin_registers_every_topic() {
    let registry = builtin().unwrap();
    let mut topics: Vec<&str> = registry.all().map(|u| u.topic()).collect();
    topics.dedup();
    assert_eq!(
        topics,
        vec![
            "conditionals",
            "loops",
            "functions",
            "operators",
            "datatypes",
            "keywords",
            "builtins"
        ]
    );
}

#[test]
fn test_dialog_units_are_manual() {
    let registry = builtin().unwrap();
    let manual: Vec<&str> = registry
        .all()
        .filter(|u| u.is_manual())
        .map(|u| u.id())
        .collect();
    assert_eq!(manual, vec!["builtins.alert", "builtins.prompt", "builtins.confirm"]);
}

#[tokio::test]
async fn test_every_automated_unit_passes() {
    let registry = builtin().unwrap();
    let executor = Executor::new(ClockHandle::virtual_now());
    let none: [&str; 0] = [];

    let mut failures = Vec::new();
    for unit in registry.select(&none) {
        let run = executor.execute(unit).await;
        let result = compare(unit.id(), unit.expected(), &run.actual_lines);
        let outcome = Outcome::classify(&run, &result);
        if !outcome.is_pass() {
            failures.push(format!("{} ({:?})\n{}", unit.id(), outcome, render_diff(&result)));
        }
    }
    assert!(failures.is_empty(), "failing units:\n{}", failures.join("\n"));
}

#[tokio::test]
async fn test_never_unit_passes_through_its_error() {
    let registry = builtin().unwrap();
    let unit = registry.get("keywords.never").unwrap();
    let run = Executor::new(ClockHandle::virtual_now()).execute(unit).await;
    assert_eq!(run.error.as_deref(), Some("Something went wrong"));
    assert_eq!(run.actual_lines, vec!["Something went wrong"]);
}

#[test]
fn test_console_style_helpers() {
    assert_eq!(quoted("A"), "'A'");
    assert_eq!(array(&[1, 2]), "[ 1, 2 ]");
    assert_eq!(
        object(&[("name", quoted("Rahul")), ("age", "22".to_string())]),
        "{ name: 'Rahul', age: 22 }"
    );
    assert_eq!(Dynamic::Number(10.0).to_string(), "10");
    assert_eq!(Dynamic::Bool(true).to_string(), "true");
}
