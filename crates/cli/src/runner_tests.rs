// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::time::ClockHandle;
use crate::unit::UnitError;

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(
            ExampleUnit::new("ops.add", "Addition", |host| {
                host.log(5 + 3);
                Ok(())
            })
            .expect_lines(["8"]),
        )
        .unwrap();
    registry
        .register(
            ExampleUnit::new("ops.wrong", "Wrong expectation", |host| {
                host.log("9");
                Ok(())
            })
            .expect_lines(["8"]),
        )
        .unwrap();
    registry
        .register(
            ExampleUnit::new("kw.throw", "Throws", |_| Err(UnitError::new("bad input")))
                .expect_lines(["fine"]),
        )
        .unwrap();
    registry
        .register(ExampleUnit::new("ui.alert", "Alert dialog", |_| Ok(())).manual())
        .unwrap();
    registry
}

fn runner() -> Runner {
    Runner::new(registry(), Executor::new(ClockHandle::virtual_at(0)))
}

fn options(filters: &[&str]) -> RunOptions {
    RunOptions {
        filters: filters.iter().map(|f| f.to_string()).collect(),
        ..RunOptions::default()
    }
}

async fn run_text(runner: &Runner, options: &RunOptions) -> (Report, String) {
    let mut out = Vec::new();
    let report = runner.run(options, &mut out).await.unwrap();
    (report, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_text_report_for_passing_filter() {
    let (report, text) = run_text(&runner(), &options(&["ops.add"])).await;
    assert_eq!(text, "PASS ops.add\n1/1 passed\n");
    assert!(report.summary().all_passed());
}

#[tokio::test]
async fn test_text_report_shows_diff() {
    let (_, text) = run_text(&runner(), &options(&["ops.wrong"])).await;
    assert_eq!(
        text,
        "FAIL ops.wrong\n  line 1:\n    expected: 8\n    actual:   9\n0/1 passed\n"
    );
}

#[tokio::test]
async fn test_error_is_tagged() {
    let (report, text) = run_text(&runner(), &options(&["kw"])).await;
    assert!(text.starts_with("FAIL kw.throw (error)\n"));
    assert!(text.contains("actual:   bad input"));
    assert_eq!(report.summary().errored, 1);
}

#[tokio::test]
async fn test_all_units_skip_manual() {
    let (report, text) = run_text(&runner(), &options(&[])).await;
    let summary = report.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.failed, vec!["ops.wrong", "kw.throw"]);
    assert!(!text.contains("ui.alert"));
    assert!(text.ends_with("1/3 passed\n"));
}

#[tokio::test]
async fn test_verbose_adds_unified_diff() {
    let options = RunOptions {
        verbose: true,
        ..options(&["ops.wrong"])
    };
    let (_, text) = run_text(&runner(), &options).await;
    assert!(text.contains("--- expected"));
    assert!(text.contains("+++ actual"));
    assert!(text.contains("-8"));
    assert!(text.contains("+9"));
}

#[tokio::test]
async fn test_json_report() {
    let options = RunOptions {
        format: OutputFormat::Json,
        ..options(&["ops"])
    };
    let (_, text) = run_text(&runner(), &options).await;
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["units"][0]["unit_id"], "ops.add");
    assert_eq!(json["units"][0]["outcome"], "passed");
    assert_eq!(json["units"][1]["outcome"], "failed");
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["summary"]["failed"][0], "ops.wrong");
}

#[tokio::test]
async fn test_colored_labels() {
    let options = RunOptions {
        color: true,
        ..options(&["ops.add"])
    };
    let (_, text) = run_text(&runner(), &options).await;
    assert!(text.starts_with("\x1b[32mPASS\x1b[0m ops.add"));
}

#[tokio::test]
async fn test_run_log_records_each_unit() {
    let runner = runner().with_run_log(RunLog::new());
    run_text(&runner, &options(&["ops"])).await;
    let log = runner.run_log().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log.find_failures().len(), 1);
    assert_eq!(log.find_by_unit("ops.add")[0].run.actual_lines, vec!["8"]);
}

#[test]
fn test_listing_marks_manual_units() {
    let mut out = Vec::new();
    write_listing(&registry(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "ops.add    Addition");
    assert_eq!(lines[3], "ui.alert   Alert dialog  [manual]");
}
