// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::time::ClockHandle;
use rstest::rstest;

fn host() -> Host {
    Host::new(Console::new(), TimerQueue::new(ClockHandle::virtual_at(0)))
}

#[test]
fn test_new_unit_defaults() {
    let unit = ExampleUnit::new("loops.for", "For loop", |_| Ok(()));
    assert_eq!(unit.id(), "loops.for");
    assert_eq!(unit.title(), "For loop");
    assert_eq!(unit.timeout_ms(), DEFAULT_TIMEOUT_MS);
    assert!(!unit.is_manual());
    assert!(unit.expected().is_empty());
}

#[test]
fn test_expect_builders_append_in_order() {
    let unit = ExampleUnit::new("a.b", "t", |_| Ok(()))
        .expect_lines(["one", "two"])
        .expect_line(ExpectedLine::number_in(0.0, 1.0))
        .expect_text("three\nfour  \n");

    let shown: Vec<String> = unit.expected().iter().map(|l| l.display_text()).collect();
    assert_eq!(shown[0], "one");
    assert_eq!(shown[1], "two");
    assert!(unit.expected()[2].is_approx());
    assert_eq!(shown[3], "three");
    assert_eq!(shown[4], "four");
    assert_eq!(shown.len(), 5);
}

#[test]
fn test_with_timeout_and_manual() {
    let unit = ExampleUnit::new("builtins.alert", "Alert", |_| Ok(()))
        .with_timeout(250)
        .manual();
    assert_eq!(unit.timeout_ms(), 250);
    assert!(unit.is_manual());
}

#[rstest]
#[case("loops.for", "loops")]
#[case("builtins.timers.interval", "builtins")]
#[case("standalone", "standalone")]
fn test_topic(#[case] id: &str, #[case] topic: &str) {
    let unit = ExampleUnit::new(id, "t", |_| Ok(()));
    assert_eq!(unit.topic(), topic);
}

#[test]
fn test_body_writes_through_host() {
    let unit = ExampleUnit::new("ops.add", "Add", |host| {
        host.log(5 + 3);
        host.log_all(["a", "b"]);
        Ok(())
    });
    let host = host();
    (unit.body())(&host).unwrap();
    assert_eq!(host.console().lines(), vec!["8", "a b"]);
}

#[test]
fn test_body_error_message() {
    let unit = ExampleUnit::new("kw.never", "Never", |_| Err("Something went wrong".into()));
    let err = (unit.body())(&host()).unwrap_err();
    assert_eq!(err.message(), "Something went wrong");
    assert_eq!(err.to_string(), "Something went wrong");
}

#[test]
fn test_unit_error_from_error() {
    let parse = "x".parse::<i32>().unwrap_err();
    let err = UnitError::from_error(&parse);
    assert_eq!(err.message(), parse.to_string());
}

#[test]
fn test_host_schedules_on_its_queue() {
    let host = host();
    let handle = host.schedule_once(10, |h, _| {
        h.log("later");
        Ok(())
    });
    host.schedule_repeating(5, |_, _| Ok(()));
    assert_eq!(host.timers().pending(), 2);
    handle.cancel();
    assert_eq!(host.timers().pending(), 1);
}

#[test]
fn test_debug_omits_body() {
    let unit = ExampleUnit::new("a.b", "Title", |_| Ok(()));
    let text = format!("{:?}", unit);
    assert!(text.contains("a.b"));
    assert!(text.contains(".."));
}
