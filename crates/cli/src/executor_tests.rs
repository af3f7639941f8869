// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::unit::UnitError;
use parking_lot::Mutex;

fn virtual_executor() -> Executor {
    Executor::new(ClockHandle::virtual_at(0))
}

#[tokio::test]
async fn test_captures_printed_lines() {
    let unit = ExampleUnit::new("ops.add", "Add", |host| {
        host.log(5 + 3);
        Ok(())
    });
    let run = virtual_executor().execute(&unit).await;
    assert_eq!(run.unit_id, "ops.add");
    assert_eq!(run.actual_lines, vec!["8"]);
    assert!(!run.timed_out);
    assert!(run.error.is_none());
}

#[tokio::test]
async fn test_error_becomes_last_line() {
    let unit = ExampleUnit::new("kw.never", "Never", |host| {
        host.log("before");
        Err(UnitError::new("Something went wrong"))
    });
    let run = virtual_executor().execute(&unit).await;
    assert_eq!(run.actual_lines, vec!["before", "Something went wrong"]);
    assert_eq!(run.error.as_deref(), Some("Something went wrong"));
    assert!(!run.timed_out);
}

#[tokio::test]
async fn test_panic_is_captured_as_error() {
    let unit = ExampleUnit::new("kw.panic", "Panic", |_| panic!("boom"));
    let run = virtual_executor().execute(&unit).await;
    assert_eq!(run.actual_lines, vec!["boom"]);
    assert_eq!(run.error.as_deref(), Some("boom"));
}

#[tokio::test]
async fn test_multiline_error_is_one_line() {
    let unit = ExampleUnit::new("a.e", "Multiline", |_| Err("line one\nline two".into()));
    let run = virtual_executor().execute(&unit).await;
    assert_eq!(run.actual_lines, vec!["line one\\nline two"]);
    assert_eq!(run.error.as_deref(), Some("line one\nline two"));
}

#[tokio::test]
async fn test_assert_panic_is_one_line() {
    let unit = ExampleUnit::new("a.assert", "Assert", |host| {
        host.log("before");
        let (left, right) = (1, 2);
        assert_eq!(left, right);
        Ok(())
    });
    let run = virtual_executor().execute(&unit).await;
    assert_eq!(run.actual_lines.len(), 2);
    assert_eq!(run.actual_lines[0], "before");
    assert!(run.actual_lines[1].starts_with("assertion `left == right` failed"));
    assert!(!run.actual_lines[1].contains('\n'));
    assert!(run.error.as_deref().unwrap().contains('\n'));
}

#[tokio::test]
async fn test_unit_panics_skip_default_hook() {
    let unit = ExampleUnit::new("kw.panic", "Panic", |_| panic!("boom"));
    let run = virtual_executor().execute(&unit).await;
    assert_eq!(run.actual_lines, vec!["boom"]);
    assert!(UNIT_PANIC_HOOK.is_completed());
    assert!(is_unit_thread(Some(UNIT_THREAD)));
    assert!(!is_unit_thread(Some("main")));
    assert!(!is_unit_thread(None));
}

#[tokio::test]
async fn test_error_does_not_leak_into_next_unit() {
    let executor = virtual_executor();
    let failing = ExampleUnit::new("a.fail", "Fail", |host| {
        host.schedule_once(10, |h, _| {
            h.log("stale");
            Ok(())
        });
        Err("bad".into())
    });
    let passing = ExampleUnit::new("a.pass", "Pass", |host| {
        host.log("fresh");
        Ok(())
    });

    let first = executor.execute(&failing).await;
    let second = executor.execute(&passing).await;
    assert_eq!(first.actual_lines, vec!["bad"]);
    assert_eq!(second.actual_lines, vec!["fresh"]);
}

#[tokio::test]
async fn test_blocking_body_times_out() {
    let seen: Arc<Mutex<Option<primer_capture::Console>>> = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&seen);
    let unit = ExampleUnit::new("a.hang", "Hang", move |host| {
        *slot.lock() = Some(host.console().clone());
        host.log("started");
        std::thread::sleep(Duration::from_millis(400));
        host.log("finished");
        Ok(())
    })
    .with_timeout(50);

    let started = Instant::now();
    let run = virtual_executor().execute(&unit).await;
    assert!(run.timed_out);
    assert!(started.elapsed() < Duration::from_millis(350));
    assert_eq!(run.actual_lines, vec!["started"]);

    // The abandoned thread's late write lands in a sealed session
    std::thread::sleep(Duration::from_millis(450));
    let console = seen.lock().clone().unwrap();
    assert!(console.is_sealed());
    assert_eq!(console.lines(), vec!["started"]);
    assert_eq!(console.dropped_writes(), 1);
}

#[tokio::test]
async fn test_runaway_interval_times_out_and_stops() {
    let ticks = Arc::new(Mutex::new(0u32));
    let counter = Arc::clone(&ticks);
    let unit = ExampleUnit::new("a.runaway", "Runaway", move |host| {
        let counter = Arc::clone(&counter);
        host.schedule_repeating(100, move |h, _| {
            *counter.lock() += 1;
            h.log("tick");
            Ok(())
        });
        Ok(())
    })
    .with_timeout(1000);

    let executor = virtual_executor();
    let run = executor.execute(&unit).await;
    assert!(run.timed_out);
    assert_eq!(run.actual_lines.len(), 10);
    assert_eq!(*ticks.lock(), 10);

    // Nothing fires once execute has returned
    executor.clock().as_virtual().unwrap().advance_ms(10_000);
    tokio::task::yield_now().await;
    assert_eq!(*ticks.lock(), 10);
}

#[tokio::test]
async fn test_interval_cleared_by_callback() {
    let unit = ExampleUnit::new("builtins.interval", "Interval", |host| {
        let mut count = 0;
        host.schedule_repeating(1000, move |h, handle| {
            count += 1;
            h.log_all(["Interval", &count.to_string()]);
            if count == 3 {
                handle.cancel();
                h.log("Interval stopped");
            }
            Ok(())
        });
        Ok(())
    });
    let run = virtual_executor().execute(&unit).await;
    assert!(!run.timed_out);
    assert_eq!(
        run.actual_lines,
        vec!["Interval 1", "Interval 2", "Interval 3", "Interval stopped"]
    );
}

#[tokio::test]
async fn test_cancelled_timeout_prints_nothing() {
    let unit = ExampleUnit::new("builtins.clear", "Clear", |host| {
        let handle = host.schedule_once(1000, |h, _| {
            h.log("never");
            Ok(())
        });
        handle.cancel();
        Ok(())
    });
    let run = virtual_executor().execute(&unit).await;
    assert!(run.actual_lines.is_empty());
    assert!(!run.timed_out);
}

#[tokio::test]
async fn test_timers_fire_in_due_order() {
    let unit = ExampleUnit::new("a.order", "Order", |host| {
        host.schedule_once(30, |h, _| {
            h.log("third");
            Ok(())
        });
        host.schedule_once(10, |h, _| {
            h.log("first");
            h.schedule_once(5, |h, _| {
                h.log("second");
                Ok(())
            });
            Ok(())
        });
        host.log("sync");
        Ok(())
    });
    let run = virtual_executor().execute(&unit).await;
    assert_eq!(run.actual_lines, vec!["sync", "first", "second", "third"]);
}

#[tokio::test]
async fn test_timer_error_aborts_remaining_timers() {
    let unit = ExampleUnit::new("a.timer_err", "Timer error", |host| {
        host.schedule_once(10, |_, _| Err("late failure".into()));
        host.schedule_once(20, |h, _| {
            h.log("unreachable");
            Ok(())
        });
        Ok(())
    });
    let run = virtual_executor().execute(&unit).await;
    assert_eq!(run.actual_lines, vec!["late failure"]);
    assert_eq!(run.error.as_deref(), Some("late failure"));
}

#[tokio::test]
async fn test_execute_is_idempotent() {
    let unit = ExampleUnit::new("a.twice", "Twice", |host| {
        host.log("one");
        host.schedule_once(5, |h, _| {
            h.log("two");
            Ok(())
        });
        Ok(())
    });
    let executor = virtual_executor();
    let first = executor.execute(&unit).await;
    let second = executor.execute(&unit).await;
    assert_eq!(first.actual_lines, second.actual_lines);
}

#[tokio::test]
async fn test_system_clock_waits_for_timer() {
    let unit = ExampleUnit::new("a.real", "Real", |host| {
        host.schedule_once(20, |h, _| {
            h.log("done");
            Ok(())
        });
        Ok(())
    })
    .with_timeout(2000);
    let run = Executor::new(ClockHandle::system()).execute(&unit).await;
    assert_eq!(run.actual_lines, vec!["done"]);
    assert!(run.duration_ms >= 15);
}

#[test]
fn test_budget_override() {
    let unit = ExampleUnit::new("a.b", "t", |_| Ok(())).with_timeout(300);
    let executor = virtual_executor();
    assert_eq!(executor.budget_ms(&unit), 300);
    assert_eq!(
        executor.clone().with_timeout_override(Some(40)).budget_ms(&unit),
        40
    );
    assert_eq!(executor.with_timeout_override(Some(0)).budget_ms(&unit), 300);
}

#[test]
fn test_panic_message_payloads() {
    let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
    let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
    let other: Box<dyn Any + Send> = Box::new(7u8);
    assert_eq!(panic_message(owned.as_ref()), "owned");
    assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
    assert_eq!(panic_message(other.as_ref()), "unit panicked");
}
