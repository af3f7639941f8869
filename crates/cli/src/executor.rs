// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs one unit inside its own capture session.
//!
//! The body runs on a dedicated thread so a unit that never returns can be
//! abandoned at its deadline. Timers are driven afterwards on the executor's
//! clock. Whatever happens, the session and the timer queue are sealed
//! before [`Executor::execute`] returns, so nothing the unit left behind can
//! print into the next unit.

use crate::time::{Clock, ClockHandle};
use crate::timers::{DueTimer, TimerQueue};
use crate::unit::{ExampleUnit, Host, UnitResult};
use primer_capture::{CaptureSession, CapturedRun};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Once};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// Name of the thread a unit body or timer callback runs on
const UNIT_THREAD: &str = "primer-unit";

static UNIT_PANIC_HOOK: Once = Once::new();

/// Why a blocking step did not produce a value
#[derive(Debug, PartialEq, Eq)]
enum Interrupted {
    TimedOut,
    Panicked(String),
}

/// How a unit settled, before comparison
#[derive(Debug, Default)]
struct Settled {
    timed_out: bool,
    error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Executor {
    clock: ClockHandle,
    timeout_override: Option<u64>,
}

impl Executor {
    pub fn new(clock: ClockHandle) -> Self {
        Self {
            clock,
            timeout_override: None,
        }
    }

    /// Replace every unit's own budget
    pub fn with_timeout_override(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_override = timeout_ms.filter(|&ms| ms > 0);
        self
    }

    pub fn clock(&self) -> &ClockHandle {
        &self.clock
    }

    /// Budget the unit gets on this executor
    pub fn budget_ms(&self, unit: &ExampleUnit) -> u64 {
        self.timeout_override.unwrap_or(unit.timeout_ms())
    }

    /// Run a unit and capture what it printed
    #[tracing::instrument(skip_all, fields(unit = unit.id()))]
    pub async fn execute(&self, unit: &ExampleUnit) -> CapturedRun {
        let started = Instant::now();
        let budget_ms = self.budget_ms(unit);
        let wall_deadline = tokio::time::Instant::now() + Duration::from_millis(budget_ms);
        let clock_deadline = self.clock.now_millis().saturating_add(budget_ms);

        let session = CaptureSession::open();
        let timers = TimerQueue::new(self.clock.clone());
        let host = Host::new(session.console(), timers.clone());
        tracing::debug!(budget_ms, "unit started");

        let body = Arc::clone(unit.body());
        let body_host = host.clone();
        let mut settled = Settled::default();
        match run_blocking(move || body(&body_host), wall_deadline).await {
            Ok(result) => settled.absorb(&host, result),
            Err(interrupted) => settled.interrupt(&host, interrupted),
        }

        if settled.is_open() {
            self.drain_timers(&host, &timers, &mut settled, clock_deadline, wall_deadline)
                .await;
        }

        let cancelled = timers.seal();
        if cancelled > 0 {
            tracing::debug!(cancelled, "cancelled outstanding timers");
        }
        let actual_lines = session.finish();
        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(
            duration_ms,
            timed_out = settled.timed_out,
            errored = settled.error.is_some(),
            "unit settled"
        );

        CapturedRun {
            unit_id: unit.id().to_string(),
            actual_lines,
            duration_ms,
            timed_out: settled.timed_out,
            error: settled.error,
        }
    }

    /// Fire due timers in order until none remain or the unit settles
    async fn drain_timers(
        &self,
        host: &Host,
        timers: &TimerQueue,
        settled: &mut Settled,
        clock_deadline: u64,
        wall_deadline: tokio::time::Instant,
    ) {
        while let Some(due) = timers.next_due() {
            if due > clock_deadline {
                tracing::debug!(due, clock_deadline, "timer due past deadline");
                settled.timed_out = true;
                return;
            }

            let now = self.clock.now_millis();
            if due > now {
                let wait = self.clock.sleep(Duration::from_millis(due - now));
                if tokio::time::timeout_at(wall_deadline, wait).await.is_err() {
                    settled.timed_out = true;
                    return;
                }
            }

            let Some(timer) = timers.pop_next() else {
                return;
            };
            tracing::trace!(timer = ?timer.handle().id(), due, "firing timer");

            let timer_host = host.clone();
            let fired = run_blocking(move || fire(timer, &timer_host), wall_deadline).await;
            match fired {
                Ok((timer, result)) => {
                    settled.absorb(host, result);
                    if !settled.is_open() {
                        return;
                    }
                    timers.rearm(timer);
                }
                Err(interrupted) => {
                    settled.interrupt(host, interrupted);
                    return;
                }
            }
        }
    }
}

fn fire(mut timer: DueTimer, host: &Host) -> (DueTimer, UnitResult) {
    let result = timer.fire(host);
    (timer, result)
}

impl Settled {
    fn is_open(&self) -> bool {
        !self.timed_out && self.error.is_none()
    }

    /// Record a step's result; an error aborts the unit and prints its message
    fn absorb(&mut self, host: &Host, result: UnitResult) {
        if let Err(err) = result {
            self.fail(host, err.message().to_string());
        }
    }

    fn interrupt(&mut self, host: &Host, interrupted: Interrupted) {
        match interrupted {
            Interrupted::TimedOut => {
                tracing::debug!("unit overran its budget");
                self.timed_out = true;
            }
            Interrupted::Panicked(message) => self.fail(host, message),
        }
    }

    fn fail(&mut self, host: &Host, message: String) {
        tracing::debug!(%message, "unit raised an error");
        host.console().log_line(&message);
        host.timers().seal();
        self.error = Some(message);
    }
}

/// Run `f` on its own thread, waiting until `deadline` at most.
///
/// On timeout the thread is abandoned; it can only touch sealed state.
async fn run_blocking<T, F>(f: F, deadline: tokio::time::Instant) -> Result<T, Interrupted>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    install_panic_hook();
    let (tx, rx) = oneshot::channel();
    let spawned = std::thread::Builder::new()
        .name(UNIT_THREAD.to_string())
        .spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(f));
            let _ = tx.send(outcome);
        });
    if let Err(err) = spawned {
        return Err(Interrupted::Panicked(format!(
            "failed to start unit thread: {}",
            err
        )));
    }

    match tokio::time::timeout_at(deadline, rx).await {
        Ok(Ok(Ok(value))) => Ok(value),
        Ok(Ok(Err(payload))) => Err(Interrupted::Panicked(panic_message(payload.as_ref()))),
        Ok(Err(_)) => Err(Interrupted::Panicked("unit thread exited".to_string())),
        Err(_) => Err(Interrupted::TimedOut),
    }
}

/// Report panics on unit threads through tracing instead of stderr.
///
/// The unit's panic is already captured as its error line. Panics on any
/// other thread still reach the previously installed hook.
fn install_panic_hook() {
    UNIT_PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if is_unit_thread(std::thread::current().name()) {
                tracing::debug!(panic = %info, "unit thread panicked");
            } else {
                previous(info);
            }
        }));
    });
}

fn is_unit_thread(name: Option<&str>) -> bool {
    name == Some(UNIT_THREAD)
}

/// Text of a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unit panicked".to_string()
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
