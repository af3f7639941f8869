// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delayed and repeating callbacks scheduled by unit bodies.
//!
//! Nothing here fires on its own. The executor pops due timers and runs
//! them, and seals the queue when the unit settles so no callback outlives
//! its unit.

use crate::time::{Clock, ClockHandle};
use crate::unit::{Host, UnitResult};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Callback run when a timer comes due
pub type TimerCallback = Box<dyn FnMut(&Host, &TimerHandle) -> UnitResult + Send>;

/// Timer identifier, increasing in scheduling order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Cancellable handle to a scheduled timer
#[derive(Clone)]
pub struct TimerHandle {
    id: TimerId,
    cancelled: Arc<AtomicBool>,
    queue: Weak<Mutex<QueueState>>,
}

impl TimerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Cancel the timer; a repeating timer cancelled from its own callback
    /// does not re-arm.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(queue) = self.queue.upgrade() {
            queue.lock().remove(self.id);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("id", &self.id)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

struct TimerEntry {
    handle: TimerHandle,
    interval_ms: Option<u64>,
    callback: TimerCallback,
}

#[derive(Default)]
struct QueueState {
    next_id: u64,
    /// Keyed by (due time, id) so ties fire in scheduling order
    entries: BTreeMap<(u64, TimerId), TimerEntry>,
    sealed: bool,
}

impl QueueState {
    fn remove(&mut self, id: TimerId) {
        self.entries.retain(|(_, entry_id), _| *entry_id != id);
    }
}

/// A timer taken off the queue to be fired
pub struct DueTimer {
    due_ms: u64,
    entry: TimerEntry,
}

impl DueTimer {
    pub fn due_ms(&self) -> u64 {
        self.due_ms
    }

    pub fn handle(&self) -> &TimerHandle {
        &self.entry.handle
    }

    /// Run the callback once
    pub fn fire(&mut self, host: &Host) -> UnitResult {
        (self.entry.callback)(host, &self.entry.handle)
    }
}

/// Per-unit timer queue
#[derive(Clone)]
pub struct TimerQueue {
    state: Arc<Mutex<QueueState>>,
    clock: ClockHandle,
}

impl TimerQueue {
    pub fn new(clock: ClockHandle) -> Self {
        Self {
            state: Arc::new(Mutex::new(QueueState::default())),
            clock,
        }
    }

    /// Schedule a one-shot timer
    pub fn schedule_once(&self, delay_ms: u64, callback: TimerCallback) -> TimerHandle {
        self.schedule(delay_ms, None, callback)
    }

    /// Schedule a repeating timer; intervals shorter than 1 ms are clamped
    pub fn schedule_repeating(&self, interval_ms: u64, callback: TimerCallback) -> TimerHandle {
        let interval_ms = interval_ms.max(1);
        self.schedule(interval_ms, Some(interval_ms), callback)
    }

    fn schedule(
        &self,
        delay_ms: u64,
        interval_ms: Option<u64>,
        callback: TimerCallback,
    ) -> TimerHandle {
        let due_ms = self.clock.now_millis().saturating_add(delay_ms);
        let mut state = self.state.lock();
        let id = TimerId(state.next_id);
        state.next_id += 1;

        // Scheduling after the unit settled yields a dead handle
        let handle = TimerHandle {
            id,
            cancelled: Arc::new(AtomicBool::new(state.sealed)),
            queue: Arc::downgrade(&self.state),
        };
        if !state.sealed {
            state.entries.insert(
                (due_ms, id),
                TimerEntry {
                    handle: handle.clone(),
                    interval_ms,
                    callback,
                },
            );
        }
        handle
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<u64> {
        self.state.lock().entries.keys().next().map(|(due, _)| *due)
    }

    /// Take the earliest pending timer off the queue
    pub fn pop_next(&self) -> Option<DueTimer> {
        self.state
            .lock()
            .entries
            .pop_first()
            .map(|((due_ms, _), entry)| DueTimer { due_ms, entry })
    }

    /// Put a fired repeating timer back one interval later.
    ///
    /// One-shot and cancelled timers are dropped.
    pub fn rearm(&self, timer: DueTimer) {
        let Some(interval) = timer.entry.interval_ms else {
            return;
        };
        if timer.entry.handle.is_cancelled() {
            return;
        }
        let mut state = self.state.lock();
        if state.sealed {
            return;
        }
        let key = (timer.due_ms.saturating_add(interval), timer.entry.handle.id);
        state.entries.insert(key, timer.entry);
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Cancel every pending timer and refuse new ones.
    ///
    /// Returns how many timers were still pending.
    pub fn seal(&self) -> usize {
        let mut state = self.state.lock();
        state.sealed = true;
        let entries = std::mem::take(&mut state.entries);
        for entry in entries.values() {
            entry.handle.cancelled.store(true, Ordering::SeqCst);
        }
        entries.len()
    }

    pub fn is_sealed(&self) -> bool {
        self.state.lock().sealed
    }
}

impl fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("TimerQueue")
            .field("pending", &state.entries.len())
            .field("sealed", &state.sealed)
            .finish()
    }
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod tests;
