// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clocks driving unit timers.
//!
//! The executor schedules timer callbacks against a [`ClockHandle`]. The
//! system clock really sleeps; the virtual clock jumps straight to the next
//! due time, so timer-heavy units settle instantly and deterministically.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the epoch
    fn now_millis(&self) -> u64;

    /// Wait for a duration
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

fn wall_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Real clock using system time
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        wall_millis()
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Clock that only moves when told to.
///
/// Sleeping advances the clock by the requested duration and returns
/// immediately. Clones share the same time.
#[derive(Clone, Debug)]
pub struct VirtualClock {
    current_millis: Arc<AtomicU64>,
}

impl VirtualClock {
    /// Create a virtual clock starting at a given time
    pub fn new(start_millis: u64) -> Self {
        Self {
            current_millis: Arc::new(AtomicU64::new(start_millis)),
        }
    }

    /// Create a virtual clock starting at the current wall time
    pub fn at_now() -> Self {
        Self::new(wall_millis())
    }

    /// Advance time by a duration
    pub fn advance(&self, duration: Duration) {
        self.advance_ms(duration.as_millis() as u64);
    }

    /// Advance time by milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.current_millis.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for VirtualClock {
    fn now_millis(&self) -> u64 {
        self.current_millis.load(Ordering::SeqCst)
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.advance(duration);
        Box::pin(async {})
    }
}

/// Clock handle that can be either real or virtual
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Virtual(VirtualClock),
}

impl ClockHandle {
    /// Create a system clock handle
    pub fn system() -> Self {
        Self::System(SystemClock)
    }

    /// Create a virtual clock handle starting at the current wall time
    pub fn virtual_now() -> Self {
        Self::Virtual(VirtualClock::at_now())
    }

    /// Create a virtual clock handle at a specific time
    pub fn virtual_at(millis: u64) -> Self {
        Self::Virtual(VirtualClock::new(millis))
    }

    /// Get as virtual clock for manipulation (None for the system clock)
    pub fn as_virtual(&self) -> Option<&VirtualClock> {
        match self {
            Self::Virtual(c) => Some(c),
            Self::System(_) => None,
        }
    }

    /// Check if this is a virtual clock
    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual(_))
    }
}

impl Clock for ClockHandle {
    fn now_millis(&self) -> u64 {
        match self {
            Self::System(c) => c.now_millis(),
            Self::Virtual(c) => c.now_millis(),
        }
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        match self {
            Self::System(c) => c.sleep(duration),
            Self::Virtual(c) => c.sleep(duration),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
