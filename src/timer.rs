//! Debounce timer driven by a millisecond clock.
//!
//! The host calls [`DebounceTimer::take_ready`] from its loop with the
//! current time; nothing here sleeps or spawns.

use std::time::Duration;

/// Identifies one scheduled debounce callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DebounceHandle(u64);

impl DebounceHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Holds at most one pending callback.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    pending: Option<(DebounceHandle, u64)>,
}

impl DebounceTimer {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `handle` to fire `delay` after `now_ms`, replacing any
    /// pending callback.
    pub fn schedule(&mut self, handle: DebounceHandle, delay: Duration, now_ms: u64) {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.pending = Some((handle, now_ms.saturating_add(delay_ms)));
    }

    /// Cancel `handle` if it is the pending callback.
    pub fn cancel(&mut self, handle: DebounceHandle) {
        if self.pending.is_some_and(|(pending, _)| pending == handle) {
            self.pending = None;
        }
    }

    /// Take the pending handle once its deadline has passed.
    pub fn take_ready(&mut self, now_ms: u64) -> Option<DebounceHandle> {
        let (handle, deadline) = self.pending?;
        if now_ms >= deadline {
            self.pending = None;
            Some(handle)
        } else {
            None
        }
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.map(|(_, deadline)| deadline)
    }
}
