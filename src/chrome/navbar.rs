//! Auto-hiding navigation bar.
//!
//! The bar shows at load and hides after [`INITIAL_HIDE`]. Moving the
//! pointer near the top edge brings it back; it hides again after
//! [`IDLE_HIDE`] without movement unless the pointer rests on the bar.

use std::time::Duration;

/// Pointer positions above this line reveal the bar.
pub const REVEAL_ZONE: f64 = 100.0;
pub const IDLE_HIDE: Duration = Duration::from_secs(2);
pub const INITIAL_HIDE: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarAutoHide {
    visible: bool,
    hovering: bool,
    initial_hide_at: Option<u64>,
    idle_hide_at: Option<u64>,
}

fn after(now_ms: u64, delay: Duration) -> u64 {
    now_ms.saturating_add(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX))
}

impl NavbarAutoHide {
    /// Bar shown at `now_ms`, scheduled to hide after the initial delay.
    pub fn new(now_ms: u64) -> Self {
        Self {
            visible: true,
            hovering: false,
            initial_hide_at: Some(after(now_ms, INITIAL_HIDE)),
            idle_hide_at: None,
        }
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Pointer moved to vertical position `y` (viewport coordinates).
    pub fn pointer_moved(&mut self, y: f64, now_ms: u64) {
        self.idle_hide_at = Some(after(now_ms, IDLE_HIDE));
        if y < REVEAL_ZONE {
            self.visible = true;
        }
    }

    pub const fn pointer_entered(&mut self) {
        self.hovering = true;
        self.visible = true;
    }

    pub fn pointer_left(&mut self, now_ms: u64) {
        self.hovering = false;
        self.idle_hide_at = Some(after(now_ms, IDLE_HIDE));
    }

    /// Run due hide timers. Returns true when visibility changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut due = false;
        for deadline in [&mut self.initial_hide_at, &mut self.idle_hide_at] {
            if deadline.is_some_and(|at| now_ms >= at) {
                *deadline = None;
                due = true;
            }
        }
        if due && !self.hovering && self.visible {
            self.visible = false;
            return true;
        }
        false
    }

    /// Next time [`tick`](Self::tick) has work to do.
    pub fn deadline_ms(&self) -> Option<u64> {
        match (self.initial_hide_at, self.idle_hide_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
