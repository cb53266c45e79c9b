//! Scroll tweening.
//!
//! A [`Tween`] interpolates the scroll offset from one position to another
//! over a fixed duration. [`TweenEngine`] runs at most one of them and
//! reports each animation as complete exactly once: when it reaches its
//! target, when a newer tween interrupts it, or when it is killed.

use std::time::Duration;

/// Easing curves, named after their tweening-library counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Cubic ease-out; the gentler deceleration.
    Power2Out,
    /// Quartic ease-out; the sharper deceleration.
    Power3Out,
}

impl Ease {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - inv.powi(3),
            Self::Power3Out => 1.0 - inv.powi(4),
        }
    }
}

/// Identifies one started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// One scroll animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub id: AnimationId,
    pub from: f64,
    pub to: f64,
    pub started_at_ms: u64,
    pub duration: Duration,
    pub ease: Ease,
}

impl Tween {
    /// Linear progress at `now_ms`, in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let duration_ms = self.duration.as_secs_f64() * 1000.0;
        if duration_ms <= 0.0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let elapsed = now_ms.saturating_sub(self.started_at_ms) as f64;
        (elapsed / duration_ms).clamp(0.0, 1.0)
    }

    /// Offset at `now_ms`.
    pub fn sample(&self, now_ms: u64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    fn deadline_ms(&self) -> u64 {
        let duration_ms = u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX);
        self.started_at_ms.saturating_add(duration_ms)
    }
}

/// Result of advancing the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TweenStep {
    /// New scroll offset, when a tween was running
    pub offset: Option<f64>,
    /// Animation that finished during this step
    pub completed: Option<AnimationId>,
}

/// Runs a single scroll tween at a time.
#[derive(Debug, Default)]
pub struct TweenEngine {
    active: Option<Tween>,
}

impl TweenEngine {
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Start `tween`, interrupting whatever was running.
    ///
    /// Returns the interrupted animation, which counts as completed.
    pub fn start(&mut self, tween: Tween) -> Option<AnimationId> {
        let interrupted = self.active.replace(tween).map(|t| t.id);
        if let Some(id) = interrupted {
            tracing::debug!(?id, next = ?tween.id, "tween interrupted");
        }
        interrupted
    }

    /// Advance to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> TweenStep {
        let Some(tween) = self.active else {
            return TweenStep::default();
        };
        let offset = tween.sample(now_ms);
        if tween.is_finished(now_ms) {
            self.active = None;
            return TweenStep {
                offset: Some(offset),
                completed: Some(tween.id),
            };
        }
        TweenStep {
            offset: Some(offset),
            completed: None,
        }
    }

    /// Stop the running tween where it is and complete it.
    pub fn kill(&mut self) -> Option<AnimationId> {
        self.active.take().map(|t| t.id)
    }

    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub const fn active(&self) -> Option<&Tween> {
        self.active.as_ref()
    }

    /// Time at which the running tween reaches its target.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.active.as_ref().map(Tween::deadline_ms)
    }
}
