//! Glue between a page, the controller, the debounce timer and the tween
//! engine.
//!
//! A host owns one [`ScrollDriver`], passes every input through
//! [`ScrollDriver::handle`] and calls [`ScrollDriver::tick`] from its loop.

use std::time::Duration;

use crate::controller::{Command, ControllerConfig, Message, ScrollState, SectionScroller};
use crate::page::Page;
use crate::timer::DebounceTimer;
use crate::tween::{AnimationId, Ease, Tween, TweenEngine};

/// Animations the host starts on its own use this id; the controller never
/// mints it, so their completions never touch the lock.
const NATIVE_ANIMATION: AnimationId = AnimationId::new(0);

/// Timing of a native smooth scroll.
pub const NATIVE_SMOOTH_DURATION: Duration = Duration::from_millis(300);

/// Repaint interval while a tween runs.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What the host should do with the input it just passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The default action was prevented
    Consumed,
    /// Perform the native action
    Native,
}

pub struct ScrollDriver<P: Page> {
    page: P,
    scroller: SectionScroller,
    timer: DebounceTimer,
    tweens: TweenEngine,
}

impl<P: Page> std::fmt::Debug for ScrollDriver<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollDriver")
            .field("offset", &self.page.scroll_offset())
            .field("state", self.scroller.state())
            .field("animating", &self.tweens.is_running())
            .finish_non_exhaustive()
    }
}

impl<P: Page> ScrollDriver<P> {
    pub fn new(page: P, config: ControllerConfig) -> Self {
        let scroller = SectionScroller::new(config, &page);
        Self {
            page,
            scroller,
            timer: DebounceTimer::new(),
            tweens: TweenEngine::new(),
        }
    }

    pub const fn page(&self) -> &P {
        &self.page
    }

    /// Mutable access for layout changes. Follow a resize with
    /// [`Message::Resized`].
    pub const fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub const fn scroller(&self) -> &SectionScroller {
        &self.scroller
    }

    pub const fn state(&self) -> &ScrollState {
        self.scroller.state()
    }

    /// A tween is moving the viewport.
    pub const fn is_animating(&self) -> bool {
        self.tweens.is_running()
    }

    /// Feed one input through the controller.
    pub fn handle(&mut self, msg: Message, now_ms: u64) -> Dispatch {
        let commands = self.scroller.update(&self.page, msg);
        if self.apply(commands, now_ms) {
            Dispatch::Consumed
        } else {
            Dispatch::Native
        }
    }

    /// Fire due timers and advance the running tween.
    ///
    /// Returns true when the scroll offset moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let Some(handle) = self.timer.take_ready(now_ms) {
            let commands = self
                .scroller
                .update(&self.page, Message::DebounceElapsed(handle));
            self.apply(commands, now_ms);
        }

        let step = self.tweens.tick(now_ms);
        let moved = step.offset.is_some_and(|offset| {
            let before = self.page.scroll_offset();
            self.page.set_scroll_offset(offset);
            (self.page.scroll_offset() - before).abs() > f64::EPSILON
        });
        if step.offset.is_some() {
            self.scroller.update(&self.page, Message::Scrolled);
        }
        if let Some(id) = step.completed {
            self.complete(id);
        }
        moved
    }

    /// Scroll natively by `delta` (used when an input was not consumed).
    pub fn scroll_by(&mut self, delta: f64) {
        let offset = self.page.scroll_offset() + delta;
        self.scroll_to(offset);
    }

    /// Jump natively to `offset`.
    pub fn scroll_to(&mut self, offset: f64) {
        self.page.set_scroll_offset(offset);
        self.scroller.update(&self.page, Message::Scrolled);
    }

    /// How long the host may wait before the next [`tick`](Self::tick).
    pub fn poll_timeout(&self, now_ms: u64) -> Option<Duration> {
        if self.tweens.is_running() {
            return Some(FRAME_INTERVAL);
        }
        self.timer
            .deadline_ms()
            .map(|deadline| Duration::from_millis(deadline.saturating_sub(now_ms)))
    }

    fn apply(&mut self, commands: Vec<Command>, now_ms: u64) -> bool {
        let mut consumed = false;
        for command in commands {
            match command {
                Command::PreventDefault => consumed = true,
                Command::ScheduleDebounce { handle, delay } => {
                    self.timer.schedule(handle, delay, now_ms);
                }
                Command::CancelDebounce(handle) => self.timer.cancel(handle),
                Command::Animate(animation) => {
                    self.start_tween(Tween {
                        id: animation.id,
                        from: self.page.scroll_offset(),
                        to: animation.target,
                        started_at_ms: now_ms,
                        duration: animation.duration,
                        ease: animation.ease,
                    });
                }
                Command::NativeSmoothScroll { target } => {
                    self.start_tween(Tween {
                        id: NATIVE_ANIMATION,
                        from: self.page.scroll_offset(),
                        to: target,
                        started_at_ms: now_ms,
                        duration: NATIVE_SMOOTH_DURATION,
                        ease: Ease::Power2Out,
                    });
                }
            }
        }
        consumed
    }

    fn start_tween(&mut self, tween: Tween) {
        if let Some(interrupted) = self.tweens.start(tween) {
            self.complete(interrupted);
        }
    }

    fn complete(&mut self, id: AnimationId) {
        self.scroller
            .update(&self.page, Message::AnimationComplete(id));
    }
}
