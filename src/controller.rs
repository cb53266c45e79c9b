//! Section scroll controller.
//!
//! Turns wheel, key, anchor and scroll notifications into "snap to the
//! next section" scrolls. The controller owns a [`ScrollState`] and never
//! touches timers or animations itself: [`SectionScroller::update`] returns
//! [`Command`]s for the host to carry out, and the host reports back with
//! [`Message::DebounceElapsed`] and [`Message::AnimationComplete`].
//!
//! Two states exist. `Idle` accepts scroll requests; `Animating` (while
//! `is_scrolling` is set) drops them. Only the completion of the animation
//! that set the lock returns the controller to `Idle`.

use std::time::Duration;

use crate::input::{
    ANCHOR_DURATION, ANCHOR_EASE, InputDevice, KeyInput, NavKey, WheelInput,
};
use crate::page::Page;
use crate::section::{section_at, viewport_midpoint};
use crate::timer::DebounceHandle;
use crate::tween::{AnimationId, Ease};

/// Viewports at or under this width scroll natively.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// When the desktop/mobile decision is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationPolicy {
    /// Decide once at load and keep the decision for the whole session.
    #[default]
    AtLoad,
    /// Re-decide on every resize.
    FollowViewport,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub breakpoint: f64,
    pub activation: ActivationPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT,
            activation: ActivationPolicy::AtLoad,
        }
    }
}

/// Mutable controller state for one page session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    /// Section under the viewport midpoint, as last computed
    pub current_section_index: usize,
    /// A programmatic scroll is in flight
    pub is_scrolling: bool,
    /// Wheel delta not yet turned into a scroll
    pub accumulated_delta: f64,
    pub pending_debounce: Option<DebounceHandle>,
}

/// Events the host feeds into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Wheel(WheelInput),
    Key(KeyInput),
    /// Click on an in-page link, e.g. `#about`
    AnchorClick(String),
    /// The page scrolled, natively or by animation
    Scrolled,
    /// The page was resized
    Resized,
    DebounceElapsed(DebounceHandle),
    AnimationComplete(AnimationId),
}

/// A scroll animation the host must run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub id: AnimationId,
    pub target: f64,
    pub duration: Duration,
    pub ease: Ease,
}

/// Work requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Suppress the host's default handling of the input
    PreventDefault,
    ScheduleDebounce {
        handle: DebounceHandle,
        delay: Duration,
    },
    CancelDebounce(DebounceHandle),
    /// Animate the viewport; report completion with the same id
    Animate(ScrollAnimation),
    /// Smooth-scroll natively, outside the controller's lock
    NativeSmoothScroll { target: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlightKind {
    Section,
    Anchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    id: AnimationId,
    kind: FlightKind,
}

/// The section scroll controller.
#[derive(Debug, Clone)]
pub struct SectionScroller {
    config: ControllerConfig,
    state: ScrollState,
    installed: bool,
    pending_device: InputDevice,
    in_flight: Option<InFlight>,
    next_debounce: DebounceHandle,
    next_animation: AnimationId,
}

impl SectionScroller {
    /// Create the controller for `page`, deciding whether it takes over
    /// scrolling from the page's current width.
    pub fn new(config: ControllerConfig, page: &dyn Page) -> Self {
        let installed = page.viewport_width() > config.breakpoint;
        let mut scroller = Self {
            config,
            state: ScrollState::default(),
            installed,
            pending_device: InputDevice::MouseWheel,
            in_flight: None,
            next_debounce: DebounceHandle::new(1),
            next_animation: AnimationId::new(1),
        };
        if installed {
            scroller.update_current_section(page);
        }
        tracing::debug!(
            installed,
            width = page.viewport_width(),
            breakpoint = config.breakpoint,
            "section scroller created"
        );
        scroller
    }

    pub const fn state(&self) -> &ScrollState {
        &self.state
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Whether the controller listens for wheel, key and scroll input.
    pub const fn is_installed(&self) -> bool {
        self.installed
    }

    pub const fn is_scrolling(&self) -> bool {
        self.state.is_scrolling
    }

    fn is_mobile(&self, page: &dyn Page) -> bool {
        page.viewport_width() <= self.config.breakpoint
    }

    /// Handle one message and return the work the host must do.
    pub fn update(&mut self, page: &dyn Page, msg: Message) -> Vec<Command> {
        match msg {
            Message::Wheel(wheel) => self.on_wheel(page, wheel),
            Message::Key(key) => self.on_key_down(page, key),
            Message::AnchorClick(fragment) => self.on_anchor_click(page, &fragment),
            Message::Scrolled => {
                if self.installed {
                    self.update_current_section(page);
                }
                Vec::new()
            }
            Message::Resized => self.on_resize(page),
            Message::DebounceElapsed(handle) => self.on_debounce(page, handle),
            Message::AnimationComplete(id) => {
                self.on_animation_complete(page, id);
                Vec::new()
            }
        }
    }

    /// Recompute which section sits under the viewport midpoint.
    ///
    /// Leaves the index alone when the midpoint is in no section.
    pub fn update_current_section(&mut self, page: &dyn Page) {
        let midpoint = viewport_midpoint(page.scroll_offset(), page.viewport_height());
        if let Some(index) = section_at(page.sections(), midpoint) {
            self.state.current_section_index = index;
        }
    }

    /// Start an animated scroll to section `index`.
    ///
    /// Returns `None` without touching state when the index is out of
    /// range or another scroll is in flight.
    pub fn scroll_to_section(
        &mut self,
        page: &dyn Page,
        index: isize,
        device: InputDevice,
    ) -> Option<Command> {
        let sections = page.sections();
        let Some(index) = usize::try_from(index).ok().filter(|&i| i < sections.len()) else {
            tracing::trace!(index, count = sections.len(), "scroll target out of range");
            return None;
        };
        if self.state.is_scrolling {
            tracing::debug!(index, "scroll request dropped: animation in flight");
            return None;
        }

        let profile = device.profile();
        let id = self.mint_animation();
        self.state.is_scrolling = true;
        self.state.current_section_index = index;
        self.in_flight = Some(InFlight {
            id,
            kind: FlightKind::Section,
        });
        tracing::debug!(index, ?device, ?id, "scrolling to section");
        Some(Command::Animate(ScrollAnimation {
            id,
            target: sections[index].top,
            duration: profile.duration,
            ease: profile.ease,
        }))
    }

    fn on_wheel(&mut self, page: &dyn Page, wheel: WheelInput) -> Vec<Command> {
        if !self.installed {
            return Vec::new();
        }
        if self.is_mobile(page) {
            tracing::trace!("wheel ignored: mobile width");
            return Vec::new();
        }
        if self.state.is_scrolling {
            tracing::trace!(delta_y = wheel.delta_y, "wheel dropped: animation in flight");
            return Vec::new();
        }
        if wheel.inside_form {
            tracing::trace!("wheel ignored: inside contact form");
            return Vec::new();
        }

        let device = InputDevice::classify(wheel.delta_y);
        self.state.accumulated_delta += wheel.delta_y;
        self.pending_device = device;

        let mut commands = vec![Command::PreventDefault];
        if let Some(previous) = self.state.pending_debounce.take() {
            commands.push(Command::CancelDebounce(previous));
        }
        let handle = self.mint_debounce();
        self.state.pending_debounce = Some(handle);
        commands.push(Command::ScheduleDebounce {
            handle,
            delay: device.profile().debounce,
        });
        commands
    }

    fn on_debounce(&mut self, page: &dyn Page, handle: DebounceHandle) -> Vec<Command> {
        if self.state.pending_debounce != Some(handle) {
            tracing::trace!(?handle, "stale debounce ignored");
            return Vec::new();
        }
        self.state.pending_debounce = None;

        let delta = self.state.accumulated_delta;
        let profile = self.pending_device.profile();
        if delta.abs() <= profile.threshold {
            tracing::trace!(delta, threshold = profile.threshold, "wheel delta below threshold");
            return Vec::new();
        }

        self.update_current_section(page);
        let step = if delta > 0.0 { 1 } else { -1 };
        let target = step_index(self.state.current_section_index, step);
        self.state.accumulated_delta = 0.0;
        self.scroll_to_section(page, target, self.pending_device)
            .into_iter()
            .collect()
    }

    fn on_key_down(&mut self, page: &dyn Page, key: KeyInput) -> Vec<Command> {
        if !self.installed || self.is_mobile(page) {
            return Vec::new();
        }
        if self.state.is_scrolling {
            tracing::trace!(code = ?key.code, "key dropped: animation in flight");
            return Vec::new();
        }
        if key.text_focus {
            return Vec::new();
        }
        let Some(nav) = NavKey::from_code(key.code) else {
            return Vec::new();
        };

        let target = match nav {
            NavKey::Next => {
                self.update_current_section(page);
                step_index(self.state.current_section_index, 1)
            }
            NavKey::Previous => step_index(self.state.current_section_index, -1),
            NavKey::First => 0,
            NavKey::Last => isize::try_from(page.sections().len())
                .unwrap_or(isize::MAX)
                .saturating_sub(1),
        };

        let mut commands = vec![Command::PreventDefault];
        commands.extend(self.scroll_to_section(page, target, InputDevice::MouseWheel));
        commands
    }

    fn on_anchor_click(&mut self, page: &dyn Page, fragment: &str) -> Vec<Command> {
        let mut commands = vec![Command::PreventDefault];
        let Some(target) = page.anchor_offset(fragment) else {
            tracing::debug!(fragment, "anchor target not found");
            return commands;
        };

        if !self.installed {
            commands.push(Command::NativeSmoothScroll { target });
            return commands;
        }

        if let Some(previous) = self.in_flight {
            tracing::debug!(previous = ?previous.id, fragment, "anchor click supersedes running scroll");
        }
        let id = self.mint_animation();
        self.state.is_scrolling = true;
        self.in_flight = Some(InFlight {
            id,
            kind: FlightKind::Anchor,
        });
        commands.push(Command::Animate(ScrollAnimation {
            id,
            target,
            duration: ANCHOR_DURATION,
            ease: ANCHOR_EASE,
        }));
        commands
    }

    fn on_animation_complete(&mut self, page: &dyn Page, id: AnimationId) {
        let Some(flight) = self.in_flight.filter(|flight| flight.id == id) else {
            tracing::trace!(?id, "stale animation completion ignored");
            return;
        };
        self.in_flight = None;
        self.state.is_scrolling = false;
        if flight.kind == FlightKind::Anchor {
            self.update_current_section(page);
        }
    }

    fn on_resize(&mut self, page: &dyn Page) -> Vec<Command> {
        let installed = match self.config.activation {
            ActivationPolicy::AtLoad => self.installed,
            ActivationPolicy::FollowViewport => page.viewport_width() > self.config.breakpoint,
        };
        if installed != self.installed {
            self.installed = installed;
            tracing::debug!(installed, width = page.viewport_width(), "section scroller re-evaluated");
            if !installed {
                self.state.accumulated_delta = 0.0;
                return self
                    .state
                    .pending_debounce
                    .take()
                    .map(Command::CancelDebounce)
                    .into_iter()
                    .collect();
            }
        }
        // The page may have moved under the viewport.
        if self.installed {
            self.update_current_section(page);
        }
        Vec::new()
    }

    fn mint_debounce(&mut self) -> DebounceHandle {
        let handle = self.next_debounce;
        self.next_debounce = handle.next();
        handle
    }

    fn mint_animation(&mut self) -> AnimationId {
        let id = self.next_animation;
        self.next_animation = id.next();
        id
    }
}

/// `index + step` as a signed section index.
fn step_index(index: usize, step: isize) -> isize {
    isize::try_from(index)
        .unwrap_or(isize::MAX)
        .saturating_add(step)
}
