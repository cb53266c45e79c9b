//! Input events and device classification.
//!
//! Wheel input is split into two device classes by the size of a single
//! delta: touchpads report many small deltas, mouse wheels report large
//! discrete clicks. Each class gets its own accumulation threshold,
//! debounce window and animation timing.

use std::time::Duration;

use crossterm::event::KeyCode;

use crate::tween::Ease;

/// Deltas smaller than this (in absolute value) come from a touchpad.
pub const TOUCHPAD_DELTA_LIMIT: f64 = 50.0;

/// Where a wheel event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDevice {
    Touchpad,
    MouseWheel,
}

/// Timing applied to a scroll triggered by one device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollProfile {
    /// Accumulated delta that must be exceeded before a scroll fires
    pub threshold: f64,
    /// Quiet period after the last wheel event
    pub debounce: Duration,
    /// Length of the resulting scroll animation
    pub duration: Duration,
    pub ease: Ease,
}

pub const TOUCHPAD_PROFILE: ScrollProfile = ScrollProfile {
    threshold: 15.0,
    debounce: Duration::from_millis(50),
    duration: Duration::from_millis(500),
    ease: Ease::Power2Out,
};

pub const MOUSE_WHEEL_PROFILE: ScrollProfile = ScrollProfile {
    threshold: 20.0,
    debounce: Duration::from_millis(30),
    duration: Duration::from_millis(200),
    ease: Ease::Power3Out,
};

/// Anchor links always animate with this timing, whatever the device.
pub const ANCHOR_DURATION: Duration = Duration::from_millis(200);
pub const ANCHOR_EASE: Ease = Ease::Power3Out;

impl InputDevice {
    /// Classify a single wheel delta.
    pub fn classify(delta_y: f64) -> Self {
        if delta_y.abs() < TOUCHPAD_DELTA_LIMIT {
            Self::Touchpad
        } else {
            Self::MouseWheel
        }
    }

    pub const fn profile(self) -> ScrollProfile {
        match self {
            Self::Touchpad => TOUCHPAD_PROFILE,
            Self::MouseWheel => MOUSE_WHEEL_PROFILE,
        }
    }
}

/// A wheel event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Vertical delta; positive scrolls down
    pub delta_y: f64,
    /// The event target is inside the contact form, which scrolls natively
    pub inside_form: bool,
}

impl WheelInput {
    pub const fn new(delta_y: f64) -> Self {
        Self {
            delta_y,
            inside_form: false,
        }
    }

    pub const fn in_form(mut self) -> Self {
        self.inside_form = true;
        self
    }
}

/// A key press as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    /// Focus is inside a text input or text area
    pub text_focus: bool,
}

impl KeyInput {
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            text_focus: false,
        }
    }

    pub const fn in_text_field(mut self) -> Self {
        self.text_focus = true;
        self
    }
}

/// Section navigation requested by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavKey {
    /// Map a key code to a navigation, if it is one of the handled keys.
    pub const fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Down | KeyCode::PageDown => Some(Self::Next),
            KeyCode::Up | KeyCode::PageUp => Some(Self::Previous),
            KeyCode::Home => Some(Self::First),
            KeyCode::End => Some(Self::Last),
            _ => None,
        }
    }
}
