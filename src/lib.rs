// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. document::DocumentError)
    clippy::module_name_repetitions
)]

//! # Sectionsnap
//!
//! Section-by-section snap scrolling for long pages.
//!
//! A page is a stack of full-height sections. On wide viewports one wheel
//! gesture or arrow key moves exactly one section, with a short eased
//! animation; narrow viewports keep native scrolling. The crate ships the
//! controller as a host-agnostic state machine plus a terminal host that
//! shows a markdown file one section at a time.
//!
//! ## Architecture
//!
//! The controller never owns a clock. It returns [`controller::Command`]s
//! (schedule a debounce, run an animation) and the host reports back when
//! the debounce fires or the animation completes. [`driver::ScrollDriver`]
//! wires a page, the controller, a [`timer::DebounceTimer`] and a
//! [`tween::TweenEngine`] together for hosts with a millisecond clock.
//!
//! ## Modules
//!
//! - [`section`]: section geometry and lookup
//! - [`page`]: the page seam the controller reads and scrolls
//! - [`input`]: wheel and key inputs, device classification and timing profiles
//! - [`controller`]: the section scroll state machine
//! - [`timer`] and [`tween`]: debounce timer and scroll animations
//! - [`driver`]: ties the above together
//! - [`chrome`]: navbar auto-hide, hamburger menu, progress and reveal
//! - [`document`]: markdown files as pages of sections
//! - [`app`] and [`ui`]: the terminal host
//! - [`config`]: saved command-line defaults

pub mod app;
pub mod chrome;
pub mod config;
pub mod controller;
pub mod document;
pub mod driver;
pub mod input;
pub mod logging;
pub mod page;
pub mod section;
pub mod timer;
pub mod tween;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::controller::{
        ActivationPolicy, Command, ControllerConfig, Message, ScrollState, SectionScroller,
    };
    pub use crate::driver::{Dispatch, ScrollDriver};
    pub use crate::input::{InputDevice, KeyInput, WheelInput};
    pub use crate::page::{Page, StaticPage};
    pub use crate::section::Section;
}
