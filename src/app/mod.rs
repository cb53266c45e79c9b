//! Terminal host for the section scroller.
//!
//! Follows The Elm Architecture (TEA):
//! - [`Model`]: the page, the scroll driver and the page chrome
//! - [`Message`]: input translated from terminal events
//! - [`update`]: state transitions at a given millisecond clock
//! - [`App::run`]: main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use input::WHEEL_NOTCH;
pub use model::{Model, STATUS_ROWS};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::controller::ControllerConfig;
use crate::document::DEFAULT_HEADING_LEVEL;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    controller_config: ControllerConfig,
    heading_level: u8,
    navbar_enabled: bool,
    reveal_enabled: bool,
}

impl App {
    /// Create a new application for the given file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            controller_config: ControllerConfig::default(),
            heading_level: DEFAULT_HEADING_LEVEL,
            navbar_enabled: true,
            reveal_enabled: true,
        }
    }

    pub const fn with_controller_config(mut self, config: ControllerConfig) -> Self {
        self.controller_config = config;
        self
    }

    /// Deepest heading level that starts a section.
    pub const fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level;
        self
    }

    pub const fn with_navbar(mut self, enabled: bool) -> Self {
        self.navbar_enabled = enabled;
        self
    }

    pub const fn with_reveal(mut self, enabled: bool) -> Self {
        self.reveal_enabled = enabled;
        self
    }
}
