use std::path::PathBuf;
use std::time::Duration;

use crate::chrome::{HamburgerMenu, NavbarAutoHide, RevealTracker, scroll_progress};
use crate::controller::ControllerConfig;
use crate::document::MarkdownPage;
use crate::driver::ScrollDriver;
use crate::page::Page;
use crate::section::{Section, section_at, viewport_midpoint};

/// Rows below the page reserved for the status bar.
pub const STATUS_ROWS: u16 = 1;

/// Poll interval when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The complete application state.
pub struct Model {
    /// Page, controller and animations
    pub driver: ScrollDriver<MarkdownPage>,
    /// Path to the source file
    pub file_path: PathBuf,
    /// `None` when the navbar is disabled
    pub navbar: Option<NavbarAutoHide>,
    pub menu: HamburgerMenu,
    pub reveal: RevealTracker,
    pub reveal_enabled: bool,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(
            PathBuf::new(),
            MarkdownPage::default(),
            crate::document::DEFAULT_VIEWPORT,
            ControllerConfig::default(),
        )
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("driver", &self.driver)
            .field("menu_open", &self.menu.is_open())
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Build the model for a terminal of `size` (columns, rows).
    pub fn new(
        file_path: PathBuf,
        mut page: MarkdownPage,
        size: (u16, u16),
        config: ControllerConfig,
    ) -> Self {
        page.resize(size.0, size.1.saturating_sub(STATUS_ROWS));
        let driver = ScrollDriver::new(page, config);
        let reveal = RevealTracker::new(driver.page());
        Self {
            driver,
            file_path,
            navbar: None,
            menu: HamburgerMenu::new(),
            reveal,
            reveal_enabled: true,
            should_quit: false,
        }
    }

    /// Show the auto-hiding navbar, starting its timers at `now_ms`.
    pub fn with_navbar(mut self, enabled: bool, now_ms: u64) -> Self {
        self.navbar = enabled.then(|| NavbarAutoHide::new(now_ms));
        self
    }

    /// Dim sections until they scroll into view.
    pub fn with_reveal(mut self, enabled: bool) -> Self {
        self.reveal_enabled = enabled;
        if !enabled {
            self.reveal.reveal_all();
        }
        self
    }

    pub fn page(&self) -> &MarkdownPage {
        self.driver.page()
    }

    pub fn sections(&self) -> &[Section] {
        self.driver.page().sections()
    }

    /// The page is at or under the mobile breakpoint.
    pub fn is_narrow(&self) -> bool {
        self.driver.page().viewport_width() <= self.driver.scroller().config().breakpoint
    }

    /// Wheel and keys snap to sections.
    pub fn is_snapping(&self) -> bool {
        self.driver.scroller().is_installed() && !self.is_narrow()
    }

    /// Section under the viewport midpoint.
    ///
    /// The scroller tracks this itself while installed; otherwise the
    /// page is scrolled natively and the section is read off the page.
    pub fn current_section(&self) -> usize {
        let tracked = self.driver.state().current_section_index;
        if self.driver.scroller().is_installed() {
            return tracked;
        }
        let page = self.driver.page();
        let midpoint = viewport_midpoint(page.scroll_offset(), page.viewport_height());
        section_at(page.sections(), midpoint).unwrap_or(tracked)
    }

    /// Scroll progress in percent.
    pub fn progress(&self) -> f64 {
        scroll_progress(self.driver.page())
    }

    pub fn navbar_visible(&self) -> bool {
        !self.is_narrow() && self.navbar.as_ref().is_some_and(NavbarAutoHide::is_visible)
    }

    pub(super) fn resize(&mut self, columns: u16, rows: u16) {
        tracing::debug!(columns, rows, "terminal resized");
        self.driver
            .page_mut()
            .resize(columns, rows.saturating_sub(STATUS_ROWS));
    }

    pub(super) fn refresh_reveal(&mut self) -> bool {
        if self.reveal_enabled {
            self.reveal.update(self.driver.page())
        } else {
            self.reveal.reveal_all();
            false
        }
    }

    /// Run timers due at `now_ms`. Returns true when a repaint is needed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let moved = self.driver.tick(now_ms);
        let navbar_changed = self
            .navbar
            .as_mut()
            .is_some_and(|navbar| navbar.tick(now_ms));
        let revealed = self.refresh_reveal();
        moved || navbar_changed || revealed
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now_ms: u64) -> Duration {
        let navbar = self
            .navbar
            .as_ref()
            .and_then(NavbarAutoHide::deadline_ms)
            .map(|deadline| Duration::from_millis(deadline.saturating_sub(now_ms)));
        [self.driver.poll_timeout(now_ms), navbar]
            .into_iter()
            .flatten()
            .fold(IDLE_POLL, Duration::min)
    }
}
