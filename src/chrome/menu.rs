//! Hamburger menu shown on narrow viewports.

/// Open/closed state of the narrow-viewport navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HamburgerMenu {
    open: bool,
}

impl HamburgerMenu {
    pub const fn new() -> Self {
        Self { open: false }
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A menu link was followed; an open menu closes behind it.
    pub const fn link_clicked(&mut self) {
        if self.open {
            self.toggle();
        }
    }
}
