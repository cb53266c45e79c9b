//! Page chrome around the scrolled content.
//!
//! - [`navbar`]: auto-hiding top navigation bar for wide viewports
//! - [`menu`]: hamburger menu for narrow viewports
//! - [`progress`]: scroll progress indicator
//! - [`reveal`]: one-shot section reveal tracking

pub mod menu;
pub mod navbar;
pub mod progress;
pub mod reveal;

pub use menu::HamburgerMenu;
pub use navbar::NavbarAutoHide;
pub use progress::scroll_progress;
pub use reveal::RevealTracker;
