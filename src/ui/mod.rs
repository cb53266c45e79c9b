//! Terminal UI components.
//!
//! - [`style`]: colors for the page and its chrome
//! - the page itself, with unrevealed sections dimmed
//! - the navbar and hamburger menu overlays
//! - the status bar with the scroll progress gauge

pub mod style;

mod overlays;
mod render;
mod status;

pub use overlays::{NavEntry, menu_hit, menu_rect, navbar_entries, navbar_hit, section_label};
pub use render::{render, split_main};

use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `max_width` display columns.
pub(crate) fn truncate_text(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out
}
