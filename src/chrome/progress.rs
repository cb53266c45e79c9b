//! Scroll progress indicator.

use crate::page::Page;

/// How far through the page the viewport is, as a percentage in `[0, 100]`.
///
/// A page that fits inside the viewport counts as fully read.
pub fn scroll_progress(page: &dyn Page) -> f64 {
    let scrollable = page.content_height() - page.viewport_height();
    if scrollable <= 0.0 {
        return 100.0;
    }
    (page.scroll_offset() / scrollable * 100.0).clamp(0.0, 100.0)
}
