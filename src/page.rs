//! The host page as seen by the scroll controller.
//!
//! [`Page`] is the seam between the controller and whatever renders the
//! content: a browser document, a terminal pager, or a test fixture. It
//! exposes the section geometry, the viewport size and the scroll offset.

use crate::section::Section;

/// Geometry and scroll position of a page of sections.
pub trait Page {
    /// Viewport width in logical pixels.
    fn viewport_width(&self) -> f64;

    /// Viewport height in logical pixels.
    fn viewport_height(&self) -> f64;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Move the viewport. Implementations clamp to the scrollable range.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Sections in document order.
    fn sections(&self) -> &[Section];

    /// Total height of the scrollable content.
    fn content_height(&self) -> f64 {
        self.sections()
            .iter()
            .map(Section::bottom)
            .fold(0.0, f64::max)
    }

    /// Top offset of the element an in-page link points at.
    ///
    /// `fragment` may carry a leading `#`.
    fn anchor_offset(&self, fragment: &str) -> Option<f64> {
        let anchor = fragment.strip_prefix('#').unwrap_or(fragment);
        self.sections()
            .iter()
            .find(|section| section.anchor == anchor)
            .map(|section| section.top)
    }

    /// Largest offset the viewport can scroll to.
    fn max_scroll_offset(&self) -> f64 {
        (self.content_height() - self.viewport_height()).max(0.0)
    }
}

/// A page whose sections and viewport are plain values.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPage {
    sections: Vec<Section>,
    width: f64,
    height: f64,
    offset: f64,
}

impl StaticPage {
    pub fn new(sections: Vec<Section>, width: f64, height: f64) -> Self {
        Self {
            sections,
            width,
            height,
            offset: 0.0,
        }
    }

    /// Change the viewport size, keeping the offset in range.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_scroll_offset());
    }

    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        self.offset = self.offset.min(self.max_scroll_offset());
    }
}

impl Page for StaticPage {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_scroll_offset());
    }

    fn sections(&self) -> &[Section] {
        &self.sections
    }
}
