//! One-shot reveal of sections as they scroll into view.

use crate::page::Page;

/// A section reveals once its top crosses this fraction of the viewport.
pub const REVEAL_LINE: f64 = 0.85;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(page: &dyn Page) -> Self {
        let mut tracker = Self {
            revealed: vec![false; page.sections().len()],
        };
        tracker.update(page);
        tracker
    }

    /// Reveal every section whose top is above the reveal line.
    ///
    /// Returns true when at least one section was newly revealed. Revealed
    /// sections stay revealed.
    pub fn update(&mut self, page: &dyn Page) -> bool {
        let sections = page.sections();
        if self.revealed.len() != sections.len() {
            self.revealed.resize(sections.len(), false);
        }
        let line = page.scroll_offset() + page.viewport_height() * REVEAL_LINE;
        let mut changed = false;
        for (section, revealed) in sections.iter().zip(self.revealed.iter_mut()) {
            if !*revealed && section.top <= line {
                *revealed = true;
                changed = true;
            }
        }
        changed
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Mark everything revealed, for hosts that disable the effect.
    pub fn reveal_all(&mut self) {
        self.revealed.fill(true);
    }
}
