use std::path::PathBuf;

use crate::page::Page;
use crate::section::Section;

use super::{COLUMN_WIDTH, LINE_HEIGHT};

/// Errors raised while building a page from markdown.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document has no content")]
    Empty,
}

/// Source lines belonging to one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSection {
    /// Heading text; empty for leading content
    pub title: String,
    pub anchor: String,
    /// `None` for leading content
    pub heading_level: Option<u8>,
    pub lines: Vec<String>,
}

/// One terminal row of a [`MarkdownPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLine<'a> {
    /// Index of the section the row belongs to
    pub section: usize,
    /// Source text, empty for the padding below short sections
    pub text: &'a str,
    /// The row opens its section
    pub is_heading: bool,
}

/// Rows a section occupies: first row and row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowSpan {
    start: usize,
    len: usize,
}

/// A markdown file laid out as full-screen sections on a terminal grid.
///
/// Every section is at least one viewport tall, so a section scroll always
/// lands with a single section on screen.
#[derive(Debug, Clone)]
pub struct MarkdownPage {
    text: Vec<TextSection>,
    spans: Vec<RowSpan>,
    sections: Vec<Section>,
    columns: u16,
    rows: u16,
    offset: f64,
}

impl Default for MarkdownPage {
    /// A page without sections.
    fn default() -> Self {
        let (columns, rows) = super::DEFAULT_VIEWPORT;
        Self::from_sections(Vec::new(), columns, rows)
    }
}

impl MarkdownPage {
    pub(super) fn from_sections(text: Vec<TextSection>, columns: u16, rows: u16) -> Self {
        let mut page = Self {
            text,
            spans: Vec::new(),
            sections: Vec::new(),
            columns,
            rows,
            offset: 0.0,
        };
        page.layout();
        page
    }

    /// Lay the sections out again for a terminal of `columns` x `rows`.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        if (columns, rows) == (self.columns, self.rows) {
            return;
        }
        // Stay inside the same section after the heights change.
        let row = self.top_row();
        let section = self
            .spans
            .iter()
            .rposition(|span| span.start <= row)
            .unwrap_or(0);
        self.columns = columns;
        self.rows = rows;
        self.layout();
        let top = self.sections.get(section).map_or(0.0, |s| s.top);
        self.set_scroll_offset(top);
    }

    fn layout(&mut self) {
        let min_rows = usize::from(self.rows.max(1));
        let mut start = 0;
        self.spans.clear();
        self.sections.clear();
        for section in &self.text {
            let len = section.lines.len().max(min_rows);
            self.spans.push(RowSpan { start, len });
            self.sections.push(Section::new(
                section.title.clone(),
                section.anchor.clone(),
                rows_to_px(start),
                rows_to_px(len),
            ));
            start += len;
        }
        self.offset = self.offset.clamp(0.0, self.max_scroll_offset());
    }

    pub fn text_sections(&self) -> &[TextSection] {
        &self.text
    }

    pub const fn columns(&self) -> u16 {
        self.columns
    }

    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of rows across all sections.
    pub fn total_rows(&self) -> usize {
        self.spans.last().map_or(0, |span| span.start + span.len)
    }

    /// Row shown at the top of the viewport.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn top_row(&self) -> usize {
        (self.offset / LINE_HEIGHT).round().max(0.0) as usize
    }

    /// Row `row` of the laid-out page.
    pub fn line_at(&self, row: usize) -> Option<PageLine<'_>> {
        let section = self
            .spans
            .iter()
            .rposition(|span| span.start <= row)?;
        let span = self.spans[section];
        if row >= span.start + span.len {
            return None;
        }
        let local = row - span.start;
        let text = self.text[section]
            .lines
            .get(local)
            .map_or("", String::as_str);
        Some(PageLine {
            section,
            text,
            is_heading: local == 0 && self.text[section].heading_level.is_some(),
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn rows_to_px(rows: usize) -> f64 {
    rows as f64 * LINE_HEIGHT
}

impl Page for MarkdownPage {
    fn viewport_width(&self) -> f64 {
        f64::from(self.columns) * COLUMN_WIDTH
    }

    fn viewport_height(&self) -> f64 {
        f64::from(self.rows) * LINE_HEIGHT
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
