//! Markdown files as pages of sections.
//!
//! A file is split at its headings with comrak and laid out on a terminal
//! grid where one row is [`LINE_HEIGHT`] logical pixels tall and one column
//! [`COLUMN_WIDTH`] wide, so the controller's pixel thresholds keep their
//! meaning in a terminal.

mod parser;
mod types;

use std::path::Path;

pub use parser::{LEADING_ANCHOR, slugify, split_sections};
pub use types::{DocumentError, MarkdownPage, PageLine, TextSection};

/// Logical pixels per terminal row.
pub const LINE_HEIGHT: f64 = 16.0;

/// Logical pixels per terminal column.
pub const COLUMN_WIDTH: f64 = 8.0;

/// Deepest heading level that starts a section unless configured otherwise.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Terminal size assumed until the host reports the real one.
pub const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

impl MarkdownPage {
    /// Split `source` at headings of level `heading_level` or above.
    pub fn parse(source: &str, heading_level: u8) -> Result<Self, DocumentError> {
        let sections = split_sections(source, heading_level.clamp(1, 6));
        if sections.is_empty() {
            return Err(DocumentError::Empty);
        }
        tracing::debug!(count = sections.len(), heading_level, "document sectioned");
        let (columns, rows) = DEFAULT_VIEWPORT;
        Ok(Self::from_sections(sections, columns, rows))
    }
}

/// Read and section the markdown file at `path`.
pub fn load(path: &Path, heading_level: u8) -> Result<MarkdownPage, DocumentError> {
    let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    MarkdownPage::parse(&source, heading_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use std::io::Write;

    const PORTFOLIO: &str = "\
Welcome!

# Hero

Hi, I build things.

## About

Short bio.

## Projects

- one
- two

## Contact

mail@example.com
";

    #[test]
    fn test_sections_are_at_least_one_viewport_tall() {
        let mut page = MarkdownPage::parse(PORTFOLIO, 2).unwrap();
        page.resize(160, 50);
        let sections = page.sections();
        assert_eq!(sections.len(), 5);
        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section.height, 50.0 * LINE_HEIGHT);
            assert_eq!(section.top, i as f64 * 50.0 * LINE_HEIGHT);
        }
        assert_eq!(page.viewport_width(), 1280.0);
        assert_eq!(page.viewport_height(), 800.0);
    }

    #[test]
    fn test_long_section_keeps_its_lines() {
        let body = "line\n".repeat(40);
        let md = format!("# Long\n{body}# Short\n");
        let mut page = MarkdownPage::parse(&md, 1).unwrap();
        page.resize(100, 10);
        assert_eq!(page.sections()[0].height, 41.0 * LINE_HEIGHT);
        assert_eq!(page.sections()[1].top, 41.0 * LINE_HEIGHT);
        assert_eq!(page.total_rows(), 51);
    }

    #[test]
    fn test_anchors_resolve_to_section_tops() {
        let mut page = MarkdownPage::parse(PORTFOLIO, 2).unwrap();
        page.resize(160, 50);
        assert_eq!(page.anchor_offset("#top"), Some(0.0));
        assert_eq!(page.anchor_offset("#about"), Some(1600.0));
        assert_eq!(page.anchor_offset("#missing"), None);
    }

    #[test]
    fn test_line_at_walks_sections_and_padding() {
        let mut page = MarkdownPage::parse("# A\none\n# B\ntwo\n", 1).unwrap();
        page.resize(100, 4);
        let first = page.line_at(0).unwrap();
        assert_eq!(first.text, "# A");
        assert!(first.is_heading);
        assert_eq!(page.line_at(1).unwrap().text, "one");
        assert_eq!(page.line_at(3).unwrap().text, "");
        assert_eq!(page.line_at(4).unwrap().section, 1);
        assert_eq!(page.line_at(8), None);
    }

    #[test]
    fn test_resize_keeps_current_section() {
        let mut page = MarkdownPage::parse(PORTFOLIO, 2).unwrap();
        page.resize(160, 50);
        page.set_scroll_offset(2.0 * 800.0);
        page.resize(160, 30);
        assert_eq!(page.scroll_offset(), 2.0 * 30.0 * LINE_HEIGHT);
    }

    #[test]
    fn test_scroll_offset_is_clamped() {
        let mut page = MarkdownPage::parse(PORTFOLIO, 2).unwrap();
        page.set_scroll_offset(-50.0);
        assert_eq!(page.scroll_offset(), 0.0);
        page.set_scroll_offset(1.0e9);
        assert_eq!(page.scroll_offset(), page.max_scroll_offset());
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(matches!(
            MarkdownPage::parse("  \n\n", 2),
            Err(DocumentError::Empty)
        ));
    }

    #[test]
    fn test_document_without_headings_is_one_section() {
        let page = MarkdownPage::parse("just text\n", 2).unwrap();
        assert_eq!(page.sections().len(), 1);
        assert_eq!(page.sections()[0].anchor, LEADING_ANCHOR);
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PORTFOLIO.as_bytes()).unwrap();
        let page = load(file.path(), 1).unwrap();
        assert_eq!(page.text_sections().len(), 2);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/page.md"), 2).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/page.md"));
    }
}
