//! Splitting markdown into sections with comrak.

use std::collections::HashMap;

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

use super::types::TextSection;

/// Anchor of the untitled section before the first heading.
pub const LEADING_ANCHOR: &str = "top";

fn create_options() -> Options {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

/// A heading that opens a section: 0-based source line and text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionStart {
    line: usize,
    level: u8,
    title: String,
}

/// Split `source` into sections at every top-level heading of level
/// `max_level` or higher (numerically lower or equal).
///
/// Content ahead of the first such heading becomes an untitled section when
/// it holds anything but blank lines.
pub fn split_sections(source: &str, max_level: u8) -> Vec<TextSection> {
    let lines: Vec<&str> = source.lines().collect();
    let starts = section_starts(source, max_level);

    let mut sections = Vec::new();
    let mut slugs = SlugCounter::default();

    let first_start = starts.first().map_or(lines.len(), |s| s.line);
    let leading = &lines[..first_start.min(lines.len())];
    if leading.iter().any(|line| !line.trim().is_empty()) {
        sections.push(TextSection {
            title: String::new(),
            anchor: slugs.claim(LEADING_ANCHOR),
            heading_level: None,
            lines: owned(leading),
        });
    }

    for (i, start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(lines.len(), |next| next.line);
        let begin = start.line.min(lines.len());
        let end = end.clamp(begin, lines.len());
        sections.push(TextSection {
            title: start.title.clone(),
            anchor: slugs.claim(&slugify(&start.title)),
            heading_level: Some(start.level),
            lines: owned(&lines[begin..end]),
        });
    }
    sections
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}

fn section_starts(source: &str, max_level: u8) -> Vec<SectionStart> {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &create_options());
    root.children()
        .filter_map(|node| {
            let data = node.data.borrow();
            let NodeValue::Heading(heading) = &data.value else {
                return None;
            };
            if heading.level > max_level {
                return None;
            }
            Some(SectionStart {
                line: data.sourcepos.start.line.saturating_sub(1),
                level: heading.level,
                title: extract_text(node),
            })
        })
        .collect()
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    extract_text_recursive(node, &mut text);
    text
}

fn extract_text_recursive<'a>(node: &'a AstNode<'a>, text: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => text.push_str(t),
        NodeValue::Code(c) => text.push_str(&c.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
        _ => {
            for child in node.children() {
                extract_text_recursive(child, text);
            }
        }
    }
}

/// GitHub-style heading slug.
pub fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '_' {
                Some(c.to_lowercase().collect::<String>())
            } else if c == ' ' || c == '-' {
                Some("-".to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Hands out unique anchors, suffixing repeats with `-1`, `-2`, ...
#[derive(Debug, Default)]
struct SlugCounter {
    seen: HashMap<String, usize>,
}

impl SlugCounter {
    fn claim(&mut self, slug: &str) -> String {
        let count = self.seen.entry(slug.to_string()).or_insert(0);
        let claimed = if *count == 0 {
            slug.to_string()
        } else {
            format!("{slug}-{count}")
        };
        *count += 1;
        claimed
    }
}
