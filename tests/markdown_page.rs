use std::path::Path;

use crossterm::event::KeyCode;

use sectionsnap::document::{self, LINE_HEIGHT, MarkdownPage};
use sectionsnap::prelude::*;

fn fixture() -> MarkdownPage {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/portfolio.md");
    let mut page = document::load(&path, 2).unwrap();
    page.resize(160, 50);
    page
}

#[test]
fn test_fixture_sections_and_anchors() {
    let page = fixture();
    let anchors: Vec<&str> = page
        .sections()
        .iter()
        .map(|section| section.anchor.as_str())
        .collect();
    assert_eq!(
        anchors,
        [
            "top",
            "hi-im-sam",
            "about",
            "projects",
            "skills",
            "contact",
            "contact-1"
        ]
    );
    assert_eq!(page.sections()[3].title, "Projects");
}

#[test]
fn test_deeper_headings_do_not_split_sections() {
    let page = fixture();
    let projects = &page.text_sections()[3];
    assert!(projects.lines.iter().any(|line| line == "### Older work"));
}

#[test]
fn test_heading_level_one_merges_subsections() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/portfolio.md");
    let page = document::load(&path, 1).unwrap();
    assert_eq!(page.sections().len(), 2);
}

#[test]
fn test_driver_walks_markdown_sections() {
    let mut driver = ScrollDriver::new(fixture(), ControllerConfig::default());
    let section_height = 50.0 * LINE_HEIGHT;

    for expected in 1..=3 {
        let now = expected as u64 * 1000;
        assert_eq!(
            driver.handle(Message::Key(KeyInput::new(KeyCode::PageDown)), now),
            Dispatch::Consumed
        );
        driver.tick(now + 200);
        assert_eq!(driver.state().current_section_index, expected);
        assert_eq!(
            driver.page().scroll_offset(),
            expected as f64 * section_height
        );
    }
}

#[test]
fn test_anchor_click_reaches_duplicate_heading() {
    let mut driver = ScrollDriver::new(fixture(), ControllerConfig::default());
    driver.handle(Message::AnchorClick("#contact-1".to_string()), 0);
    driver.tick(200);
    assert_eq!(driver.state().current_section_index, 6);
    assert_eq!(driver.page().scroll_offset(), driver.page().max_scroll_offset());
}
