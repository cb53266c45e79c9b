use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, STATUS_ROWS};

use super::overlays::{render_menu, render_navbar};
use super::status::render_status_bar;
use super::style;
use super::truncate_text;

/// Split the frame into the page area and the status bar.
pub fn split_main(area: Rect) -> (Rect, Rect) {
    let [page, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_ROWS)]).areas(area);
    (page, status)
}

pub fn render(model: &Model, frame: &mut Frame) {
    let (page_area, status_area) = split_main(frame.area());
    render_page(model, frame, page_area);
    if model.navbar_visible() && page_area.height > 0 {
        render_navbar(model, frame, Rect { height: 1, ..page_area });
    }
    if model.menu.is_open() {
        render_menu(model, frame, page_area);
    }
    render_status_bar(model, frame, status_area);
}

fn render_page(model: &Model, frame: &mut Frame, area: Rect) {
    let page = model.page();
    let top = page.top_row();
    let width = usize::from(area.width);
    let lines: Vec<Line> = (0..usize::from(area.height))
        .filter_map(|i| page.line_at(top + i))
        .map(|line| {
            let section = &page.text_sections()[line.section];
            let mut line_style = match section.heading_level {
                Some(level) if line.is_heading => style::heading_style(level),
                _ => Style::default(),
            };
            if !model.reveal.is_revealed(line.section) {
                line_style = style::unrevealed(line_style);
            }
            Line::styled(truncate_text(line.text, width), line_style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
