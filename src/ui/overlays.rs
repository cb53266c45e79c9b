use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;

use super::style;
use super::truncate_text;

const NAV_GAP: u16 = 2;
const MENU_MAX_WIDTH: u16 = 40;

/// One clickable entry of the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub section: usize,
    pub label: String,
    /// First column of the label
    pub start: u16,
    pub width: u16,
}

/// Label shown for section `index` in the navbar and the menu.
pub fn section_label(model: &Model, index: usize) -> String {
    let title = model
        .sections()
        .get(index)
        .map(|s| s.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("Top");
    format!("{} {title}", index + 1)
}

/// Navbar entries that fit in `width` columns.
pub fn navbar_entries(model: &Model, width: u16) -> Vec<NavEntry> {
    let mut entries = Vec::new();
    let mut column = 1u16;
    for index in 0..model.sections().len() {
        let label = section_label(model, index);
        let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        if column.saturating_add(label_width) > width {
            break;
        }
        entries.push(NavEntry {
            section: index,
            label,
            start: column,
            width: label_width,
        });
        column = column.saturating_add(label_width).saturating_add(NAV_GAP);
    }
    entries
}

/// Section whose navbar entry covers `column`.
pub fn navbar_hit(model: &Model, width: u16, column: u16) -> Option<usize> {
    navbar_entries(model, width)
        .into_iter()
        .find(|entry| column >= entry.start && column < entry.start + entry.width)
        .map(|entry| entry.section)
}

pub fn render_navbar(model: &Model, frame: &mut Frame, area: Rect) {
    let current = model.current_section();
    let mut spans = vec![Span::raw(" ")];
    for (i, entry) in navbar_entries(model, area.width).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(usize::from(NAV_GAP))));
        }
        let style = if entry.section == current {
            style::navbar_current_style()
        } else {
            style::navbar_style()
        };
        spans.push(Span::styled(entry.label, style));
    }
    let bar = Paragraph::new(Line::from(spans)).style(style::navbar_style());
    frame.render_widget(bar, area);
}

/// Popup rectangle of the hamburger menu inside `area`.
pub fn menu_rect(area: Rect, items: usize) -> Rect {
    let height = u16::try_from(items)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);
    let width = MENU_MAX_WIDTH.min(area.width);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

/// Section under (`column`, `row`) inside the menu popup.
pub fn menu_hit(popup: Rect, column: u16, row: u16) -> Option<usize> {
    let inside = column > popup.x
        && column + 1 < popup.x + popup.width
        && row > popup.y
        && row + 1 < popup.y + popup.height;
    inside.then(|| usize::from(row - popup.y - 1))
}

pub fn render_menu(model: &Model, frame: &mut Frame, area: Rect) {
    let popup = menu_rect(area, model.sections().len());
    let inner_width = usize::from(popup.width.saturating_sub(2));
    let current = model.current_section();
    let items: Vec<ListItem> = (0..model.sections().len())
        .map(|index| {
            let label = truncate_text(&section_label(model, index), inner_width);
            let item = ListItem::new(label);
            if index == current {
                item.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                item
            }
        })
        .collect();
    let list = List::new(items).style(style::menu_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Menu (m) "),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(list, popup);
}
