//! Colors for the page and its chrome.
//!
//! Uses ANSI colors so the terminal's palette decides the actual shades.

use ratatui::style::{Color, Modifier, Style};

/// Style of a section's heading row.
pub fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Blue,
        5 => Color::Magenta,
        _ => Color::Cyan,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if level == 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

/// Applied on top of the line style until a section is revealed.
pub fn unrevealed(style: Style) -> Style {
    style.fg(Color::DarkGray).add_modifier(Modifier::DIM)
}

pub fn navbar_style() -> Style {
    Style::default().bg(Color::Blue).fg(Color::White)
}

pub fn navbar_current_style() -> Style {
    navbar_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn progress_style() -> Style {
    Style::default().fg(Color::Cyan).bg(Color::DarkGray)
}

pub fn menu_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Black)
}
