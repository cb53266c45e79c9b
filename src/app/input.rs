use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{Message, Model};

use super::event_loop::ResizeDebouncer;

/// Logical pixels reported per wheel notch.
pub const WHEEL_NOTCH: f64 = 100.0;

pub(super) fn handle_event(
    event: &Event,
    model: &Model,
    now_ms: u64,
    resize_debouncer: &mut ResizeDebouncer,
) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(*key, model),
        Event::Mouse(mouse) => handle_mouse(*mouse, model),
        Event::Resize(w, h) => {
            resize_debouncer.queue(*w, *h, now_ms);
            None
        }
        _ => None,
    }
}

pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            Some(Message::Quit)
        }
        (KeyCode::Esc, _) if model.menu.is_open() => Some(Message::ToggleMenu),
        (KeyCode::Esc, _) => Some(Message::Quit),
        (KeyCode::Char('m'), _) => Some(Message::ToggleMenu),
        (KeyCode::Char('j'), _) => Some(Message::Key(KeyCode::Down)),
        (KeyCode::Char('k'), _) => Some(Message::Key(KeyCode::Up)),
        (KeyCode::Char(' '), _) => Some(Message::Key(KeyCode::PageDown)),
        (KeyCode::Char('g'), _) => Some(Message::Key(KeyCode::Home)),
        (KeyCode::Char('G'), _) => Some(Message::Key(KeyCode::End)),
        (KeyCode::Char(c @ '1'..='9'), _) => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            (index < model.sections().len()).then_some(Message::FollowSection(index))
        }
        (
            code @ (KeyCode::Down
            | KeyCode::Up
            | KeyCode::PageDown
            | KeyCode::PageUp
            | KeyCode::Home
            | KeyCode::End),
            _,
        ) => Some(Message::Key(code)),
        _ => None,
    }
}

pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Message::Wheel(WHEEL_NOTCH)),
        MouseEventKind::ScrollUp => Some(Message::Wheel(-WHEEL_NOTCH)),
        MouseEventKind::Moved => Some(Message::PointerMoved { row: mouse.row }),
        MouseEventKind::Down(MouseButton::Left) => {
            let area = document_area(model);
            if model.menu.is_open() {
                let popup = crate::ui::menu_rect(area, model.sections().len());
                return crate::ui::menu_hit(popup, mouse.column, mouse.row)
                    .map(Message::FollowSection);
            }
            if model.navbar_visible() && mouse.row == area.y {
                return crate::ui::navbar_hit(model, area.width, mouse.column)
                    .map(Message::FollowSection);
            }
            None
        }
        _ => None,
    }
}

fn document_area(model: &Model) -> Rect {
    let page = model.page();
    Rect::new(0, 0, page.columns(), page.rows())
}
