use crossterm::event::KeyCode;

use crate::controller::Message as ScrollMessage;
use crate::document::LINE_HEIGHT;
use crate::driver::Dispatch;
use crate::input::{KeyInput, WheelInput};
use crate::page::Page;

use super::model::Model;

/// Everything the terminal host can ask the model to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Mouse wheel moved by `delta_y` logical pixels
    Wheel(f64),
    /// A navigation key was pressed
    Key(KeyCode),
    /// Follow the in-page link of section `n` (0-based)
    FollowSection(usize),
    ToggleMenu,
    /// Pointer moved over terminal row `row`
    PointerMoved { row: u16 },
    /// Terminal resized to `columns` x `rows`
    Resize(u16, u16),
    Quit,
}

/// Apply `msg` at time `now_ms`.
///
/// Inputs the scroller leaves alone fall back to plain pager scrolling,
/// except while an animation owns the viewport.
pub fn update(mut model: Model, msg: Message, now_ms: u64) -> Model {
    match msg {
        Message::Wheel(delta) => {
            let input = WheelInput::new(delta);
            let dispatch = model.driver.handle(ScrollMessage::Wheel(input), now_ms);
            if dispatch == Dispatch::Native && !model.driver.is_animating() {
                model.driver.scroll_by(delta);
            }
        }
        Message::Key(code) => {
            let input = KeyInput::new(code);
            let dispatch = model.driver.handle(ScrollMessage::Key(input), now_ms);
            if dispatch == Dispatch::Native && !model.driver.is_animating() {
                native_key(&mut model, code);
            }
        }
        Message::FollowSection(index) => {
            if model.menu.is_open() {
                model.menu.link_clicked();
            }
            let anchor = model
                .driver
                .page()
                .sections()
                .get(index)
                .map(|section| format!("#{}", section.anchor));
            if let Some(anchor) = anchor {
                tracing::debug!(index, %anchor, "follow section link");
                model.driver.handle(ScrollMessage::AnchorClick(anchor), now_ms);
            }
        }
        Message::ToggleMenu => {
            if model.is_narrow() {
                model.menu.toggle();
            }
        }
        Message::PointerMoved { row } => {
            if let Some(navbar) = model.navbar.as_mut() {
                navbar.pointer_moved(f64::from(row) * LINE_HEIGHT, now_ms);
                let on_bar = navbar.is_visible() && row == 0;
                if on_bar && !navbar.is_hovering() {
                    navbar.pointer_entered();
                } else if !on_bar && navbar.is_hovering() {
                    navbar.pointer_left(now_ms);
                }
            }
        }
        Message::Resize(columns, rows) => {
            model.resize(columns, rows);
            model.driver.handle(ScrollMessage::Resized, now_ms);
            if !model.is_narrow() && model.menu.is_open() {
                model.menu.toggle();
            }
        }
        Message::Quit => model.should_quit = true,
    }
    model.refresh_reveal();
    model
}

/// Plain pager scrolling for inputs the section scroller left alone.
fn native_key(model: &mut Model, code: KeyCode) {
    let page_height = model.driver.page().viewport_height();
    match code {
        KeyCode::Down => model.driver.scroll_by(LINE_HEIGHT),
        KeyCode::Up => model.driver.scroll_by(-LINE_HEIGHT),
        KeyCode::PageDown => model.driver.scroll_by(page_height),
        KeyCode::PageUp => model.driver.scroll_by(-page_height),
        KeyCode::Home => model.driver.scroll_to(0.0),
        KeyCode::End => {
            let bottom = model.driver.page().max_scroll_offset();
            model.driver.scroll_to(bottom);
        }
        _ => {}
    }
}
