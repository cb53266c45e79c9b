use std::io::{Write, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};

use super::input::handle_event;
use super::update::Message;

/// Holds the latest terminal size until resizing settles.
pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

const RESIZE_SETTLE_MS: u64 = 100;
const RESIZE_POLL: Duration = Duration::from_millis(10);

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded, the terminal
    /// cannot be initialized, or terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        // Load before touching the terminal so errors print normally.
        let page = crate::document::load(&self.file_path, self.heading_level)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: sectionsnap requires an interactive terminal")?;
        let size = terminal.size()?;
        let start = Instant::now();

        let mut model = Model::new(
            self.file_path.clone(),
            page,
            (size.width, size.height),
            self.controller_config,
        )
        .with_navbar(self.navbar_enabled, 0)
        .with_reveal(self.reveal_enabled);
        tracing::info!(
            sections = model.sections().len(),
            snapping = model.is_snapping(),
            "document opened"
        );

        let result = Self::event_loop(&mut terminal, &mut model, start);

        let _ = set_mouse_motion_tracking(false);
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model, start: Instant) -> Result<()> {
        let mut resize_debouncer = ResizeDebouncer::new(RESIZE_SETTLE_MS);
        let mut needs_render = true;

        execute!(stdout(), EnableMouseCapture)?;
        set_mouse_motion_tracking(true)?;

        loop {
            let now_ms = elapsed_ms(start);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                *model = update(std::mem::take(model), Message::Resize(width, height), now_ms);
                needs_render = true;
            }

            if model.tick(now_ms) {
                needs_render = true;
            }

            let timeout = if needs_render {
                Duration::ZERO
            } else if resize_debouncer.is_pending() {
                model.poll_timeout(now_ms).min(RESIZE_POLL)
            } else {
                model.poll_timeout(now_ms)
            };
            if event::poll(timeout)? {
                // Coalesce bursts of input into a single render.
                loop {
                    let event_ms = elapsed_ms(start);
                    let msg = handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        *model = update(std::mem::take(model), msg, event_ms);
                        needs_render = true;
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}

fn set_mouse_motion_tracking(enable: bool) -> std::io::Result<()> {
    // Any-event motion reporting (1003) with SGR encoding (1006), so the
    // navbar sees hover without a button held.
    let mut out = stdout();
    if enable {
        out.write_all(b"\x1b[?1003h\x1b[?1006h")?;
    } else {
        out.write_all(b"\x1b[?1003l\x1b[?1006l")?;
    }
    out.flush()
}
