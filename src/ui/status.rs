use ratatui::prelude::*;
use ratatui::widgets::{LineGauge, Paragraph};

use crate::app::Model;

use super::overlays::section_label;
use super::style;
use super::truncate_text;

const GAUGE_WIDTH: u16 = 20;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model
        .file_path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());

    let progress = model.progress();
    let section = model.current_section();
    let mode = match (model.is_snapping(), model.is_narrow()) {
        (true, _) => "snap",
        (false, true) => "native  m:menu",
        (false, false) => "native",
    };
    let text = format!(
        " {}  {}/{} {}  [{:.0}%]  {}  q:quit",
        filename,
        section + 1,
        model.sections().len(),
        section_label(model, section)
            .split_once(' ')
            .map_or("", |(_, title)| title),
        progress,
        mode
    );

    let gauge_width = if area.width > GAUGE_WIDTH * 3 {
        GAUGE_WIDTH
    } else {
        0
    };
    let [text_area, gauge_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(gauge_width)]).areas(area);

    let status = Paragraph::new(truncate_text(&text, usize::from(text_area.width)))
        .style(style::status_style());
    frame.render_widget(status, text_area);

    if gauge_width > 0 {
        let gauge = LineGauge::default()
            .ratio((progress / 100.0).clamp(0.0, 1.0))
            .filled_style(style::progress_style())
            .style(style::status_style());
        frame.render_widget(gauge, gauge_area);
    }
}
