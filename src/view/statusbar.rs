//! Status bar band.
//!
//! Spans the full viewport width. It does not move with the sidebar.

use crate::state::HudState;
use crate::view_state::DocumentMetrics;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};

const KEY_HINTS: &str = "b sidebar  j/k scroll  J/K sidebar scroll  q quit";

/// Position and key hints for the current frame.
pub fn status_line(state: &HudState, document: &DocumentMetrics) -> Line<'static> {
    let total = document.content_rows;
    let exposed = document.exposed_content_rows(state.document_scroll);

    let position = if total == 0 {
        "no lines".to_string()
    } else if exposed.is_empty() {
        format!("{total} lines")
    } else {
        format!("lines {}-{} of {}", exposed.start + 1, exposed.end, total)
    };

    Line::from(format!(
        " {position} · sidebar {} · {KEY_HINTS}",
        state.sidebar().label()
    ))
}

/// The status bar overlay.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    line: Line<'a>,
    style: Style,
}

impl<'a> StatusBar<'a> {
    /// Status bar showing one line.
    pub fn new(line: impl Into<Line<'a>>) -> Self {
        Self {
            line: line.into(),
            style: Style::default(),
        }
    }

    /// Bar style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(self.line)
            .style(self.style)
            .render(area, buf);
    }
}
